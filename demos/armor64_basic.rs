//! Example of encoding, decoding, and validating armor64 text

use armor64::{DecodeError, Decoder, Encoder};

fn main() -> anyhow::Result<()> {
    println!("=== armor64 Example ===\n");

    let encoder = Encoder::new();
    let decoder = Decoder::new();

    // Text payload
    let armored = encoder.encode("Hello, World!");
    println!("\"Hello, World!\" -> {}", armored);

    // Binary payload
    let bytes = vec![0x00, 0x01, 0x02, 0x03, 0xFE, 0xFF];
    let armored_bytes = encoder.encode(&bytes);
    println!("{:02x?} -> {}", bytes, armored_bytes);

    // Round-trip
    let decoded = decoder.decode(&armored_bytes)?;
    assert_eq!(decoded, bytes);
    println!("\nRound-trip verification passed!");

    // Strictness
    println!("\nRejected inputs:");
    for text in ["H_-\n", "H_0", "abcde", "__=="] {
        match decoder.decode(text) {
            Ok(_) => unreachable!("{:?} is not canonical", text),
            Err(e @ DecodeError::NonCanonical(_)) => println!("  {:?}: non-canonical ({})", text, e),
            Err(e) => println!("  {:?}: {}", text, e),
        }
    }

    Ok(())
}
