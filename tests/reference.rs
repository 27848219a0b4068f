//! Cross-check against the base64 crate configured with the armor64 alphabet.
//!
//! armor64 packs bits exactly like unpadded base64, so a strict base64 engine
//! using the same symbols must agree on every output and every rejection.

use base64::alphabet::Alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

fn reference_engine() -> GeneralPurpose {
    let alphabet = Alphabet::new(armor64::ALPHABET_STR).unwrap();
    let config = GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(false);
    GeneralPurpose::new(&alphabet, config)
}

#[test]
fn test_encode_matches_reference() {
    let engine = reference_engine();
    let mut state: u32 = 0x2545_F491;
    let mut data = Vec::new();

    for _ in 0..500 {
        // xorshift32
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        data.push(state as u8);

        let encoded = armor64::encode(&data);
        assert_eq!(encoded, engine.encode(&data));
        assert_eq!(armor64::decode(&encoded).unwrap(), data);
    }
}

#[test]
fn test_short_strings_match_reference() {
    let engine = reference_engine();

    for a in 0..128u8 {
        for b in 0..128u8 {
            let text = [a, b];
            assert_eq!(
                armor64::is_valid(text),
                engine.decode(text).is_ok(),
                "disagreement on {:?}",
                String::from_utf8_lossy(&text)
            );
        }
    }
}

#[test]
fn test_three_symbol_tails_match_reference() {
    let engine = reference_engine();
    let symbols = armor64::ALPHABET;

    for &a in &symbols {
        for &b in &symbols {
            for &c in &symbols {
                let text = [b'z', b'z', b'z', b'z', a, b, c];
                assert_eq!(armor64::decode(text).ok(), engine.decode(text).ok());
            }
        }
    }
}
