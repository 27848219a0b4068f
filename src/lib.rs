//! # armor64
//!
//! Safe, strict, stable textual encoding of byte streams.
//!
//! armor64 packs bytes into 6-bit groups like base64, but with its own
//! alphabet, no padding character, and a decoder that accepts exactly one
//! text per byte sequence.
//!
//! ## Alphabet
//!
//! Symbols in value order (0 to 63):
//!
//! ```text
//! -0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz
//! ```
//!
//! Every symbol is safe in file names, URLs, and shell words.
//!
//! ## Encoding
//!
//! Bits are taken most significant first. Every 3 bytes become 4 symbols; a
//! trailing single byte becomes 2 symbols and a trailing pair becomes 3, the
//! final group padded on the right with zero bits. There is no `=`.
//!
//! ```
//! assert_eq!(armor64::encode_string("JP"), "H_-");
//! assert_eq!(armor64::decode("H_-").unwrap(), b"JP");
//! ```
//!
//! ## Strict Decoding
//!
//! Decoding rejects, in this order:
//! 1. Length mod 4 == 1 → [`DecodeError::InvalidLength`]
//! 2. Any byte outside the alphabet (whitespace, `=`, non-ASCII...) →
//!    [`DecodeError::InvalidCharacter`] with its index
//! 3. A surplus trailing group or non-zero padding bits →
//!    [`DecodeError::NonCanonical`]
//!
//! So `decode(encode(b)) == b` for any bytes and `encode(decode(s)) == s`
//! for any text that decodes.
//!
//! ```
//! assert!(armor64::is_valid("H_-"));
//! assert!(!armor64::is_valid("H_0"));  // non-zero padding
//! assert!(!armor64::is_valid("H_-\n")); // no trailing newline allowed
//! ```

pub mod alphabet;
pub mod encoder;
pub mod decoder;

pub use alphabet::{ALPHABET, ALPHABET_STR};
pub use encoder::{Encoder, encode, encode_string, encoded_len};
pub use decoder::{
    Decoder, DecodeError, NonCanonicalReason,
    decode, decode_to_string, is_valid, decoded_len,
};
