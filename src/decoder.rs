//! armor64 decoder
//!
//! Decoding is strict: only the exact text [`encode`](crate::encode) would
//! produce for some byte sequence is accepted. Everything else is an error,
//! never a best-effort result.

use crate::alphabet;
use std::fmt;

/// Why an alphabet-valid, correctly sized text is still not a canonical encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonCanonicalReason {
    /// A trailing 6-bit group that produced no byte
    SurplusBits,
    /// The 2 or 4 bits left after the last byte are not all zero
    NonZeroPadding,
}

impl fmt::Display for NonCanonicalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonCanonicalReason::SurplusBits => write!(f, "surplus 6 trailing bits"),
            NonCanonicalReason::NonZeroPadding => write!(f, "non-zero trailing padding bits"),
        }
    }
}

/// Error type for armor64 decoding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Input length mod 4 == 1, which no byte sequence encodes to
    InvalidLength { length: usize },
    /// First byte that is not an armor64 symbol (including any non-ASCII byte)
    InvalidCharacter { index: usize, byte: u8 },
    /// Valid symbols and length, but not the unique encoding of any bytes
    NonCanonical(NonCanonicalReason),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidLength { length } => {
                write!(f, "Invalid armor64 length {}: mod 4 == 1 is not allowed", length)
            }
            DecodeError::InvalidCharacter { index, byte } if byte.is_ascii() => {
                write!(f, "Invalid character '{}' at {}", byte.escape_ascii(), index)
            }
            DecodeError::InvalidCharacter { index, byte } => {
                write!(f, "Non-ASCII byte {:#04x} at {}", byte, index)
            }
            DecodeError::NonCanonical(reason) => {
                write!(f, "Non-canonical encoding: {}", reason)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decodes armor64 text into bytes
pub struct Decoder {
    // Stateless: there is nothing to relax about a strict decoder
}

impl Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self {}
    }

    /// Decode `input`, rejecting anything that is not a canonical encoding.
    ///
    /// `input` is usually a `&str`; raw bytes are accepted too, so text read
    /// from a file or stdin does not need to be UTF-8 validated first. Lengths
    /// and indices count characters: UTF-8 continuation bytes are not counted.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
        let input = input.as_ref();
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let mut output = Vec::with_capacity(decoded_len(char_count(input))?);

        let mut buffer: u32 = 0;
        let mut bits: u32 = 0;

        // Every byte before the first rejected one is ASCII, so the byte
        // index is also the character index
        for (index, &byte) in input.iter().enumerate() {
            let value = alphabet::value_of(byte).ok_or(DecodeError::InvalidCharacter { index, byte })?;

            buffer = (buffer << 6) | u32::from(value);
            bits += 6;

            while bits >= 8 {
                bits -= 8;
                output.push((buffer >> bits) as u8);
            }

            // Keep only the bits not yet emitted
            buffer &= (1 << bits) - 1;
        }

        match bits {
            // Unreachable after the length check; kept as the last canonicality rule
            6 => Err(DecodeError::NonCanonical(NonCanonicalReason::SurplusBits)),
            _ if buffer != 0 => Err(DecodeError::NonCanonical(NonCanonicalReason::NonZeroPadding)),
            _ => Ok(output),
        }
    }
}

/// Number of UTF-8 characters in `input`, counting every byte that is not a
/// continuation byte
fn char_count(input: &[u8]) -> usize {
    input.iter().filter(|&&b| b & 0xC0 != 0x80).count()
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode armor64 `input` to bytes
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, DecodeError> {
    Decoder::new().decode(input)
}

/// Decode armor64 `input` and interpret the bytes as UTF-8.
///
/// Invalid UTF-8 sequences in the payload are replaced with U+FFFD. Only the
/// armor64 layer is held to the strict rules.
pub fn decode_to_string(input: impl AsRef<[u8]>) -> Result<String, DecodeError> {
    let bytes = decode(input)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

/// Whether `input` is a canonical armor64 encoding
pub fn is_valid(input: impl AsRef<[u8]>) -> bool {
    decode(input).is_ok()
}

/// Number of bytes a valid armor64 text of `text_len` characters decodes to
pub fn decoded_len(text_len: usize) -> Result<usize, DecodeError> {
    let partial = match text_len % 4 {
        0 => 0,
        2 => 1,
        3 => 2,
        _ => return Err(DecodeError::InvalidLength { length: text_len }),
    };
    Ok(text_len / 4 * 3 + partial)
}
