//! The armor64 alphabet and its reverse lookup table

/// Symbols in value order: index `i` is the symbol for the 6-bit value `i`
pub const ALPHABET_STR: &str = "-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Same as [`ALPHABET_STR`], as bytes
pub const ALPHABET: [u8; 64] = alphabet_bytes(ALPHABET_STR);

/// Marks a byte that is not part of the alphabet in [`REVERSE`]
const INVALID: u8 = 0xFF;

/// ASCII code point -> 6-bit value, or [`INVALID`]
static REVERSE: [u8; 128] = build_reverse(&ALPHABET);

const fn alphabet_bytes(symbols: &str) -> [u8; 64] {
    let bytes = symbols.as_bytes();
    assert!(bytes.len() == 64, "alphabet must have exactly 64 symbols");

    let mut out = [0u8; 64];
    let mut i = 0;
    while i < 64 {
        out[i] = bytes[i];
        i += 1;
    }
    out
}

const fn build_reverse(symbols: &[u8; 64]) -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < 64 {
        let symbol = symbols[i];
        assert!(symbol.is_ascii_graphic(), "alphabet symbols must be printable ASCII");
        assert!(table[symbol as usize] == INVALID, "alphabet symbols must be distinct");
        table[symbol as usize] = i as u8;
        i += 1;
    }
    table
}

/// Symbol for a 6-bit value. Bits above the low six are ignored.
#[inline]
pub fn symbol(value: u8) -> u8 {
    ALPHABET[(value & 0x3F) as usize]
}

/// 6-bit value of `byte`, or `None` if it is not an armor64 symbol.
///
/// Every byte >= 128 is rejected, as is any ASCII byte outside the
/// alphabet (space, CR, LF, `=`, `+`, `/`, ...).
#[inline]
pub fn value_of(byte: u8) -> Option<u8> {
    match REVERSE.get(byte as usize) {
        Some(&value) if value != INVALID => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order() {
        assert_eq!(symbol(0), b'-');
        assert_eq!(symbol(1), b'0');
        assert_eq!(symbol(10), b'9');
        assert_eq!(symbol(11), b'A');
        assert_eq!(symbol(36), b'Z');
        assert_eq!(symbol(37), b'_');
        assert_eq!(symbol(38), b'a');
        assert_eq!(symbol(63), b'z');
    }

    #[test]
    fn test_reverse_is_inverse() {
        for value in 0..64u8 {
            assert_eq!(value_of(symbol(value)), Some(value));
        }

        let valid = (0..=255u8).filter(|&b| value_of(b).is_some()).count();
        assert_eq!(valid, 64);
    }

    #[test]
    fn test_rejected_bytes() {
        for byte in [b' ', b'\r', b'\n', b'\t', b'=', b'+', b'/', b'.', 0x00, 0x7F, 0x80, 0xFF] {
            assert_eq!(value_of(byte), None, "byte {:#04x} should be rejected", byte);
        }
    }

    #[test]
    fn test_symbol_masks_high_bits() {
        assert_eq!(symbol(0x40), symbol(0));
        assert_eq!(symbol(0xFF), b'z');
    }
}
