//! armor64 encoder

use crate::alphabet;

/// Encodes bytes into armor64 text
pub struct Encoder {
    // Stateless: the alphabet is fixed and there is no padding to configure
}

impl Encoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self {}
    }

    /// Encode `data` to a string. Never fails.
    pub fn encode(&self, data: impl AsRef<[u8]>) -> String {
        let data = data.as_ref();
        let capacity = encoded_len(data.len()).expect("usize overflow when calculating encoded length");
        let mut output = String::with_capacity(capacity);

        let mut buffer: u32 = 0;
        let mut bits: u32 = 0;

        for &byte in data {
            buffer = (buffer << 8) | u32::from(byte);
            bits += 8;

            while bits >= 6 {
                bits -= 6;
                output.push(char::from(alphabet::symbol((buffer >> bits) as u8)));
            }

            // Keep only the bits not yet emitted
            buffer &= (1 << bits) - 1;
        }

        // 2 or 4 bits left: pad on the right with zeros
        if bits > 0 {
            output.push(char::from(alphabet::symbol((buffer << (6 - bits)) as u8)));
        }

        debug_assert_eq!(output.len(), capacity);
        output
    }

    /// Encode `data` directly to a writer
    pub fn encode_to_writer<W: std::io::Write>(&self, data: impl AsRef<[u8]>, mut writer: W) -> std::io::Result<()> {
        let encoded = self.encode(data);
        writer.write_all(encoded.as_bytes())?;
        Ok(())
    }

    /// Encode `data` to a file
    pub fn encode_to_file(&self, data: impl AsRef<[u8]>, path: &std::path::Path) -> std::io::Result<()> {
        let encoded = self.encode(data);
        std::fs::write(path, encoded)?;
        Ok(())
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `data` to armor64
pub fn encode(data: impl AsRef<[u8]>) -> String {
    Encoder::new().encode(data)
}

/// Encode the UTF-8 bytes of `text`
pub fn encode_string(text: &str) -> String {
    encode(text.as_bytes())
}

/// Length of the armor64 text for `bytes_len` input bytes: `ceil(bytes_len * 8 / 6)`.
///
/// Returns `None` if the result would not fit in a `usize`.
pub fn encoded_len(bytes_len: usize) -> Option<usize> {
    let complete = (bytes_len / 3).checked_mul(4)?;
    let partial = match bytes_len % 3 {
        0 => 0,
        1 => 2,
        _ => 3,
    };
    complete.checked_add(partial)
}
