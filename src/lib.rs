//! Decoding of CGI / `application/x-www-form-urlencoded` byte strings.
//!
//! `+` becomes a space, `%XX` becomes the byte with hex value `XX`, and every other byte is
//! copied through. A `%` that is not followed by two hex digits is an error; nothing past the end
//! of the input is ever read to find them.
//!
//! ```
//! assert_eq!(cgi_decode::decode(b"q=1+2%3D3").unwrap(), b"q=1 2=3");
//! ```

mod map;

pub use map::{MapInPlace, NoCapacityError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The output buffer could not be reserved.
    #[error("could not allocate {requested} bytes for the decoded output")]
    AllocationFailure { requested: usize },

    /// A `%` without two hex digits after it. `offset` is the position of the `%`.
    #[error("malformed escape at byte offset {offset}")]
    MalformedEscape { offset: usize },

    /// The write cursor caught up with the read cursor.
    #[error("no capacity left for output at byte offset {offset}")]
    NoCapacity { offset: usize },
}

/// Value of a single ASCII hex digit, either case.
pub fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Decodes `input` into a freshly allocated buffer.
///
/// The output is never longer than the input, so exactly `input.len()` bytes are reserved up
/// front and the buffer never grows while decoding.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(input.len())
        .map_err(|_| DecodeError::AllocationFailure {
            requested: input.len(),
        })?;
    buf.extend_from_slice(input);

    decode_in_place(&mut buf)?;

    Ok(buf)
}

pub fn decode_str(input: &str) -> Result<Vec<u8>, DecodeError> {
    decode(input.as_bytes())
}

/// Decodes `buf` in place.
///
/// On error `buf` keeps whatever was decoded before the malformed escape.
pub fn decode_in_place(buf: &mut Vec<u8>) -> Result<(), DecodeError> {
    let input_len = buf.len();
    let mut m = MapInPlace::new(buf);

    while let Some(byte) = m.pop() {
        let offset = m.unmapped_offset() - 1;

        let out = match byte {
            b'+' => b' ',
            b'%' => match m.pop_bytes(2) {
                Some(&[hi, lo]) => match (hex_value(hi), hex_value(lo)) {
                    (Some(hi), Some(lo)) => hi << 4 | lo,
                    _ => return Err(malformed(offset)),
                },
                _ => return Err(malformed(offset)),
            },
            other => other,
        };

        m.push(out)
            .map_err(|_| DecodeError::NoCapacity { offset })?;
    }

    tracing::trace!(input_len, output_len = m.mapped_len(), "decoded");

    Ok(())
}

fn malformed(offset: usize) -> DecodeError {
    tracing::debug!(offset, "malformed escape");
    DecodeError::MalformedEscape { offset }
}
