//! headers/decode.rs
//! Header parsing and magic check.

use byteorder::{ByteOrder, NativeEndian};

use crate::headers::types::{FileHeader, HeaderError, HEADER_LEN};

/// Deserialize and validate an 8-byte native-endian header.
///
/// # Returns
/// - `Err(HeaderError::BufferTooShort)` if fewer than 8 bytes are given.
/// - `Err(HeaderError::WrongFormat)` if the magic does not match.
#[inline]
pub fn decode_header_ne(buf: &[u8]) -> Result<FileHeader, HeaderError> {
    if buf.len() < HEADER_LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: HEADER_LEN });
    }

    let h = FileHeader {
        magic: NativeEndian::read_u32(&buf[0..4]),
        protection: NativeEndian::read_u32(&buf[4..8]),
    };
    h.validate()?;

    Ok(h)
}
