//! headers/encode.rs
//! Header serialization in native byte order.

use byteorder::{ByteOrder, NativeEndian};

use crate::headers::types::{FileHeader, HEADER_LEN};

/// Serialize a `FileHeader` into its fixed 8-byte form.
///
/// Field order: magic (0..4), protection (4..8).
#[inline]
pub fn encode_header_ne(h: &FileHeader) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    NativeEndian::write_u32(&mut out[0..4], h.magic);
    NativeEndian::write_u32(&mut out[4..8], h.protection);
    out
}
