//! headers/mod.rs
//! Fixed-size file header written once in front of every compressed body.
//!
//! Notes:
//! - 8 bytes: magic (u32) then permission bits (u32).
//! - Native byte order of the producing machine. No endianness normalisation,
//!   so a file only decodes on a machine with the same byte order.
//! - The decoder checks the magic before touching any payload.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
