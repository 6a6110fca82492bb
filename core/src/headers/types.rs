//! headers/types.rs
//! Header struct and its errors.

use thiserror::Error;

use crate::constants::{DEFAULT_PROTECTION, MAGIC};

/// Fixed header size in bytes.
pub const HEADER_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: u32,      // MAGIC marker
    pub protection: u32, // source file permission bits (st_mode)
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            protection: DEFAULT_PROTECTION,
        }
    }
}

impl FileHeader {
    pub const LEN: usize = HEADER_LEN;

    /// Header carrying the given permission bits.
    pub fn new(protection: u32) -> Self {
        Self { protection, ..Default::default() }
    }

    pub fn validate(&self) -> Result<(), HeaderError> {
        if self.magic != MAGIC {
            return Err(HeaderError::WrongFormat {
                have: self.magic,
                need: MAGIC,
            });
        }
        Ok(())
    }

    /// Permission bits restricted to what `chmod` understands.
    pub fn mode(&self) -> u32 {
        self.protection & 0o7777
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    /// Input ended before a whole header was read.
    #[error("header buffer too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    /// Magic mismatch: not a stream this codec produced.
    #[error("wrong format: expected magic {need:#010x}, got {have:#010x}")]
    WrongFormat { have: u32, need: u32 },
}
