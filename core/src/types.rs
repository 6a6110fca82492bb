use std::io;
use thiserror::Error;

use crate::{config::ConfigError, constants::Code, headers::HeaderError};

/// Unified stream error covering I/O, header, configuration and body decoding.
/// - `From<T>` impls enable `?` across codec, dictionary and run loops.
/// - A clean end of input is never an error on its own; only an input that ends
///   before the body's `STOP_CODE` pair is (`Truncated`).
#[derive(Debug, Error)]
pub enum StreamError {
    /// Underlying read or write failed (not a clean EOF).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Header missing or not ours.
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// Invalid codec configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Decoder received a code with no live word-table entry.
    #[error("unknown code {code} (next code to assign is {next_code})")]
    UnknownCode { code: Code, next_code: Code },

    /// Compressed body ended before its terminating pair.
    #[error("compressed stream truncated: {bits_needed} more bits needed")]
    Truncated { bits_needed: u32 },

    /// Sink stopped accepting bytes.
    #[error("short write: {wrote} of {expected} bytes")]
    ShortWrite { wrote: usize, expected: usize },
}

impl StreamError {
    /// True for the "wrong format" condition raised by a bad header magic.
    pub fn is_wrong_format(&self) -> bool {
        matches!(self, StreamError::Header(HeaderError::WrongFormat { .. }))
    }
}
