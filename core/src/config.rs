//! config.rs
//! Run configuration for the codec.
//!
//! `max_code` shapes the wire format (it bounds code widths and decides when
//! the dictionary resets), so encoder and decoder must agree on it. It is not
//! carried in the header. `block_size` only sizes the I/O buffers.

use thiserror::Error;

use crate::constants::{Code, BLOCK, DEFAULT_MAX_CODE, MAX_CODE_LIMIT, MIN_MAX_CODE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Dictionary capacity; a power of two in `[MIN_MAX_CODE, MAX_CODE_LIMIT]`.
    pub max_code: Code,
    /// Bytes per symbol / pair buffer.
    pub block_size: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_code: DEFAULT_MAX_CODE,
            block_size: BLOCK,
        }
    }
}

impl CodecConfig {
    pub fn new(max_code: Code, block_size: usize) -> Result<Self, ConfigError> {
        let cfg = Self { max_code, block_size };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Default capacity with a custom buffer size.
    pub fn with_block_size(block_size: usize) -> Result<Self, ConfigError> {
        Self::new(DEFAULT_MAX_CODE, block_size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_code.is_power_of_two() {
            return Err(ConfigError::MaxCodeNotPowerOfTwo { have: self.max_code });
        }
        if self.max_code < MIN_MAX_CODE || self.max_code > MAX_CODE_LIMIT {
            return Err(ConfigError::MaxCodeOutOfRange {
                have: self.max_code,
                min: MIN_MAX_CODE,
                max: MAX_CODE_LIMIT,
            });
        }
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_code must be a power of two, got {have}")]
    MaxCodeNotPowerOfTwo { have: Code },

    #[error("max_code {have} outside [{min}, {max}]")]
    MaxCodeOutOfRange { have: Code, min: Code, max: Code },

    #[error("block_size must be non-zero")]
    ZeroBlockSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        CodecConfig::default().validate().unwrap();
    }

    #[test]
    fn rejects_bad_capacity() {
        assert_eq!(
            CodecConfig::new(1000, BLOCK).unwrap_err(),
            ConfigError::MaxCodeNotPowerOfTwo { have: 1000 }
        );
        assert!(matches!(
            CodecConfig::new(2, BLOCK).unwrap_err(),
            ConfigError::MaxCodeOutOfRange { have: 2, .. }
        ));
        assert!(matches!(
            CodecConfig::new(1 << 17, BLOCK).unwrap_err(),
            ConfigError::MaxCodeOutOfRange { .. }
        ));
    }

    #[test]
    fn rejects_zero_block() {
        assert_eq!(CodecConfig::with_block_size(0).unwrap_err(), ConfigError::ZeroBlockSize);
    }
}
