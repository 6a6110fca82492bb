//! codec/pairs.rs
//! Bit-packed (code, symbol) pairs over a block buffer.
//!
//! A single bit cursor runs through the buffer. Fields straddle byte and block
//! boundaries freely; a full block is written out (or refilled) the moment the
//! cursor reaches its end.

use std::io::{Read, Write};

use crate::codec::io::{read_bytes, write_block};
use crate::codec::Pair;
use crate::constants::{Code, Symbol, BLOCK, STOP_CODE, SYMBOL_BITS};
use crate::types::StreamError;

/// Largest code field the packer handles.
pub const MAX_CODE_BITS: u8 = 32;

#[inline]
fn low_mask(bits: u8) -> u8 {
    ((1u16 << bits) - 1) as u8
}

/// Encoder-side pair packer.
#[derive(Debug)]
pub struct PairWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    bit_pos: usize,
    bytes_written: u64,
}

impl<W: Write> PairWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_block_size(inner, BLOCK)
    }

    pub fn with_block_size(inner: W, block_size: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; block_size.max(1)],
            bit_pos: 0,
            bytes_written: 0,
        }
    }

    /// Append `bitlen` bits of `code` then the 8 bits of `symbol`.
    pub fn write_pair(&mut self, code: Code, symbol: Symbol, bitlen: u8) -> Result<(), StreamError> {
        debug_assert!(bitlen <= MAX_CODE_BITS);
        debug_assert!(u64::from(code) < (1u64 << bitlen), "code {code} wider than {bitlen} bits");
        self.put_bits(code, bitlen)?;
        self.put_bits(u32::from(symbol), SYMBOL_BITS)
    }

    fn put_bits(&mut self, mut value: u32, nbits: u8) -> Result<(), StreamError> {
        let mut remaining = nbits;
        while remaining > 0 {
            let byte = self.bit_pos / 8;
            let offset = (self.bit_pos % 8) as u8;
            let take = remaining.min(8 - offset);

            // a fresh byte starts zeroed so the final pad is deterministic
            if offset == 0 {
                self.buf[byte] = 0;
            }
            self.buf[byte] |= ((value as u8) & low_mask(take)) << offset;

            value >>= take;
            remaining -= take;
            self.bit_pos += take as usize;

            if self.bit_pos == self.buf.len() * 8 {
                self.drain(self.buf.len())?;
            }
        }
        Ok(())
    }

    /// Write out every buffered bit, padding the last partial byte with zeros,
    /// then flush the sink.
    pub fn flush(&mut self) -> Result<(), StreamError> {
        let len = self.bit_pos.div_ceil(8);
        if len > 0 {
            self.drain(len)?;
        }
        self.inner.flush()?;
        Ok(())
    }

    fn drain(&mut self, len: usize) -> Result<(), StreamError> {
        let n = write_block(&mut self.inner, &self.buf[..len])?;
        self.bytes_written += n as u64;
        self.bit_pos = 0;
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Bits accepted but not yet written to the sink.
    pub fn pending_bits(&self) -> usize {
        self.bit_pos
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Decoder-side pair unpacker.
#[derive(Debug)]
pub struct PairReader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    bit_pos: usize,
    bit_len: usize,
    bytes_read: u64,
}

impl<R: Read> PairReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_block_size(inner, BLOCK)
    }

    pub fn with_block_size(inner: R, block_size: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; block_size.max(1)],
            bit_pos: 0,
            bit_len: 0,
            bytes_read: 0,
        }
    }

    /// Extract `bitlen` bits of code then 8 bits of symbol.
    ///
    /// Returns `Ok(None)` when the pair carried `STOP_CODE`; the sentinel's
    /// symbol bits are consumed either way.
    pub fn read_pair(&mut self, bitlen: u8) -> Result<Option<Pair>, StreamError> {
        debug_assert!(bitlen <= MAX_CODE_BITS);
        let code = self.take_bits(bitlen)?;
        let symbol = self.take_bits(SYMBOL_BITS)? as Symbol;
        if code == STOP_CODE {
            return Ok(None);
        }
        Ok(Some(Pair { code, symbol }))
    }

    fn take_bits(&mut self, nbits: u8) -> Result<u32, StreamError> {
        let mut value = 0u32;
        let mut got = 0u8;
        while got < nbits {
            if self.bit_pos == self.bit_len {
                self.refill(nbits - got)?;
            }
            let byte = self.buf[self.bit_pos / 8];
            let offset = (self.bit_pos % 8) as u8;
            let take = (nbits - got).min(8 - offset);

            value |= u32::from((byte >> offset) & low_mask(take)) << got;

            got += take;
            self.bit_pos += take as usize;
        }
        Ok(value)
    }

    fn refill(&mut self, bits_needed: u8) -> Result<(), StreamError> {
        let n = read_bytes(&mut self.inner, &mut self.buf)?;
        self.bytes_read += n as u64;
        if n == 0 {
            return Err(StreamError::Truncated { bits_needed: u32::from(bits_needed) });
        }
        self.bit_pos = 0;
        self.bit_len = n * 8;
        Ok(())
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
