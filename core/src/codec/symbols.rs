//! codec/symbols.rs
//! Byte-at-a-time symbol input and word-at-a-time symbol output, both backed
//! by a fixed-size block buffer.

use std::io::{Read, Write};

use crate::codec::io::{read_bytes, write_block};
use crate::constants::{Symbol, BLOCK};
use crate::types::StreamError;

/// Buffered symbol source for the encoder.
#[derive(Debug)]
pub struct SymbolReader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    pos: usize,
    len: usize,
    eof: bool,
    bytes_read: u64,
}

impl<R: Read> SymbolReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_block_size(inner, BLOCK)
    }

    pub fn with_block_size(inner: R, block_size: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; block_size.max(1)],
            pos: 0,
            len: 0,
            eof: false,
            bytes_read: 0,
        }
    }

    /// Next symbol, or `None` once every byte the source produced is consumed.
    pub fn read_symbol(&mut self) -> Result<Option<Symbol>, StreamError> {
        if self.pos == self.len {
            if self.eof {
                return Ok(None);
            }
            self.len = read_bytes(&mut self.inner, &mut self.buf)?;
            self.pos = 0;
            self.bytes_read += self.len as u64;
            // read_bytes only comes up short at end of input
            if self.len < self.buf.len() {
                self.eof = true;
            }
            if self.len == 0 {
                return Ok(None);
            }
        }
        let sym = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(sym))
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

/// Buffered symbol sink for the decoder. Partial blocks stay buffered until
/// `flush`; dropping the writer without flushing loses them.
#[derive(Debug)]
pub struct SymbolWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    len: usize,
    bytes_written: u64,
}

impl<W: Write> SymbolWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_block_size(inner, BLOCK)
    }

    pub fn with_block_size(inner: W, block_size: usize) -> Self {
        Self {
            inner,
            buf: vec![0u8; block_size.max(1)],
            len: 0,
            bytes_written: 0,
        }
    }

    /// Append a word's bytes, writing out each block as it fills.
    pub fn write_word(&mut self, word: &[Symbol]) -> Result<(), StreamError> {
        let mut rest = word;
        while !rest.is_empty() {
            let take = (self.buf.len() - self.len).min(rest.len());
            self.buf[self.len..self.len + take].copy_from_slice(&rest[..take]);
            self.len += take;
            rest = &rest[take..];
            if self.len == self.buf.len() {
                self.drain()?;
            }
        }
        Ok(())
    }

    /// Write exactly the buffered byte count, then flush the sink.
    pub fn flush(&mut self) -> Result<(), StreamError> {
        if self.len > 0 {
            self.drain()?;
        }
        self.inner.flush()?;
        Ok(())
    }

    fn drain(&mut self) -> Result<(), StreamError> {
        let n = write_block(&mut self.inner, &self.buf[..self.len])?;
        self.bytes_written += n as u64;
        self.len = 0;
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Bytes accepted but not yet written to the sink.
    pub fn pending(&self) -> usize {
        self.len
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_yields_every_byte_then_none() {
        let data: Vec<u8> = (0..=255).collect();
        let mut r = SymbolReader::with_block_size(&data[..], 7);
        let mut got = Vec::new();
        while let Some(s) = r.read_symbol().unwrap() {
            got.push(s);
        }
        assert_eq!(got, data);
        assert_eq!(r.bytes_read(), 256);
        assert_eq!(r.read_symbol().unwrap(), None);
    }

    #[test]
    fn reader_on_empty_input() {
        let mut r = SymbolReader::new(&[][..]);
        assert_eq!(r.read_symbol().unwrap(), None);
        assert_eq!(r.bytes_read(), 0);
    }

    #[test]
    fn writer_holds_partial_block_until_flush() {
        let mut w = SymbolWriter::with_block_size(Vec::new(), 4);
        w.write_word(b"abcdef").unwrap();
        assert_eq!(w.bytes_written(), 4);
        assert_eq!(w.pending(), 2);
        w.flush().unwrap();
        assert_eq!(w.bytes_written(), 6);
        assert_eq!(w.into_inner(), b"abcdef");
    }

    #[test]
    fn writer_ignores_empty_words() {
        let mut w = SymbolWriter::new(Vec::new());
        w.write_word(&[]).unwrap();
        w.flush().unwrap();
        assert!(w.into_inner().is_empty());
    }
}
