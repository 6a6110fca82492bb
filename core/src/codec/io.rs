//! codec/io.rs
//! Retrying byte transfer over `Read` / `Write`.
//!
//! A short count means the source hit EOF (or the sink stopped taking bytes).
//! `Interrupted` is retried; every other error is returned as-is so callers can
//! tell a real failure from a clean end of input.

use std::io::{self, Read, Write};

use crate::types::StreamError;

/// Read until `buf` is full or the source returns 0. Returns the byte count.
pub fn read_bytes<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match r.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// Write until `buf` is drained or the sink accepts 0. Returns the byte count.
pub fn write_bytes<W: Write + ?Sized>(w: &mut W, buf: &[u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match w.write(&buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// `write_bytes`, failing if the sink took fewer bytes than given.
pub(crate) fn write_block<W: Write + ?Sized>(w: &mut W, buf: &[u8]) -> Result<usize, StreamError> {
    let wrote = write_bytes(w, buf)?;
    if wrote < buf.len() {
        return Err(StreamError::ShortWrite { wrote, expected: buf.len() });
    }
    Ok(wrote)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out at most `step` bytes per call and fails once with `Interrupted`.
    struct Trickle<'a> {
        data: &'a [u8],
        step: usize,
        interrupted: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            let n = self.step.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    /// Accepts `cap` bytes in total, then reports 0.
    struct Full {
        taken: Vec<u8>,
        cap: usize,
    }

    impl Write for Full {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.cap - self.taken.len());
            self.taken.extend_from_slice(&buf[..n]);
            Ok(n)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn read_loops_over_short_reads() {
        let data = [7u8; 10];
        let mut src = Trickle { data: &data, step: 3, interrupted: false };
        let mut buf = [0u8; 8];
        assert_eq!(read_bytes(&mut src, &mut buf).unwrap(), 8);
        assert_eq!(read_bytes(&mut src, &mut buf).unwrap(), 2);
        assert_eq!(read_bytes(&mut src, &mut buf).unwrap(), 0);
    }

    #[test]
    fn write_reports_short_sink() {
        let mut sink = Full { taken: Vec::new(), cap: 5 };
        assert_eq!(write_bytes(&mut sink, &[1; 8]).unwrap(), 5);

        let mut sink = Full { taken: Vec::new(), cap: 5 };
        let err = write_block(&mut sink, &[1; 8]).unwrap_err();
        assert!(matches!(err, StreamError::ShortWrite { wrote: 5, expected: 8 }));
    }
}
