//! io.rs
//! Normalised input/output endpoints and header I/O.

use std::fs::File;
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::codec::io::{read_bytes, write_block};
use crate::constants::DEFAULT_PROTECTION;
use crate::headers::{decode_header_ne, encode_header_ne, FileHeader, HeaderError, HEADER_LEN};
use crate::types::StreamError;

/// Canonical input abstraction
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Memory(Vec<u8>),
    Reader(Box<dyn Read>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Stdout,
    File(PathBuf),
    Writer(Box<dyn Write>),
}

impl InputSource {
    /// `File` when a path is given, `Stdin` otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::File)
    }
}

impl OutputSink {
    /// `File` when a path is given, `Stdout` otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputSink::Stdout, OutputSink::File)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputSink::File(p) => Some(p),
            _ => None,
        }
    }
}

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> Result<Box<dyn Read>, StreamError> {
    let reader: Box<dyn Read> = match src {
        InputSource::Stdin => Box::new(io::stdin().lock()),
        InputSource::File(p) => Box::new(File::open(p)?),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
        InputSource::Reader(r) => r,
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer. Files are created or truncated.
pub fn open_output(sink: OutputSink) -> Result<Box<dyn Write>, StreamError> {
    let writer: Box<dyn Write> = match sink {
        OutputSink::Stdout => Box::new(io::stdout().lock()),
        OutputSink::File(p) => Box::new(File::create(p)?),
        OutputSink::Writer(w) => w,
    };
    Ok(writer)
}

// ================= Permissions =================

/// Permission bits of the input, or `DEFAULT_PROTECTION` when it has none.
pub fn source_protection(src: &InputSource) -> Result<u32, StreamError> {
    match src {
        InputSource::File(p) => file_mode(p),
        _ => Ok(DEFAULT_PROTECTION),
    }
}

#[cfg(unix)]
fn file_mode(path: &Path) -> Result<u32, StreamError> {
    use std::os::unix::fs::PermissionsExt;
    Ok(std::fs::metadata(path)?.permissions().mode())
}

#[cfg(not(unix))]
fn file_mode(path: &Path) -> Result<u32, StreamError> {
    std::fs::metadata(path)?;
    Ok(DEFAULT_PROTECTION)
}

/// Apply header permission bits to an output file. No-op off unix.
#[cfg(unix)]
pub fn apply_protection(path: &Path, header: &FileHeader) -> Result<(), StreamError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(header.mode()))?;
    Ok(())
}

#[cfg(not(unix))]
pub fn apply_protection(_path: &Path, _header: &FileHeader) -> Result<(), StreamError> {
    Ok(())
}

// ================= Header =================

/// Write the fixed header. Returns the byte count.
pub fn write_header<W: Write + ?Sized>(w: &mut W, h: &FileHeader) -> Result<usize, StreamError> {
    let buf = encode_header_ne(h);
    let n = write_block(w, &buf)?;
    debug!(magic = h.magic, protection = h.protection, "wrote header");
    Ok(n)
}

/// Read and check the fixed header. Nothing past the header is consumed.
pub fn read_header<R: Read + ?Sized>(r: &mut R) -> Result<FileHeader, StreamError> {
    let mut buf = [0u8; HEADER_LEN];
    let n = read_bytes(r, &mut buf)?;
    if n < HEADER_LEN {
        return Err(HeaderError::BufferTooShort { have: n, need: HEADER_LEN }.into());
    }
    let header = decode_header_ne(&buf).inspect_err(|e| warn!(error = %e, "rejecting stream header"))?;
    debug!(protection = header.protection, "read header");
    Ok(header)
}
