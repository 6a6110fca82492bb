//! pipeline.rs
//! Whole-stream entry points: header + body + telemetry.

use std::io::{Read, Write};

use crate::coding::{decode_body, encode_body};
use crate::config::CodecConfig;
use crate::headers::FileHeader;
use crate::io::{read_header, write_header};
use crate::telemetry::{TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::StreamError;

/// Write `header`, then compress all of `input` into `output`.
pub fn compress<R: Read, W: Write>(
    input: R,
    mut output: W,
    header: &FileHeader,
    config: &CodecConfig,
) -> Result<TelemetrySnapshot, StreamError> {
    config.validate()?;
    let mut timer = TelemetryTimer::new();
    let mut counters = TelemetryCounters::default();

    let n = write_header(&mut output, header)?;
    counters.add_header(n);
    counters += encode_body(input, &mut output, config)?;

    timer.finish();
    Ok(TelemetrySnapshot::from(&counters, &timer))
}

/// Check the header, then expand the body into `output`.
///
/// A wrong magic fails before any payload is read or written.
pub fn decompress<R: Read, W: Write>(
    mut input: R,
    output: W,
    config: &CodecConfig,
) -> Result<(FileHeader, TelemetrySnapshot), StreamError> {
    config.validate()?;
    let timer = TelemetryTimer::new();
    let header = read_header(&mut input)?;
    let snap = decompress_after_header(input, output, config, timer)?;
    Ok((header, snap))
}

/// Expand the body of a stream whose header `read_header` already accepted.
///
/// `timer` should be started before the header is read so the snapshot covers
/// the whole run. The header bytes are counted on the compressed side.
pub fn decompress_after_header<R: Read, W: Write>(
    input: R,
    output: W,
    config: &CodecConfig,
    mut timer: TelemetryTimer,
) -> Result<TelemetrySnapshot, StreamError> {
    let mut counters = TelemetryCounters::default();
    counters.add_header(FileHeader::LEN);
    counters += decode_body(input, output, config)?;

    timer.finish();
    Ok(TelemetrySnapshot::from(&counters, &timer))
}

/// In-memory `compress` with a default header.
pub fn compress_bytes(data: &[u8], config: &CodecConfig) -> Result<Vec<u8>, StreamError> {
    let mut out = Vec::with_capacity(data.len() / 2 + FileHeader::LEN);
    compress(data, &mut out, &FileHeader::default(), config)?;
    Ok(out)
}

/// In-memory `decompress`.
pub fn decompress_bytes(data: &[u8], config: &CodecConfig) -> Result<Vec<u8>, StreamError> {
    let mut out = Vec::with_capacity(data.len() * 2);
    decompress(data, &mut out, config)?;
    Ok(out)
}
