//! coding/decode.rs
//! Decoder run loop: rebuilds each word from (code, symbol) and the table.

use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::codec::{PairReader, SymbolWriter};
use crate::coding::policy::{CodePolicy, Step};
use crate::config::CodecConfig;
use crate::dictionary::WordTable;
use crate::telemetry::TelemetryCounters;
use crate::types::StreamError;

#[derive(Debug)]
pub struct Decoder<R: Read, W: Write> {
    source: PairReader<R>,
    sink: SymbolWriter<W>,
    table: WordTable,
    policy: CodePolicy,
    pairs: u64,
}

impl<R: Read, W: Write> Decoder<R, W> {
    pub fn new(input: R, output: W, config: &CodecConfig) -> Self {
        Self {
            source: PairReader::with_block_size(input, config.block_size),
            sink: SymbolWriter::with_block_size(output, config.block_size),
            table: WordTable::new(config.max_code),
            policy: CodePolicy::from_config(config),
            pairs: 0,
        }
    }

    /// Consume one pair. Returns `false` once the `STOP_CODE` pair was read.
    pub fn decode_pair(&mut self) -> Result<bool, StreamError> {
        let Some(pair) = self.source.read_pair(self.policy.width())? else {
            self.policy.finish();
            return Ok(false);
        };

        let next_code = self.policy.next_code();
        let word = self
            .table
            .get(pair.code)
            .ok_or(StreamError::UnknownCode { code: pair.code, next_code })?
            .append(pair.symbol);
        let word = self.table.insert(next_code, word);
        self.sink.write_word(word.as_bytes())?;
        self.pairs += 1;

        if self.policy.advance() == Step::Reset {
            trace!(resets = self.policy.resets(), "decoder dictionary full, resetting");
            self.table.reset();
        }
        Ok(true)
    }

    /// Decode until `STOP_CODE`, then flush the output.
    ///
    /// On a truncated or corrupt body every word decoded so far is still
    /// flushed before the error is returned.
    pub fn run(&mut self) -> Result<(), StreamError> {
        loop {
            match self.decode_pair() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e @ (StreamError::Truncated { .. } | StreamError::UnknownCode { .. })) => {
                    self.sink.flush()?;
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }
        self.sink.flush()
    }

    pub fn counters(&self) -> TelemetryCounters {
        TelemetryCounters {
            bytes_compressed: self.source.bytes_read(),
            bytes_uncompressed: self.sink.bytes_written(),
            pairs: self.pairs,
            resets: self.policy.resets(),
            ..Default::default()
        }
    }

    pub fn policy(&self) -> &CodePolicy {
        &self.policy
    }

    pub fn table(&self) -> &WordTable {
        &self.table
    }

    pub fn into_inner(self) -> (R, W) {
        (self.source.into_inner(), self.sink.into_inner())
    }
}

/// Expand a pair body from `input` into raw bytes on `output`.
///
/// Expects the header to have been consumed already.
pub fn decode_body<R: Read, W: Write>(
    input: R,
    output: W,
    config: &CodecConfig,
) -> Result<TelemetryCounters, StreamError> {
    config.validate()?;
    let mut decoder = Decoder::new(input, output, config);
    decoder.run()?;
    let counters = decoder.counters();

    debug!(
        bytes_in = counters.bytes_compressed,
        bytes_out = counters.bytes_uncompressed,
        pairs = counters.pairs,
        resets = counters.resets,
        "decoded body"
    );
    Ok(counters)
}
