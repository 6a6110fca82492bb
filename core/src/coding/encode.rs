//! coding/encode.rs
//! Encoder run loop: longest-match trie walk emitting (code, symbol) pairs.

use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::codec::{PairWriter, SymbolReader};
use crate::coding::policy::{CodePolicy, Step};
use crate::config::CodecConfig;
use crate::constants::{Symbol, STOP_CODE};
use crate::dictionary::{NodeId, Trie};
use crate::telemetry::TelemetryCounters;
use crate::types::StreamError;

/// Trie walker that owns the pair sink.
///
/// Feed symbols with `encode_symbol`, then call `finish` exactly once to emit
/// the pending match and the `STOP_CODE` pair and flush the sink.
#[derive(Debug)]
pub struct Encoder<W: Write> {
    sink: PairWriter<W>,
    trie: Trie,
    policy: CodePolicy,
    current: NodeId,
    parent: NodeId,
    last_sym: Symbol,
    pairs: u64,
}

impl<W: Write> Encoder<W> {
    pub fn new(output: W, config: &CodecConfig) -> Self {
        Self {
            sink: PairWriter::with_block_size(output, config.block_size),
            trie: Trie::with_capacity(config.max_code as usize),
            policy: CodePolicy::from_config(config),
            current: NodeId::ROOT,
            parent: NodeId::ROOT,
            last_sym: 0,
            pairs: 0,
        }
    }

    /// Extend the current match by `sym`, or emit it and start over at the root.
    pub fn encode_symbol(&mut self, sym: Symbol) -> Result<(), StreamError> {
        match self.trie.step(self.current, sym) {
            Some(next) => {
                self.parent = self.current;
                self.current = next;
            }
            None => {
                let code = self.trie.code(self.current);
                self.sink.write_pair(code, sym, self.policy.width())?;
                self.trie.insert(self.current, sym, self.policy.next_code());
                self.current = self.trie.root();
                self.account_pair();
            }
        }
        self.last_sym = sym;
        Ok(())
    }

    pub fn encode_all(&mut self, data: &[u8]) -> Result<(), StreamError> {
        for &sym in data {
            self.encode_symbol(sym)?;
        }
        Ok(())
    }

    fn account_pair(&mut self) {
        self.pairs += 1;
        if self.policy.advance() == Step::Reset {
            trace!(resets = self.policy.resets(), "encoder dictionary full, resetting");
            self.trie.reset();
            self.current = self.trie.root();
        }
    }

    /// Emit the unfinished match (if any), the `STOP_CODE` pair, and flush.
    pub fn finish(mut self) -> Result<(W, TelemetryCounters), StreamError> {
        if self.current != self.trie.root() {
            // the match ran into end of input: parent's code plus the last symbol
            // names the matched word without adding a trie node
            let code = self.trie.code(self.parent);
            self.sink.write_pair(code, self.last_sym, self.policy.width())?;
            self.current = self.trie.root();
            self.account_pair();
        }
        self.sink.write_pair(STOP_CODE, 0, self.policy.width())?;
        self.policy.finish();
        self.sink.flush()?;

        let counters = TelemetryCounters {
            bytes_compressed: self.sink.bytes_written(),
            pairs: self.pairs,
            resets: self.policy.resets(),
            ..Default::default()
        };
        Ok((self.sink.into_inner(), counters))
    }

    pub fn policy(&self) -> &CodePolicy {
        &self.policy
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}

/// Compress the raw bytes of `input` into a pair body on `output`.
///
/// Writes no header. Counts bytes read as uncompressed and bytes written as
/// compressed.
pub fn encode_body<R: Read, W: Write>(
    input: R,
    output: W,
    config: &CodecConfig,
) -> Result<TelemetryCounters, StreamError> {
    config.validate()?;
    let mut symbols = SymbolReader::with_block_size(input, config.block_size);
    let mut encoder = Encoder::new(output, config);

    while let Some(sym) = symbols.read_symbol()? {
        encoder.encode_symbol(sym)?;
    }
    let (_, mut counters) = encoder.finish()?;
    counters.bytes_uncompressed = symbols.bytes_read();

    debug!(
        bytes_in = counters.bytes_uncompressed,
        bytes_out = counters.bytes_compressed,
        pairs = counters.pairs,
        resets = counters.resets,
        "encoded body"
    );
    Ok(counters)
}
