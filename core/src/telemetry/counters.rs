//! telemetry/counters.rs
//! Byte and pair counters collected while a stream is coded.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

/// Deterministic counters for one compress or decompress run.
///
/// Direction-neutral: the encoder reads uncompressed bytes and writes
/// compressed ones, the decoder the reverse. Header bytes count toward the
/// compressed side and are also tracked on their own.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub bytes_uncompressed: u64,
    pub bytes_compressed: u64,
    pub bytes_header: u64,
    pub pairs: u64,
    pub resets: u64,
}

impl TelemetryCounters {
    /// Record the file header (it lives on the compressed side).
    pub fn add_header(&mut self, header_len: usize) {
        self.bytes_header += header_len as u64;
        self.bytes_compressed += header_len as u64;
    }

    /// Compressed bytes excluding the header.
    pub fn body_bytes(&self) -> u64 {
        self.bytes_compressed - self.bytes_header
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.bytes_uncompressed += other.bytes_uncompressed;
        self.bytes_compressed += other.bytes_compressed;
        self.bytes_header += other.bytes_header;
        self.pairs += other.pairs;
        self.resets += other.resets;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
