//! telemetry/snapshot.rs
//! Immutable run summary handed to the statistics reporter.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::TelemetryTimer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub bytes_uncompressed: u64,
    pub bytes_compressed: u64,
    pub bytes_header: u64,
    pub pairs: u64,
    pub resets: u64,
    /// `compressed / uncompressed`; 0 for an empty input.
    pub compression_ratio: f64,
    /// `100 * (1 - compressed / uncompressed)`; 0 for an empty input.
    /// Negative when the output grew.
    pub space_saving_percent: f64,
    pub elapsed: Duration,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let compression_ratio = if counters.bytes_uncompressed > 0 {
            counters.bytes_compressed as f64 / counters.bytes_uncompressed as f64
        } else {
            0.0
        };
        let space_saving_percent = if counters.bytes_uncompressed > 0 {
            100.0 * (1.0 - compression_ratio)
        } else {
            0.0
        };

        Self {
            bytes_uncompressed: counters.bytes_uncompressed,
            bytes_compressed: counters.bytes_compressed,
            bytes_header: counters.bytes_header,
            pairs: counters.pairs,
            resets: counters.resets,
            compression_ratio,
            space_saving_percent,
            elapsed: timer.elapsed(),
        }
    }

    /// Uncompressed bytes per second; 0 when no time was measured.
    pub fn throughput_bytes_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes_uncompressed as f64 / secs
        } else {
            0.0
        }
    }
}
