//! lzdict-core
//!
//! Adaptive LZ78 dictionary compressor. One pass, one dictionary per epoch,
//! code widths that grow with the dictionary and are never transmitted.
//! No CLI, no file handling beyond the header and endpoint helpers.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;
pub mod types;

// Wire format
pub mod headers;
pub mod codec;

// Dictionary + control
pub mod dictionary;
pub mod coding;

// Endpoints and statistics
pub mod io;
pub mod telemetry;
pub mod pipeline;

pub use pipeline::{compress, compress_bytes, decompress, decompress_after_header, decompress_bytes};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::config::CodecConfig;
    pub use crate::constants::{Code, Symbol};
    pub use crate::headers::FileHeader;
    pub use crate::io::{InputSource, OutputSink};
    pub use crate::pipeline::{
        compress, compress_bytes, decompress, decompress_after_header, decompress_bytes,
    };
    pub use crate::telemetry::{TelemetryCounters, TelemetrySnapshot};
    pub use crate::types::StreamError;
}
