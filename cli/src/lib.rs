//! lzdict-cli
//!
//! Glue shared by the `encode` and `decode` binaries: argument parsing,
//! logging setup and statistics output. All coding happens in lzdict-core.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use lzdict_core::config::CodecConfig;
use lzdict_core::constants::BLOCK;
use lzdict_core::io::{InputSource, OutputSink};
use lzdict_core::telemetry::TelemetrySnapshot;
use tracing_subscriber::EnvFilter;

/// Options common to both binaries.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, long_about = None)]
pub struct Args {
    /// Input file (defaults to stdin)
    #[arg(short, long, value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print compression statistics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print statistics as JSON to stderr (implies -v)
    #[arg(long)]
    pub json: bool,

    /// I/O buffer size in bytes; does not affect the file format
    #[arg(long, default_value_t = BLOCK)]
    pub block_size: usize,
}

impl Args {
    pub fn source(&self) -> InputSource {
        InputSource::from_path(self.input.clone())
    }

    pub fn sink(&self) -> OutputSink {
        OutputSink::from_path(self.output.clone())
    }

    pub fn config(&self) -> anyhow::Result<CodecConfig> {
        Ok(CodecConfig::with_block_size(self.block_size)?)
    }

    pub fn wants_stats(&self) -> bool {
        self.verbose || self.json
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // a second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// The three-line human report.
pub fn format_stats(snap: &TelemetrySnapshot) -> String {
    format!(
        "Compressed file size: {} bytes\nUncompressed file size: {} bytes\nCompression ratio: {:.2}%\n",
        snap.bytes_compressed, snap.bytes_uncompressed, snap.space_saving_percent
    )
}

/// Write the report requested by `args` to `w`.
pub fn report<W: Write>(w: &mut W, args: &Args, snap: &TelemetrySnapshot) -> anyhow::Result<()> {
    if args.json {
        serde_json::to_writer_pretty(&mut *w, snap)?;
        writeln!(w)?;
    } else if args.verbose {
        w.write_all(format_stats(snap).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lzdict_core::telemetry::{TelemetryCounters, TelemetryTimer};

    fn snap() -> TelemetrySnapshot {
        let counters = TelemetryCounters {
            bytes_uncompressed: 400,
            bytes_compressed: 100,
            bytes_header: 8,
            pairs: 10,
            resets: 0,
        };
        TelemetrySnapshot::from(&counters, &TelemetryTimer::new())
    }

    #[test]
    fn defaults_are_stdio() {
        let args = Args::try_parse_from(["encode"]).unwrap();
        assert_eq!(args.input, None);
        assert_eq!(args.output, None);
        assert!(!args.wants_stats());
        assert!(matches!(args.source(), InputSource::Stdin));
        assert!(matches!(args.sink(), OutputSink::Stdout));
        assert_eq!(args.config().unwrap(), CodecConfig::default());
    }

    #[test]
    fn parses_short_flags() {
        let args = Args::try_parse_from(["decode", "-v", "-i", "in.lz", "-o", "out.txt"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.input, Some(PathBuf::from("in.lz")));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn zero_block_size_is_rejected() {
        let args = Args::try_parse_from(["encode", "--block-size", "0"]).unwrap();
        assert!(args.config().is_err());
    }

    #[test]
    fn stats_text_matches_classic_layout() {
        let text = format_stats(&snap());
        assert_eq!(
            text,
            "Compressed file size: 100 bytes\nUncompressed file size: 400 bytes\nCompression ratio: 75.00%\n"
        );
    }

    #[test]
    fn json_report_is_parseable() {
        let args = Args::try_parse_from(["encode", "--json"]).unwrap();
        let mut out = Vec::new();
        report(&mut out, &args, &snap()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["bytes_compressed"], 100);
    }

    #[test]
    fn quiet_report_is_empty() {
        let args = Args::try_parse_from(["encode"]).unwrap();
        let mut out = Vec::new();
        report(&mut out, &args, &snap()).unwrap();
        assert!(out.is_empty());
    }
}
