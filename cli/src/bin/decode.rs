//! decode: expand stdin (or `-i`) into stdout (or `-o`).

use anyhow::Context;
use clap::Parser;
use lzdict_cli::{init_tracing, report, Args};
use lzdict_core::decompress_after_header;
use lzdict_core::io::{apply_protection, open_input, open_output, read_header};
use lzdict_core::telemetry::TelemetryTimer;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = args.config()?;
    let timer = TelemetryTimer::new();

    let mut input = open_input(args.source()).context("opening input")?;
    // The output is only created once the header checks out.
    let header = read_header(&mut input).context("bad input")?;

    let sink = args.sink();
    let out_path = sink.path().map(|p| p.to_path_buf());
    let output = open_output(sink).context("opening output")?;
    if let Some(path) = &out_path {
        apply_protection(path, &header)
            .with_context(|| format!("setting permissions on {}", path.display()))?;
    }

    let snap = decompress_after_header(input, output, &config, timer).context("decompression failed")?;
    info!(
        bytes_in = snap.bytes_compressed,
        bytes_out = snap.bytes_uncompressed,
        resets = snap.resets,
        throughput = snap.throughput_bytes_per_sec(),
        "decode finished"
    );

    if args.wants_stats() {
        report(&mut std::io::stderr().lock(), &args, &snap)?;
    }
    Ok(())
}
