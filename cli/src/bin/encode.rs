//! encode: compress stdin (or `-i`) into stdout (or `-o`).

use anyhow::Context;
use clap::Parser;
use lzdict_cli::{init_tracing, report, Args};
use lzdict_core::headers::FileHeader;
use lzdict_core::io::{apply_protection, open_input, open_output, source_protection};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = args.config()?;

    let source = args.source();
    let header = FileHeader::new(source_protection(&source).context("reading input permissions")?);
    let input = open_input(source).context("opening input")?;

    let sink = args.sink();
    let out_path = sink.path().map(|p| p.to_path_buf());
    let output = open_output(sink).context("opening output")?;
    if let Some(path) = &out_path {
        apply_protection(path, &header)
            .with_context(|| format!("setting permissions on {}", path.display()))?;
    }

    let snap = lzdict_core::compress(input, output, &header, &config).context("compression failed")?;
    info!(
        bytes_in = snap.bytes_uncompressed,
        bytes_out = snap.bytes_compressed,
        resets = snap.resets,
        throughput = snap.throughput_bytes_per_sec(),
        "encode finished"
    );

    if args.wants_stats() {
        report(&mut std::io::stderr().lock(), &args, &snap)?;
    }
    Ok(())
}
