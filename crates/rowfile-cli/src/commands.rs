use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info_span;

use rowfile_ingest::read_rows;
use rowfile_output::{UuidProvider, write_rows};

use crate::cli::ProcessArgs;

pub fn run_process(args: &ProcessArgs) -> Result<()> {
    let span = info_span!("process", input = %args.input.display());
    let _guard = span.enter();

    let rows = read_rows(&args.input).context("read input file")?;
    println!("Input: {}", args.input.display());
    println!("Rows kept: {}", rows.len());
    if args.dry_run {
        return Ok(());
    }

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let written = write_rows(&output_dir, &rows, &UuidProvider).context("write output file")?;
    println!("Output: {}", written.display());
    Ok(())
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
