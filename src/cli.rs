//! CLI wrapper: open the streams, run the filter, report the summary.
//!
//! The core is a pure stream transform; the command surface here is a thin
//! convenience. Default mode is a stdin→stdout pass-through filter (pipe
//! friendly, e.g. in front of a compressor in archive_command); --input and
//! --output switch either side to a file.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use crate::segment::filter_segment;

#[derive(Parser, Debug)]
#[command(
    name = "cleartail",
    version,
    about = "Zero the unused tail space of a WAL segment file (stdin -> stdout filter)"
)]
pub struct Cli {
    /// Read the segment from a file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Write the filtered segment to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut input: Box<dyn Read> = match &cli.input {
        Some(p) => Box::new(
            File::open(p).with_context(|| format!("input: open {}", p.display()))?,
        ),
        None => Box::new(io::stdin().lock()),
    };
    let mut output: Box<dyn Write> = match &cli.output {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("output: create {}", p.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let summary = filter_segment(&mut input, &mut output)?;

    if summary.pages_zeroed > 0 {
        info!(
            "cleared {} of {} pages ({} B tail)",
            summary.pages_zeroed,
            summary.pages_total,
            summary.pages_zeroed as u64 * summary.blcksz as u64
        );
    }
    Ok(())
}
