// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: pattern file in, synthesis artifact out.
//!
//! Reads a line-oriented pattern file, packs the patterns into the requested
//! number of lanes, prints the balance statistics, and writes either the
//! constant-table header or the pattern-to-id map.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::Env;

use lanepack::emit::{HeaderEmitter, MapEmitter, PlanEmitter};
use lanepack::{build_plan, input, stats, PackConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Constant-table C++ header for the synthesis flow.
    Header,
    /// Flat pattern-to-id map for the testbench.
    Map,
}

#[derive(Debug, Parser)]
#[command(
    name = "lanepack",
    about = "Pack match patterns into balanced hardware matcher lanes"
)]
struct Args {
    /// Pattern file, one pattern per non-empty line.
    input: PathBuf,

    /// Output artifact path.
    output: PathBuf,

    /// Number of matcher lanes in the target hardware.
    #[arg(short = 'n', long)]
    partitions: usize,

    /// Artifact to produce.
    #[arg(short, long, value_enum, default_value = "header")]
    format: Format,

    /// Maximum pattern bytes per lane.
    #[arg(long, default_value_t = 8191)]
    byte_limit: usize,

    /// Longest pattern handled by the short matcher variant.
    #[arg(long, default_value_t = 32)]
    short_max: usize,

    /// Longest pattern handled by the medium matcher variant.
    #[arg(long, default_value_t = 64)]
    medium_max: usize,

    /// Skip the per-partition statistics table.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    let config = PackConfig {
        hard_byte_limit: args.byte_limit,
        tier_threshold_a: args.short_max,
        tier_threshold_b: args.medium_max,
    };

    let patterns = input::read_patterns_file(&args.input)
        .with_context(|| format!("reading patterns from {}", args.input.display()))?;
    log::info!("read {} pattern lines from {}", patterns.len(), args.input.display());

    let plan = build_plan(patterns, args.partitions, &config)
        .context("packing patterns into partitions")?;

    if !args.quiet {
        print!("{}", stats::render_table(&plan));
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    let emitter: Box<dyn PlanEmitter> = match args.format {
        Format::Header => Box::new(HeaderEmitter),
        Format::Map => Box::new(MapEmitter),
    };
    emitter
        .emit(&plan, &mut writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("writing {}", args.output.display()))?;

    log::info!(
        "wrote {:?} artifact with {} patterns in {} partitions to {}",
        args.format,
        plan.total_patterns(),
        plan.len(),
        args.output.display()
    );
    Ok(())
}
