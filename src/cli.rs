use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Texture removal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Replace the first path whose fill matches the target color exactly
    #[default]
    Regex,
    /// Split on `<path` and filter segments by length and fill color
    Segment,
}

#[derive(Parser, Debug)]
#[command(name = "grunge-strip")]
#[command(author, version, about = "Strip oversized decorative texture paths from SVG logos")]
#[command(long_about = "Removes a large decorative vector path from an SVG logo by matching \
    its fill color and substituting a fixed-size rectangle.\n\n\
    Exit codes:\n  \
    0 - Transformation completed (including no-op when nothing matched)\n  \
    2 - Runtime error (unreadable input, unwritable output)")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Strip the grunge texture and write the cleaned document
    Strip(StripArgs),

    /// Classify path segments under the filter heuristic without writing
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct StripArgs {
    /// Input SVG file
    #[arg(default_value = "Logo_optimized.svg")]
    pub input: PathBuf,

    /// Output SVG file (overwritten if present)
    #[arg(short, long, default_value = "Logo_clean.svg")]
    pub output: PathBuf,

    /// Texture removal strategy
    #[arg(long, value_enum, default_value = "regex")]
    pub strategy: Strategy,

    /// Report format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Input SVG file
    #[arg(default_value = "Logo_optimized.svg")]
    pub input: PathBuf,

    /// Report format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
