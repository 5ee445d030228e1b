use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sprayplan", version, about = "Crop spray schedule planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to regions.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List configured regions
    Regions,
    /// Validate the region catalog and its datasets
    Check,
    /// Compute the spray plan for a region
    Plan {
        /// Region to plan for
        #[arg(short, long)]
        region: String,

        /// Restrict to these crops (repeatable; default all)
        #[arg(long = "crop")]
        crops: Vec<String>,

        /// Restrict to these districts (repeatable; default all)
        #[arg(long = "district")]
        districts: Vec<String>,

        /// Restrict to these sowing months (repeatable; default all)
        #[arg(long = "month")]
        months: Vec<String>,

        /// Per-crop offset override, e.g. --offset "Paddy=3" (repeatable)
        #[arg(long = "offset")]
        offsets: Vec<String>,

        /// Offset applied to crops without an explicit override
        #[arg(long, default_value_t = 1)]
        default_offset: i64,

        /// Write the plan to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Append per-month and per-district summary counts
        #[arg(long)]
        summary: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Csv,
    Json,
}
