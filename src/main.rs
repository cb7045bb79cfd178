//! Command-line interface for tabsynth
//!
//! # Usage Examples
//!
//! ## Schema-driven generation
//! ```bash
//! # Generate every dataset declared in a schema file
//! tabsynth generate --schema datasets.yaml --output-dir out
//!
//! # Generate one dataset, overriding the seed
//! tabsynth generate --schema datasets.yaml --dataset ages --seed 7
//! ```
//!
//! ## Built-in presets
//! ```bash
//! # 1,000,000 ages following the reference distribution, with a summary
//! tabsynth ages --rows 1000000 --stats
//!
//! # Egyptian Arabic names
//! tabsynth names --rows 1000000 --output fake_names.csv
//!
//! # Mixed-format dates
//! tabsynth dates --rows 1000000
//! ```
//!
//! ## Address harvesting
//! ```bash
//! # Pull real addresses for an area from the Overpass API
//! tabsynth addresses --area Egypt --output addresses.csv
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use synth_core::presets;

mod commands;

#[derive(Parser)]
#[command(name = "tabsynth")]
#[command(about = "A tool for synthesizing fake tabular datasets as CSV files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the preset dataset subcommands.
#[derive(Args, Clone, Debug)]
struct PresetArgs {
    /// Number of rows to generate
    #[arg(long, default_value_t = presets::DEFAULT_ROWS)]
    rows: u64,

    /// Seed for deterministic generation
    #[arg(long, default_value_t = presets::DEFAULT_SEED)]
    seed: u64,

    /// Output CSV file (defaults to the preset's filename)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate datasets declared in a YAML schema file
    Generate {
        /// Schema file path
        #[arg(long)]
        schema: PathBuf,

        /// Generate only the named dataset instead of all of them
        #[arg(long)]
        dataset: Option<String>,

        /// Base seed (overridden by a seed declared in the schema)
        #[arg(long, default_value_t = presets::DEFAULT_SEED)]
        seed: u64,

        /// Directory for the output CSV files
        #[arg(long, short = 'o', default_value = ".")]
        output_dir: PathBuf,
    },

    /// Generate the ages preset (bucket-sampled age distribution)
    Ages {
        #[command(flatten)]
        preset: PresetArgs,

        /// Print a distribution summary after generation
        #[arg(long)]
        stats: bool,

        /// Keep the column in bucket order instead of shuffling
        #[arg(long)]
        no_shuffle: bool,
    },

    /// Generate the names preset (Egyptian Arabic full names)
    Names {
        #[command(flatten)]
        preset: PresetArgs,
    },

    /// Generate the dates preset (mixed-format random dates)
    Dates {
        #[command(flatten)]
        preset: PresetArgs,
    },

    /// Harvest real addresses for an area from the Overpass API
    Addresses {
        /// Area to search, matched by its English name
        #[arg(long, default_value = "Egypt")]
        area: String,

        /// Overpass API endpoint
        #[arg(long, default_value = synth_osm::DEFAULT_ENDPOINT, env = "OVERPASS_ENDPOINT")]
        endpoint: String,

        /// Server-side query timeout in seconds
        #[arg(long, default_value_t = synth_osm::DEFAULT_TIMEOUT_SECS)]
        timeout: u32,

        /// Output CSV file
        #[arg(long, short = 'o', default_value = "addresses.csv")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            dataset,
            seed,
            output_dir,
        } => commands::generate::run(&schema, dataset.as_deref(), seed, &output_dir),

        Commands::Ages {
            preset,
            stats,
            no_shuffle,
        } => commands::preset::run_ages(&preset.into_options(), stats, no_shuffle),

        Commands::Names { preset } => {
            commands::preset::run_named(presets::names_dataset(preset.rows), &preset.into_options())
        }

        Commands::Dates { preset } => {
            commands::preset::run_named(presets::dates_dataset(preset.rows), &preset.into_options())
        }

        Commands::Addresses {
            area,
            endpoint,
            timeout,
            output,
        } => commands::addresses::run(&area, &endpoint, timeout, &output).await,
    }
}

impl PresetArgs {
    fn into_options(self) -> commands::preset::PresetOptions {
        commands::preset::PresetOptions {
            rows: self.rows,
            seed: self.seed,
            output: self.output,
        }
    }
}
