//! Preset dataset command handlers (ages, names, dates).

use anyhow::Context;
use std::path::PathBuf;
use synth_core::presets;
use synth_core::schema::{DatasetDefinition, GeneratorConfig};
use synth_core::DistributionReport;
use synth_populate_csv::CsvPopulator;

/// Resolved options for a preset run.
#[derive(Debug, Clone)]
pub struct PresetOptions {
    /// Number of rows to generate
    pub rows: u64,
    /// Seed for deterministic generation
    pub seed: u64,
    /// Output file override
    pub output: Option<PathBuf>,
}

/// Run the ages preset, optionally printing a distribution summary.
pub fn run_ages(options: &PresetOptions, stats: bool, no_shuffle: bool) -> anyhow::Result<()> {
    let mut dataset = presets::ages_dataset(options.rows);
    if no_shuffle {
        if let GeneratorConfig::BucketedInt { shuffle, .. } = &mut dataset.generator {
            *shuffle = false;
        }
    }

    let buckets = presets::age_buckets();
    let schema = presets::preset_schema(dataset.clone(), options.seed);
    let output = output_path(options, &dataset);

    let populator = CsvPopulator::new(schema, options.seed);

    if stats {
        let (metrics, values) = populator
            .populate_collect(&dataset.name, &output)
            .with_context(|| format!("Failed to populate {}", output.display()))?;

        let ages: Vec<i64> = values.iter().filter_map(|v| v.as_int()).collect();
        let report = DistributionReport::from_values(&buckets, &ages);
        println!("{report}");

        tracing::info!("Wrote {} age records to {}", metrics.rows_written, output.display());
    } else {
        let metrics = populator
            .populate(&dataset.name, &output)
            .with_context(|| format!("Failed to populate {}", output.display()))?;
        tracing::info!("Wrote {} age records to {}", metrics.rows_written, output.display());
    }

    Ok(())
}

/// Run a preset dataset (names, dates) straight through the populator.
pub fn run_named(dataset: DatasetDefinition, options: &PresetOptions) -> anyhow::Result<()> {
    let schema = presets::preset_schema(dataset.clone(), options.seed);
    let output = output_path(options, &dataset);

    let populator = CsvPopulator::new(schema, options.seed);
    let metrics = populator
        .populate(&dataset.name, &output)
        .with_context(|| format!("Failed to populate {}", output.display()))?;

    tracing::info!(
        "Wrote {} '{}' records to {}",
        metrics.rows_written,
        dataset.name,
        output.display()
    );

    Ok(())
}

fn output_path(options: &PresetOptions, dataset: &DatasetDefinition) -> PathBuf {
    options
        .output
        .clone()
        .unwrap_or_else(|| dataset.output_file())
}
