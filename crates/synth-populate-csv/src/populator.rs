//! CSV populator for tabsynth datasets.

use crate::error::CsvPopulatorError;
use csv::{QuoteStyle, Writer, WriterBuilder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use synth_core::schema::Schema;
use synth_core::Value;
use synth_generator::{dataset_seed, DatasetGenerator};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// CSV populator that writes generated dataset columns to files.
pub struct CsvPopulator {
    schema: Schema,
    base_seed: u64,
    include_header: bool,
    quote_all: bool,
}

impl CsvPopulator {
    /// Create a new CSV populator.
    ///
    /// `base_seed` is mixed with each dataset's ordinal position, so every
    /// dataset in the schema gets an independent deterministic stream. A
    /// seed declared in the schema itself takes precedence.
    pub fn new(schema: Schema, base_seed: u64) -> Self {
        let base_seed = schema.seed.unwrap_or(base_seed);
        Self {
            schema,
            base_seed,
            include_header: true,
            quote_all: false,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Quote every field (used for address-style free text).
    pub fn with_quote_all(mut self, quote_all: bool) -> Self {
        self.quote_all = quote_all;
        self
    }

    /// Get a reference to the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Generate a CSV file for the named dataset.
    pub fn populate<P: AsRef<Path>>(
        &self,
        dataset_name: &str,
        output_path: P,
    ) -> Result<PopulateMetrics, CsvPopulatorError> {
        let (metrics, _) = self.run(dataset_name, output_path, false)?;
        Ok(metrics)
    }

    /// Generate a CSV file and also return the generated values.
    ///
    /// Used when the caller wants to summarize the column (distribution
    /// reports) without re-reading the file.
    pub fn populate_collect<P: AsRef<Path>>(
        &self,
        dataset_name: &str,
        output_path: P,
    ) -> Result<(PopulateMetrics, Vec<Value>), CsvPopulatorError> {
        self.run(dataset_name, output_path, true)
    }

    fn run<P: AsRef<Path>>(
        &self,
        dataset_name: &str,
        output_path: P,
        collect: bool,
    ) -> Result<(PopulateMetrics, Vec<Value>), CsvPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let (ordinal, dataset) = self
            .schema
            .get_dataset_indexed(dataset_name)
            .ok_or_else(|| CsvPopulatorError::DatasetNotFound(dataset_name.to_string()))?;
        let dataset = dataset.clone();

        let output_path = output_path.as_ref();
        info!(
            "Generating CSV file '{}' with {} rows for dataset '{}'",
            output_path.display(),
            dataset.rows,
            dataset_name
        );

        let gen_start = Instant::now();
        let seed = dataset_seed(self.base_seed, ordinal as u64);
        let mut generator = DatasetGenerator::new(dataset.clone(), seed)?;
        let mut generation_time = gen_start.elapsed();

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut writer = self.make_writer(buf_writer);

        let mut write_time = Duration::ZERO;

        if self.include_header {
            let write_start = Instant::now();
            writer.write_record([dataset.column.as_str()])?;
            write_time += write_start.elapsed();
        }

        let mut collected = Vec::with_capacity(if collect { dataset.rows as usize } else { 0 });

        loop {
            let gen_start = Instant::now();
            let value = match generator.next_value() {
                Some(value) => value,
                None => break,
            };
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            writer.write_record([value.to_field().as_str()])?;
            write_time += write_start.elapsed();

            if collect {
                collected.push(value);
            }

            metrics.rows_written += 1;
            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| CsvPopulatorError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok((metrics, collected))
    }

    /// Generate CSV files for every dataset in the schema.
    ///
    /// Each dataset goes to its declared output file (or `<name>.csv`)
    /// inside `output_dir`.
    pub fn populate_all<P: AsRef<Path>>(
        &self,
        output_dir: P,
    ) -> Result<Vec<(String, PopulateMetrics)>, CsvPopulatorError> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        let mut results = Vec::with_capacity(self.schema.datasets.len());
        for dataset in &self.schema.datasets {
            let path = output_dir.join(dataset.output_file());
            let metrics = self.populate(&dataset.name, &path)?;
            results.push((dataset.name.clone(), metrics));
        }
        Ok(results)
    }

    fn make_writer<W: std::io::Write>(&self, inner: W) -> Writer<W> {
        if self.quote_all {
            WriterBuilder::new()
                .quote_style(QuoteStyle::Always)
                .from_writer(inner)
        } else {
            Writer::from_writer(inner)
        }
    }
}
