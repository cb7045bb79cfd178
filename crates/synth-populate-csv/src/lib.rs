//! CSV file populator for tabsynth datasets.
//!
//! Writes a dataset's generated column to a CSV file, one value per row
//! under a single header column, and reports metrics about the run.
//!
//! # Example
//!
//! ```ignore
//! use synth_core::Schema;
//! use synth_populate_csv::CsvPopulator;
//!
//! let schema = Schema::from_file("datasets.yaml")?;
//! let populator = CsvPopulator::new(schema, 42);
//!
//! let metrics = populator.populate("ages", "ages_data.csv")?;
//! println!("wrote {} rows", metrics.rows_written);
//! ```

mod error;
mod populator;

pub use error::CsvPopulatorError;
pub use populator::{CsvPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
