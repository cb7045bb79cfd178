//! Deterministic column value generators for tabsynth.
//!
//! This crate turns a [`DatasetDefinition`](synth_core::DatasetDefinition)
//! into a sequence of column values. The generator owns a seeded RNG, so the
//! same seed and definition always produce the same column.
//!
//! # Architecture
//!
//! ```text
//! DatasetDefinition (YAML)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ DatasetGenerator │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - index         │
//! │  - column plan   │
//! └────────┬─────────┘
//!          │
//!          ▼
//!     Value (Int | Text), one per row
//! ```
//!
//! Bucketed columns are materialized up front through the sampler, since the
//! exact-count guarantee is a whole-column property; every other generator
//! produces values row by row.
//!
//! # Example
//!
//! ```rust
//! use synth_core::{DatasetDefinition, GeneratorConfig};
//! use synth_generator::DatasetGenerator;
//!
//! let dataset = DatasetDefinition {
//!     name: "codes".to_string(),
//!     column: "code".to_string(),
//!     rows: 3,
//!     output: None,
//!     generator: GeneratorConfig::Pattern {
//!         pattern: "row-{index}".to_string(),
//!     },
//! };
//!
//! let mut generator = DatasetGenerator::new(dataset, 42).unwrap();
//! let values: Vec<String> = generator.values().map(|v| v.to_field()).collect();
//! assert_eq!(values, vec!["row-0", "row-1", "row-2"]);
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{dataset_seed, DatasetGenerator, GeneratorError, ValueIterator};
