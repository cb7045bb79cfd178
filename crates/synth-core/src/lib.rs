//! Core types for the tabsynth dataset generation framework.
//!
//! This crate provides the pieces shared by every dataset generator:
//!
//! - [`sampler`] - weighted bucket sampling with exact total-count
//!   reconciliation, the algorithm behind the age datasets
//! - [`schema`] - YAML dataset schemas with tagged generator configurations
//! - [`report`] - distribution summaries for generated columns
//! - [`presets`] - built-in dataset definitions (ages, names, dates)
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use synth_core::sampler::{self, Bucket};
//!
//! let buckets = vec![
//!     Bucket::new(0, 17, 25.0),
//!     Bucket::new(18, 64, 60.0),
//!     Bucket::new(65, 100, 15.0),
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let values = sampler::sample(&buckets, 1000, true, &mut rng).unwrap();
//! assert_eq!(values.len(), 1000);
//! ```

pub mod presets;
pub mod report;
pub mod sampler;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use report::DistributionReport;
pub use sampler::{Bucket, SamplerError};
pub use schema::{DatasetDefinition, DateFormat, GeneratorConfig, NameLocale, Schema, SchemaError};
pub use values::Value;
