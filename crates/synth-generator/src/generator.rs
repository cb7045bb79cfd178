//! Dataset generator producing deterministic column values.

use crate::generators::{date, name, numeric, pattern};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use synth_core::sampler::{self, SamplerError};
use synth_core::schema::{DatasetDefinition, DateFormat, GeneratorConfig, NameLocale};
use synth_core::Value;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Sampler rejected the bucket configuration
    #[error("Sampler error: {0}")]
    Sampler(#[from] SamplerError),

    /// Generator configuration cannot produce values
    #[error("Invalid generator config for dataset '{dataset}': {reason}")]
    InvalidConfig { dataset: String, reason: String },
}

/// Derive a per-dataset seed from a base seed and the dataset's ordinal.
///
/// Golden-ratio mixing keeps the streams independent: reordering unrelated
/// datasets in a schema does not disturb a dataset's own column as long as
/// its ordinal is unchanged.
pub fn dataset_seed(base: u64, ordinal: u64) -> u64 {
    base.wrapping_add(ordinal.wrapping_mul(0x9E3779B97F4A7C15))
}

/// How a column's values get produced.
enum ColumnPlan {
    /// Whole column materialized up front (bucketed sampling)
    Materialized(Vec<i64>),
    /// Random integers in an inclusive range
    IntRange { min: i64, max: i64 },
    /// Random pick from a fixed pool
    OneOf { values: Vec<String> },
    /// Pattern string with placeholders
    Pattern { pattern: String },
    /// Full names from locale pools
    FullName { locale: NameLocale },
    /// Random date rendered through a random format
    FormattedDate {
        start_year: i32,
        end_year: i32,
        formats: Vec<DateFormat>,
    },
}

/// Generator that produces deterministic values for one dataset column.
///
/// Uses a seeded RNG so results are reproducible across runs with the same
/// seed and definition.
pub struct DatasetGenerator {
    /// Dataset being generated
    dataset: DatasetDefinition,
    /// Seeded random number generator
    rng: StdRng,
    /// Current row index
    index: u64,
    /// Column production plan derived from the generator config
    plan: ColumnPlan,
}

impl DatasetGenerator {
    /// Create a new generator for the given dataset and seed.
    ///
    /// Bucketed columns are sampled in full here; the sampler's errors
    /// surface at construction rather than mid-column.
    pub fn new(dataset: DatasetDefinition, seed: u64) -> Result<Self, GeneratorError> {
        let mut rng = StdRng::seed_from_u64(seed);

        let plan = match &dataset.generator {
            GeneratorConfig::BucketedInt { buckets, shuffle } => {
                let column = sampler::sample(buckets, dataset.rows, *shuffle, &mut rng)?;
                ColumnPlan::Materialized(column)
            }
            GeneratorConfig::IntRange { min, max } => {
                if min > max {
                    return Err(GeneratorError::InvalidConfig {
                        dataset: dataset.name.clone(),
                        reason: format!("int_range min {min} exceeds max {max}"),
                    });
                }
                ColumnPlan::IntRange {
                    min: *min,
                    max: *max,
                }
            }
            GeneratorConfig::OneOf { values } => {
                if values.is_empty() {
                    return Err(GeneratorError::InvalidConfig {
                        dataset: dataset.name.clone(),
                        reason: "one_of pool is empty".to_string(),
                    });
                }
                ColumnPlan::OneOf {
                    values: values.clone(),
                }
            }
            GeneratorConfig::Pattern { pattern } => ColumnPlan::Pattern {
                pattern: pattern.clone(),
            },
            GeneratorConfig::FullName { locale } => ColumnPlan::FullName { locale: *locale },
            GeneratorConfig::FormattedDate {
                start_year,
                end_year,
                formats,
            } => {
                if start_year > end_year {
                    return Err(GeneratorError::InvalidConfig {
                        dataset: dataset.name.clone(),
                        reason: format!(
                            "formatted_date start_year {start_year} exceeds end_year {end_year}"
                        ),
                    });
                }
                if formats.is_empty() {
                    return Err(GeneratorError::InvalidConfig {
                        dataset: dataset.name.clone(),
                        reason: "formatted_date needs at least one format".to_string(),
                    });
                }
                ColumnPlan::FormattedDate {
                    start_year: *start_year,
                    end_year: *end_year,
                    formats: formats.clone(),
                }
            }
        };

        Ok(Self {
            dataset,
            rng,
            index: 0,
            plan,
        })
    }

    /// The dataset this generator was built from.
    pub fn dataset(&self) -> &DatasetDefinition {
        &self.dataset
    }

    /// Current row index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Number of rows this generator will produce in total.
    pub fn rows(&self) -> u64 {
        self.dataset.rows
    }

    /// Generate the next value, or `None` once the row count is reached.
    pub fn next_value(&mut self) -> Option<Value> {
        if self.index >= self.dataset.rows {
            return None;
        }

        let index = self.index;
        self.index += 1;

        let value = match &self.plan {
            ColumnPlan::Materialized(column) => Value::Int(column[index as usize]),
            ColumnPlan::IntRange { min, max } => {
                numeric::generate_int_range(&mut self.rng, *min, *max)
            }
            ColumnPlan::OneOf { values } => {
                let pick = self.rng.gen_range(0..values.len());
                Value::Text(values[pick].clone())
            }
            ColumnPlan::Pattern { pattern } => {
                pattern::generate_pattern(pattern, &mut self.rng, index)
            }
            ColumnPlan::FullName { locale } => name::generate_full_name(&mut self.rng, *locale),
            ColumnPlan::FormattedDate {
                start_year,
                end_year,
                formats,
            } => date::generate_formatted_date(&mut self.rng, *start_year, *end_year, formats),
        };

        Some(value)
    }

    /// Iterate over the remaining values.
    pub fn values(&mut self) -> ValueIterator<'_> {
        ValueIterator { generator: self }
    }
}

/// Iterator that lazily generates the remaining column values.
pub struct ValueIterator<'a> {
    generator: &'a mut DatasetGenerator,
}

impl Iterator for ValueIterator<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        self.generator.next_value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.generator.rows() - self.generator.current_index()) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ValueIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use synth_core::presets::age_buckets;
    use synth_core::sampler::{rebucket, Bucket};

    fn dataset(generator: GeneratorConfig, rows: u64) -> DatasetDefinition {
        DatasetDefinition {
            name: "test".to_string(),
            column: "value".to_string(),
            rows,
            output: None,
            generator,
        }
    }

    #[test]
    fn test_bucketed_column_matches_allocation() {
        let buckets = age_buckets();
        let counts = sampler::allocate(&buckets, 10_000).unwrap();

        let mut generator = DatasetGenerator::new(
            dataset(
                GeneratorConfig::BucketedInt {
                    buckets: buckets.clone(),
                    shuffle: true,
                },
                10_000,
            ),
            42,
        )
        .unwrap();

        let values: Vec<i64> = generator.values().filter_map(|v| v.as_int()).collect();
        assert_eq!(values.len(), 10_000);
        assert_eq!(rebucket(&buckets, &values), counts);
    }

    #[test]
    fn test_deterministic_generation() {
        let config = GeneratorConfig::BucketedInt {
            buckets: vec![Bucket::new(0, 100, 100.0)],
            shuffle: true,
        };

        let mut gen1 = DatasetGenerator::new(dataset(config.clone(), 100), 42).unwrap();
        let mut gen2 = DatasetGenerator::new(dataset(config, 100), 42).unwrap();

        let values1: Vec<Value> = gen1.values().collect();
        let values2: Vec<Value> = gen2.values().collect();
        assert_eq!(values1, values2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let config = GeneratorConfig::IntRange { min: 0, max: 1000 };

        let mut gen1 = DatasetGenerator::new(dataset(config.clone(), 50), 1).unwrap();
        let mut gen2 = DatasetGenerator::new(dataset(config, 50), 2).unwrap();

        let values1: Vec<Value> = gen1.values().collect();
        let values2: Vec<Value> = gen2.values().collect();
        assert_ne!(values1, values2);
    }

    #[test]
    fn test_int_range_inclusive() {
        let mut generator =
            DatasetGenerator::new(dataset(GeneratorConfig::IntRange { min: 3, max: 5 }, 1000), 42)
                .unwrap();

        let values: Vec<i64> = generator.values().filter_map(|v| v.as_int()).collect();
        assert!(values.iter().all(|&v| (3..=5).contains(&v)));
        assert!(values.contains(&3));
        assert!(values.contains(&5));
    }

    #[test]
    fn test_one_of() {
        let pool = vec!["red".to_string(), "green".to_string(), "blue".to_string()];
        let mut generator = DatasetGenerator::new(
            dataset(GeneratorConfig::OneOf { values: pool.clone() }, 100),
            42,
        )
        .unwrap();

        for value in generator.values() {
            assert!(pool.contains(&value.to_field()));
        }
    }

    #[test]
    fn test_one_of_empty_pool_rejected() {
        let result = DatasetGenerator::new(
            dataset(GeneratorConfig::OneOf { values: vec![] }, 10),
            42,
        );
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_invalid_int_range_rejected() {
        let result = DatasetGenerator::new(
            dataset(GeneratorConfig::IntRange { min: 10, max: 5 }, 10),
            42,
        );
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_sampler_error_propagates() {
        let result = DatasetGenerator::new(
            dataset(
                GeneratorConfig::BucketedInt {
                    buckets: vec![Bucket::new(0, 10, -1.0)],
                    shuffle: false,
                },
                10,
            ),
            42,
        );
        assert!(matches!(result, Err(GeneratorError::Sampler(_))));
    }

    #[test]
    fn test_exhaustion() {
        let mut generator =
            DatasetGenerator::new(dataset(GeneratorConfig::IntRange { min: 0, max: 9 }, 3), 42)
                .unwrap();

        assert_eq!(generator.values().count(), 3);
        assert!(generator.next_value().is_none());
        assert_eq!(generator.current_index(), 3);
    }

    #[test]
    fn test_zero_rows() {
        let mut generator = DatasetGenerator::new(
            dataset(
                GeneratorConfig::BucketedInt {
                    buckets: vec![Bucket::new(0, 10, 100.0)],
                    shuffle: true,
                },
                0,
            ),
            42,
        )
        .unwrap();

        assert!(generator.next_value().is_none());
    }

    #[test]
    fn test_dataset_seed_mixing() {
        assert_eq!(dataset_seed(42, 0), 42);
        assert_ne!(dataset_seed(42, 1), dataset_seed(42, 2));
        assert_ne!(dataset_seed(1, 1), dataset_seed(2, 1));
    }
}
