//! Dataset schema definitions (YAML).
//!
//! A schema file declares one or more datasets, each producing a
//! single-column CSV file from a tagged generator configuration:
//!
//! ```yaml
//! version: 1
//! seed: 42
//! datasets:
//!   - name: ages
//!     column: Age
//!     rows: 1000000
//!     output: ages_data.csv
//!     generator:
//!       type: bucketed_int
//!       buckets:
//!         - { lower: 0, upper: 17, percent: 25.0 }
//!         - { lower: 18, upper: 64, percent: 60.0 }
//!         - { lower: 65, upper: 100, percent: 15.0 }
//! ```
//!
//! Generator configurations are tagged enums rather than free-form strings,
//! so every accepted combination is enumerable and testable.

use crate::sampler::Bucket;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Dataset not found in schema
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),
}

/// A full dataset schema loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Schema format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Base seed for deterministic generation
    #[serde(default)]
    pub seed: Option<u64>,

    /// Dataset definitions
    pub datasets: Vec<DatasetDefinition>,
}

impl Schema {
    /// Parse a schema from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Look up a dataset definition by name.
    pub fn get_dataset(&self, name: &str) -> Option<&DatasetDefinition> {
        self.datasets.iter().find(|d| d.name == name)
    }

    /// Look up a dataset and its ordinal position in the schema.
    ///
    /// The ordinal feeds per-dataset seed derivation, so each dataset in a
    /// schema gets an independent RNG stream from the same base seed.
    pub fn get_dataset_indexed(&self, name: &str) -> Option<(usize, &DatasetDefinition)> {
        self.datasets
            .iter()
            .enumerate()
            .find(|(_, d)| d.name == name)
    }
}

/// A single dataset: one output CSV file with one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetDefinition {
    /// Dataset name (used to look it up and to derive the output filename)
    pub name: String,

    /// CSV header column name
    pub column: String,

    /// Number of rows to generate
    #[serde(default = "default_rows")]
    pub rows: u64,

    /// Output file path; defaults to "<name>.csv" in the output directory
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Generator configuration for the column
    pub generator: GeneratorConfig,
}

impl DatasetDefinition {
    /// Output filename for this dataset.
    pub fn output_file(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(format!("{}.csv", self.name)),
        }
    }
}

/// Generator configuration for a dataset column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Weighted bucket sampling with exact-count reconciliation
    BucketedInt {
        /// Ordered bucket list; percentages should sum to 100
        buckets: Vec<Bucket>,

        /// Shuffle the concatenated column before writing
        #[serde(default = "default_true")]
        shuffle: bool,
    },

    /// Random integers in a range (inclusive on both ends)
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Random selection from a fixed pool of strings
    OneOf {
        /// Pool of values to sample from
        values: Vec<String>,
    },

    /// Pattern strings with placeholders (`{index}`, `{rand:N}`)
    Pattern {
        /// Pattern string
        pattern: String,
    },

    /// Full person names drawn from locale-specific name pools
    FullName {
        /// Name locale
        #[serde(default)]
        locale: NameLocale,
    },

    /// Dates rendered through a random pick from a list of formats
    FormattedDate {
        /// First year to draw from (inclusive)
        #[serde(default = "default_start_year")]
        start_year: i32,

        /// Last year to draw from (inclusive)
        #[serde(default = "default_end_year")]
        end_year: i32,

        /// Formats to choose between, one per generated row
        formats: Vec<DateFormat>,
    },
}

/// Locale for name generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameLocale {
    /// English names
    #[default]
    En,
    /// Egyptian Arabic names (Arabic script)
    ArEg,
}

/// A date rendering format.
///
/// Each variant maps to a fixed chrono format string; the `Arabic*` variants
/// render through the `ar_EG` locale and Eastern Arabic digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// 2024-03-07
    Iso,
    /// 07/03/2024
    SlashDmy,
    /// 03/07/2024
    SlashMdy,
    /// 2024/03/07
    SlashYmd,
    /// 07-03-2024
    DashDmy,
    /// 03-07-2024
    DashMdy,
    /// 07.03.2024
    DotDmy,
    /// 07/03/24
    ShortSlashDmy,
    /// 03/07/24
    ShortSlashMdy,
    /// 24/03/07
    ShortSlashYmd,
    /// 07-03-24
    ShortDashDmy,
    /// 03-07-24
    ShortDashMdy,
    /// 24-03-07
    ShortDashYmd,
    /// 07.03.24
    ShortDotDmy,
    /// 03.07.24
    ShortDotMdy,
    /// 07 03 24
    ShortSpacedDmy,
    /// March 07, 2024
    MonthDayYear,
    /// 07 March 2024
    DayMonthYear,
    /// Mar 07, 2024
    AbbrevMonthDayYear,
    /// 07 Mar 2024
    DayAbbrevMonth,
    /// Thursday, March 07, 2024
    WeekdayMonthDayYear,
    /// Thu, Mar 07, 2024
    AbbrevWeekdayMonthDayYear,
    /// 2024 March 07
    YearMonthDay,
    /// 2024
    YearOnly,
    /// 03/2024
    MonthYear,
    /// Mar/2024
    AbbrevMonthYear,
    /// 07/03
    DayMonth,
    /// 07/Mar
    DayMonthAbbrev,
    /// ٠٧/٠٣/٢٠٢٤
    ArabicShort,
    /// ٧ مارس ٢٠٢٤ (abbreviated month)
    ArabicMedium,
    /// ٧ مارس ٢٠٢٤ (full month)
    ArabicLong,
    /// الخميس، ٧ مارس ٢٠٢٤
    ArabicFull,
}

impl DateFormat {
    /// Every supported format, in declaration order.
    pub fn all() -> &'static [DateFormat] {
        &[
            DateFormat::Iso,
            DateFormat::SlashDmy,
            DateFormat::SlashMdy,
            DateFormat::SlashYmd,
            DateFormat::DashDmy,
            DateFormat::DashMdy,
            DateFormat::DotDmy,
            DateFormat::ShortSlashDmy,
            DateFormat::ShortSlashMdy,
            DateFormat::ShortSlashYmd,
            DateFormat::ShortDashDmy,
            DateFormat::ShortDashMdy,
            DateFormat::ShortDashYmd,
            DateFormat::ShortDotDmy,
            DateFormat::ShortDotMdy,
            DateFormat::ShortSpacedDmy,
            DateFormat::MonthDayYear,
            DateFormat::DayMonthYear,
            DateFormat::AbbrevMonthDayYear,
            DateFormat::DayAbbrevMonth,
            DateFormat::WeekdayMonthDayYear,
            DateFormat::AbbrevWeekdayMonthDayYear,
            DateFormat::YearMonthDay,
            DateFormat::YearOnly,
            DateFormat::MonthYear,
            DateFormat::AbbrevMonthYear,
            DateFormat::DayMonth,
            DateFormat::DayMonthAbbrev,
            DateFormat::ArabicShort,
            DateFormat::ArabicMedium,
            DateFormat::ArabicLong,
            DateFormat::ArabicFull,
        ]
    }
}

fn default_version() -> u32 {
    1
}

fn default_rows() -> u64 {
    1_000_000
}

fn default_true() -> bool {
    true
}

fn default_start_year() -> i32 {
    1970
}

fn default_end_year() -> i32 {
    2030
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_schema() {
        let yaml = r#"
version: 1
seed: 42
datasets:
  - name: ages
    column: Age
    rows: 1000
    output: ages_data.csv
    generator:
      type: bucketed_int
      buckets:
        - { lower: 0, upper: 17, percent: 25.0, label: "minors" }
        - { lower: 18, upper: 100, percent: 75.0 }

  - name: names
    column: Name
    rows: 500
    generator:
      type: full_name
      locale: ar_eg

  - name: dates
    column: date
    generator:
      type: formatted_date
      formats: [iso, slash_dmy, arabic_full]
"#;
        let schema = Schema::from_yaml(yaml).unwrap();

        assert_eq!(schema.version, 1);
        assert_eq!(schema.seed, Some(42));
        assert_eq!(schema.datasets.len(), 3);

        let ages = schema.get_dataset("ages").unwrap();
        assert_eq!(ages.column, "Age");
        assert_eq!(ages.rows, 1000);
        assert_eq!(ages.output_file(), PathBuf::from("ages_data.csv"));
        if let GeneratorConfig::BucketedInt { buckets, shuffle } = &ages.generator {
            assert_eq!(buckets.len(), 2);
            assert!(*shuffle, "shuffle should default to true");
            assert_eq!(buckets[0].label.as_deref(), Some("minors"));
        } else {
            panic!("Expected bucketed_int generator");
        }

        let names = schema.get_dataset("names").unwrap();
        assert_eq!(
            names.generator,
            GeneratorConfig::FullName {
                locale: NameLocale::ArEg
            }
        );

        let dates = schema.get_dataset("dates").unwrap();
        // Defaults fill in the date range.
        assert_eq!(
            dates.generator,
            GeneratorConfig::FormattedDate {
                start_year: 1970,
                end_year: 2030,
                formats: vec![
                    DateFormat::Iso,
                    DateFormat::SlashDmy,
                    DateFormat::ArabicFull
                ],
            }
        );
    }

    #[test]
    fn test_default_rows_and_output() {
        let yaml = r#"
datasets:
  - name: sample
    column: value
    generator:
      type: int_range
      min: 0
      max: 10
"#;
        let schema = Schema::from_yaml(yaml).unwrap();
        let dataset = schema.get_dataset("sample").unwrap();

        assert_eq!(dataset.rows, 1_000_000);
        assert_eq!(dataset.output_file(), PathBuf::from("sample.csv"));
        assert_eq!(schema.seed, None);
    }

    #[test]
    fn test_unknown_generator_type_rejected() {
        let yaml = r#"
datasets:
  - name: bad
    column: value
    generator:
      type: quantum_noise
"#;
        assert!(matches!(
            Schema::from_yaml(yaml),
            Err(SchemaError::Yaml(_))
        ));
    }

    #[test]
    fn test_dataset_not_found() {
        let yaml = r#"
datasets:
  - name: sample
    column: value
    generator:
      type: int_range
      min: 0
      max: 10
"#;
        let schema = Schema::from_yaml(yaml).unwrap();
        assert!(schema.get_dataset("missing").is_none());
        assert_eq!(schema.get_dataset_indexed("sample").unwrap().0, 0);
    }

    #[test]
    fn test_schema_roundtrip() {
        let schema = Schema {
            version: 1,
            seed: Some(7),
            datasets: vec![DatasetDefinition {
                name: "ages".to_string(),
                column: "Age".to_string(),
                rows: 100,
                output: None,
                generator: GeneratorConfig::BucketedInt {
                    buckets: vec![Bucket::labeled(0, 100, 100.0, "all")],
                    shuffle: false,
                },
            }],
        };

        let yaml = serde_yaml::to_string(&schema).unwrap();
        let parsed = Schema::from_yaml(&yaml).unwrap();

        assert_eq!(parsed.datasets.len(), 1);
        assert_eq!(parsed.datasets[0].generator, schema.datasets[0].generator);
    }
}
