//! Built-in dataset definitions.
//!
//! These mirror the reference datasets the tool ships with: an age column
//! following a detailed population pyramid, Egyptian Arabic full names, and
//! dates rendered through a mix of numeric, spelled-out, and Arabic formats.

use crate::sampler::Bucket;
use crate::schema::{DatasetDefinition, DateFormat, GeneratorConfig, NameLocale, Schema};

/// Default base seed for preset schemas.
pub const DEFAULT_SEED: u64 = 42;

/// Default row count for preset datasets.
pub const DEFAULT_ROWS: u64 = 1_000_000;

/// The reference age distribution: 16 buckets summing to 100.0%.
///
/// The final bucket covers 75+ capped at 100.
pub fn age_buckets() -> Vec<Bucket> {
    vec![
        Bucket::labeled(0, 4, 11.3, "0-4"),
        Bucket::labeled(5, 9, 10.5, "5-9"),
        Bucket::labeled(10, 14, 9.4, "10-14"),
        Bucket::labeled(15, 19, 9.7, "15-19"),
        Bucket::labeled(20, 24, 10.3, "20-24"),
        Bucket::labeled(25, 29, 9.7, "25-29"),
        Bucket::labeled(30, 34, 7.8, "30-34"),
        Bucket::labeled(35, 39, 6.1, "35-39"),
        Bucket::labeled(40, 44, 5.5, "40-44"),
        Bucket::labeled(45, 49, 5.0, "45-49"),
        Bucket::labeled(50, 54, 4.4, "50-54"),
        Bucket::labeled(55, 59, 3.6, "55-59"),
        Bucket::labeled(60, 64, 2.6, "60-64"),
        Bucket::labeled(65, 69, 1.8, "65-69"),
        Bucket::labeled(70, 74, 1.2, "70-74"),
        Bucket::labeled(75, 100, 1.3, "75+"),
    ]
}

/// Date formats used by the dates preset.
pub fn date_formats() -> Vec<DateFormat> {
    DateFormat::all().to_vec()
}

/// Age dataset: bucket-sampled integer ages, shuffled.
pub fn ages_dataset(rows: u64) -> DatasetDefinition {
    DatasetDefinition {
        name: "ages".to_string(),
        column: "Age".to_string(),
        rows,
        output: Some("ages_data.csv".into()),
        generator: GeneratorConfig::BucketedInt {
            buckets: age_buckets(),
            shuffle: true,
        },
    }
}

/// Names dataset: Egyptian Arabic full names.
pub fn names_dataset(rows: u64) -> DatasetDefinition {
    DatasetDefinition {
        name: "names".to_string(),
        column: "Name".to_string(),
        rows,
        output: Some("fake_names.csv".into()),
        generator: GeneratorConfig::FullName {
            locale: NameLocale::ArEg,
        },
    }
}

/// Dates dataset: random dates across every supported format.
pub fn dates_dataset(rows: u64) -> DatasetDefinition {
    DatasetDefinition {
        name: "dates".to_string(),
        column: "date".to_string(),
        rows,
        output: Some("date_data.csv".into()),
        generator: GeneratorConfig::FormattedDate {
            start_year: 1970,
            end_year: 2030,
            formats: date_formats(),
        },
    }
}

/// Wrap a single preset dataset in a schema.
pub fn preset_schema(dataset: DatasetDefinition, seed: u64) -> Schema {
    Schema {
        version: 1,
        seed: Some(seed),
        datasets: vec![dataset],
    }
}
