//! Distribution summaries for generated columns.
//!
//! Re-buckets a generated column against its bucket configuration and
//! reports per-bucket counts alongside the targets, plus basic scalar
//! statistics. Doubles as the verification path for the sampler's
//! exact-count guarantee: the reported counts always equal the allocation.

use crate::sampler::Bucket;
use std::fmt;

/// Per-bucket statistics.
#[derive(Debug, Clone)]
pub struct BucketStat {
    /// Bucket display label
    pub label: String,
    /// Number of values that fell in this bucket
    pub count: u64,
    /// Actual share of the column, in percent
    pub actual_pct: f64,
    /// Target share, in percent
    pub target_pct: f64,
}

impl BucketStat {
    /// Difference between actual and target percentage.
    pub fn diff(&self) -> f64 {
        self.actual_pct - self.target_pct
    }
}

/// Summary of a generated column against its bucket configuration.
#[derive(Debug, Clone)]
pub struct DistributionReport {
    /// Total number of values
    pub total: u64,
    /// Per-bucket statistics, in bucket order
    pub buckets: Vec<BucketStat>,
    /// Mean value
    pub mean: f64,
    /// Median value
    pub median: f64,
    /// Minimum value
    pub min: i64,
    /// Maximum value
    pub max: i64,
}

impl DistributionReport {
    /// Build a report by classifying every value back into its bucket.
    pub fn from_values(buckets: &[Bucket], values: &[i64]) -> Self {
        let total = values.len() as u64;
        let counts = crate::sampler::rebucket(buckets, values);

        let stats = buckets
            .iter()
            .zip(counts.iter())
            .map(|(bucket, &count)| BucketStat {
                label: bucket.display_label(),
                count,
                actual_pct: if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
                target_pct: bucket.percent,
            })
            .collect();

        let (mean, median, min, max) = scalar_stats(values);

        Self {
            total,
            buckets: stats,
            mean,
            median,
            min,
            max,
        }
    }

    /// Per-bucket counts, in bucket order.
    pub fn counts(&self) -> Vec<u64> {
        self.buckets.iter().map(|s| s.count).collect()
    }
}

fn scalar_stats(values: &[i64]) -> (f64, f64, i64, i64) {
    if values.is_empty() {
        return (0.0, 0.0, 0, 0);
    }

    // Sum in i128 so columns of extreme i64 values cannot overflow.
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    let mean = sum as f64 / values.len() as f64;

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as i128 + sorted[mid] as i128) as f64 / 2.0
    } else {
        sorted[mid] as f64
    };

    (mean, median, sorted[0], sorted[sorted.len() - 1])
}

impl fmt::Display for DistributionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:-<60}", "")?;
        writeln!(f, "Total records: {}", self.total)?;
        writeln!(f, "{:-<60}", "")?;
        writeln!(
            f,
            "{:<10} {:<10} {:<10} {:<10} {:<8}",
            "Bucket", "Count", "Actual %", "Target %", "Diff"
        )?;
        writeln!(f, "{:-<60}", "")?;
        for stat in &self.buckets {
            writeln!(
                f,
                "{:<10} {:<10} {:<10.2} {:<10.1} {:<+8.2}",
                stat.label,
                stat.count,
                stat.actual_pct,
                stat.target_pct,
                stat.diff()
            )?;
        }
        writeln!(f, "{:-<60}", "")?;
        writeln!(f, "Mean:   {:.1}", self.mean)?;
        writeln!(f, "Median: {:.1}", self.median)?;
        writeln!(f, "Min:    {}", self.min)?;
        write!(f, "Max:    {}", self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::{self, Bucket};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn buckets() -> Vec<Bucket> {
        vec![
            Bucket::labeled(0, 4, 50.0, "0-4"),
            Bucket::labeled(5, 9, 50.0, "5-9"),
        ]
    }

    #[test]
    fn test_report_counts_match_allocation() {
        let buckets = buckets();
        let n = 1001u64;
        let counts = sampler::allocate(&buckets, n).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let values = sampler::sample(&buckets, n, true, &mut rng).unwrap();

        let report = DistributionReport::from_values(&buckets, &values);
        assert_eq!(report.total, n);
        assert_eq!(report.counts(), counts);
    }

    #[test]
    fn test_scalar_stats() {
        let buckets = buckets();
        let values = vec![1, 2, 3, 4, 5];

        let report = DistributionReport::from_values(&buckets, &values);
        assert_eq!(report.mean, 3.0);
        assert_eq!(report.median, 3.0);
        assert_eq!(report.min, 1);
        assert_eq!(report.max, 5);
    }

    #[test]
    fn test_even_length_median() {
        let buckets = buckets();
        let values = vec![4, 1, 3, 2];

        let report = DistributionReport::from_values(&buckets, &values);
        assert_eq!(report.median, 2.5);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let buckets = buckets();
        let values = vec![i64::MAX, i64::MAX, i64::MIN];

        let report = DistributionReport::from_values(&buckets, &values);
        assert_eq!(report.min, i64::MIN);
        assert_eq!(report.max, i64::MAX);
        assert_eq!(report.median, i64::MAX as f64);
        // (MAX + MAX + MIN) / 3 == (MAX - 1) / 3, well clear of any wrap.
        assert!(report.mean > 0.0);
        assert!(report.mean < i64::MAX as f64);
    }

    #[test]
    fn test_extreme_even_length_median() {
        let buckets = buckets();
        let values = vec![i64::MAX, i64::MAX];

        let report = DistributionReport::from_values(&buckets, &values);
        assert_eq!(report.median, i64::MAX as f64);
    }

    #[test]
    fn test_empty_column() {
        let report = DistributionReport::from_values(&buckets(), &[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.counts(), vec![0, 0]);
        assert_eq!(report.mean, 0.0);
    }

    #[test]
    fn test_display_contains_labels() {
        let buckets = buckets();
        let values = vec![0, 1, 5, 9];

        let rendered = DistributionReport::from_values(&buckets, &values).to_string();
        assert!(rendered.contains("0-4"));
        assert!(rendered.contains("5-9"));
        assert!(rendered.contains("Total records: 4"));
    }
}
