//! Weighted bucket sampling with exact total-count reconciliation.
//!
//! Given a list of buckets with target percentages and a total row count `n`,
//! the sampler allocates an integer sample count per bucket that sums to `n`
//! exactly, then draws each bucket's values uniformly within its bounds.
//! The rounding remainder left by the floor pass is absorbed entirely by a
//! single adjustment bucket, the one with the largest target percentage.
//!
//! All draws come from a caller-provided RNG, so results are reproducible
//! bit-for-bit for a fixed seed and inputs.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Error type for sampler operations.
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    /// Malformed bucket configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Remainder correction would drive a bucket count negative
    #[error(
        "Allocation failed: removing {excess} samples from bucket {bucket} (count {count}) would make it negative"
    )]
    AllocationError {
        bucket: usize,
        count: u64,
        excess: u64,
    },

    /// Bucket bounds are inverted
    #[error("Invalid range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange { lower: i64, upper: i64 },
}

/// A labeled numeric range with an associated target percentage.
///
/// Bounds are inclusive on both ends. Percentages across a bucket list are
/// expected to sum to 100, though this is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Lower bound (inclusive)
    pub lower: i64,

    /// Upper bound (inclusive)
    pub upper: i64,

    /// Target percentage in (0, 100]
    pub percent: f64,

    /// Optional display label, e.g. "75+"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Bucket {
    /// Create a new bucket without a label.
    pub fn new(lower: i64, upper: i64, percent: f64) -> Self {
        Self {
            lower,
            upper,
            percent,
            label: None,
        }
    }

    /// Create a new bucket with a display label.
    pub fn labeled(lower: i64, upper: i64, percent: f64, label: impl Into<String>) -> Self {
        Self {
            lower,
            upper,
            percent,
            label: Some(label.into()),
        }
    }

    /// Whether a value falls within this bucket (inclusive on both ends).
    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value <= self.upper
    }

    /// Display label, falling back to "lower-upper".
    pub fn display_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("{}-{}", self.lower, self.upper),
        }
    }
}

/// Index of the bucket that absorbs the rounding remainder.
///
/// This is the largest-percentage bucket, first one on ties.
fn adjustment_bucket(buckets: &[Bucket]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, bucket) in buckets.iter().enumerate() {
        match best {
            Some(j) if buckets[j].percent >= bucket.percent => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Compute per-bucket sample counts that sum to `n` exactly.
///
/// The first pass floors `percent / 100 * n` per bucket; the remainder is
/// then applied entirely to the adjustment bucket, by addition when the
/// floor pass undershot and by subtraction when it overshot.
///
/// # Errors
///
/// - [`SamplerError::InvalidInput`] if any percentage is outside (0, 100],
///   or if the bucket list is empty while `n > 0`
/// - [`SamplerError::AllocationError`] if subtracting the excess would drive
///   the adjustment bucket's count negative
pub fn allocate(buckets: &[Bucket], n: u64) -> Result<Vec<u64>, SamplerError> {
    for (i, bucket) in buckets.iter().enumerate() {
        if !(bucket.percent > 0.0 && bucket.percent <= 100.0) {
            return Err(SamplerError::InvalidInput(format!(
                "bucket {} has percentage {} outside (0, 100]",
                i, bucket.percent
            )));
        }
    }

    let mut counts: Vec<u64> = buckets
        .iter()
        .map(|bucket| (bucket.percent / 100.0 * n as f64) as u64)
        .collect();

    let total: u64 = counts.iter().sum();
    if total == n {
        return Ok(counts);
    }

    let adjust = adjustment_bucket(buckets).ok_or_else(|| {
        SamplerError::InvalidInput("bucket list is empty but n > 0".to_string())
    })?;

    if total < n {
        counts[adjust] += n - total;
    } else {
        let excess = total - n;
        if counts[adjust] < excess {
            return Err(SamplerError::AllocationError {
                bucket: adjust,
                count: counts[adjust],
                excess,
            });
        }
        counts[adjust] -= excess;
    }

    Ok(counts)
}

/// Draw `count` independent uniform values from a bucket's range.
///
/// Both bounds are inclusive, so `lower` and `upper` themselves are valid
/// outputs. Consumes exactly `count` draws from the RNG.
///
/// # Errors
///
/// [`SamplerError::InvalidRange`] if `lower > upper`.
pub fn draw_bucket_values<R: Rng + ?Sized>(
    bucket: &Bucket,
    count: u64,
    rng: &mut R,
) -> Result<Vec<i64>, SamplerError> {
    if bucket.lower > bucket.upper {
        return Err(SamplerError::InvalidRange {
            lower: bucket.lower,
            upper: bucket.upper,
        });
    }

    Ok((0..count)
        .map(|_| rng.gen_range(bucket.lower..=bucket.upper))
        .collect())
}

/// Produce exactly `n` values following the bucket distribution.
///
/// Composes [`allocate`] and [`draw_bucket_values`] per bucket in order,
/// concatenates the results, and optionally shuffles them with a uniform
/// permutation. Re-bucketing the output always reproduces the allocation.
pub fn sample<R: Rng + ?Sized>(
    buckets: &[Bucket],
    n: u64,
    shuffle: bool,
    rng: &mut R,
) -> Result<Vec<i64>, SamplerError> {
    let counts = allocate(buckets, n)?;

    let mut values = Vec::with_capacity(n as usize);
    for (bucket, &count) in buckets.iter().zip(counts.iter()) {
        values.extend(draw_bucket_values(bucket, count, rng)?);
    }

    if shuffle {
        values.shuffle(rng);
    }

    Ok(values)
}

/// Classify values back into buckets and count them.
///
/// Values not covered by any bucket are ignored. Used by reports and by
/// tests to verify that sampling reproduces the allocation exactly.
pub fn rebucket(buckets: &[Bucket], values: &[i64]) -> Vec<u64> {
    let mut counts = vec![0u64; buckets.len()];
    for &value in values {
        if let Some(i) = buckets.iter().position(|b| b.contains(value)) {
            counts[i] += 1;
        }
    }
    counts
}
