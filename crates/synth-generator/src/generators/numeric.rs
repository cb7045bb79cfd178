//! Numeric value generators.

use rand::Rng;
use synth_core::Value;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> Value {
    Value::Int(rng.gen_range(min..=max))
}
