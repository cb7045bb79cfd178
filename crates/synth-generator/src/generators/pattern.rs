//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - row index
//! - `{rand:N}` - random N-digit number

use rand::Rng;
use synth_core::Value;

/// Generate a string based on a pattern with placeholders.
pub fn generate_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> Value {
    let mut result = pattern.replace("{index}", &index.to_string());

    // Replace {rand:N} patterns
    while let Some(start) = result.find("{rand:") {
        if let Some(end) = result[start..].find('}') {
            let end = start + end;
            let digits_str = &result[start + 6..end];
            if let Ok(digits) = digits_str.parse::<usize>() {
                let random_num = generate_random_digits(rng, digits);
                result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
            } else {
                // Invalid format, leave it in place
                break;
            }
        } else {
            break;
        }
    }

    Value::Text(result)
}

/// Generate a random number with exactly N digits.
fn generate_random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // First digit is 1-9 to avoid leading zeros
    result.push(char::from_digit(rng.gen_range(1..10), 10).unwrap_or('1'));

    for _ in 1..digits {
        result.push(char::from_digit(rng.gen_range(0..10), 10).unwrap_or('0'));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_pattern_index() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("user_{index}@example.com", &mut rng, 123);

        assert_eq!(value, Value::Text("user_123@example.com".to_string()));
    }

    #[test]
    fn test_generate_pattern_random_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("code-{rand:6}", &mut rng, 0);

        if let Value::Text(s) = value {
            assert!(s.starts_with("code-"));
            assert_eq!(s.len(), 5 + 6);
            assert!(s[5..].chars().all(|c| c.is_ascii_digit()));
        } else {
            panic!("Expected Text value");
        }
    }

    #[test]
    fn test_generate_pattern_multiple_placeholders() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("row_{index}_code_{rand:4}", &mut rng, 42);

        if let Value::Text(s) = value {
            assert!(s.starts_with("row_42_code_"));
            assert_eq!(s.len(), 12 + 4);
        } else {
            panic!("Expected Text value");
        }
    }

    #[test]
    fn test_generate_pattern_no_placeholders() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("static text", &mut rng, 0);
        assert_eq!(value, Value::Text("static text".to_string()));
    }

    #[test]
    fn test_malformed_rand_placeholder_left_alone() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_pattern("bad-{rand:x}", &mut rng, 0);
        assert_eq!(value, Value::Text("bad-{rand:x}".to_string()));
    }
}
