//! Display-identifier generation for bookings.
//!
//! Identifiers concatenate a prefix, the base-36 booking timestamp and a
//! short base-36 random suffix, all uppercased. They exist for humans to
//! read back over the phone; collision probability is not bounded, so
//! never reuse these where real uniqueness matters.

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random suffix characters in a generated identifier.
pub const RANDOM_SUFFIX_LEN: usize = 5;

/// Generate a display identifier from an explicit timestamp and random
/// source. Deterministic for fixed inputs, which is what makes it testable;
/// production callers use [`generate_id_now`].
pub fn generate_id<F>(prefix: &str, timestamp_millis: u64, mut random: F) -> String
where
    F: FnMut() -> f64,
{
    let suffix = fraction_base36(random(), RANDOM_SUFFIX_LEN);
    format!(
        "{}{}{}",
        prefix,
        encode_base36(timestamp_millis).to_uppercase(),
        suffix.to_uppercase()
    )
}

/// Generate a display identifier from the current wall clock and the
/// process random source.
pub fn generate_id_now(prefix: &str) -> String {
    let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
    generate_id(prefix, now, rand::random::<f64>)
}

/// Base-36 encoding of an unsigned integer, lowercase digits.
fn encode_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    // DIGITS only holds ASCII
    String::from_utf8(out).unwrap_or_default()
}

/// First `len` base-36 digits after the radix point of a fractional value.
fn fraction_base36(value: f64, len: usize) -> String {
    let mut fraction = value.abs().fract();
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        fraction *= 36.0;
        let digit = (fraction as usize).min(35);
        out.push(DIGITS[digit] as char);
        fraction -= digit as f64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_deterministic() {
        let a = generate_id("NE-", 1_700_000_000_000, || 0.123456);
        let b = generate_id("NE-", 1_700_000_000_000, || 0.123456);
        assert_eq!(a, b);
        assert_eq!(a, "NE-LOYW3V284FZYO");
    }

    #[test]
    fn test_generate_id_known_values() {
        assert_eq!(generate_id("NE-", 1_702_516_122_000, || 0.5), "NE-LQ4I5380I0000");
        assert_eq!(generate_id("", 0, || 0.0), "000000");
    }

    #[test]
    fn test_generate_id_differs_across_timestamps() {
        let first = generate_id("NE-", 1_700_000_000_000, || 0.25);
        let second = generate_id("NE-", 1_700_000_000_001, || 0.25);
        assert_ne!(first, second);
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id_now("NE-");
        assert!(id.starts_with("NE-"));
        assert!(id.len() > "NE-".len() + RANDOM_SUFFIX_LEN);
        assert!(id
            .chars()
            .skip(3)
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fraction_handles_out_of_range_input() {
        // a random source misbehaving with values >= 1 or < 0 still
        // produces five valid digits
        let id = generate_id("NE-", 1, || 1.5);
        assert_eq!(id.len(), "NE-".len() + 1 + RANDOM_SUFFIX_LEN);
        let id = generate_id("NE-", 1, || -0.5);
        assert_eq!(id.len(), "NE-".len() + 1 + RANDOM_SUFFIX_LEN);
    }
}
