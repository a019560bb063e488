/// Largest integer an f64 holds exactly (2^53).
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

/// Strict count coercion used by the validator.
///
/// Accepts digit strings and integer-valued floats ("150000", "150000.0",
/// "1.5e5"). Rejects blanks, text, negatives, fractions and non-finite values.
pub fn coerce_count(cell: &str) -> Option<u64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    if let Ok(n) = cell.parse::<u64>() {
        return Some(n);
    }

    let v: f64 = cell.parse().ok()?;
    if !v.is_finite() || v < 0.0 || v.fract() != 0.0 || v > MAX_EXACT_F64 {
        return None;
    }
    Some(v as u64)
}

/// Lenient coercion used by the calculator: fractions truncate, anything
/// unusable becomes 0.
pub fn coerce_count_or_zero(cell: &str) -> u64 {
    if let Some(n) = coerce_count(cell) {
        return n;
    }
    match cell.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_integer_like_values() {
        assert_eq!(coerce_count("150000"), Some(150_000));
        assert_eq!(coerce_count(" 42 "), Some(42));
        assert_eq!(coerce_count("150000.0"), Some(150_000));
        assert_eq!(coerce_count("1.5e5"), Some(150_000));
        assert_eq!(coerce_count("0"), Some(0));
    }

    #[test]
    fn test_rejects_unusable_values() {
        for cell in ["", "   ", "abc", "12abc", "-5", "12.5", "NaN", "inf", "1e300"] {
            assert_eq!(coerce_count(cell), None, "cell {cell:?}");
        }
    }

    #[test]
    fn test_lenient_fallback() {
        assert_eq!(coerce_count_or_zero("12.9"), 12);
        assert_eq!(coerce_count_or_zero("n/a"), 0);
        assert_eq!(coerce_count_or_zero("-3"), 0);
        assert_eq!(coerce_count_or_zero("900"), 900);
    }
}
