// src/grading/normalize.rs — Score clamping

/// Clamp a raw grade into [0, 100] and round half away from zero.
/// NaN maps to 0.
pub fn normalize_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_negative() {
        assert_eq!(normalize_score(-5.0), 0);
    }

    #[test]
    fn test_clamps_above_range() {
        assert_eq!(normalize_score(150.0), 100);
    }

    #[test]
    fn test_rounds_to_nearest() {
        assert_eq!(normalize_score(74.6), 75);
        assert_eq!(normalize_score(74.4), 74);
        assert_eq!(normalize_score(74.5), 75);
    }

    #[test]
    fn test_non_finite_inputs() {
        assert_eq!(normalize_score(f64::NAN), 0);
        assert_eq!(normalize_score(f64::INFINITY), 100);
        assert_eq!(normalize_score(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_always_in_range() {
        for raw in [-1e9, -0.4, 0.0, 0.49, 33.3, 99.5, 100.0, 100.4, 1e12] {
            let n = normalize_score(raw);
            assert!(n <= 100, "{raw} -> {n}");
        }
    }
}
