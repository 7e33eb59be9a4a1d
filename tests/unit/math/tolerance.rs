//! Tests for tolerant length comparisons

#[cfg(test)]
mod tests {
    use brickbond::math::tolerance::{approx_eq, approx_le, as_whole, definitely_lt, whole_steps};

    // Tests equality absorbs accumulated rounding error
    // Verified by comparing with exact equality
    #[test]
    fn test_approx_eq_absorbs_rounding() {
        let accumulated = (0..10).fold(0.0, |x, _| x + 0.1);
        assert!(approx_eq(accumulated, 1.0));
        assert!(!approx_eq(1.0, 1.001));
    }

    // Tests ordering helpers agree at the tolerance boundary
    // Verified by dropping the tolerance from approx_le
    #[test]
    fn test_ordering_at_boundary() {
        assert!(approx_le(2300.000_000_1, 2300.0));
        assert!(!definitely_lt(2299.999_999_9, 2300.0));
        assert!(definitely_lt(2299.9, 2300.0));
        assert!(!approx_le(2300.1, 2300.0));
    }

    // Tests integrality detection
    // Verified by rounding every value unconditionally
    #[test]
    fn test_as_whole() {
        assert_eq!(as_whole(10.000_000_000_1), Some(10));
        assert_eq!(as_whole(32.0), Some(32));
        assert_eq!(as_whole(10.5), None);
        assert_eq!(as_whole(-1.0), None);
    }

    // Tests step counting just below a boundary
    // Verified by removing tolerance from the division
    #[test]
    fn test_whole_steps() {
        assert_eq!(whole_steps(659.999_999_9, 220.0), 3);
        assert_eq!(whole_steps(800.0, 220.0), 3);
        assert_eq!(whole_steps(500.0, 62.5), 8);
        assert_eq!(whole_steps(100.0, 0.0), 0);
        assert_eq!(whole_steps(-5.0, 10.0), 0);
    }
}
