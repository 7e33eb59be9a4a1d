//! Length comparisons with a fixed millimetre tolerance
//!
//! Wall geometry is accumulated from user supplied floating point dimensions,
//! so equality and ordering between positions go through these helpers.

use crate::io::configuration::LENGTH_TOLERANCE;

/// Lengths equal within tolerance
pub const fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= LENGTH_TOLERANCE
}

/// `a <= b` allowing for tolerance
pub const fn approx_le(a: f64, b: f64) -> bool {
    a <= b + LENGTH_TOLERANCE
}

/// `a < b` by more than the tolerance
pub const fn definitely_lt(a: f64, b: f64) -> bool {
    a < b - LENGTH_TOLERANCE
}

/// Returns the nearest integer when `value` is integral within tolerance
pub fn as_whole(value: f64) -> Option<usize> {
    let rounded = value.round();
    (rounded >= 0.0 && approx_eq(value, rounded)).then_some(rounded as usize)
}

/// Number of whole `step`s that fit in `span`, tolerant of rounding just below a boundary
pub fn whole_steps(span: f64, step: f64) -> usize {
    if step <= 0.0 || span <= 0.0 {
        return 0;
    }
    ((span + LENGTH_TOLERANCE) / step).floor() as usize
}
