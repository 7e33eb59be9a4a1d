//! Mathematical utilities for wall geometry

/// Tolerant length comparisons and integrality checks
pub mod tolerance;
