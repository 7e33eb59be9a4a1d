//! Wild bond course generation with repeating-pattern avoidance
//!
//! Each course is filled left to right with a random mix of full and half
//! bricks. Before a choice is committed, the joints beneath its right edge are
//! traced downward; a choice that would extend a staircase or "falling teeth"
//! joint pattern across [`WILD_PATTERN_LIMIT`] courses is swapped for the
//! alternative.

use rand::Rng;

use crate::algorithm::layout::unit;
use crate::io::configuration::{
    WILD_MAX_CONSECUTIVE_FULL, WILD_MAX_CONSECUTIVE_HALF, WILD_PATTERN_LIMIT,
    WILD_PATTERN_LOOKAHEAD,
};
use crate::io::error::{Result, WallError};
use crate::math::tolerance::{approx_eq, approx_le, definitely_lt};
use crate::spatial::brick::{Brick, BrickKind};
use crate::spatial::tiling::Tiling;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Full,
    Half,
}

impl Unit {
    const fn other(self) -> Self {
        match self {
            Self::Full => Self::Half,
            Self::Half => Self::Full,
        }
    }
}

/// Wild bond row generator
pub struct WildBond<'r, R: Rng> {
    rng: &'r mut R,
    limit: usize,
    lookahead: usize,
}

impl<'r, R: Rng> WildBond<'r, R> {
    /// Create a generator with the default pattern limits
    pub fn new(rng: &'r mut R) -> Self {
        Self {
            rng,
            limit: WILD_PATTERN_LIMIT,
            lookahead: WILD_PATTERN_LOOKAHEAD,
        }
    }

    /// Generate one course above the courses already in `tiling`
    ///
    /// Courses with an even index start with a quarter closer. Remaining
    /// space of exactly a quarter, a half, or a half plus a quarter is closed
    /// without a random draw.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::LayoutExhausted`] if neither a full nor a half
    /// brick fits the remaining space.
    pub fn generate_row(&mut self, course: usize, tiling: &Tiling) -> Result<Vec<Brick>> {
        let spec = tiling.spec();
        let width = spec.width();
        let head_joint = spec.head_joint();
        let full = spec.brick_length();
        let half = spec.half_length();
        let quarter = spec.quarter_length();
        // The guard needs `limit` laid courses to compare against
        let guarded = course + self.limit < spec.courses();

        let mut row = Vec::new();
        let mut x = 0.0;
        if course % 2 == 0 {
            row.push(unit(spec, course, x, quarter, BrickKind::Quarter));
            x += quarter + head_joint;
        }

        let mut consecutive_full = 0;
        let mut consecutive_half = 0;

        while definitely_lt(x, width) {
            let remaining = width - x;

            if approx_eq(remaining, quarter) {
                row.push(unit(spec, course, x, quarter, BrickKind::Quarter));
                break;
            }
            if approx_eq(remaining, half) {
                row.push(unit(spec, course, x, half, BrickKind::Half));
                break;
            }
            if approx_eq(remaining, half + head_joint + quarter) {
                row.push(unit(spec, course, x, half, BrickKind::Half));
                row.push(unit(spec, course, x + half + head_joint, quarter, BrickKind::Quarter));
                break;
            }

            let full_fits = consecutive_full < WILD_MAX_CONSECUTIVE_FULL && approx_le(full, remaining);
            let half_fits = consecutive_half < WILD_MAX_CONSECUTIVE_HALF && approx_le(half, remaining);
            let choice = match (full_fits, half_fits) {
                (true, true) => {
                    let drawn = if self.rng.random_bool(0.5) {
                        Unit::Full
                    } else {
                        Unit::Half
                    };
                    let length = if drawn == Unit::Full { full } else { half };
                    if guarded
                        && repeats_pattern(tiling, course, x + length, self.limit, self.lookahead)
                    {
                        drawn.other()
                    } else {
                        drawn
                    }
                }
                (true, false) => Unit::Full,
                (false, true) => Unit::Half,
                (false, false) => {
                    return Err(WallError::LayoutExhausted {
                        course,
                        x,
                        remaining,
                    });
                }
            };

            let (length, kind) = match choice {
                Unit::Full => {
                    consecutive_full += 1;
                    consecutive_half = 0;
                    (full, BrickKind::Stretcher)
                }
                Unit::Half => {
                    consecutive_half += 1;
                    consecutive_full = 0;
                    (half, BrickKind::Half)
                }
            };
            row.push(unit(spec, course, x, length, kind));

            // No joint after a brick that reaches the right edge
            x += if definitely_lt(x + length + head_joint, width) {
                length + head_joint
            } else {
                length
            };
        }

        Ok(row)
    }
}

/// Whether a joint at `edge` in `course` would complete a repeating pattern
///
/// Traces three joint sequences through up to `lookahead` courses beneath:
/// the staircase stepping left, the staircase stepping right, and the
/// falling teeth that alternate between the left step and a straight joint.
/// Returns true as soon as one of them has repeated for `limit` courses.
pub fn repeats_pattern(
    tiling: &Tiling,
    course: usize,
    edge: f64,
    limit: usize,
    lookahead: usize,
) -> bool {
    let mut left_edge = edge;
    let mut right_edge = edge;
    let mut left_step = 0.0;
    let mut right_step = 0.0;
    let (mut left_run, mut right_run, mut teeth_run) = (0, 0, 0);
    let (mut left_open, mut right_open, mut teeth_open) = (true, true, true);

    for depth in 1..=lookahead {
        let below = course + depth;
        if below >= tiling.course_count() {
            break;
        }

        if left_open {
            if let Some(brick) = tiling.last_ending_before(below, left_edge, false) {
                let step = left_edge - brick.end();
                if depth == 1 {
                    left_step = step;
                }
                if approx_eq(step, left_step) {
                    left_run += 1;
                } else {
                    left_open = false;
                }
                left_edge = brick.end();
            }
        }

        if teeth_open {
            if let Some(brick) = tiling.last_ending_before(below, edge, true) {
                let target = if depth % 2 == 1 { left_step } else { 0.0 };
                if approx_eq(edge - brick.end(), target) {
                    teeth_run += 1;
                } else {
                    teeth_open = false;
                }
            }
        }

        if right_open {
            if let Some(brick) = tiling.first_ending_after(below, right_edge) {
                let step = brick.end() - right_edge;
                if depth == 1 {
                    right_step = step;
                }
                if approx_eq(step, right_step) {
                    right_run += 1;
                } else {
                    right_open = false;
                }
                right_edge = brick.end();
            }
        }

        if !(left_open || right_open || teeth_open) {
            return false;
        }
        if left_run == limit || right_run == limit || teeth_run == limit {
            return true;
        }
    }
    false
}
