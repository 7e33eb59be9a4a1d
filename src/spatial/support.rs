//! Structural support queries over the current build state
//!
//! A brick may be laid only once the course beneath its whole span is laid.

use crate::math::tolerance::{approx_le, definitely_lt};
use crate::spatial::brick::Brick;
use crate::spatial::tiling::Tiling;

/// Which vertical edge of a brick to inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left edge
    Left,
    /// Right edge
    Right,
}

impl Side {
    /// The facing side
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Whether the course beneath `brick` is laid across the brick's full span
///
/// The bottom course rests on the ground and is always supported. Otherwise
/// coverage starts at the brick below the candidate's left edge and extends
/// through adjacent built bricks; an unbuilt brick or a gap wider than a head
/// joint ends it.
pub fn is_base_built(tiling: &Tiling, brick: &Brick) -> bool {
    let spec = tiling.spec();
    if brick.course() >= spec.bottom_course() {
        return true;
    }
    let below = brick.course() + 1;
    let target = brick.end();

    let Some(start) = tiling.brick_at_or_before(below, brick.x()) else {
        return false;
    };

    let mut covered: Option<f64> = None;
    for (_, candidate) in tiling.course(below).skip_while(|(id, _)| *id != start) {
        if !candidate.is_built() {
            return false;
        }
        if let Some(edge) = covered {
            if definitely_lt(edge + spec.head_joint(), candidate.x()) {
                return false;
            }
        }
        let edge = candidate.end();
        if approx_le(target, edge) {
            return true;
        }
        covered = Some(edge);
    }
    false
}

/// Whether a built brick in the course below straddles the given edge of `brick`
///
/// The ground counts as built support for the bottom course.
pub fn has_built_brick_below(tiling: &Tiling, brick: &Brick, side: Side) -> bool {
    if brick.course() >= tiling.spec().bottom_course() {
        return true;
    }
    let below = brick.course() + 1;
    tiling
        .course(below)
        .filter(|(_, candidate)| candidate.is_built())
        .any(|(_, candidate)| match side {
            Side::Right => {
                let edge = brick.end();
                definitely_lt(candidate.x(), edge) && approx_le(edge, candidate.end())
            }
            Side::Left => {
                let edge = brick.x();
                approx_le(candidate.x(), edge) && definitely_lt(edge, candidate.end())
            }
        })
}
