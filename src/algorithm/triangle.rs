//! Corner pyramids: self-supporting stair regions grown from a wall edge
//!
//! A pyramid starts at the lowest unbuilt brick flush with an edge. Its base
//! is the run of unbuilt bricks from that edge fitting the stride rectangle;
//! every course above admits the run from the edge lying inside the span
//! admitted beneath it, so the region narrows toward the edge.

use crate::algorithm::bitset::BrickSet;
use crate::math::tolerance::{approx_eq, approx_le, whole_steps};
use crate::spatial::brick::{Brick, BrickId};
use crate::spatial::support::Side;
use crate::spatial::tiling::Tiling;

/// A pyramid anchored at one wall edge
#[derive(Debug, Clone)]
pub struct Triangle {
    edge: Side,
    members: BrickSet,
    lowest: Option<BrickId>,
    shoulder: Option<BrickId>,
    apex: Option<BrickId>,
}

impl Triangle {
    /// Edge the pyramid is anchored to
    pub const fn edge(&self) -> Side {
        self.edge
    }

    /// Bricks in the pyramid
    pub const fn members(&self) -> &BrickSet {
        &self.members
    }

    /// Whether no unbuilt brick touches the edge
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The starting brick, flush with the edge in the lowest course
    pub const fn lowest(&self) -> Option<BrickId> {
        self.lowest
    }

    /// Innermost brick of the base course
    pub const fn shoulder(&self) -> Option<BrickId> {
        self.shoulder
    }

    /// Edge brick of the top course
    pub const fn apex(&self) -> Option<BrickId> {
        self.apex
    }
}

/// Grow the pyramid for `edge` from the current build state
///
/// The stride rectangle is flush with `edge` and rests on the course of the
/// starting brick. Bricks already built are never admitted.
pub fn collect_triangle(
    tiling: &Tiling,
    edge: Side,
    stride_width: f64,
    stride_height: f64,
) -> Triangle {
    let spec = tiling.spec();
    let width = spec.width();
    let mut triangle = Triangle {
        edge,
        members: BrickSet::new(tiling.len()),
        lowest: None,
        shoulder: None,
        apex: None,
    };

    let Some(start_course) = (0..tiling.course_count())
        .rev()
        .find(|&course| edge_brick(tiling, course, edge).is_some_and(|(_, brick)| !brick.is_built()))
    else {
        return triangle;
    };

    let (x0, x1) = match edge {
        Side::Left => (0.0, stride_width.min(width)),
        Side::Right => ((width - stride_width).max(0.0), width),
    };
    let depth = whole_steps(stride_height, spec.course_height()).max(1);

    let mut span = (x0, x1);
    for course in (0..=start_course).rev().take(depth) {
        let run = edge_run(tiling, course, edge, span);
        let (Some(&(first, _)), Some(&(last, _))) = (run.first(), run.last()) else {
            break;
        };

        if course == start_course {
            triangle.lowest = Some(first);
            triangle.shoulder = Some(last);
        }
        triangle.apex = Some(first);

        span = run.iter().fold((width, 0.0), |(lo, hi), (_, brick)| {
            (lo.min(brick.x()), hi.max(brick.end()))
        });
        for &(id, _) in &run {
            triangle.members.insert(id);
        }
    }

    triangle
}

fn edge_brick(tiling: &Tiling, course: usize, edge: Side) -> Option<(BrickId, &Brick)> {
    match edge {
        Side::Left => tiling.course(course).next(),
        Side::Right => tiling.course(course).last(),
    }
}

// Unbuilt bricks from the edge inward that lie inside `span`, stopping at the first that does not
fn edge_run(tiling: &Tiling, course: usize, edge: Side, span: (f64, f64)) -> Vec<(BrickId, &Brick)> {
    let admitted = |brick: &Brick| {
        !brick.is_built() && approx_le(span.0, brick.x()) && approx_le(brick.end(), span.1)
    };
    let bricks: Vec<(BrickId, &Brick)> = match edge {
        Side::Left => tiling.course(course).collect(),
        Side::Right => {
            let mut reversed: Vec<_> = tiling.course(course).collect();
            reversed.reverse();
            reversed
        }
    };
    bricks
        .into_iter()
        .take_while(|(_, brick)| admitted(brick))
        .collect()
}

/// Whether `brick` is flush with a wall edge, and which
pub const fn flush_edge(tiling: &Tiling, brick: &Brick) -> Option<Side> {
    if approx_eq(brick.x(), 0.0) {
        Some(Side::Left)
    } else if approx_eq(brick.end(), tiling.spec().width()) {
        Some(Side::Right)
    } else {
        None
    }
}
