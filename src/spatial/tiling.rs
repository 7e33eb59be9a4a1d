//! Brick collection with a per-course spatial index
//!
//! Bricks are stored in generation order (bottom course first) and indexed
//! by course, each course sorted left to right. Because bricks within a
//! course are contiguous and non-overlapping, both their left and right
//! edges are sorted, so neighbour queries are binary searches over a single
//! course rather than scans of the whole wall.

use crate::math::tolerance::{approx_le, definitely_lt};
use crate::spatial::brick::{Brick, BrickId, StrideId};
use crate::spatial::wall::WallSpec;

/// A full wall's worth of bricks
#[derive(Debug, Clone)]
pub struct Tiling {
    spec: WallSpec,
    bricks: Vec<Brick>,
    courses: Vec<Vec<BrickId>>,
}

impl Tiling {
    /// Create an empty tiling for a validated wall
    pub fn new(spec: WallSpec) -> Self {
        let courses = vec![Vec::new(); spec.courses()];
        Self {
            spec,
            bricks: Vec::new(),
            courses,
        }
    }

    /// Append a generated course
    ///
    /// Bricks must be sorted left to right and belong to `course`.
    pub(crate) fn push_course(&mut self, course: usize, bricks: Vec<Brick>) {
        let start = self.bricks.len();
        let ids: Vec<BrickId> = (start..start + bricks.len()).collect();
        self.bricks.extend(bricks);
        if let Some(slot) = self.courses.get_mut(course) {
            *slot = ids;
        }
    }

    /// Wall geometry this tiling covers
    pub const fn spec(&self) -> &WallSpec {
        &self.spec
    }

    /// All bricks in generation order
    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Brick by id
    pub fn brick(&self, id: BrickId) -> Option<&Brick> {
        self.bricks.get(id)
    }

    /// Number of bricks
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    /// Whether no course has been generated yet
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Number of courses in the index
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Brick ids of a course, left to right
    pub fn course_ids(&self, course: usize) -> &[BrickId] {
        self.courses.get(course).map_or(&[], Vec::as_slice)
    }

    /// Bricks of a course, left to right
    pub fn course(&self, course: usize) -> impl Iterator<Item = (BrickId, &Brick)> + '_ {
        self.course_ids(course)
            .iter()
            .filter_map(|&id| self.bricks.get(id).map(|brick| (id, brick)))
    }

    /// Bricks not yet laid
    pub fn unbuilt_count(&self) -> usize {
        self.bricks.iter().filter(|brick| !brick.is_built()).count()
    }

    /// Whether every brick has been laid
    pub fn is_complete(&self) -> bool {
        self.bricks.iter().all(Brick::is_built)
    }

    /// Span covered by a course: bricks plus the head joints between them
    pub fn course_span(&self, course: usize) -> f64 {
        let mut bricks = self.course(course).map(|(_, brick)| brick);
        let Some(first) = bricks.next() else {
            return 0.0;
        };
        let last = bricks.last().unwrap_or(first);
        last.end() - first.x()
    }

    /// The brick whose left edge is the last one at or before `x`
    ///
    /// This is the brick containing `x`, or the brick just left of the head
    /// joint containing `x`.
    pub fn brick_at_or_before(&self, course: usize, x: f64) -> Option<BrickId> {
        let ids = self.course_ids(course);
        let count = ids.partition_point(|&id| self.bricks.get(id).is_some_and(|b| approx_le(b.x(), x)));
        count.checked_sub(1).and_then(|index| ids.get(index).copied())
    }

    /// Rightmost brick ending strictly before `edge`, or at it when `inclusive`
    pub fn last_ending_before(&self, course: usize, edge: f64, inclusive: bool) -> Option<&Brick> {
        let ids = self.course_ids(course);
        let count = ids.partition_point(|&id| {
            self.bricks.get(id).is_some_and(|b| {
                if inclusive {
                    approx_le(b.end(), edge)
                } else {
                    definitely_lt(b.end(), edge)
                }
            })
        });
        count
            .checked_sub(1)
            .and_then(|index| ids.get(index))
            .and_then(|&id| self.bricks.get(id))
    }

    /// Leftmost brick ending strictly after `edge`
    pub fn first_ending_after(&self, course: usize, edge: f64) -> Option<&Brick> {
        let ids = self.course_ids(course);
        let count = ids.partition_point(|&id| self.bricks.get(id).is_some_and(|b| approx_le(b.end(), edge)));
        ids.get(count).and_then(|&id| self.bricks.get(id))
    }

    pub(crate) fn mark_built(&mut self, id: BrickId, stride: StrideId) {
        if let Some(brick) = self.bricks.get_mut(id) {
            brick.mark_built(stride);
        }
    }

    /// Undo a trial lay, restoring the bricks to unbuilt
    pub(crate) fn unmark_built(&mut self, ids: &[BrickId]) {
        for &id in ids {
            if let Some(brick) = self.bricks.get_mut(id) {
                brick.unmark_built();
            }
        }
    }
}
