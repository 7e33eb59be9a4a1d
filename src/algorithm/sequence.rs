//! Linear build order from a schedule
//!
//! Strides are visited row by row, left to right within a row. Inside a
//! stride, courses run bottom to top and alternate direction, so the tool
//! snakes across the envelope instead of returning to one side every course.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::algorithm::scheduler::Schedule;
use crate::spatial::brick::{Brick, BrickId};
use crate::spatial::tiling::Tiling;

// sy -> sx -> course (bottom first) -> brick ids
type Grouped = BTreeMap<u32, BTreeMap<u32, BTreeMap<Reverse<usize>, Vec<BrickId>>>>;

impl Schedule {
    /// Every scheduled brick in the order it is laid
    ///
    /// With `reverse`, stride rows are visited top row first. The forward
    /// order always lays a brick after the bricks supporting it.
    pub fn build_order<'t>(&self, tiling: &'t Tiling, reverse: bool) -> Vec<&'t Brick> {
        let mut grouped = Grouped::new();
        for placement in self.placements() {
            let Some(brick) = tiling.brick(placement.brick) else {
                continue;
            };
            grouped
                .entry(placement.stride.sy)
                .or_default()
                .entry(placement.stride.sx)
                .or_default()
                .entry(Reverse(brick.course()))
                .or_default()
                .push(placement.brick);
        }

        let rows: Vec<_> = if reverse {
            grouped.into_values().rev().collect()
        } else {
            grouped.into_values().collect()
        };

        let mut order = Vec::with_capacity(self.placements().len());
        for strides in rows {
            for courses in strides.into_values() {
                for (index, mut ids) in courses.into_values().enumerate() {
                    ids.sort_by(|&a, &b| x_of(tiling, a).total_cmp(&x_of(tiling, b)));
                    if index % 2 == 1 {
                        ids.reverse();
                    }
                    order.extend(ids.into_iter().filter_map(|id| tiling.brick(id)));
                }
            }
        }
        order
    }
}

fn x_of(tiling: &Tiling, id: BrickId) -> f64 {
    tiling.brick(id).map_or(0.0, Brick::x)
}
