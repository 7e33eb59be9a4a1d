//! Stride scheduling: assigning every brick to a reach envelope
//!
//! A window the size of one stride sweeps the wall. Every window lays each
//! unbuilt brick inside it whose base is already laid, bottom course first.
//! The first two windows build pyramids in the bottom corners; afterwards
//! the next pyramid of each edge is reserved while the center between them
//! is filled, and released once the center supports both pyramids from the
//! inside. Each window rests on the course of the lowest layable brick and
//! is slid sideways to wherever it lays the most. Every window lays at least
//! that brick, so the sweep finishes after at most one window per brick.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace};

use crate::algorithm::bitset::BrickSet;
use crate::algorithm::triangle::{Triangle, collect_triangle, flush_edge};
use crate::io::configuration::PYRAMID_PROXIMITY_MODULES;
use crate::io::error::{Result, WallError, invalid_dimension};
use crate::math::tolerance::{approx_eq, approx_le, definitely_lt, whole_steps};
use crate::spatial::brick::{Brick, BrickId, StrideId};
use crate::spatial::support::{Side, has_built_brick_below, is_base_built};
use crate::spatial::tiling::Tiling;
use crate::spatial::wall::WallSpec;

/// How many bricks a stride spans
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrideCapacity {
    /// Full bricks across the stride width, counted in half-brick steps
    pub bricks_in_width: f64,
    /// Whole courses within the stride height
    pub courses_in_height: usize,
}

impl StrideCapacity {
    /// Capacity of a stride on the given wall
    ///
    /// The head joint of the last brick counts towards the stride width.
    pub fn new(spec: &WallSpec, stride_width: f64, stride_height: f64) -> Self {
        let module = spec.module_length();
        let whole = whole_steps(stride_width, module);
        let rest = (whole as f64).mul_add(-module, stride_width);
        let extra = if approx_le(spec.half_length() + spec.head_joint(), rest) {
            0.5
        } else {
            0.0
        };
        Self {
            bricks_in_width: whole as f64 + extra,
            courses_in_height: whole_steps(stride_height, spec.course_height()),
        }
    }

    /// Whether the stride width holds a whole number of bricks
    pub fn is_whole_width(&self) -> bool {
        approx_eq(self.bricks_in_width.fract(), 0.0)
    }
}

/// Rectangle covered by one stride, in wall coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrideWindow {
    /// Left edge
    pub x0: f64,
    /// Right edge
    pub x1: f64,
    /// Top edge
    pub y_top: f64,
    /// Bottom edge
    pub y_bottom: f64,
}

impl StrideWindow {
    /// Window of the given size resting on `y_bottom`
    pub const fn new(x0: f64, y_bottom: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            x1: x0 + width,
            y_top: y_bottom - height,
            y_bottom,
        }
    }

    /// Whether `brick` lies entirely inside the window
    pub const fn contains(&self, brick: &Brick) -> bool {
        approx_le(self.x0, brick.x())
            && approx_le(brick.end(), self.x1)
            && self.spans_rows(brick.y(), brick.y() + brick.height())
    }

    const fn spans_rows(&self, top: f64, bottom: f64) -> bool {
        approx_le(self.y_top, top) && approx_le(bottom, self.y_bottom)
    }
}

/// One brick laid in one stride
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Brick laid
    pub brick: BrickId,
    /// Stride it was laid in
    pub stride: StrideId,
}

/// Result of scheduling: placements in the order they were decided and the windows used
#[derive(Debug, Clone)]
pub struct Schedule {
    placements: Vec<Placement>,
    windows: BTreeMap<StrideId, StrideWindow>,
    capacity: StrideCapacity,
}

impl Schedule {
    /// Placements in the order the scheduler laid them
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Strides that received at least one brick
    pub fn stride_ids(&self) -> BTreeSet<StrideId> {
        self.windows.keys().copied().collect()
    }

    /// Number of strides used
    pub fn stride_count(&self) -> usize {
        self.windows.len()
    }

    /// Rectangle of a used stride
    pub fn window(&self, stride: StrideId) -> Option<&StrideWindow> {
        self.windows.get(&stride)
    }

    /// All used strides with their rectangles
    pub fn windows(&self) -> impl Iterator<Item = (StrideId, &StrideWindow)> {
        self.windows.iter().map(|(&id, window)| (id, window))
    }

    /// Stride capacity the schedule was computed with
    pub const fn capacity(&self) -> StrideCapacity {
        self.capacity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    // Reserved pyramids are skipped while the gap between them fills
    Center,
    // Everything supported may be laid
    Released,
}

// Issues stride ids: a new row of ids whenever the window moves vertically
#[derive(Debug, Default)]
struct StrideCounter {
    row: Option<(u32, f64)>,
    next_sx: u32,
}

impl StrideCounter {
    fn next(&mut self, y_bottom: f64) -> StrideId {
        let sy = match self.row {
            Some((sy, y)) if approx_eq(y, y_bottom) => sy,
            Some((sy, _)) => {
                self.next_sx = 0;
                sy + 1
            }
            None => 0,
        };
        self.row = Some((sy, y_bottom));
        let id = StrideId::new(self.next_sx, sy);
        self.next_sx += 1;
        id
    }
}

/// Assigns bricks to strides of a fixed footprint
#[derive(Debug, Clone)]
pub struct StrideScheduler {
    stride_width: f64,
    stride_height: f64,
    capacity: StrideCapacity,
}

impl StrideScheduler {
    /// Create a scheduler for strides of `stride_width` × `stride_height`
    ///
    /// # Errors
    ///
    /// Returns [`WallError::InvalidDimension`] when a stride cannot hold a
    /// single full brick or a single course, since such a stride would never
    /// lay anything.
    pub fn new(spec: &WallSpec, stride_width: f64, stride_height: f64) -> Result<Self> {
        if !stride_width.is_finite() || definitely_lt(stride_width, spec.brick_length()) {
            return Err(invalid_dimension(
                "stride_width",
                stride_width,
                &format!("must hold at least one brick ({} mm)", spec.brick_length()),
            ));
        }
        if !stride_height.is_finite() || definitely_lt(stride_height, spec.course_height()) {
            return Err(invalid_dimension(
                "stride_height",
                stride_height,
                &format!("must hold at least one course ({} mm)", spec.course_height()),
            ));
        }
        Ok(Self {
            stride_width,
            stride_height,
            capacity: StrideCapacity::new(spec, stride_width, stride_height),
        })
    }

    /// A single stride covering the whole wall
    pub fn whole_wall(spec: &WallSpec) -> Self {
        Self {
            stride_width: spec.width(),
            stride_height: spec.height(),
            capacity: StrideCapacity::new(spec, spec.width(), spec.height()),
        }
    }

    /// Stride width
    pub const fn stride_width(&self) -> f64 {
        self.stride_width
    }

    /// Stride height
    pub const fn stride_height(&self) -> f64 {
        self.stride_height
    }

    /// Bricks per stride
    pub const fn capacity(&self) -> StrideCapacity {
        self.capacity
    }

    /// Lay every brick of `tiling`
    ///
    /// # Errors
    ///
    /// Returns [`WallError::ScheduleStalled`] if a window lays nothing, which
    /// would mean the support bookkeeping is inconsistent.
    pub fn schedule(&self, tiling: &mut Tiling) -> Result<Schedule> {
        self.schedule_with(tiling, |_, _| {})
    }

    /// Lay every brick of `tiling`, reporting the schedule and build state after each window
    ///
    /// # Errors
    ///
    /// See [`StrideScheduler::schedule`].
    pub fn schedule_with<F>(&self, tiling: &mut Tiling, mut on_window: F) -> Result<Schedule>
    where
        F: FnMut(&Schedule, &Tiling),
    {
        let spec = tiling.spec().clone();
        let mut schedule = Schedule {
            placements: Vec::with_capacity(tiling.len()),
            windows: BTreeMap::new(),
            capacity: self.capacity,
        };
        let mut counter = StrideCounter::default();
        let mut iteration = 0;

        // A stride as wide as the wall has no corners to balance
        let wide = approx_le(spec.width(), self.stride_width);
        let mut mode = Mode::Released;
        let mut left = collect_triangle(tiling, Side::Left, self.stride_width, self.stride_height);
        let mut right = collect_triangle(tiling, Side::Right, self.stride_width, self.stride_height);
        let mut x0 = 0.0;

        if !wide {
            for (edge, own, other) in [(Side::Left, &left, &right), (Side::Right, &right, &left)] {
                iteration += 1;
                let mut excluded = other.members().clone();
                excluded.difference_with(own.members());
                x0 = self.corner_x0(&spec, edge);
                let window = StrideWindow::new(x0, spec.height(), self.stride_width, self.stride_height);
                let stride = counter.next(window.y_bottom);
                if lay(tiling, &window, stride, Some(&excluded), &mut schedule) == 0 {
                    return Err(stalled(iteration, tiling));
                }
                on_window(&schedule, tiling);
            }
            left = collect_triangle(tiling, Side::Left, self.stride_width, self.stride_height);
            right = collect_triangle(tiling, Side::Right, self.stride_width, self.stride_height);
            log_pyramid(tiling, &left);
            log_pyramid(tiling, &right);
            mode = Mode::Center;
        }

        while schedule.placements.len() < tiling.len() {
            iteration += 1;
            let reserved = left.members().union(right.members());

            if mode == Mode::Center && center_is_filled(tiling, &left, &right) {
                debug!(iteration, "Center filled, releasing pyramids");
                mode = Mode::Released;
            }

            let mut target = match mode {
                Mode::Center => lowest_nearest(tiling, x0, Some(&reserved)),
                Mode::Released => lowest_nearest(tiling, x0, None),
            };
            if mode == Mode::Center && target.is_none() {
                debug!(iteration, "Nothing left around the pyramids, releasing them");
                mode = Mode::Released;
                target = lowest_nearest(tiling, x0, None);
            }
            let Some(mut target) = target else {
                return Err(stalled(iteration, tiling));
            };

            let mut edge = tiling.brick(target).and_then(|brick| flush_edge(tiling, brick));
            if mode == Mode::Released && !wide && edge.is_none() {
                // An inner target means the gap between pyramids opened again
                if let Some(inner) = lowest_nearest(tiling, x0, Some(&reserved)) {
                    mode = Mode::Center;
                    target = inner;
                    edge = tiling.brick(target).and_then(|brick| flush_edge(tiling, brick));
                }
            }
            let Some(brick) = tiling.brick(target).cloned() else {
                return Err(stalled(iteration, tiling));
            };

            let preferred = match (mode, edge) {
                (Mode::Released, Some(side)) if !wide => self.corner_x0(&spec, side),
                _ => self.shifted_x0(&spec, tiling, &brick, &right),
            };
            let excluded = (mode == Mode::Center).then_some(&reserved);
            let y_bottom = brick.y() + spec.course_height();
            x0 = self.busiest_x0(tiling, &brick, y_bottom, preferred, excluded);
            let window = StrideWindow::new(x0, y_bottom, self.stride_width, self.stride_height);
            let stride = counter.next(window.y_bottom);

            let laid = lay(tiling, &window, stride, excluded, &mut schedule);
            debug!(
                iteration,
                stride = %stride,
                x0 = window.x0,
                y_bottom = window.y_bottom,
                laid,
                center = mode == Mode::Center,
                "Stride window"
            );
            if laid == 0 {
                return Err(stalled(iteration, tiling));
            }
            on_window(&schedule, tiling);

            if mode == Mode::Released && edge.is_some() && !wide {
                left = collect_triangle(tiling, Side::Left, self.stride_width, self.stride_height);
                right = collect_triangle(tiling, Side::Right, self.stride_width, self.stride_height);
            }
        }

        debug!(
            strides = schedule.stride_count(),
            windows = iteration,
            "Schedule complete"
        );
        Ok(schedule)
    }

    const fn corner_x0(&self, spec: &WallSpec, edge: Side) -> f64 {
        match edge {
            Side::Left => 0.0,
            Side::Right => (spec.width() - self.stride_width).max(0.0),
        }
    }

    // Offset the window by whole modules from the target so consecutive
    // center windows interleave with the stagger of the courses
    fn shifted_x0(&self, spec: &WallSpec, tiling: &Tiling, target: &Brick, right: &Triangle) -> f64 {
        let module = spec.module_length();
        if self.capacity.is_whole_width() {
            return module.mul_add(2.0, target.x() - self.stride_width);
        }
        let reach = module * PYRAMID_PROXIMITY_MODULES;
        let near_right = [right.shoulder(), right.lowest()]
            .into_iter()
            .flatten()
            .filter_map(|id| tiling.brick(id))
            .any(|brick| distance(target, brick) <= reach);
        let shift = if near_right { -2.0 * module } else { -module };
        target.x() + shift
    }

    // Keep the window on the wall, then make sure it holds the target
    fn fit_x0(&self, spec: &WallSpec, target: &Brick, preferred: f64) -> f64 {
        let on_wall = preferred
            .min(spec.width() - self.stride_width)
            .max(0.0);
        on_wall
            .max(target.end() - self.stride_width)
            .min(target.x())
    }

    /// Left edge of the window over `target` that lays the most bricks
    ///
    /// Candidates align the window with a brick edge in one of the courses it
    /// spans. Each is scored by a trial lay that is undone before the next;
    /// ties go to the candidate closest to `preferred`.
    fn busiest_x0(
        &self,
        tiling: &mut Tiling,
        target: &Brick,
        y_bottom: f64,
        preferred: f64,
        excluded: Option<&BrickSet>,
    ) -> f64 {
        let spec = tiling.spec().clone();
        let start = self.fit_x0(&spec, target, preferred);
        let depth = whole_steps(self.stride_height, spec.course_height()).max(1);
        let top_course = (target.course() + 1).saturating_sub(depth);

        let mut candidates = vec![start];
        for course in top_course..=target.course() {
            for (_, brick) in tiling.course(course) {
                for edge in [brick.x(), brick.end() - self.stride_width] {
                    let x0 = self.fit_x0(&spec, target, edge);
                    if !candidates.iter().any(|&seen| approx_eq(seen, x0)) {
                        candidates.push(x0);
                    }
                }
            }
        }
        candidates.sort_by(|a, b| (a - start).abs().total_cmp(&(b - start).abs()));

        let mut best = (0, start);
        for x0 in candidates {
            let window = StrideWindow::new(x0, y_bottom, self.stride_width, self.stride_height);
            let trial = lay_supported(tiling, &window, StrideId::default(), excluded);
            tiling.unmark_built(&trial);
            if trial.len() > best.0 {
                best = (trial.len(), x0);
            }
        }
        best.1
    }
}

/// Lay every eligible brick inside `window` and record it in `schedule`
///
/// Returns the number of bricks laid.
fn lay(
    tiling: &mut Tiling,
    window: &StrideWindow,
    stride: StrideId,
    excluded: Option<&BrickSet>,
    schedule: &mut Schedule,
) -> usize {
    let laid = lay_supported(tiling, window, stride, excluded);
    for brick in laid.iter().filter_map(|&id| tiling.brick(id)) {
        trace!(x = brick.x(), y = brick.y(), stride = %stride, "Laid brick");
    }
    schedule
        .placements
        .extend(laid.iter().map(|&brick| Placement { brick, stride }));
    if !laid.is_empty() {
        schedule.windows.insert(stride, *window);
    }
    laid.len()
}

/// Mark every unbuilt, unexcluded, supported brick inside `window` as built, bottom course first
fn lay_supported(
    tiling: &mut Tiling,
    window: &StrideWindow,
    stride: StrideId,
    excluded: Option<&BrickSet>,
) -> Vec<BrickId> {
    let spec = tiling.spec().clone();
    let mut laid = Vec::new();

    for course in (0..tiling.course_count()).rev() {
        let top = spec.course_y(course);
        if !window.spans_rows(top, top + spec.brick_height()) {
            continue;
        }
        let ids = tiling.course_ids(course).to_vec();
        for id in ids {
            let Some(brick) = tiling.brick(id) else {
                continue;
            };
            if brick.is_built()
                || !window.contains(brick)
                || excluded.is_some_and(|set| set.contains(id))
                || !is_base_built(tiling, brick)
            {
                continue;
            }
            tiling.mark_built(id, stride);
            laid.push(id);
        }
    }
    laid
}

/// The unbuilt, supported brick in the lowest possible course nearest to `x0`
fn lowest_nearest(tiling: &Tiling, x0: f64, excluded: Option<&BrickSet>) -> Option<BrickId> {
    (0..tiling.course_count()).rev().find_map(|course| {
        tiling
            .course(course)
            .filter(|(id, brick)| {
                !brick.is_built()
                    && excluded.is_none_or(|set| !set.contains(*id))
                    && is_base_built(tiling, brick)
            })
            .min_by(|(_, a), (_, b)| (a.x() - x0).abs().total_cmp(&(b.x() - x0).abs()))
            .map(|(id, _)| id)
    })
}

/// Whether both reserved pyramids are supported from the inside
///
/// The test is made at each pyramid's shoulder, the innermost brick of its
/// base course. Pyramids narrow toward their edge, so every course above the
/// shoulder lies within its span; once the shoulder's inner edge rests on a
/// built brick the center has reached the whole pyramid. This differs from
/// testing the innermost brick of each pyramid's top course, which rests on
/// the pyramid itself rather than on the center. An empty pyramid is
/// trivially supported.
fn center_is_filled(tiling: &Tiling, left: &Triangle, right: &Triangle) -> bool {
    [left, right].into_iter().all(|triangle| {
        triangle
            .shoulder()
            .and_then(|id| tiling.brick(id))
            .is_none_or(|shoulder| {
                has_built_brick_below(tiling, shoulder, triangle.edge().opposite())
            })
    })
}

fn log_pyramid(tiling: &Tiling, triangle: &Triangle) {
    let course = |id: Option<BrickId>| id.and_then(|id| tiling.brick(id)).map(Brick::course);
    debug!(
        edge = ?triangle.edge(),
        bricks = triangle.members().count(),
        base = ?course(triangle.lowest()),
        apex = ?course(triangle.apex()),
        "Reserved pyramid"
    );
}

fn distance(a: &Brick, b: &Brick) -> f64 {
    (a.x() - b.x()).hypot(a.y() - b.y())
}

fn stalled(iteration: usize, tiling: &Tiling) -> WallError {
    WallError::ScheduleStalled {
        iteration,
        unbuilt: tiling.unbuilt_count(),
    }
}
