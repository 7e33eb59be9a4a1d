//! Masonry wall tiling and stride-based build order planning
//!
//! A validated [`WallSpec`](spatial::wall::WallSpec) is tiled course by course
//! in one of several bonds. The scheduler then assigns every brick to a
//! stride, a rectangle the building tool reaches without moving, such that
//! no brick is laid before the course beneath it. The resulting schedule is
//! flattened into a linear build order.

#![forbid(unsafe_code)]

/// Bond layouts, corner pyramids, stride scheduling and build order sequencing
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Length comparisons with a fixed tolerance
pub mod math;
/// Wall geometry, bricks and structural support
pub mod spatial;

pub use io::error::{Result, WallError};
