//! Spatial data structures for the wall
//!
//! This module contains spatial-related functionality including:
//! - Wall geometry validation
//! - Bricks and stride labels
//! - The course-indexed brick collection and support queries

/// Bricks and stride identifiers
pub mod brick;
/// Structural support predicates
pub mod support;
/// Course-indexed brick collection
pub mod tiling;
/// Validated wall geometry
pub mod wall;

pub use brick::{Brick, BrickId, StrideId};
pub use tiling::Tiling;
pub use wall::{BondKind, WallSpec};
