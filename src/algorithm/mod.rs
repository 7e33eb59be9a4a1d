/// Bit-per-brick membership sets
pub mod bitset;
/// Row layouts for each bond and the tiling builder
pub mod layout;
/// Stride assignment for every brick of a tiling
pub mod scheduler;
/// Snake-order traversal of a schedule
pub mod sequence;
/// Corner pyramid regions anchored at the wall edges
pub mod triangle;
/// Wild bond rows with repeating-pattern avoidance
pub mod wild;

pub use scheduler::{Schedule, StrideScheduler};
