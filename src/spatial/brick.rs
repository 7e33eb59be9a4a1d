//! Bricks and stride labels

use std::cmp::Ordering;
use std::fmt;

/// Index of a brick within its [`Tiling`](crate::spatial::tiling::Tiling)
pub type BrickId = usize;

/// Shape of a unit as laid in the wall face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrickKind {
    /// Full brick laid lengthwise
    Stretcher,
    /// Full brick turned so its end shows in the face
    Header,
    /// Half brick
    Half,
    /// Quarter closer
    Quarter,
}

/// Reach envelope label `(sx, sy)`
///
/// `sy` counts vertical window moves, `sx` counts windows at the same height.
/// Labels order by `sy` first, so sorted strides follow the build sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StrideId {
    /// Horizontal index
    pub sx: u32,
    /// Vertical index
    pub sy: u32,
}

impl StrideId {
    /// Create a stride label
    pub const fn new(sx: u32, sy: u32) -> Self {
        Self { sx, sy }
    }
}

impl Ord for StrideId {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.sy, self.sx).cmp(&(other.sy, other.sx))
    }
}

impl PartialOrd for StrideId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for StrideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.sx, self.sy)
    }
}

/// One unit of the wall
///
/// Geometry is fixed at creation. The built flag and stride label are
/// written only by the scheduler and never reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    x: f64,
    y: f64,
    length: f64,
    width: f64,
    height: f64,
    course: usize,
    kind: BrickKind,
    built: bool,
    stride: Option<StrideId>,
}

impl Brick {
    /// Create an unbuilt brick
    pub const fn new(
        x: f64,
        y: f64,
        length: f64,
        width: f64,
        height: f64,
        course: usize,
        kind: BrickKind,
    ) -> Self {
        Self {
            x,
            y,
            length,
            width,
            height,
            course,
            kind,
            built: false,
            stride: None,
        }
    }

    /// Left edge
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Top edge, measured from the top of the wall
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Length along the wall face
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Depth into the wall
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Height of the brick without bed joint
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Right edge
    pub const fn end(&self) -> f64 {
        self.x + self.length
    }

    /// Course index (0 is the top course)
    pub const fn course(&self) -> usize {
        self.course
    }

    /// Unit shape
    pub const fn kind(&self) -> BrickKind {
        self.kind
    }

    /// Whether this is a cut unit rather than a full brick
    pub const fn is_half(&self) -> bool {
        matches!(self.kind, BrickKind::Half | BrickKind::Quarter)
    }

    /// Whether the scheduler has laid this brick
    pub const fn is_built(&self) -> bool {
        self.built
    }

    /// Stride the brick was laid in
    pub const fn stride(&self) -> Option<StrideId> {
        self.stride
    }

    pub(crate) const fn mark_built(&mut self, stride: StrideId) {
        self.built = true;
        self.stride = Some(stride);
    }

    pub(crate) const fn unmark_built(&mut self) {
        self.built = false;
        self.stride = None;
    }
}
