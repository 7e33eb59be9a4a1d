//! Wall geometry validation and derived modular metrics
//!
//! A wall is modular when each course holds a whole number of modules
//! (brick plus head joint) followed by one half brick, and the wall height is
//! a whole number of courses. Only modular walls are accepted.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{Result, WallError, invalid_dimension};
use crate::math::tolerance::{as_whole, definitely_lt};

/// Bond pattern governing brick offsets from course to course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondKind {
    /// Full bricks offset by half a brick every other course
    #[default]
    Stretcher,
    /// Courses of stretchers alternating with courses of headers
    English,
    /// Randomised mix of full and half bricks with pattern avoidance
    Wild,
}

impl BondKind {
    /// All supported bonds
    pub const ALL: [Self; 3] = [Self::Stretcher, Self::English, Self::Wild];

    /// Lower case name as accepted by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stretcher => "stretcher",
            Self::English => "english",
            Self::Wild => "wild",
        }
    }
}

impl fmt::Display for BondKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BondKind {
    type Err = WallError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|bond| bond.name() == lowered)
            .ok_or_else(|| WallError::UnsupportedBond {
                name: s.to_string(),
            })
    }
}

/// Validated wall geometry
///
/// Produced once by [`WallSpec::new`] and immutable afterwards. All lengths
/// are in millimetres, and `y` grows downward from the top edge of the wall.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSpec {
    height: f64,
    width: f64,
    brick_length: f64,
    brick_width: f64,
    brick_height: f64,
    head_joint: f64,
    bed_joint: f64,
    bond: BondKind,
    modules: usize,
    courses: usize,
}

impl WallSpec {
    /// Validate raw dimensions and derive the modular layout
    ///
    /// # Errors
    ///
    /// Returns [`WallError::InvalidDimension`] for non-positive or undersized
    /// dimensions and [`WallError::NonModularWall`] when the width or height
    /// cannot be filled with whole bricks. The latter carries the nearest
    /// valid widths and heights.
    pub fn new(
        height: f64,
        width: f64,
        brick_length: f64,
        brick_width: f64,
        brick_height: f64,
        head_joint: f64,
        bed_joint: f64,
        bond: BondKind,
    ) -> Result<Self> {
        for (parameter, value) in [
            ("height", height),
            ("width", width),
            ("brick_length", brick_length),
            ("brick_width", brick_width),
            ("brick_height", brick_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid_dimension(parameter, value, &"must be a positive number"));
            }
        }
        for (parameter, value) in [("head_joint", head_joint), ("bed_joint", bed_joint)] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_dimension(parameter, value, &"must not be negative"));
            }
        }

        let half_length = (brick_length - head_joint) / 2.0;
        let quarter_length = (half_length - head_joint) / 2.0;
        if quarter_length <= 0.0 {
            return Err(invalid_dimension(
                "brick_length",
                brick_length,
                &format!(
                    "must exceed three head joints ({} mm) so closers can be cut",
                    3.0 * head_joint
                ),
            ));
        }

        let module_length = brick_length + head_joint;
        let course_height = brick_height + bed_joint;
        let modules = (width - half_length) / module_length;
        let courses = height / course_height;

        if definitely_lt(modules, 1.0) {
            return Err(invalid_dimension(
                "width",
                width,
                &format!(
                    "too small for a wall, the minimum width is {} mm",
                    half_length + module_length
                ),
            ));
        }
        if definitely_lt(height, course_height) {
            return Err(invalid_dimension(
                "height",
                height,
                &format!("too small for a wall, the minimum height is {course_height} mm"),
            ));
        }

        let whole_modules = as_whole(modules);
        let whole_courses = as_whole(courses);
        let (Some(modules), Some(courses)) = (whole_modules, whole_courses) else {
            let width = whole_modules.is_none().then(|| {
                let below = modules.floor();
                (
                    below.mul_add(module_length, half_length),
                    (below + 1.0).mul_add(module_length, half_length),
                )
            });
            let height = whole_courses.is_none().then(|| {
                let below = courses.floor();
                (below * course_height, (below + 1.0) * course_height)
            });
            return Err(WallError::NonModularWall { width, height });
        };

        Ok(Self {
            height,
            width,
            brick_length,
            brick_width,
            brick_height,
            head_joint,
            bed_joint,
            bond,
            modules,
            courses,
        })
    }

    /// Wall height
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Wall width
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Full brick length
    pub const fn brick_length(&self) -> f64 {
        self.brick_length
    }

    /// Brick depth
    pub const fn brick_width(&self) -> f64 {
        self.brick_width
    }

    /// Brick height
    pub const fn brick_height(&self) -> f64 {
        self.brick_height
    }

    /// Vertical joint between neighbouring bricks
    pub const fn head_joint(&self) -> f64 {
        self.head_joint
    }

    /// Horizontal joint beneath each course
    pub const fn bed_joint(&self) -> f64 {
        self.bed_joint
    }

    /// Bond pattern
    pub const fn bond(&self) -> BondKind {
        self.bond
    }

    /// Full modules per course
    pub const fn modules(&self) -> usize {
        self.modules
    }

    /// Number of courses
    pub const fn courses(&self) -> usize {
        self.courses
    }

    /// Brick plus head joint
    pub const fn module_length(&self) -> f64 {
        self.brick_length + self.head_joint
    }

    /// Brick plus bed joint
    pub const fn course_height(&self) -> f64 {
        self.brick_height + self.bed_joint
    }

    /// Half brick such that two halves and a joint make a full brick
    pub const fn half_length(&self) -> f64 {
        (self.brick_length - self.head_joint) / 2.0
    }

    /// Quarter closer such that two quarters and a joint make a half brick
    pub const fn quarter_length(&self) -> f64 {
        (self.half_length() - self.head_joint) / 2.0
    }

    /// Course index of the bottom course
    pub const fn bottom_course(&self) -> usize {
        self.courses - 1
    }

    /// Top edge of a course, measured from the top of the wall
    pub const fn course_y(&self, course: usize) -> f64 {
        course as f64 * self.course_height()
    }

    /// Whether a course uses the full-brick ("odd") layout
    ///
    /// Parity is anchored at the bottom course, which is always odd.
    pub const fn is_odd_course(&self, course: usize) -> bool {
        course % 2 != self.courses % 2
    }
}
