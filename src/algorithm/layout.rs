//! Course layouts for each bond and the tiling builder
//!
//! Every bond is one variant of [`BondLayout`]; the tiling builder walks the
//! courses bottom to top and asks the layout for one row at a time.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::algorithm::wild::WildBond;
use crate::io::error::Result;
use crate::spatial::brick::{Brick, BrickKind};
use crate::spatial::tiling::Tiling;
use crate::spatial::wall::{BondKind, WallSpec};

/// Row generator for one bond pattern
pub enum BondLayout<'r, R: Rng> {
    /// Stretcher bond
    Stretcher,
    /// English bond
    English,
    /// Wild bond drawing from a random source
    Wild(WildBond<'r, R>),
}

impl<'r, R: Rng> BondLayout<'r, R> {
    /// Select the layout for a wall's bond
    pub fn for_spec(spec: &WallSpec, rng: &'r mut R) -> Self {
        match spec.bond() {
            BondKind::Stretcher => Self::Stretcher,
            BondKind::English => Self::English,
            BondKind::Wild => Self::Wild(WildBond::new(rng)),
        }
    }

    /// Generate one course
    ///
    /// `tiling` holds the courses already generated beneath this one.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::LayoutExhausted`](crate::io::error::WallError::LayoutExhausted)
    /// when a wild course cannot be closed exactly at the wall edge.
    pub fn generate_row(&mut self, course: usize, tiling: &Tiling) -> Result<Vec<Brick>> {
        let spec = tiling.spec();
        match self {
            Self::Stretcher if spec.is_odd_course(course) => Ok(full_course(spec, course)),
            Self::Stretcher => Ok(stretcher_even_course(spec, course)),
            Self::English if spec.is_odd_course(course) => Ok(full_course(spec, course)),
            Self::English => Ok(header_course(spec, course)),
            Self::Wild(wild) => wild.generate_row(course, tiling),
        }
    }
}

impl Tiling {
    /// Build a tiling with a seeded random source
    ///
    /// # Errors
    ///
    /// Propagates layout errors from [`Tiling::generate`].
    pub fn build(spec: &WallSpec, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::generate(spec, &mut rng)
    }

    /// Build a tiling course by course, bottom course first
    ///
    /// # Errors
    ///
    /// Returns [`WallError::LayoutExhausted`](crate::io::error::WallError::LayoutExhausted)
    /// if a course cannot be closed exactly.
    pub fn generate<R: Rng>(spec: &WallSpec, rng: &mut R) -> Result<Self> {
        let mut tiling = Self::new(spec.clone());
        let mut layout = BondLayout::for_spec(spec, rng);

        for course in (0..spec.courses()).rev() {
            let row = layout.generate_row(course, &tiling)?;
            tiling.push_course(course, row);
        }

        debug!(
            bond = %spec.bond(),
            courses = spec.courses(),
            bricks = tiling.len(),
            "Generated tiling"
        );
        Ok(tiling)
    }
}

/// Create a brick of the wall's height and depth
pub(crate) fn unit(spec: &WallSpec, course: usize, x: f64, length: f64, kind: BrickKind) -> Brick {
    Brick::new(
        x,
        spec.course_y(course),
        length,
        spec.brick_width(),
        spec.brick_height(),
        course,
        kind,
    )
}

// Full bricks from the left edge, closed by a half brick flush right
fn full_course(spec: &WallSpec, course: usize) -> Vec<Brick> {
    let mut row: Vec<Brick> = (0..spec.modules())
        .map(|m| {
            unit(
                spec,
                course,
                m as f64 * spec.module_length(),
                spec.brick_length(),
                BrickKind::Stretcher,
            )
        })
        .collect();
    row.push(unit(
        spec,
        course,
        spec.modules() as f64 * spec.module_length(),
        spec.half_length(),
        BrickKind::Half,
    ));
    row
}

// Half brick at the left edge, then full bricks ending at the right edge
fn stretcher_even_course(spec: &WallSpec, course: usize) -> Vec<Brick> {
    let offset = spec.half_length() + spec.head_joint();
    let mut row = vec![unit(spec, course, 0.0, spec.half_length(), BrickKind::Half)];
    row.extend((0..spec.modules()).map(|m| {
        unit(
            spec,
            course,
            (m as f64).mul_add(spec.module_length(), offset),
            spec.brick_length(),
            BrickKind::Stretcher,
        )
    }));
    row
}

// Quarter closers at both edges with headers between
fn header_course(spec: &WallSpec, course: usize) -> Vec<Brick> {
    let quarter = spec.quarter_length();
    let header = spec.half_length();
    let pitch = header + spec.head_joint();
    let offset = quarter + spec.head_joint();
    let headers = 2 * spec.modules();

    let mut row = vec![unit(spec, course, 0.0, quarter, BrickKind::Quarter)];
    row.extend(
        (0..headers).map(|m| unit(spec, course, (m as f64).mul_add(pitch, offset), header, BrickKind::Header)),
    );
    row.push(unit(
        spec,
        course,
        (headers as f64).mul_add(pitch, offset),
        quarter,
        BrickKind::Quarter,
    ));
    row
}
