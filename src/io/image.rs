//! Wall plan rasterization and PNG export
//!
//! Bricks are painted into an `ndarray` label grid first and only turned into
//! pixels at the end, so the same raster can be repainted brick by brick when
//! animating the build order.

use std::path::Path;

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::io::configuration::{BACKGROUND_COLOR, BRICK_COLOR, MORTAR_COLOR};
use crate::io::error::{Result, WallError, invalid_dimension};
use crate::io::palette::StridePalette;
use crate::spatial::brick::{Brick, StrideId};
use crate::spatial::tiling::Tiling;
use crate::spatial::wall::WallSpec;

/// What a pixel of the wall raster shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Empty canvas
    #[default]
    Background,
    /// Brick outline
    Mortar,
    /// Brick not laid yet
    Unbuilt,
    /// Brick laid in a stride
    Built(StrideId),
}

/// Label grid covering the whole wall at a fixed scale
#[derive(Debug, Clone)]
pub struct WallRaster {
    cells: Array2<Cell>,
    scale: f64,
}

impl WallRaster {
    /// Empty raster of `spec` at `scale` pixels per millimetre
    ///
    /// # Errors
    ///
    /// Returns [`WallError::InvalidDimension`] if the scale is not positive
    /// or the wall would be less than one pixel across.
    pub fn new(spec: &WallSpec, scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(invalid_dimension("scale", scale, &"must be positive"));
        }
        let width = (spec.width() * scale).round();
        let height = (spec.height() * scale).round();
        if width < 1.0 || height < 1.0 {
            return Err(invalid_dimension(
                "scale",
                scale,
                &"renders the wall smaller than one pixel",
            ));
        }
        Ok(Self {
            cells: Array2::default((height as usize, width as usize)),
            scale,
        })
    }

    /// Raster with every brick of `tiling` painted unbuilt
    ///
    /// # Errors
    ///
    /// See [`WallRaster::new`].
    pub fn unbuilt(tiling: &Tiling, scale: f64) -> Result<Self> {
        let mut raster = Self::new(tiling.spec(), scale)?;
        for brick in tiling.bricks() {
            raster.paint(brick, Cell::Unbuilt);
        }
        Ok(raster)
    }

    /// Raster of `tiling` as scheduled, each laid brick labelled with its stride
    ///
    /// # Errors
    ///
    /// See [`WallRaster::new`].
    pub fn scheduled(tiling: &Tiling, scale: f64) -> Result<Self> {
        let mut raster = Self::new(tiling.spec(), scale)?;
        for brick in tiling.bricks() {
            raster.paint_state(brick);
        }
        Ok(raster)
    }

    /// Paint a brick as laid or unbuilt according to its state
    pub fn paint_state(&mut self, brick: &Brick) {
        let fill = brick.stride().map_or(Cell::Unbuilt, Cell::Built);
        self.paint(brick, fill);
    }

    /// Paint a brick's face with `fill` and its outline with mortar
    pub fn paint(&mut self, brick: &Brick, fill: Cell) {
        let (rows, cols) = self.cells.dim();
        let left = self.to_pixel(brick.x(), cols);
        let right = self.to_pixel(brick.end(), cols);
        let top = self.to_pixel(brick.y(), rows);
        let bottom = self.to_pixel(brick.y() + brick.height(), rows);
        if left >= right || top >= bottom {
            return;
        }

        for row in top..bottom {
            for col in left..right {
                let edge = row == top || row + 1 == bottom || col == left || col + 1 == right;
                if let Some(cell) = self.cells.get_mut([row, col]) {
                    *cell = if edge { Cell::Mortar } else { fill };
                }
            }
        }
    }

    /// Raster size as (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        let (rows, cols) = self.cells.dim();
        (cols as u32, rows as u32)
    }

    /// Label at a pixel
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get([y, x]).copied()
    }

    /// Convert the labels to pixels
    ///
    /// Laid bricks take their stride's color; strides missing from the
    /// palette fall back to the unbuilt brick color.
    pub fn to_image(&self, palette: &StridePalette) -> RgbaImage {
        let (width, height) = self.dimensions();
        RgbaImage::from_fn(width, height, |x, y| {
            let color = match self.cell(x as usize, y as usize).unwrap_or_default() {
                Cell::Background => BACKGROUND_COLOR,
                Cell::Mortar => MORTAR_COLOR,
                Cell::Unbuilt => BRICK_COLOR,
                Cell::Built(stride) => palette.color(stride).unwrap_or(BRICK_COLOR),
            };
            Rgba(color)
        })
    }

    fn to_pixel(&self, length: f64, limit: usize) -> usize {
        ((length * self.scale).round().max(0.0) as usize).min(limit)
    }
}

/// Render the scheduled wall and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The scale is not positive
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_plan_png(
    tiling: &Tiling,
    palette: &StridePalette,
    scale: f64,
    output_path: &Path,
) -> Result<()> {
    let image = WallRaster::scheduled(tiling, scale)?.to_image(palette);

    create_parent_dir(output_path)?;
    image
        .save(output_path)
        .map_err(|source| WallError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}

/// Create the directory an output file will be written into
///
/// # Errors
///
/// Returns [`WallError::FileSystem`] if the directory cannot be created.
pub fn create_parent_dir(output_path: &Path) -> Result<()> {
    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| WallError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })
        }
        _ => Ok(()),
    }
}
