//! Animated replay of the build order
//!
//! The animation starts from the wall with every brick unbuilt and paints
//! bricks in build order, a fixed number per frame, holding the finished
//! wall at the end.

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, WallError, invalid_dimension};
use crate::io::image::{WallRaster, create_parent_dir};
use crate::io::palette::StridePalette;
use crate::spatial::brick::Brick;
use crate::spatial::tiling::Tiling;

/// Frames of a build order replay
pub struct BuildAnimation {
    frames: Vec<Frame>,
    delay_ms: u32,
}

impl BuildAnimation {
    /// Render one frame per `frame_step` bricks of `order`
    ///
    /// Frame delays below what common viewers honour are raised to that
    /// minimum. `on_frame` is called after every rendered frame.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::InvalidDimension`] if `frame_step` is zero or the
    /// scale is not positive.
    pub fn render<F>(
        tiling: &Tiling,
        order: &[&Brick],
        palette: &StridePalette,
        scale: f64,
        frame_step: usize,
        frame_delay_ms: u32,
        mut on_frame: F,
    ) -> Result<Self>
    where
        F: FnMut(usize),
    {
        if frame_step == 0 {
            return Err(invalid_dimension(
                "frame_step",
                0.0,
                &"must lay at least one brick per frame",
            ));
        }
        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let mut raster = WallRaster::unbuilt(tiling, scale)?;
        let mut frames = vec![frame(&raster, palette, delay_ms)];

        for chunk in order.chunks(frame_step) {
            for brick in chunk {
                raster.paint_state(brick);
            }
            frames.push(frame(&raster, palette, delay_ms));
            on_frame(frames.len());
        }

        if let Some(last) = frames.last().map(|last| last.buffer().clone()) {
            let hold = delay_ms.saturating_mul(FINAL_FRAME_HOLD);
            frames.push(Frame::from_parts(last, 0, 0, Delay::from_numer_denom_ms(hold, 1)));
        }

        Ok(Self { frames, delay_ms })
    }

    /// Number of frames, including the initial and held final frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Delay between frames after the viewer minimum was applied
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Encode the frames as a looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory or the file cannot be created
    /// - GIF encoding fails
    pub fn export_gif(self, output_path: &Path) -> Result<()> {
        create_parent_dir(output_path)?;
        let file = std::fs::File::create(output_path).map_err(|source| WallError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source,
        })?;

        let export_error = |source| WallError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(self.frames).map_err(export_error)
    }
}

fn frame(raster: &WallRaster, palette: &StridePalette, delay_ms: u32) -> Frame {
    Frame::from_parts(
        raster.to_image(palette),
        0,
        0,
        Delay::from_numer_denom_ms(delay_ms, 1),
    )
}
