//! Command-line interface for planning a wall and rendering its build order

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{debug, info};

use crate::algorithm::scheduler::{Schedule, StrideScheduler};
use crate::io::configuration::{
    DEFAULT_BED_JOINT, DEFAULT_BRICK_HEIGHT, DEFAULT_BRICK_LENGTH, DEFAULT_BRICK_WIDTH,
    DEFAULT_FRAME_STEP, DEFAULT_HEAD_JOINT, DEFAULT_OUTPUT, DEFAULT_SCALE, DEFAULT_SEED,
    DEFAULT_WALL_HEIGHT, DEFAULT_WALL_WIDTH, GIF_FRAME_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::image::export_plan_png;
use crate::io::palette::StridePalette;
use crate::io::progress::ProgressManager;
use crate::io::visualization::BuildAnimation;
use crate::spatial::tiling::Tiling;
use crate::spatial::wall::{BondKind, WallSpec};

#[derive(Parser, Debug)]
#[command(name = "brickbond")]
#[command(
    author,
    version,
    about = "Tile a masonry wall and plan its build order in tool-sized strides"
)]
/// Command-line arguments for the wall planner
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Bond pattern: stretcher, english or wild
    #[arg(short, long, default_value_t = BondKind::Stretcher)]
    pub bond: BondKind,

    /// Wall width in mm
    #[arg(short = 'w', long, default_value_t = DEFAULT_WALL_WIDTH)]
    pub width: f64,

    /// Wall height in mm
    #[arg(short = 'H', long, default_value_t = DEFAULT_WALL_HEIGHT)]
    pub height: f64,

    /// Brick length in mm
    #[arg(long, default_value_t = DEFAULT_BRICK_LENGTH)]
    pub brick_length: f64,

    /// Brick width (depth) in mm
    #[arg(long, default_value_t = DEFAULT_BRICK_WIDTH)]
    pub brick_width: f64,

    /// Brick height in mm
    #[arg(long, default_value_t = DEFAULT_BRICK_HEIGHT)]
    pub brick_height: f64,

    /// Head joint thickness in mm
    #[arg(long, default_value_t = DEFAULT_HEAD_JOINT)]
    pub head_joint: f64,

    /// Bed joint thickness in mm
    #[arg(long, default_value_t = DEFAULT_BED_JOINT)]
    pub bed_joint: f64,

    /// Width the tool reaches without moving, in mm (defaults to the wall width)
    #[arg(long)]
    pub stride_width: Option<f64>,

    /// Height the tool reaches without moving, in mm (defaults to the wall height)
    #[arg(long)]
    pub stride_height: Option<f64>,

    /// Pixels per millimetre in rendered images
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Random seed for reproducible wild bonds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Log every brick of the build order
    #[arg(short, long)]
    pub debug: bool,

    /// Visit stride rows from the top of the wall down
    #[arg(short, long)]
    pub reverse: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Output PNG of the scheduled wall
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write the build order as an animated GIF
    #[arg(short, long, value_name = "GIF")]
    pub animate: Option<PathBuf>,

    /// Bricks laid per animation frame
    #[arg(long, default_value_t = DEFAULT_FRAME_STEP)]
    pub frame_step: usize,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for the chosen verbosity
    pub const fn log_directive(&self) -> &'static str {
        if self.debug {
            "brickbond=debug"
        } else if self.quiet {
            "warn"
        } else {
            "brickbond=info"
        }
    }

    /// Validated wall geometry from the dimension options
    ///
    /// # Errors
    ///
    /// Returns the validation error of [`WallSpec::new`].
    pub fn wall_spec(&self) -> Result<WallSpec> {
        WallSpec::new(
            self.height,
            self.width,
            self.brick_length,
            self.brick_width,
            self.brick_height,
            self.head_joint,
            self.bed_joint,
            self.bond,
        )
    }

    /// Scheduler for the stride options
    ///
    /// Without stride options the whole wall is one stride; a missing
    /// dimension defaults to the wall's.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::InvalidDimension`](crate::io::error::WallError::InvalidDimension)
    /// when a stride cannot hold one brick or one course.
    pub fn scheduler(&self, spec: &WallSpec) -> Result<StrideScheduler> {
        match (self.stride_width, self.stride_height) {
            (None, None) => Ok(StrideScheduler::whole_wall(spec)),
            (width, height) => StrideScheduler::new(
                spec,
                width.unwrap_or(spec.width()),
                height.unwrap_or(spec.height()),
            ),
        }
    }
}

/// Runs one planning pass: tiling, scheduling, sequencing and rendering
pub struct WallProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl WallProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Plan the wall described by the CLI arguments and write the outputs
    ///
    /// # Errors
    ///
    /// Returns an error if the wall or stride dimensions are invalid, a
    /// course cannot be laid out, or an output cannot be written.
    pub fn process(&mut self) -> Result<()> {
        let start_time = Instant::now();
        let spec = self.cli.wall_spec()?;
        log_wall_summary(&spec);

        let mut tiling = Tiling::build(&spec, self.cli.seed)?;
        let scheduler = self.cli.scheduler(&spec)?;
        let capacity = scheduler.capacity();
        info!(
            "Stride of {}mm x {}mm holds {} bricks per course and {} courses",
            scheduler.stride_width(),
            scheduler.stride_height(),
            capacity.bricks_in_width,
            capacity.courses_in_height
        );

        let schedule = self.schedule(&scheduler, &mut tiling)?;
        info!("The wall can be built in {} stride(s)", schedule.stride_count());

        let order = schedule.build_order(&tiling, self.cli.reverse);
        for brick in &order {
            if let Some(stride) = brick.stride() {
                debug!(
                    "Built brick at ({:.1}, {:.1}) in stride {stride}",
                    brick.x(),
                    brick.y()
                );
            }
        }

        let palette = StridePalette::for_schedule(&schedule);
        export_plan_png(&tiling, &palette, self.cli.scale, &self.cli.output)?;
        info!("Wall plan written to {}", self.cli.output.display());

        if let Some(path) = &self.cli.animate {
            let frames = order.len().div_ceil(self.cli.frame_step.max(1));
            if let Some(pm) = &mut self.progress_manager {
                pm.start_frames(frames);
            }
            let progress = self.progress_manager.as_ref();
            let animation = BuildAnimation::render(
                &tiling,
                &order,
                &palette,
                self.cli.scale,
                self.cli.frame_step,
                GIF_FRAME_DELAY_MS,
                |rendered| {
                    if let Some(pm) = progress {
                        pm.update_frames(rendered);
                    }
                },
            )?;
            animation.export_gif(path)?;
            info!("Build order animation written to {}", path.display());
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }
        debug!(elapsed_ms = start_time.elapsed().as_millis(), "Planning finished");
        Ok(())
    }

    fn schedule(&mut self, scheduler: &StrideScheduler, tiling: &mut Tiling) -> Result<Schedule> {
        if let Some(pm) = &mut self.progress_manager {
            pm.start_schedule(tiling.len());
        }
        let progress = self.progress_manager.as_ref();
        let schedule = scheduler.schedule_with(tiling, |schedule, _| {
            if let Some(pm) = progress {
                pm.update_schedule(schedule.placements().len(), schedule.stride_count());
            }
        })?;
        if let Some(pm) = progress {
            pm.finish_schedule();
        }
        Ok(schedule)
    }
}

fn log_wall_summary(spec: &WallSpec) {
    info!("Planning {} bond wall: {} courses", spec.bond(), spec.courses());
    if spec.bond() == BondKind::Stretcher {
        info!("{} bricks per course", spec.modules() + 1);
    }
    info!(
        "Dimensions: {}mm (width) x {}mm (height)",
        spec.width(),
        spec.height()
    );
}
