//! Terminal progress for scheduling and animation rendering

use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>10} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bars for the stages of one planning run
///
/// Each stage gets its own bar, created when the stage starts and left
/// in place once finished.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    schedule_bar: Option<ProgressBar>,
    frame_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            schedule_bar: None,
            frame_bar: None,
        }
    }

    /// Start the scheduling bar, measured in bricks laid
    pub fn start_schedule(&mut self, bricks: usize) {
        self.schedule_bar = Some(self.add_bar("schedule", bricks));
    }

    /// Report bricks laid and strides used so far
    pub fn update_schedule(&self, laid: usize, strides: usize) {
        if let Some(bar) = &self.schedule_bar {
            bar.set_position(laid as u64);
            bar.set_message(format!("{strides} strides"));
        }
    }

    /// Mark scheduling as done
    pub fn finish_schedule(&self) {
        if let Some(bar) = &self.schedule_bar {
            bar.finish();
        }
    }

    /// Start the animation bar, measured in frames rendered
    pub fn start_frames(&mut self, frames: usize) {
        self.frame_bar = Some(self.add_bar("frames", frames));
    }

    /// Report frames rendered so far
    pub fn update_frames(&self, rendered: usize) {
        if let Some(bar) = &self.frame_bar {
            bar.set_position(rendered as u64);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(bar) = &self.frame_bar {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }

    fn add_bar(&self, stage: &'static str, length: usize) -> ProgressBar {
        let bar = ProgressBar::new(length as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_prefix(stage);
        self.multi_progress.add(bar)
    }
}
