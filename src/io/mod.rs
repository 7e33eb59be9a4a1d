/// Command-line parsing and the planning pipeline
pub mod cli;
/// Defaults and tuning constants
pub mod configuration;
/// Error types
pub mod error;
/// Wall rasterization and PNG export
pub mod image;
/// Stride colors
pub mod palette;
/// Terminal progress bars
pub mod progress;
/// Build order animation
pub mod visualization;
