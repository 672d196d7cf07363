//! FrameLens Library
//!
//! A command-line frame-property inspector: resolves a video file to a
//! decodable source, extracts the per-frame metadata mapping, and presents
//! it raw or prettified into categorized display tables.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod presenter;
pub mod resolver;

// Re-export commonly used types
pub use domain::model::{Category, DisplayRow, FrameProps, PropValue};
pub use domain::rules::{FormatRule, RuleSet, ValueTransform};
pub use error::{FrameLensError, FrameLensResult};
pub use presenter::{CategoryGroup, Presentation, Presenter, ViewMode};

/// Initialize FrameLens library
pub fn init() -> FrameLensResult<()> {
    // Initialize FFmpeg
    ffmpeg_next::init().map_err(|e| FrameLensError::FFmpegInitError {
        message: e.to_string(),
    })?;

    Ok(())
}
