//! Error handling module for FrameLens

use thiserror::Error;

/// Main error type for FrameLens operations
#[derive(Error, Debug)]
pub enum FrameLensError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// FFmpeg initialization error
    #[error("Failed to initialize FFmpeg: {message}")]
    FFmpegInitError { message: String },

    /// Source resolution error
    #[error("Failed to resolve video source: {message}")]
    ResolveError { message: String },

    /// No decodable video stream in the input
    #[error("No video stream found in: {path}")]
    NoVideoStream { path: String },

    /// Requested frame past the end of the stream
    #[error("Frame {frame} is out of range (decoded {decoded} frames)")]
    FrameOutOfRange { frame: usize, decoded: usize },

    /// Rule table is internally inconsistent
    #[error("Invalid rule configuration: {message}")]
    RuleConfig { message: String },

    /// A formatting rule failed on a property value
    #[error("Formatting rule for '{key}' failed: {message}")]
    FormatFailed { key: String, message: String },

    /// Session configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Presentation serialization error
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// FFmpeg error
    #[error("FFmpeg error: {0}")]
    FFmpegError(#[from] ffmpeg_next::Error),
}

/// Result type alias for FrameLens operations
pub type FrameLensResult<T> = std::result::Result<T, FrameLensError>;
