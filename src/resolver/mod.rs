//! Video source resolution module
//!
//! Resolves a filesystem path to a decodable video source and extracts the
//! per-frame property mapping consumed by the presenter. Reserved
//! (`_`-prefixed) keys are synthesized from decoder state; unprefixed user
//! keys are lifted from container and stream metadata tags.

use crate::domain::model::FrameProps;
use crate::error::FrameLensResult;

pub mod libav;

pub use libav::LibavSource;

/// A resolved video source that can produce per-frame properties.
pub trait FrameSource {
    /// Frame count, when the container reports one.
    fn frame_count(&self) -> Option<usize>;

    /// Extract the property mapping for the given frame index.
    fn frame_props(&mut self, frame: usize) -> FrameLensResult<FrameProps>;
}
