//! Error taxonomy for the animation core
//!
//! Frame-local failures (empty point set, vertex layout mismatch) are
//! contained to the tick that raised them; everything else stops the loop.

use thiserror::Error;

/// Errors that can occur while driving the animation loop
#[derive(Error, Debug)]
pub enum AnimationError {
    /// Centroid requested for a point set with zero points
    #[error("cannot compute the centroid of an empty point set")]
    EmptyPointSet,

    /// Vertex upload does not fit the layout the pipeline was built with
    #[error("vertex upload does not match the configured layout: expected at most {expected} bytes, got {actual}")]
    LayoutMismatch { expected: usize, actual: usize },

    /// Configuration rejected before the loop started
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No GPU adapter could be found at startup
    #[error("no suitable GPU adapter found")]
    NoAdapter,

    /// The adapter refused to hand out a device
    #[error("failed to acquire GPU device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    /// An I/O error occurred while reading a config file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file could not be parsed
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for animation operations
pub type AnimationResult<T> = Result<T, AnimationError>;

impl AnimationError {
    /// Whether this failure is contained to the current frame.
    ///
    /// The controller skips the frame for these and keeps running; any other
    /// error transitions the loop to `Stopped`.
    pub fn is_frame_local(&self) -> bool {
        matches!(self, Self::EmptyPointSet | Self::LayoutMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_local_classification() {
        assert!(AnimationError::EmptyPointSet.is_frame_local());
        assert!(
            AnimationError::LayoutMismatch {
                expected: 64,
                actual: 96
            }
            .is_frame_local()
        );
        assert!(!AnimationError::NoAdapter.is_frame_local());
        assert!(!AnimationError::InvalidConfig("nope".into()).is_frame_local());
    }

    #[test]
    fn test_layout_mismatch_message_carries_sizes() {
        let err = AnimationError::LayoutMismatch {
            expected: 3200,
            actual: 3232,
        };
        let msg = err.to_string();
        assert!(msg.contains("3200"));
        assert!(msg.contains("3232"));
    }
}
