//! Error types for pose and projection computations.
use thiserror::Error;

use crate::pose::PoseStatus;

/// Error types for pose and projection computations.
///
/// All failures are local and synchronous; a render loop is expected to log
/// the error and skip the current frame's update rather than abort.
#[derive(Debug, Error)]
pub enum ScenePoseError {
    /// A zero-length vector or quaternion reached a normalization, or a
    /// plane-fit normal is parallel to the up direction.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// Camera intrinsics with a non-positive focal length or image dimension.
    #[error("invalid camera intrinsics: {0}")]
    InvalidIntrinsics(&'static str),

    /// A tracking pose whose status is not [`PoseStatus::Valid`] reached the
    /// conversion layer. Upstream is expected to filter these.
    #[error("pose status is {0:?}, expected Valid")]
    InvalidPoseStatus(PoseStatus),
}

/// Result type for scenepose operations.
pub type SceneResult<T> = Result<T, ScenePoseError>;
