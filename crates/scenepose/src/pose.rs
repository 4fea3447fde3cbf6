//! Pose value types and the pose <-> matrix conversions.
//!
//! The tracking SDK and the renderer use opposite rotation-handedness
//! conventions. The bridge is a single quaternion conjugation applied exactly
//! once per convention boundary: packing a [`TrackedPose`] into a matrix
//! conjugates its rotation, and extracting either pose type from a matrix
//! conjugates back. Composing conversions therefore never double-conjugates.

use std::fmt;

use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::algebra;
use crate::error::{SceneResult, ScenePoseError};

/// Tracking status the sensor SDK attaches to a pose estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoseStatus {
    /// The estimate is usable.
    Valid,
    /// The SDK could not determine validity.
    Unknown,
    /// The estimate must not be used.
    Invalid,
}

/// Reference frames a tracked pose can relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frame {
    /// Tracking world, fixed at service start. Right-handed, Z up.
    StartOfService,
    /// Tracking world anchored to a persisted area description.
    AreaDescription,
    /// Device body frame.
    Device,
    /// Inertial measurement unit frame.
    Imu,
    /// Color camera sensor frame.
    CameraColor,
    /// Depth camera sensor frame.
    CameraDepth,
    /// A detected planar surface.
    Plane,
}

/// Canonical sensor-side pose: a rigid transform locating `target` in `base`,
/// in the tracking SDK's conventions.
///
/// Every upstream pose record (device pose callbacks, calibration poses,
/// on-demand lookups by timestamp) is adapted into this one value at the SDK
/// boundary so the conversion layer deals with a single representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedPose {
    /// Translation of `target` in `base`, meters.
    pub translation: DVec3,
    /// Rotation of `target` in `base`, tracking handedness.
    pub rotation: DQuat,
    /// Tracking status reported with the estimate.
    pub status: PoseStatus,
    /// Acquisition time, seconds in the SDK clock domain.
    pub timestamp: f64,
    /// Frame the pose is expressed in.
    pub base: Frame,
    /// Frame the pose locates.
    pub target: Frame,
}

impl TrackedPose {
    /// A valid start-of-service <- device pose with zero timestamp.
    pub fn new(translation: DVec3, rotation: DQuat) -> Self {
        Self {
            translation,
            rotation,
            status: PoseStatus::Valid,
            timestamp: 0.0,
            base: Frame::StartOfService,
            target: Frame::Device,
        }
    }

    /// Adapt a raw SDK pose record. `translation` is `[x, y, z]` and
    /// `rotation` is `[x, y, z, w]`, the wire order of the pose callbacks.
    ///
    /// The rotation is renormalized; a zero-length quaternion fails with
    /// [`ScenePoseError::DegenerateInput`].
    pub fn from_raw(
        translation: [f64; 3],
        rotation: [f64; 4],
        status: PoseStatus,
        timestamp: f64,
    ) -> SceneResult<Self> {
        let rotation = algebra::try_normalize_quat(DQuat::from_xyzw(
            rotation[0],
            rotation[1],
            rotation[2],
            rotation[3],
        ))?;
        Ok(Self {
            translation: DVec3::from_array(translation),
            rotation,
            status,
            timestamp,
            base: Frame::StartOfService,
            target: Frame::Device,
        })
    }

    /// Same pose related to a different frame pair.
    pub fn with_frames(mut self, base: Frame, target: Frame) -> Self {
        self.base = base;
        self.target = target;
        self
    }

    /// Same pose stamped with an acquisition time.
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Reject poses upstream should have filtered out.
    pub fn ensure_valid(&self) -> SceneResult<()> {
        if self.status != PoseStatus::Valid {
            log::warn!(
                "rejecting {:?} <- {:?} pose with status {:?}",
                self.base,
                self.target,
                self.status
            );
            return Err(ScenePoseError::InvalidPoseStatus(self.status));
        }
        Ok(())
    }

    /// Pack into a homogeneous transform, crossing from tracking to algebra
    /// handedness (rotation conjugated once, unit scale).
    pub fn to_matrix(&self) -> DMat4 {
        algebra::rigid_matrix(self.rotation.conjugate(), self.translation)
    }

    /// Extract a tracking-convention pose from a homogeneous transform.
    ///
    /// Inverse of [`TrackedPose::to_matrix`]: for any valid rigid pose `p`,
    /// `TrackedPose::from_matrix(&p.to_matrix())` reproduces `p` up to
    /// floating-point tolerance and quaternion sign.
    pub fn from_matrix(m: &DMat4) -> Self {
        Self::new(
            algebra::translation_of(m),
            DQuat::from_mat4(m).conjugate(),
        )
    }
}

/// Pose in the render-world frame, consumed by scene nodes (camera rig,
/// point-cloud node, frustum indicator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderPose {
    /// Node position in the render world.
    pub position: DVec3,
    /// Node orientation, render handedness.
    pub orientation: DQuat,
}

impl RenderPose {
    /// Extract a render pose from a render-world transform, crossing back
    /// from algebra to render handedness.
    pub fn from_matrix(m: &DMat4) -> Self {
        Self {
            position: algebra::translation_of(m),
            orientation: DQuat::from_mat4(m).conjugate(),
        }
    }
}

impl fmt::Display for RenderPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p:{} q:{}", self.position, self.orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_quat_eq(a: DQuat, b: DQuat, epsilon: f64) {
        // from_mat4 may return the antipodal quaternion; both encode the
        // same rotation.
        let diff = (a - b).length().min((a + b).length());
        assert!(diff < epsilon, "quaternions differ: {a} vs {b}");
    }

    #[test]
    fn test_to_matrix_identity_rotation() {
        let pose = TrackedPose::new(DVec3::new(1.0, 2.0, 3.0), DQuat::IDENTITY);
        let m = pose.to_matrix();
        assert_relative_eq!(m.w_axis.x, 1.0);
        assert_relative_eq!(m.w_axis.y, 2.0);
        assert_relative_eq!(m.w_axis.z, 3.0);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_round_trip() {
        let rotation = DQuat::from_axis_angle(DVec3::new(0.3, -0.5, 0.8).normalize(), 0.7);
        let pose = TrackedPose::new(DVec3::new(0.4, -1.2, 2.5), rotation);
        let back = TrackedPose::from_matrix(&pose.to_matrix());
        assert_relative_eq!(back.translation.x, pose.translation.x, epsilon = 1e-6);
        assert_relative_eq!(back.translation.y, pose.translation.y, epsilon = 1e-6);
        assert_relative_eq!(back.translation.z, pose.translation.z, epsilon = 1e-6);
        assert_quat_eq(back.rotation, pose.rotation, 1e-6);
    }

    #[test]
    fn test_from_raw_normalizes() -> SceneResult<()> {
        let pose = TrackedPose::from_raw(
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
            PoseStatus::Valid,
            12.5,
        )?;
        assert_relative_eq!(pose.rotation.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(pose.timestamp, 12.5);
        Ok(())
    }

    #[test]
    fn test_from_raw_zero_quaternion() {
        let result = TrackedPose::from_raw(
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            PoseStatus::Valid,
            0.0,
        );
        assert!(matches!(result, Err(ScenePoseError::DegenerateInput(_))));
    }

    #[test]
    fn test_ensure_valid_rejects_invalid() {
        let mut pose = TrackedPose::new(DVec3::ZERO, DQuat::IDENTITY);
        pose.status = PoseStatus::Invalid;
        assert!(matches!(
            pose.ensure_valid(),
            Err(ScenePoseError::InvalidPoseStatus(PoseStatus::Invalid))
        ));
    }
}
