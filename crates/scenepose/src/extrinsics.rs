//! Fixed sensor extrinsics, composed once per tracking session.

use glam::DMat4;

use crate::error::SceneResult;
use crate::pose::TrackedPose;

/// Transforms mapping each camera's local frame into the device frame.
///
/// Computed once from the three IMU-relative calibration poses fetched at
/// session connect, and immutable afterwards. The calibration is fixed per
/// hardware unit, but the raw poses are only served over a live connection,
/// so a session reconnect must rebuild this value.
#[derive(Debug, Clone)]
pub struct DeviceExtrinsics {
    /// Color camera frame -> device frame.
    pub device_t_color_camera: DMat4,
    /// Depth camera frame -> device frame.
    pub device_t_depth_camera: DMat4,
}

impl DeviceExtrinsics {
    /// Compose the extrinsics from the raw IMU-relative poses
    /// (`imu <- device`, `imu <- color camera`, `imu <- depth camera`).
    pub fn new(
        imu_t_device: &TrackedPose,
        imu_t_color_camera: &TrackedPose,
        imu_t_depth_camera: &TrackedPose,
    ) -> SceneResult<Self> {
        imu_t_device.ensure_valid()?;
        imu_t_color_camera.ensure_valid()?;
        imu_t_depth_camera.ensure_valid()?;

        let device_t_imu = imu_t_device.to_matrix().inverse();
        let device_t_color_camera = device_t_imu * imu_t_color_camera.to_matrix();
        let device_t_depth_camera = device_t_imu * imu_t_depth_camera.to_matrix();

        log::debug!(
            "device extrinsics composed: color at {}, depth at {}",
            device_t_color_camera.w_axis.truncate(),
            device_t_depth_camera.w_axis.truncate()
        );

        Ok(Self {
            device_t_color_camera,
            device_t_depth_camera,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::PoseStatus;
    use approx::assert_relative_eq;
    use glam::{DQuat, DVec3};

    #[test]
    fn test_identity_imu_passes_camera_poses_through() -> SceneResult<()> {
        let imu_t_device = TrackedPose::new(DVec3::ZERO, DQuat::IDENTITY);
        let imu_t_color = TrackedPose::new(
            DVec3::new(0.02, -0.01, 0.005),
            DQuat::from_axis_angle(DVec3::Z, 0.3),
        );
        let imu_t_depth = TrackedPose::new(DVec3::new(0.02, 0.01, 0.005), DQuat::IDENTITY);

        let extrinsics = DeviceExtrinsics::new(&imu_t_device, &imu_t_color, &imu_t_depth)?;

        let expected = imu_t_color.to_matrix();
        for (got, want) in extrinsics
            .device_t_color_camera
            .to_cols_array()
            .iter()
            .zip(expected.to_cols_array().iter())
        {
            assert_relative_eq!(*got, *want, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_rejects_invalid_calibration_pose() {
        let good = TrackedPose::new(DVec3::ZERO, DQuat::IDENTITY);
        let mut bad = good;
        bad.status = PoseStatus::Unknown;
        assert!(DeviceExtrinsics::new(&bad, &good, &good).is_err());
    }
}
