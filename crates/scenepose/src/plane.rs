//! Detected-plane pose construction from a point, a normal, and gravity.

use glam::{DMat4, DVec3};

use crate::algebra::{self, try_normalize};
use crate::error::{SceneResult, ScenePoseError};
use crate::extrinsics::DeviceExtrinsics;
use crate::frames::{GL_T_TRACKING_WORLD, TRACKING_WORLD_UP};
use crate::pose::{Frame, RenderPose, TrackedPose};

/// Transform whose rotation columns are built from a surface normal and an up
/// direction: `z = normalize(normal)`, `x = normalize(up x z)`,
/// `y = normalize(x x z)`, translation at `point`.
///
/// Fails with [`ScenePoseError::DegenerateInput`] when the normal is zero or
/// (near) parallel to `up`, which would collapse the first cross product.
pub fn matrix_from_point_normal_up(
    point: DVec3,
    normal: DVec3,
    up: DVec3,
) -> SceneResult<DMat4> {
    let z_axis = try_normalize(normal)?;
    let x_axis = up.cross(z_axis);
    if x_axis.length_squared() < algebra::DEGENERATE_EPS {
        return Err(ScenePoseError::DegenerateInput(
            "plane normal is parallel to the up direction",
        ));
    }
    let x_axis = x_axis.normalize();
    let y_axis = try_normalize(x_axis.cross(z_axis))?;

    Ok(DMat4::from_cols(
        x_axis.extend(0.0),
        y_axis.extend(0.0),
        z_axis.extend(0.0),
        point.extend(1.0),
    ))
}

/// The plane transform in the tracking world: `tracking_world <- plane`.
fn world_t_plane(
    point: DVec3,
    normal: DVec3,
    device_pose: &TrackedPose,
    extrinsics: &DeviceExtrinsics,
) -> SceneResult<DMat4> {
    device_pose.ensure_valid()?;
    let world_t_depth = device_pose.to_matrix() * extrinsics.device_t_depth_camera;

    // Gravity direction expressed in the depth-camera frame at measurement
    // time; the basis aligns the plane's local up with it.
    let depth_up = world_t_depth.inverse().transform_vector3(TRACKING_WORLD_UP);
    let depth_t_plane = matrix_from_point_normal_up(point, normal, depth_up)?;

    Ok(world_t_depth * depth_t_plane)
}

/// Pose of a detected planar surface in the tracking-world frame, oriented so
/// its local up axis points against gravity.
///
/// `point` and `normal` are in depth-camera coordinates; `device_pose` is the
/// device pose at the time they were acquired.
pub fn plane_fit_tracking_pose(
    point: DVec3,
    normal: DVec3,
    device_pose: &TrackedPose,
    extrinsics: &DeviceExtrinsics,
) -> SceneResult<TrackedPose> {
    let world_t_plane = world_t_plane(point, normal, device_pose, extrinsics)?;
    Ok(TrackedPose::from_matrix(&world_t_plane)
        .with_frames(Frame::StartOfService, Frame::Plane)
        .with_timestamp(device_pose.timestamp))
}

/// Same as [`plane_fit_tracking_pose`], expressed in the render world for
/// placing a scene node on the surface.
pub fn plane_fit_render_pose(
    point: DVec3,
    normal: DVec3,
    device_pose: &TrackedPose,
    extrinsics: &DeviceExtrinsics,
) -> SceneResult<RenderPose> {
    let world_t_plane = world_t_plane(point, normal, device_pose, extrinsics)?;
    Ok(RenderPose::from_matrix(
        &(GL_T_TRACKING_WORLD * world_t_plane),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DQuat;

    #[test]
    fn test_basis_is_orthonormal() -> SceneResult<()> {
        let m = matrix_from_point_normal_up(
            DVec3::new(0.1, 0.2, 1.5),
            DVec3::new(0.2, 0.5, 0.8),
            DVec3::Z,
        )?;
        let x = m.x_axis.truncate();
        let y = m.y_axis.truncate();
        let z = m.z_axis.truncate();
        for axis in [x, y, z] {
            assert_relative_eq!(axis.length(), 1.0, epsilon = 1e-6);
        }
        assert_relative_eq!(x.dot(y), 0.0, epsilon = 1e-6);
        assert_relative_eq!(x.dot(z), 0.0, epsilon = 1e-6);
        assert_relative_eq!(y.dot(z), 0.0, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_translation_is_the_fit_point() -> SceneResult<()> {
        let point = DVec3::new(-0.3, 0.1, 2.2);
        let m = matrix_from_point_normal_up(point, DVec3::new(0.0, 1.0, 0.2), DVec3::Z)?;
        assert_relative_eq!(m.w_axis.x, point.x);
        assert_relative_eq!(m.w_axis.y, point.y);
        assert_relative_eq!(m.w_axis.z, point.z);
        assert_relative_eq!(m.w_axis.w, 1.0);
        Ok(())
    }

    #[test]
    fn test_normal_parallel_to_up_is_degenerate() {
        let result = matrix_from_point_normal_up(DVec3::ZERO, DVec3::Z, DVec3::Z);
        assert!(matches!(result, Err(ScenePoseError::DegenerateInput(_))));
    }

    #[test]
    fn test_zero_normal_is_degenerate() {
        let result = matrix_from_point_normal_up(DVec3::ZERO, DVec3::ZERO, DVec3::Z);
        assert!(matches!(result, Err(ScenePoseError::DegenerateInput(_))));
    }

    #[test]
    fn test_plane_fit_frames_and_timestamp() -> SceneResult<()> {
        let identity = TrackedPose::new(DVec3::ZERO, DQuat::IDENTITY);
        let extrinsics = DeviceExtrinsics::new(&identity, &identity, &identity)?;
        let device_pose =
            TrackedPose::new(DVec3::new(0.0, 0.0, 1.4), DQuat::IDENTITY).with_timestamp(42.0);

        // Floor-like plane seen by a camera looking along the world X axis.
        let plane = plane_fit_tracking_pose(
            DVec3::new(1.0, 0.0, -1.4),
            DVec3::new(-1.0, 0.0, 0.3),
            &device_pose,
            &extrinsics,
        )?;
        assert_eq!(plane.base, Frame::StartOfService);
        assert_eq!(plane.target, Frame::Plane);
        assert_relative_eq!(plane.timestamp, 42.0);
        Ok(())
    }
}
