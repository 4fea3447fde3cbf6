//! Tracking-world to render-world pose conversions.
//!
//! Every chain is composed outer-to-inner, following the frame relations:
//! `gl_world <- tracking_world <- device <- sensor`. Callers feed one device
//! pose per rendered frame; each call is independent and touches no shared
//! state.

use glam::DVec3;

use crate::error::SceneResult;
use crate::extrinsics::DeviceExtrinsics;
use crate::frames::{ScreenRotation, COLOR_CAMERA_T_GL_CAMERA, GL_T_TRACKING_WORLD};
use crate::pose::{RenderPose, TrackedPose};

/// Render-world pose of the device body, e.g. for a frustum indicator node.
pub fn device_render_pose(device_pose: &TrackedPose) -> SceneResult<RenderPose> {
    device_pose.ensure_valid()?;
    let gl_t_device = GL_T_TRACKING_WORLD * device_pose.to_matrix();
    Ok(RenderPose::from_matrix(&gl_t_device))
}

/// Render-world pose of the device body on a display rotated away from its
/// default orientation.
pub fn device_render_pose_with_rotation(
    device_pose: &TrackedPose,
    rotation: ScreenRotation,
) -> SceneResult<RenderPose> {
    device_pose.ensure_valid()?;
    let gl_t_display = GL_T_TRACKING_WORLD * device_pose.to_matrix() * rotation.matrix();
    Ok(RenderPose::from_matrix(&gl_t_display))
}

/// Render-world pose for the scene camera, replicating the motion of the
/// device's color camera.
///
/// Example:
///
/// ```
/// use glam::{DQuat, DVec3};
/// use scenepose::convert::color_camera_render_pose;
/// use scenepose::extrinsics::DeviceExtrinsics;
/// use scenepose::pose::TrackedPose;
///
/// let identity = TrackedPose::new(DVec3::ZERO, DQuat::IDENTITY);
/// let extrinsics = DeviceExtrinsics::new(&identity, &identity, &identity)?;
/// let device_pose = TrackedPose::new(DVec3::new(0.0, 0.0, 1.3), DQuat::IDENTITY);
/// let camera = color_camera_render_pose(&device_pose, &extrinsics)?;
/// assert!((camera.position.y - 1.3).abs() < 1e-12);
/// # Ok::<(), scenepose::ScenePoseError>(())
/// ```
pub fn color_camera_render_pose(
    device_pose: &TrackedPose,
    extrinsics: &DeviceExtrinsics,
) -> SceneResult<RenderPose> {
    device_pose.ensure_valid()?;
    let gl_t_camera = GL_T_TRACKING_WORLD
        * device_pose.to_matrix()
        * extrinsics.device_t_color_camera
        * COLOR_CAMERA_T_GL_CAMERA;
    Ok(RenderPose::from_matrix(&gl_t_camera))
}

/// Render-world pose of the depth sensor, e.g. for placing a point-cloud
/// node.
///
/// Unlike the color path, no camera axis flip is applied: the depth-data
/// consumer already works in the sensor's axis convention and applies
/// [`crate::frames::DEPTH_CAMERA_T_GL_CAMERA`] itself.
pub fn depth_camera_render_pose(
    device_pose: &TrackedPose,
    extrinsics: &DeviceExtrinsics,
) -> SceneResult<RenderPose> {
    device_pose.ensure_valid()?;
    let gl_t_depth =
        GL_T_TRACKING_WORLD * device_pose.to_matrix() * extrinsics.device_t_depth_camera;
    Ok(RenderPose::from_matrix(&gl_t_depth))
}

/// Re-express a point measured in a device-mounted sensor frame in the render
/// world, for depicting individual measurements in the scene.
///
/// `device_t_sensor` locates the sensor frame on the device;
/// `world_t_device` is the device pose at measurement time.
pub fn point_in_render_frame(
    point: DVec3,
    device_t_sensor: &TrackedPose,
    world_t_device: &TrackedPose,
) -> SceneResult<DVec3> {
    device_t_sensor.ensure_valid()?;
    world_t_device.ensure_valid()?;
    let world_t_sensor = world_t_device.to_matrix() * device_t_sensor.to_matrix();
    Ok(GL_T_TRACKING_WORLD.transform_point3(world_t_sensor.transform_point3(point)))
}
