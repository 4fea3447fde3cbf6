//! Simulated tracking feed driving the conversion pipeline, printing the
//! render-world poses a scene graph would consume.
//!
//! Run with `RUST_LOG=debug cargo run --example render_loop` to also see the
//! library's log output.

use glam::{DQuat, DVec3};
use scenepose::{
    color_camera_render_pose, depth_camera_render_pose, projection_matrix, CameraIntrinsics,
    ClipPlanes, DeviceExtrinsics, Frame, PoseStatus, SceneResult, TrackedPose,
};

fn main() -> SceneResult<()> {
    env_logger::init();

    // Session connect: calibration poses and intrinsics, fetched once.
    let imu_t_device = TrackedPose::new(DVec3::new(0.0, 0.0, 0.002), DQuat::IDENTITY)
        .with_frames(Frame::Imu, Frame::Device);
    let imu_t_color = TrackedPose::new(
        DVec3::new(0.02, -0.01, 0.005),
        DQuat::from_axis_angle(DVec3::Z, 0.01),
    )
    .with_frames(Frame::Imu, Frame::CameraColor);
    let imu_t_depth = TrackedPose::new(DVec3::new(0.021, 0.01, 0.005), DQuat::IDENTITY)
        .with_frames(Frame::Imu, Frame::CameraDepth);
    let extrinsics = DeviceExtrinsics::new(&imu_t_device, &imu_t_color, &imu_t_depth)?;

    let intrinsics = CameraIntrinsics::new(1920, 1080, 1450.0, 1450.0, 962.0, 541.0)?;
    let projection = projection_matrix(&intrinsics, &ClipPlanes::default())?;
    println!("projection: {projection}");

    // Per-frame: walk the device along a circle at eye height, looking
    // inward, the way a user scans a room.
    for frame in 0..8 {
        let timestamp = frame as f64 / 30.0;
        let angle = timestamp * std::f64::consts::FRAC_PI_4;
        let device_pose = TrackedPose::from_raw(
            [2.0 * angle.cos(), 2.0 * angle.sin(), 1.4],
            [0.0, 0.0, (angle / 2.0).sin(), (angle / 2.0).cos()],
            PoseStatus::Valid,
            timestamp,
        )?;

        let camera = color_camera_render_pose(&device_pose, &extrinsics)?;
        let point_cloud = depth_camera_render_pose(&device_pose, &extrinsics)?;
        println!("t={timestamp:.3} camera {camera} point-cloud {point_cloud}");
    }

    Ok(())
}
