#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # scenepose
//!
//! The pose/coordinate-transform layer of an AR rendering pipeline: pure
//! functions converting device tracking poses (right-handed, Z-up tracking
//! world) into scene-graph poses (GL-style, Y-up render world), composing
//! sensor extrinsics, fitting plane poses from point + normal + gravity, and
//! building a frustum projection matrix from pinhole intrinsics.
//!
//! Everything is synchronous, bounded arithmetic on value types. Calls are
//! independently correct given their inputs and may run concurrently from any
//! thread.
//!
//! ## Example: per-frame camera pose
//!
//! ```rust
//! use glam::{DQuat, DVec3};
//! use scenepose::{
//!     color_camera_render_pose, projection_matrix, CameraIntrinsics, ClipPlanes,
//!     DeviceExtrinsics, PoseStatus, TrackedPose,
//! };
//!
//! // Once per session: calibration poses and intrinsics from the SDK.
//! let imu_t_device = TrackedPose::new(DVec3::ZERO, DQuat::IDENTITY);
//! let imu_t_color = TrackedPose::new(DVec3::new(0.02, 0.0, 0.0), DQuat::IDENTITY);
//! let imu_t_depth = TrackedPose::new(DVec3::new(0.03, 0.0, 0.0), DQuat::IDENTITY);
//! let extrinsics = DeviceExtrinsics::new(&imu_t_device, &imu_t_color, &imu_t_depth)?;
//!
//! let intrinsics = CameraIntrinsics::new(640, 480, 500.0, 500.0, 320.0, 240.0)?;
//! let projection = projection_matrix(&intrinsics, &ClipPlanes::default())?;
//!
//! // Once per tracked frame: raw pose in, render pose out.
//! let device_pose = TrackedPose::from_raw(
//!     [0.1, -0.2, 1.3],
//!     [0.0, 0.0, 0.0, 1.0],
//!     PoseStatus::Valid,
//!     0.033,
//! )?;
//! let camera_pose = color_camera_render_pose(&device_pose, &extrinsics)?;
//! # let _ = (projection, camera_pose);
//! # Ok::<(), scenepose::ScenePoseError>(())
//! ```

/// Shared numeric helpers over the glam f64 types.
pub mod algebra;

/// Pinhole camera intrinsics and the frustum projection matrix.
pub mod camera;

/// Tracking-world to render-world pose conversions.
pub mod convert;

/// Error types for pose and projection computations.
pub mod error;

/// Fixed sensor extrinsics, composed once per tracking session.
pub mod extrinsics;

/// Fixed frame-convention transforms.
pub mod frames;

/// Detected-plane pose construction.
pub mod plane;

/// Pose value types and pose <-> matrix conversions.
pub mod pose;

pub use camera::{frustum, projection_matrix, CameraIntrinsics, ClipPlanes};
pub use convert::{
    color_camera_render_pose, depth_camera_render_pose, device_render_pose,
    device_render_pose_with_rotation, point_in_render_frame,
};
pub use error::{SceneResult, ScenePoseError};
pub use extrinsics::DeviceExtrinsics;
pub use frames::ScreenRotation;
pub use plane::{matrix_from_point_normal_up, plane_fit_render_pose, plane_fit_tracking_pose};
pub use pose::{Frame, PoseStatus, RenderPose, TrackedPose};
