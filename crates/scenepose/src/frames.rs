//! Fixed frame-convention transforms.
//!
//! Two world conventions meet in this crate:
//!
//! | Frame | Handedness | Up axis | Used by |
//! |-------|------------|---------|---------|
//! | tracking world | right-handed | +Z | motion-tracking SDK (start-of-service) |
//! | render world | GL-style | +Y | scene graph / renderer |
//!
//! The constants below are pure rotations (entries 0 and ±1) relating the two
//! conventions and the four screen-rotation states. They are plain `const`
//! data, safe to read from any thread; every matrix product involving them
//! returns a new value.

use glam::{DMat4, DVec3, DVec4};
use serde::{Deserialize, Serialize};

/// Change of basis from the tracking-world frame (Z up) to the render-world
/// frame (Y up): `(x, y, z) -> (x, z, -y)`.
pub const GL_T_TRACKING_WORLD: DMat4 = DMat4::from_cols(
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(0.0, 0.0, -1.0, 0.0),
    DVec4::new(0.0, 1.0, 0.0, 0.0),
    DVec4::new(0.0, 0.0, 0.0, 1.0),
);

/// From the color-camera sensor frame (X right, Y down, Z forward) to the GL
/// camera frame (X right, Y up, Z backward): negates Y and Z.
pub const COLOR_CAMERA_T_GL_CAMERA: DMat4 = DMat4::from_cols(
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(0.0, -1.0, 0.0, 0.0),
    DVec4::new(0.0, 0.0, -1.0, 0.0),
    DVec4::new(0.0, 0.0, 0.0, 1.0),
);

/// From the depth-camera sensor frame to the GL camera frame. Identical in
/// value to [`COLOR_CAMERA_T_GL_CAMERA`]; the depth conversion path does not
/// apply it itself (the depth-data consumer works in the sensor convention),
/// so it is exported for that consumer.
pub const DEPTH_CAMERA_T_GL_CAMERA: DMat4 = COLOR_CAMERA_T_GL_CAMERA;

/// Up direction in the tracking-world frame.
pub const TRACKING_WORLD_UP: DVec3 = DVec3::new(0.0, 0.0, 1.0);

const ROTATION_0: DMat4 = DMat4::IDENTITY;

// 90 deg about Z: (x, y) -> (-y, x).
const ROTATION_90: DMat4 = DMat4::from_cols(
    DVec4::new(0.0, 1.0, 0.0, 0.0),
    DVec4::new(-1.0, 0.0, 0.0, 0.0),
    DVec4::new(0.0, 0.0, 1.0, 0.0),
    DVec4::new(0.0, 0.0, 0.0, 1.0),
);

// 180 deg about Z: (x, y) -> (-x, -y).
const ROTATION_180: DMat4 = DMat4::from_cols(
    DVec4::new(-1.0, 0.0, 0.0, 0.0),
    DVec4::new(0.0, -1.0, 0.0, 0.0),
    DVec4::new(0.0, 0.0, 1.0, 0.0),
    DVec4::new(0.0, 0.0, 0.0, 1.0),
);

// 270 deg about Z: (x, y) -> (y, -x).
const ROTATION_270: DMat4 = DMat4::from_cols(
    DVec4::new(0.0, -1.0, 0.0, 0.0),
    DVec4::new(1.0, 0.0, 0.0, 0.0),
    DVec4::new(0.0, 0.0, 1.0, 0.0),
    DVec4::new(0.0, 0.0, 0.0, 1.0),
);

/// Display rotation of the device screen relative to its default orientation,
/// following the Android rotation indices 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenRotation {
    /// Default orientation.
    Rotation0,
    /// Rotated 90 degrees.
    Rotation90,
    /// Rotated 180 degrees.
    Rotation180,
    /// Rotated 270 degrees.
    Rotation270,
}

impl ScreenRotation {
    /// The fixed transform for this rotation state, a 90-degree-multiple
    /// rotation about Z.
    pub fn matrix(self) -> DMat4 {
        match self {
            ScreenRotation::Rotation0 => ROTATION_0,
            ScreenRotation::Rotation90 => ROTATION_90,
            ScreenRotation::Rotation180 => ROTATION_180,
            ScreenRotation::Rotation270 => ROTATION_270,
        }
    }

    /// From a platform rotation index. Out-of-range indices fall back to the
    /// default orientation.
    pub fn from_index(index: u32) -> Self {
        match index {
            1 => ScreenRotation::Rotation90,
            2 => ScreenRotation::Rotation180,
            3 => ScreenRotation::Rotation270,
            _ => ScreenRotation::Rotation0,
        }
    }
}
