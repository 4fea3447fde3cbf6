//! Pinhole camera intrinsics and the frustum projection matrix.

use glam::{DMat4, DVec4};
use serde::{Deserialize, Serialize};

use crate::error::{SceneResult, ScenePoseError};

/// Intrinsic parameters of a calibrated pinhole camera, fixed per physical
/// camera and fetched once at connect time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Image width, pixels.
    pub width: u32,
    /// Image height, pixels.
    pub height: u32,
    /// Focal length in x, pixels.
    pub fx: f64,
    /// Focal length in y, pixels.
    pub fy: f64,
    /// Principal point x coordinate, pixels.
    pub cx: f64,
    /// Principal point y coordinate, pixels.
    pub cy: f64,
}

impl CameraIntrinsics {
    /// Create camera intrinsics, validating focal lengths and dimensions.
    pub fn new(width: u32, height: u32, fx: f64, fy: f64, cx: f64, cy: f64) -> SceneResult<Self> {
        let intrinsics = Self {
            width,
            height,
            fx,
            fy,
            cx,
            cy,
        };
        intrinsics.validate()?;
        Ok(intrinsics)
    }

    /// Check the invariants the projection math relies on. Runs at
    /// construction and again at projection time.
    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ScenePoseError::InvalidIntrinsics(
                "image dimensions must be strictly positive",
            ));
        }
        if self.fx <= 0.0 || self.fy <= 0.0 {
            return Err(ScenePoseError::InvalidIntrinsics(
                "focal lengths must be strictly positive",
            ));
        }
        Ok(())
    }
}

/// Near and far clip distances for the projection frustum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipPlanes {
    /// Near clip distance.
    pub near: f64,
    /// Far clip distance. Must exceed `near`.
    pub far: f64,
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Off-axis perspective projection matrix for the view volume bounded by the
/// given planes at the near clip distance.
pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, near: f64, far: f64) -> DMat4 {
    let width_inv = 1.0 / (right - left);
    let height_inv = 1.0 / (top - bottom);
    let depth_inv = 1.0 / (far - near);
    DMat4::from_cols(
        DVec4::new(2.0 * near * width_inv, 0.0, 0.0, 0.0),
        DVec4::new(0.0, 2.0 * near * height_inv, 0.0, 0.0),
        DVec4::new(
            (right + left) * width_inv,
            (top + bottom) * height_inv,
            -(far + near) * depth_inv,
            -1.0,
        ),
        DVec4::new(0.0, 0.0, -2.0 * far * near * depth_inv, 0.0),
    )
}

/// Projection matrix for a calibrated camera, so rendered geometry lines up
/// with the camera image.
///
/// Maps the pinhole parameters onto an off-axis frustum at the near plane.
/// The y offset is negated: the image row axis points opposite the GL y axis.
///
/// Reference: <http://ksimek.github.io/2013/06/03/calibrated_cameras_in_opengl/>
///
/// Example:
///
/// ```
/// use scenepose::camera::{projection_matrix, CameraIntrinsics, ClipPlanes};
///
/// let intrinsics = CameraIntrinsics::new(640, 480, 500.0, 500.0, 320.0, 240.0)?;
/// let projection = projection_matrix(&intrinsics, &ClipPlanes::default())?;
/// assert!((projection.x_axis.x - 1.5625).abs() < 1e-9);
/// # Ok::<(), scenepose::ScenePoseError>(())
/// ```
pub fn projection_matrix(intrinsics: &CameraIntrinsics, clip: &ClipPlanes) -> SceneResult<DMat4> {
    intrinsics.validate()?;

    let width = intrinsics.width as f64;
    let height = intrinsics.height as f64;

    let x_scale = clip.near / intrinsics.fx;
    let y_scale = clip.near / intrinsics.fy;
    let x_offset = (intrinsics.cx - width / 2.0) * x_scale;
    let y_offset = -(intrinsics.cy - height / 2.0) * y_scale;

    Ok(frustum(
        -x_scale * width / 2.0 - x_offset,
        x_scale * width / 2.0 - x_offset,
        -y_scale * height / 2.0 - y_offset,
        y_scale * height / 2.0 - y_offset,
        clip.near,
        clip.far,
    ))
}
