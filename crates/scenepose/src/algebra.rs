//! Shared numeric helpers over the glam f64 types.
//!
//! All transforms in this crate are 4x4 homogeneous matrices in column-major
//! order with the translation in the last column, and all pose rotations have
//! unit scale. Matrix products return new values; nothing here mutates its
//! inputs.

use glam::{DMat4, DQuat, DVec3};

use crate::error::{SceneResult, ScenePoseError};

/// Squared-length threshold below which a vector or quaternion is degenerate.
pub const DEGENERATE_EPS: f64 = 1e-10;

/// Normalize a vector, failing on (near) zero length.
pub fn try_normalize(v: DVec3) -> SceneResult<DVec3> {
    let len_sq = v.length_squared();
    if len_sq < DEGENERATE_EPS {
        return Err(ScenePoseError::DegenerateInput(
            "cannot normalize a zero-length vector",
        ));
    }
    Ok(v / len_sq.sqrt())
}

/// Normalize a quaternion, failing on (near) zero length.
pub fn try_normalize_quat(q: DQuat) -> SceneResult<DQuat> {
    let len_sq = q.length_squared();
    if len_sq < DEGENERATE_EPS {
        return Err(ScenePoseError::DegenerateInput(
            "cannot normalize a zero-length quaternion",
        ));
    }
    Ok(q / len_sq.sqrt())
}

/// Pack a rotation and a translation into a rigid transform with unit scale.
pub fn rigid_matrix(rotation: DQuat, translation: DVec3) -> DMat4 {
    DMat4::from_scale_rotation_translation(DVec3::ONE, rotation, translation)
}

/// Translation column of a homogeneous transform.
pub fn translation_of(m: &DMat4) -> DVec3 {
    m.w_axis.truncate()
}
