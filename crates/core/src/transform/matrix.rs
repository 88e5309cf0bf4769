//! Builders for 3x3 linear and 4x4 affine matrices
//!
//! Rotations use the X, Y, Z Euler convention in radians, composed as
//! `Rz * Ry * Rx` (X is applied first).

use crate::core_types::{Mat3, Mat4, Vec3};
use nalgebra::Rotation3;
use serde::{Deserialize, Serialize};

/// Translation matrix for translation vector `vec`.
///
/// ```
/// use vecmath_core::core_types::Vec3;
/// use vecmath_core::transform::to_transl_mat;
///
/// let mat = to_transl_mat(&Vec3::new(7.0, 8.0, 9.0));
/// assert_eq!(mat[(0, 3)], 7.0);
/// assert_eq!(mat[(2, 3)], 9.0);
/// assert_eq!(mat[(3, 3)], 1.0);
/// ```
#[inline]
pub fn to_transl_mat(vec: &Vec3) -> Mat4 {
    Mat4::new_translation(vec)
}

/// Diagonal scale matrix for per-axis scale factors `vec`.
#[inline]
pub fn to_scale_mat(vec: &Vec3) -> Mat3 {
    Mat3::from_diagonal(vec)
}

/// 3x3 rotation matrix for Euler angles `thetas` (radians about X, Y, Z).
#[inline]
pub fn euler_to_rot_mat(thetas: &Vec3) -> Mat3 {
    Rotation3::from_euler_angles(thetas.x, thetas.y, thetas.z).into_inner()
}

/// Embed `mat` into the upper-left block of a 4x4 matrix.
///
/// The added row and column are zero except for a one in the bottom-right
/// entry, which turns a linear map into the equivalent affine transform.
#[inline]
pub fn append_row_and_col(mat: &Mat3) -> Mat4 {
    mat.to_homogeneous()
}

/// Compose translation, Euler rotation and scale into one affine transform.
///
/// Scale is applied first, then rotation, then translation.
pub fn make_transf_mat(transl: &Vec3, rot: &Vec3, scale: &Vec3) -> Mat4 {
    to_transl_mat(transl) * append_row_and_col(&(euler_to_rot_mat(rot) * to_scale_mat(scale)))
}

/// Translation / rotation / scale triple describing an affine transform.
///
/// Missing fields deserialize to their identity values, so `{}` is the
/// identity transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    /// Offset along X, Y, Z
    pub translation: Vec3,
    /// Euler angles about X, Y, Z in radians
    pub rotation: Vec3,
    /// Scale factors along X, Y, Z
    pub scale: Vec3,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::repeat(1.0),
        }
    }
}

impl TransformParams {
    /// Pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    /// The affine matrix these parameters describe.
    pub fn to_matrix(&self) -> Mat4 {
        make_transf_mat(&self.translation, &self.rotation, &self.scale)
    }
}
