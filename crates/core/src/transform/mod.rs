//! Vector normalization and affine transformation of points and vectors
//!
//! Every function here is pure: inputs are borrowed, results are freshly
//! allocated. Collections are [`VecCollection`]s with one vector per row, so
//! row `i` of a result always corresponds to row `i` of the input.
//!
//! Points and displacements are transformed differently:
//! - [`transf_point`] / [`transf_vecs`] embed into homogeneous coordinates
//!   with `w = 1`, so the translation column of the matrix applies.
//! - [`transf_dist`] uses only the upper-left 3x3 block, so a displacement
//!   is unaffected by translation.

pub mod matrix;

use crate::core_types::{Mat4, Vec3, VecCollection};
use crate::error::{VecMathError, VecMathResult};
use nalgebra::{Matrix4, RealField, SVector, Scalar, Vector3, Vector4};
use num_traits::One;
use rayon::prelude::*;
use tracing::trace;

pub use matrix::{
    append_row_and_col, euler_to_rot_mat, make_transf_mat, to_scale_mat, to_transl_mat,
    TransformParams,
};

/// Below this many points [`transf_points`] stays on the calling thread.
const PARALLEL_THRESHOLD: usize = 4096;

/// Rescale `v` to unit Euclidean length.
///
/// A vector of length exactly zero is returned unchanged instead of being
/// divided by zero, so degenerate input never turns into NaN.
#[inline]
pub fn normalize<T: RealField + Copy, const D: usize>(v: &SVector<T, D>) -> SVector<T, D> {
    let len = v.norm();
    if len == nalgebra::zero() {
        *v
    } else {
        v / len
    }
}

/// Embed a collection of `D`-dimensional vectors into homogeneous
/// coordinates.
///
/// Returns a new `N x (D + 1)` collection whose first `D` columns equal
/// `vecs` and whose last column is all ones. Works for any scalar type with a
/// multiplicative identity, integers included.
///
/// ```
/// use vecmath_core::transform::homog_vecs;
/// use nalgebra::DMatrix;
///
/// let vecs = DMatrix::from_row_slice(2, 3, &[0, 1, 2, 3, 4, 5]);
/// let homog = homog_vecs(&vecs);
/// assert_eq!(homog, DMatrix::from_row_slice(2, 4, &[0, 1, 2, 1, 3, 4, 5, 1]));
/// ```
pub fn homog_vecs<T: Scalar + One>(vecs: &VecCollection<T>) -> VecCollection<T> {
    let (rows, cols) = vecs.shape();
    VecCollection::from_fn(rows, cols + 1, |r, c| {
        if c < cols {
            vecs[(r, c)].clone()
        } else {
            T::one()
        }
    })
}

/// Apply an affine transform to every 3D vector of a collection.
///
/// Each row is homogenized with `w = 1`, multiplied by `mat`, and the
/// trailing homogeneous coordinate is dropped again. Row order is preserved.
///
/// # Errors
///
/// Returns [`VecMathError::ShapeMismatch`] if `vecs` does not have exactly
/// three columns.
pub fn transf_vecs<T: RealField + Copy>(
    mat: &Matrix4<T>,
    vecs: &VecCollection<T>,
) -> VecMathResult<VecCollection<T>> {
    if vecs.ncols() != 3 {
        return Err(VecMathError::ShapeMismatch {
            expected: 3,
            actual: vecs.ncols(),
        });
    }
    trace!(rows = vecs.nrows(), "transforming vector collection");

    // (mat * homogᵀ)ᵀ == homog * matᵀ
    let transformed = homog_vecs(vecs) * mat.transpose();
    Ok(transformed.columns(0, 3).into_owned())
}

/// Apply an affine transform to a slice of points.
///
/// Same semantics as [`transf_vecs`] on fixed-size points. Large inputs are
/// split across the rayon thread pool; output order always matches input
/// order.
pub fn transf_points(mat: &Mat4, points: &[Vec3]) -> Vec<Vec3> {
    if points.len() < PARALLEL_THRESHOLD {
        points.iter().map(|p| transf_point(mat, p)).collect()
    } else {
        trace!(points = points.len(), "transforming points in parallel");
        points.par_iter().map(|p| transf_point(mat, p)).collect()
    }
}

/// Apply an affine transform to a single point, translation included.
#[inline]
pub fn transf_point<T: RealField + Copy>(mat: &Matrix4<T>, point: &Vector3<T>) -> Vector3<T> {
    let homog = Vector4::new(point.x, point.y, point.z, T::one());
    (mat * homog).xyz()
}

/// Apply an affine transform to a displacement or direction vector.
///
/// Only the upper-left 3x3 block of `mat` is used; translation is ignored.
#[inline]
pub fn transf_dist<T: RealField + Copy>(mat: &Matrix4<T>, dist: &Vector3<T>) -> Vector3<T> {
    mat.fixed_view::<3, 3>(0, 0) * dist
}
