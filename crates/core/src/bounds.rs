//! Axis-aligned bounds of vertex collections and bounds alignment
//!
//! [`align_bounds_mat`] builds the affine transform that fits one bounding
//! box onto another: the source box is centered at the origin, normalized to
//! unit size, rotated by an optional offset, stretched to the target extents,
//! rotated into the target orientation and moved to the target center.

use crate::core_types::{Mat3, Mat4, Vec3, VecCollection};
use crate::error::{VecMathError, VecMathResult};
use crate::transform::{append_row_and_col, euler_to_rot_mat, to_scale_mat, to_transl_mat};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Axis-aligned bounding box of a vector collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest coordinate along each axis
    pub min: Vec3,
    /// Largest coordinate along each axis
    pub max: Vec3,
}

impl Bounds {
    /// Bounds with the given center and per-axis extents.
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        let half = extents * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Tightest bounds around `points`.
    ///
    /// # Errors
    ///
    /// Returns [`VecMathError::EmptyCollection`] if `points` is empty.
    pub fn from_points(points: &[Vec3]) -> VecMathResult<Self> {
        Self::fold(points.iter().copied())
    }

    /// Tightest bounds around the rows of a 3-column collection.
    ///
    /// # Errors
    ///
    /// Returns [`VecMathError::ShapeMismatch`] unless `vecs` has three
    /// columns, and [`VecMathError::EmptyCollection`] if it has no rows.
    pub fn from_collection(vecs: &VecCollection) -> VecMathResult<Self> {
        if vecs.ncols() != 3 {
            return Err(VecMathError::ShapeMismatch {
                expected: 3,
                actual: vecs.ncols(),
            });
        }
        Self::fold(vecs.row_iter().map(|row| Vec3::new(row[0], row[1], row[2])))
    }

    fn fold(mut points: impl Iterator<Item = Vec3>) -> VecMathResult<Self> {
        let first = points.next().ok_or(VecMathError::EmptyCollection)?;
        Ok(points.fold(Self { min: first, max: first }, |b, p| Self {
            min: b.min.inf(&p),
            max: b.max.sup(&p),
        }))
    }

    /// Size of the box along each axis (`max - min`).
    #[inline]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Midpoint of the box. Not necessarily one of the input points.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.max + self.min) * 0.5
    }
}

/// Extents and center of `points`, in that order.
///
/// # Errors
///
/// Returns [`VecMathError::EmptyCollection`] if `points` is empty.
pub fn bounds_and_center(points: &[Vec3]) -> VecMathResult<(Vec3, Vec3)> {
    let bounds = Bounds::from_points(points)?;
    Ok((bounds.extents(), bounds.center()))
}

/// Affine transform mapping the `source` box onto the `target` box.
///
/// `target_rot` orients the result (pass identity to stay axis-aligned) and
/// `rotation_offset` holds Euler angles applied to the normalized source
/// before it is stretched. Source axes with zero extent are left unscaled so
/// flat geometry does not divide by zero.
pub fn align_bounds_mat(
    source: &Bounds,
    target: &Bounds,
    target_rot: &Mat3,
    rotation_offset: &Vec3,
) -> Mat4 {
    let source_extents = source
        .extents()
        .map(|e| if e == 0.0 { 1.0 } else { e });
    trace!(?source_extents, target_extents = ?target.extents(), "aligning bounds");

    let linear = target_rot
        * to_scale_mat(&target.extents())
        * euler_to_rot_mat(rotation_offset)
        * to_scale_mat(&source_extents.map(f64::recip));

    to_transl_mat(&target.center()) * append_row_and_col(&linear) * to_transl_mat(&-source.center())
}
