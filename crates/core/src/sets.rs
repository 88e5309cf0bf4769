//! Set difference over vector collections
//!
//! Rows are compared by exact value. Each row is mapped to a key of exact
//! per-coordinate keys and looked up in a hash set, so the difference costs
//! `O(N + M)` and works for negative and fractional coordinates alike.

use crate::core_types::VecCollection;
use crate::error::{VecMathError, VecMathResult};
use nalgebra::Scalar;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use tracing::debug;

/// A coordinate type whose values can be compared exactly through a hashable
/// key.
///
/// Two coordinates are equal iff their keys are equal. A coordinate that is
/// not equal to itself (floating-point NaN) has no key.
pub trait ExactKey: Scalar {
    /// Hashable representation of a coordinate.
    type Key: Eq + Hash;

    /// The key for this coordinate, or `None` if it never compares equal.
    fn exact_key(&self) -> Option<Self::Key>;
}

macro_rules! impl_exact_key_int {
    ($($t:ty),*) => {
        $(
            impl ExactKey for $t {
                type Key = $t;

                #[inline]
                fn exact_key(&self) -> Option<$t> {
                    Some(*self)
                }
            }
        )*
    };
}

impl_exact_key_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_exact_key_float {
    ($($t:ty => $bits:ty),*) => {
        $(
            impl ExactKey for $t {
                type Key = $bits;

                #[inline]
                fn exact_key(&self) -> Option<$bits> {
                    if self.is_nan() {
                        None
                    } else if *self == 0.0 {
                        // -0.0 == 0.0
                        Some(0)
                    } else {
                        Some(self.to_bits())
                    }
                }
            }
        )*
    };
}

impl_exact_key_float!(f32 => u32, f64 => u64);

fn row_key<'a, T: ExactKey>(row: impl Iterator<Item = &'a T>) -> Option<Vec<T::Key>> {
    row.map(ExactKey::exact_key).collect()
}

/// Remove from `a` every row that also appears in `b` (`a - b` in set
/// terms).
///
/// Kept rows stay in their original order. A row is dropped if an identical
/// row exists anywhere in `b`, no matter how often. Rows of `b` not found in
/// `a` have no effect. If `b` has no rows, `a` is returned as is.
///
/// ```
/// use nalgebra::DMatrix;
/// use vecmath_core::sets::complement;
///
/// let a = DMatrix::from_row_slice(3, 2, &[1, 2, 3, 4, 5, 6]);
/// let b = DMatrix::from_row_slice(1, 2, &[3, 4]);
/// let diff = complement(&a, &b).unwrap();
/// assert_eq!(diff, DMatrix::from_row_slice(2, 2, &[1, 2, 5, 6]));
/// ```
///
/// # Errors
///
/// Returns [`VecMathError::ShapeMismatch`] if `b` is non-empty and its
/// vectors do not have the same dimension as those of `a`.
pub fn complement<T: ExactKey>(
    a: &VecCollection<T>,
    b: &VecCollection<T>,
) -> VecMathResult<VecCollection<T>> {
    if b.nrows() == 0 {
        return Ok(a.clone());
    }
    if a.ncols() != b.ncols() {
        return Err(VecMathError::ShapeMismatch {
            expected: a.ncols(),
            actual: b.ncols(),
        });
    }

    let remove: FxHashSet<Vec<T::Key>> = b.row_iter().filter_map(|row| row_key(row.iter())).collect();

    let keep: Vec<usize> = a
        .row_iter()
        .enumerate()
        .filter(|(_, row)| match row_key(row.iter()) {
            Some(key) => !remove.contains(&key),
            None => true,
        })
        .map(|(i, _)| i)
        .collect();

    debug!(
        kept = keep.len(),
        removed = a.nrows() - keep.len(),
        "computed vector set difference"
    );
    Ok(a.select_rows(keep.iter()))
}
