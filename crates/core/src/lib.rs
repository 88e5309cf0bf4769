//! Vector and Transform Math for 3D Content Tools
//!
//! A small, stateless geometry library over 3D vectors, vector collections
//! and 4x4 affine matrices, built on `nalgebra`.
//!
//! ## Core operations
//!
//! - Normalization that leaves zero-length vectors untouched
//! - Homogeneous-coordinate embedding and point / displacement transforms
//! - Exact set difference over collections of row vectors
//! - Linear interpolation, inverse interpolation and clamped variants
//!
//! ## Supporting geometry
//!
//! - Translation / scale / Euler rotation matrix builders
//! - Bounding boxes and the transform that aligns one box onto another
//! - A voxel spatial hash for nearest-point lookup
//! - The unit cube primitive
//!
//! Every function is pure and safe to call from any thread. Diagnostics are
//! emitted through `tracing`; installing a subscriber is up to the caller.
//!
//! ```
//! use vecmath_core::{transf_dist, transf_point, to_transl_mat, Vec3};
//!
//! let mat = to_transl_mat(&Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(transf_point(&mat, &Vec3::zeros()), Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(transf_dist(&mat, &Vec3::x()), Vec3::x());
//! ```

// Core types and errors
pub mod core_types;
pub mod error;

// Vector math
pub mod interp;
pub mod sets;
pub mod transform;

// Supporting geometry
pub mod bounds;
pub mod grid;
pub mod primitives;

// Re-export core types
pub use core_types::{Mat3, Mat4, Vec3, Vec4, VecCollection};
pub use error::{VecMathError, VecMathResult};

// Re-export vector math
pub use interp::{
    checked_invlerp, invlerp, invlerp_scalar, invlerpclip, invlerpclip_scalar, lerp, lerp_scalar,
    lerpclip, lerpclip_scalar, Interpolate,
};
pub use sets::{complement, ExactKey};
pub use transform::{
    append_row_and_col, euler_to_rot_mat, homog_vecs, make_transf_mat, normalize, to_scale_mat,
    to_transl_mat, transf_dist, transf_point, transf_points, transf_vecs, TransformParams,
};

// Re-export supporting geometry
pub use bounds::{align_bounds_mat, bounds_and_center, Bounds};
pub use grid::{HasherConfig, SpatialHasher};
pub use primitives::unit_cube;
