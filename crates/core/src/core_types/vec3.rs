//! Vector and matrix type aliases for 3D points, directions and transforms.

use nalgebra::{DMatrix, Matrix3, Matrix4, Vector3, Vector4};

/// 3D vector type for points, displacements and scale factors.
///
/// Double precision throughout: vertex data pulled out of modeling tools is
/// `f64`, and round-tripping through homogeneous coordinates should not lose
/// precision.
pub type Vec3 = Vector3<f64>;

/// Homogeneous 3D vector (`w` last).
pub type Vec4 = Vector4<f64>;

/// Linear part of an affine transform (rotation, scale, shear).
pub type Mat3 = Matrix3<f64>;

/// 4x4 affine transform, translation in the rightmost column.
pub type Mat4 = Matrix4<f64>;

/// Collection of equally sized vectors stored one vector per row.
pub type VecCollection<T = f64> = DMatrix<T>;
