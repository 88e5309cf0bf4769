//! Core types shared by every module

pub mod vec3;

pub use vec3::{Mat3, Mat4, Vec3, Vec4, VecCollection};
