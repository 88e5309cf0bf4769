//! Grid-based spatial lookup

pub mod spatial_hash;

pub use spatial_hash::{HasherConfig, SpatialHasher};
