//! Voxel spatial hash for nearest-point queries
//!
//! Points are quantized onto a voxel grid whose resolution is derived from
//! the point count and the extents of the data. Every point is registered in
//! its own voxel and in the 26 surrounding ones, so a single hash lookup
//! returns all points within one voxel in every direction.

use crate::bounds::Bounds;
use crate::core_types::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Quantized voxel coordinate.
pub type Cell = [i64; 3];

/// Resolution heuristic for [`SpatialHasher`].
///
/// The target number of voxels along an axis is
/// `multiplier * point_count ^ exponent`. The defaults grow the grid with the
/// cube root of the point count, keeping the expected number of points per
/// voxel roughly constant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    /// Scale applied to the point-count term
    pub multiplier: f64,
    /// Exponent applied to the point count
    pub exponent: f64,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            multiplier: 3.0,
            exponent: 1.0 / 3.0,
        }
    }
}

impl HasherConfig {
    /// Target voxel count along one axis for `count` points.
    pub fn resolution(&self, count: usize) -> f64 {
        self.multiplier * (count as f64).powf(self.exponent)
    }
}

/// Spatial hash over a fixed set of 3D points.
#[derive(Debug, Clone)]
pub struct SpatialHasher {
    points: Vec<Vec3>,
    /// Voxels per unit length; `round(p * cell_factor)` is the voxel of `p`.
    cell_factor: f64,
    cells: FxHashMap<Cell, Vec<usize>>,
}

impl SpatialHasher {
    /// Build the hash for `points` using the default [`HasherConfig`].
    pub fn new(points: Vec<Vec3>) -> Self {
        Self::with_config(points, &HasherConfig::default())
    }

    /// Build the hash for `points`.
    ///
    /// The voxel factor is the mean over all axes of
    /// `resolution / extent`; axes along which the data is flat contribute
    /// zero.
    pub fn with_config(points: Vec<Vec3>, config: &HasherConfig) -> Self {
        let cell_factor = match Bounds::from_points(&points) {
            Ok(bounds) => {
                let res = config.resolution(points.len());
                let per_axis = bounds
                    .extents()
                    .map(|e| if e == 0.0 { 0.0 } else { res / e });
                per_axis.mean()
            }
            Err(_) => 0.0,
        };

        let mut cells: FxHashMap<Cell, Vec<usize>> = FxHashMap::default();
        for (i, p) in points.iter().enumerate() {
            let [x, y, z] = quantize_point(p, cell_factor);
            for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        cells.entry([x + dx, y + dy, z + dz]).or_default().push(i);
                    }
                }
            }
        }

        debug!(
            points = points.len(),
            cells = cells.len(),
            cell_factor,
            "built spatial hash"
        );
        Self {
            points,
            cell_factor,
            cells,
        }
    }

    /// Voxel coordinate of `p`.
    #[inline]
    pub fn quantize(&self, p: &Vec3) -> Cell {
        quantize_point(p, self.cell_factor)
    }

    /// Indices of all points registered in the voxel of `p`.
    ///
    /// These are the points whose voxel is at most one step away from that
    /// of `p` along every axis. Empty if no point is nearby.
    pub fn find_close(&self, p: &Vec3) -> &[usize] {
        match self.cells.get(&self.quantize(p)) {
            Some(indices) => indices,
            None => &[],
        }
    }

    /// Index of the point closest to `p`, or `None` if the hash is empty.
    ///
    /// The nearby candidates from [`find_close`](Self::find_close) are tried
    /// first. Any point outside them is more than one voxel length away, so a
    /// candidate within that distance is the exact answer; otherwise every
    /// point is scanned.
    pub fn find_closest(&self, p: &Vec3) -> Option<usize> {
        if let Some((i, dist_sq)) = self.nearest_of(p, self.find_close(p).iter().copied()) {
            let cell_len = self.cell_factor.recip();
            if dist_sq <= cell_len * cell_len {
                return Some(i);
            }
        }
        trace!("no candidate within one voxel, scanning all points");
        self.nearest_of(p, 0..self.points.len()).map(|(i, _)| i)
    }

    fn nearest_of(&self, p: &Vec3, indices: impl Iterator<Item = usize>) -> Option<(usize, f64)> {
        indices
            .map(|i| (i, (self.points[i] - p).norm_squared()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// The hashed points, in insertion order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of hashed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points were hashed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Voxels per unit length.
    pub fn cell_factor(&self) -> f64 {
        self.cell_factor
    }

    /// Number of occupied voxels.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Quantized coordinates stay one step inside the `i64` range so that all
/// neighbour offsets are representable.
const CELL_LIMIT: i64 = i64::MAX - 1;

fn quantize_point(p: &Vec3, cell_factor: f64) -> Cell {
    // `as` saturates out-of-range floats; NaN maps to 0.
    let q = (p * cell_factor).map(|c| (c.round() as i64).clamp(-CELL_LIMIT, CELL_LIMIT));
    [q.x, q.y, q.z]
}
