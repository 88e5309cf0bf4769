//! Geometric primitives as raw vertex and face arrays

use crate::core_types::Vec3;

/// Quad face as four vertex indices.
pub type Quad = [usize; 4];

/// Vertices and faces of an axis-aligned cube of edge length one centered at
/// the origin.
///
/// Returns 8 vertices at `±0.5` and 6 quads, each wound counter-clockwise
/// when seen from outside the cube.
pub fn unit_cube() -> (Vec<Vec3>, Vec<Quad>) {
    let verts = vec![
        Vec3::new(0.5, 0.5, -0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(-0.5, -0.5, -0.5),
        Vec3::new(-0.5, 0.5, -0.5),
        Vec3::new(0.5, 0.5, 0.5),
        Vec3::new(0.5, -0.5, 0.5),
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(-0.5, 0.5, 0.5),
    ];

    let quads = vec![
        [0, 1, 2, 3],
        [4, 7, 6, 5],
        [0, 4, 5, 1],
        [1, 5, 6, 2],
        [2, 6, 7, 3],
        [4, 0, 3, 7],
    ];

    (verts, quads)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cube_shape() {
        let (verts, quads) = unit_cube();
        assert_eq!(verts.len(), 8);
        assert_eq!(quads.len(), 6);
        assert!(verts.iter().all(|v| v.iter().all(|c| c.abs() == 0.5)));
    }

    #[test]
    fn test_unit_cube_faces_point_outward() {
        let (verts, quads) = unit_cube();
        for &quad in &quads {
            let [a, b, c, _] = quad.map(|i| verts[i]);
            let normal = (b - a).cross(&(c - a));
            let centroid = quad.iter().map(|&i| verts[i]).sum::<Vec3>() / 4.0;
            assert!(normal.dot(&centroid) > 0.0, "quad {quad:?} faces inward");
        }
    }

    #[test]
    fn test_unit_cube_every_vertex_used_three_times() {
        let (_, quads) = unit_cube();
        let mut uses = [0; 8];
        for &i in quads.iter().flatten() {
            uses[i] += 1;
        }
        assert_eq!(uses, [3; 8]);
    }
}
