//! Triangle-soup mesh.

use crate::{Aabb, MeshBounds, Triangle};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::Serialize;

/// A non-empty, immutable triangle soup.
///
/// Triangles are kept in the order they were supplied (file order for
/// parsed meshes). Vertices are not shared or welded: every triangle owns its
/// three corners, exactly as STL stores them.
///
/// There is no mutation API. Operations such as [`TriangleMesh::translated`]
/// build a new mesh.
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, TriangleMesh};
///
/// let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
/// let mesh = TriangleMesh::from_triangles(vec![tri]).unwrap();
/// assert_eq!(mesh.triangle_count(), 1);
///
/// assert!(TriangleMesh::from_triangles(Vec::new()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    /// Build a mesh from its triangles.
    ///
    /// Returns `None` if `triangles` is empty.
    #[must_use]
    pub fn from_triangles(triangles: Vec<Triangle>) -> Option<Self> {
        if triangles.is_empty() {
            None
        } else {
            Some(Self { triangles })
        }
    }

    /// The triangles, in insertion order.
    #[inline]
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Number of triangles. Always at least 1.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of triangle corners (three per triangle, duplicates included).
    #[inline]
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Iterate over every triangle corner in order.
    pub fn corners(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.triangles.iter().flat_map(Triangle::vertices)
    }

    /// Flat `[x, y, z, ...]` positions, three corners per triangle.
    ///
    /// Triangle `i` uses corners `3i`, `3i + 1` and `3i + 2`, which is the
    /// layout viewers expect for non-indexed draws.
    #[must_use]
    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.corners().map(|p| [p.x, p.y, p.z]).collect()
    }

    /// Consume the mesh and return its triangles.
    #[must_use]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// A copy of this mesh with every vertex moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vector3<f64>) -> Self {
        Self {
            triangles: self
                .triangles
                .iter()
                .map(|tri| tri.translated(&offset))
                .collect(),
        }
    }

    /// A copy of this mesh with every triangle's winding reversed.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            triangles: self.triangles.iter().map(Triangle::reversed).collect(),
        }
    }
}

impl MeshBounds for TriangleMesh {
    fn bounds(&self) -> Aabb {
        self.triangles().bounds()
    }
}

impl MeshBounds for [Triangle] {
    fn bounds(&self) -> Aabb {
        let mut aabb = Aabb::empty();
        for tri in self {
            for corner in &tri.vertices() {
                aabb.expand_to_include(corner);
            }
        }
        aabb
    }
}

/// Build a closed unit cube (edge length 1) centered at the origin.
///
/// Corners sit at ±0.5 on every axis. The 12 triangles are wound
/// counter-clockwise seen from outside, so the signed volume is positive.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.triangle_count(), 12);
/// ```
#[must_use]
pub fn unit_cube() -> TriangleMesh {
    const C: [[f64; 3]; 8] = [
        [-0.5, -0.5, -0.5], // 0
        [0.5, -0.5, -0.5],  // 1
        [0.5, 0.5, -0.5],   // 2
        [-0.5, 0.5, -0.5],  // 3
        [-0.5, -0.5, 0.5],  // 4
        [0.5, -0.5, 0.5],   // 5
        [0.5, 0.5, 0.5],    // 6
        [-0.5, 0.5, 0.5],   // 7
    ];
    const FACES: [[usize; 3]; 12] = [
        // bottom (-Z)
        [0, 2, 1],
        [0, 3, 2],
        // top (+Z)
        [4, 5, 6],
        [4, 6, 7],
        // front (-Y)
        [0, 1, 5],
        [0, 5, 4],
        // back (+Y)
        [3, 7, 6],
        [3, 6, 2],
        // left (-X)
        [0, 4, 7],
        [0, 7, 3],
        // right (+X)
        [1, 2, 6],
        [1, 6, 5],
    ];

    let triangles = FACES
        .iter()
        .map(|&[a, b, c]| Triangle::from_arrays(C[a], C[b], C[c]))
        .collect();
    TriangleMesh { triangles }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> TriangleMesh {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [10.0, 5.0, 3.0], [-2.0, 8.0, 1.0]);
        TriangleMesh { triangles: vec![tri] }
    }

    #[test]
    fn empty_triangle_list_is_rejected() {
        assert!(TriangleMesh::from_triangles(Vec::new()).is_none());
    }

    #[test]
    fn insertion_order_is_preserved() {
        let a = Triangle::from_arrays([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let b = Triangle::from_arrays([5.0; 3], [6.0, 5.0, 5.0], [5.0, 6.0, 5.0]);
        let mesh = TriangleMesh::from_triangles(vec![b, a]);
        let mesh = mesh.map(TriangleMesh::into_triangles).unwrap_or_default();
        assert_eq!(mesh, vec![b, a]);
    }

    #[test]
    fn mesh_bounds() {
        let bounds = single_triangle().bounds();
        assert_eq!(bounds.min, Point3::new(-2.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(10.0, 8.0, 3.0));
    }

    #[test]
    fn corners_follow_triangle_order() {
        let cube = unit_cube();
        assert_eq!(cube.corner_count(), 36);
        assert_eq!(cube.corners().count(), 36);
        let positions = cube.positions();
        assert_eq!(positions.len(), 36);
        assert_eq!(positions[0], [-0.5, -0.5, -0.5]);
        assert_eq!(positions[1], [0.5, 0.5, -0.5]);
    }

    #[test]
    fn unit_cube_is_centered() {
        let cube = unit_cube();
        let bounds = cube.bounds();
        assert_eq!(bounds.min, Point3::new(-0.5, -0.5, -0.5));
        assert_eq!(bounds.max, Point3::new(0.5, 0.5, 0.5));
        assert_eq!(cube.center(), Point3::origin());
    }

    #[test]
    fn empty_slice_has_empty_bounds() {
        let none: &[Triangle] = &[];
        assert!(none.bounds().is_empty());
    }

    #[test]
    fn translated_moves_bounds() {
        let moved = unit_cube().translated(Vector3::new(1000.0, 1000.0, 1000.0));
        let bounds = moved.bounds();
        assert_eq!(bounds.min, Point3::new(999.5, 999.5, 999.5));
        assert_eq!(bounds.max, Point3::new(1000.5, 1000.5, 1000.5));
    }

    #[test]
    fn flipped_reverses_each_triangle() {
        let cube = unit_cube();
        let flipped = cube.flipped();
        assert_eq!(flipped.triangle_count(), cube.triangle_count());
        for (a, b) in cube.triangles().iter().zip(flipped.triangles()) {
            assert_eq!(a.reversed(), *b);
        }
    }
}
