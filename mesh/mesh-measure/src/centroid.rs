//! Vertex centroid.

// Corner counts are far below 2^52.
#![allow(clippy::cast_precision_loss)]

use mesh_types::{Point3, TriangleMesh, Vector3};

/// Arithmetic mean of every triangle corner.
///
/// Each triangle contributes its three corners, so a vertex shared by several
/// triangles is counted once per triangle. This is an approximation meant
/// for placing a model in a viewer. It is **not** the center of mass: dense
/// tessellation pulls it toward detailed regions.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_measure::vertex_centroid;
///
/// let c = vertex_centroid(&unit_cube());
/// assert!(c.coords.norm() < 1e-12);
/// ```
#[must_use]
pub fn vertex_centroid(mesh: &TriangleMesh) -> Point3<f64> {
    let sum = mesh
        .corners()
        .fold(Vector3::zeros(), |acc, corner| acc + corner.coords);
    Point3::from(sum / mesh.corner_count() as f64)
}
