//! Enclosed volume and surface area.

use mesh_types::{Triangle, TriangleMesh};

/// Signed volume enclosed by the mesh.
///
/// Sums the signed tetrahedra formed by each triangle and the origin,
/// `Σ v0 · (v1 × v2) / 6` (divergence theorem).
///
/// # Returns
///
/// - Positive value: triangles wound counter-clockwise seen from outside
/// - Negative value: the mesh is inside-out
/// - Near-zero: the mesh is open or its winding is inconsistent
///
/// Stored facet normals play no part; only vertex order matters.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_measure::signed_volume;
///
/// let cube = unit_cube();
/// assert!((signed_volume(&cube) - 1.0).abs() < 1e-12);
/// assert!((signed_volume(&cube.flipped()) + 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn signed_volume(mesh: &TriangleMesh) -> f64 {
    triple_product_sum(mesh.triangles()) / 6.0
}

/// Volume enclosed by the mesh, in cubic mesh units.
///
/// The absolute value of [`signed_volume`], so a consistently inside-out mesh
/// still reports its true volume.
///
/// # Note
///
/// The result is exact for a closed, consistently wound mesh wherever it sits
/// relative to the origin. A mesh that mixes outward and inward triangles
/// silently cancels part of its own contribution and under-reports; an open
/// mesh gives a value that depends on its position. Neither case is detected
/// here.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, Vector3};
/// use mesh_measure::volume;
///
/// let cube = unit_cube().translated(Vector3::new(1000.0, 1000.0, 1000.0));
/// assert!((volume(&cube) - 1.0).abs() < 1e-6);
/// ```
#[inline]
#[must_use]
pub fn volume(mesh: &TriangleMesh) -> f64 {
    signed_volume(mesh).abs()
}

/// Total surface area, `Σ |(v1 − v0) × (v2 − v0)| / 2`.
///
/// Independent of winding and position.
#[must_use]
pub fn surface_area(mesh: &TriangleMesh) -> f64 {
    mesh.triangles().iter().map(Triangle::area).sum()
}

pub(crate) fn triple_product_sum(triangles: &[Triangle]) -> f64 {
    triangles.iter().map(Triangle::triple_product).sum()
}
