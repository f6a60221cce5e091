//! Shared geometry traits.

use crate::Aabb;
use nalgebra::Point3;

/// Anything made of triangle corners that can be boxed.
///
/// Implemented for [`TriangleMesh`](crate::TriangleMesh) and for plain
/// triangle slices, so partial runs of a mesh can be bounded the same way.
pub trait MeshBounds {
    /// Axis-aligned box over every corner. Empty when there are no corners.
    fn bounds(&self) -> Aabb;

    /// Midpoint of [`bounds`](Self::bounds).
    ///
    /// Unlike a vertex centroid, this ignores how densely each region is
    /// tessellated.
    fn center(&self) -> Point3<f64> {
        self.bounds().center()
    }
}
