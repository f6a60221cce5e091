//! Bounding box and derived extents.

use mesh_types::{Aabb, MeshBounds, Point3, TriangleMesh, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Extents of a mesh's axis-aligned bounding box.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_measure::dimensions;
///
/// let dims = dimensions(&unit_cube());
///
/// assert!((dims.width - 1.0).abs() < 1e-10);
/// assert!((dims.depth - 1.0).abs() < 1e-10);
/// assert!((dims.height - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Bounding box minimum point.
    pub min: Point3<f64>,
    /// Bounding box maximum point.
    pub max: Point3<f64>,
    /// Width (X dimension).
    pub width: f64,
    /// Depth (Y dimension).
    pub depth: f64,
    /// Height (Z dimension).
    pub height: f64,
    /// Diagonal length of bounding box.
    pub diagonal: f64,
    /// Volume of bounding box.
    pub bounding_volume: f64,
    /// Center of bounding box.
    pub center: Point3<f64>,
}

impl Dimensions {
    /// Derive dimensions from a bounding box.
    #[must_use]
    pub fn from_bounds(bounds: &Aabb) -> Self {
        let size = bounds.size();
        let (width, depth, height) = (size.x, size.y, size.z);

        Self {
            min: bounds.min,
            max: bounds.max,
            width,
            depth,
            height,
            diagonal: bounds.diagonal(),
            bounding_volume: width * depth * height,
            center: bounds.center(),
        }
    }

    /// Get the size as a vector.
    #[must_use]
    pub const fn size(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.depth, self.height)
    }
}

/// Axis-aligned bounding box over every triangle corner.
///
/// Never empty, since the mesh always has at least one triangle.
#[inline]
#[must_use]
pub fn bounding_box(mesh: &TriangleMesh) -> Aabb {
    mesh.bounds()
}

/// Extract dimensions of a mesh.
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, TriangleMesh};
/// use mesh_measure::dimensions;
///
/// let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [5.0, 5.0, 0.0]);
/// let mesh = TriangleMesh::from_triangles(vec![tri]).unwrap();
///
/// let dims = dimensions(&mesh);
/// assert!((dims.width - 10.0).abs() < 1e-10);
/// assert!((dims.depth - 5.0).abs() < 1e-10);
/// assert!(dims.height.abs() < 1e-10);
/// ```
#[must_use]
pub fn dimensions(mesh: &TriangleMesh) -> Dimensions {
    Dimensions::from_bounds(&bounding_box(mesh))
}
