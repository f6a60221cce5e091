//! Geometric measurements of triangle meshes.
//!
//! Everything here is a pure function of a [`mesh_types::TriangleMesh`]:
//!
//! - **Volume**: signed tetrahedron sum, see [`volume`] and [`signed_volume`]
//! - **Surface area**: sum of triangle areas
//! - **Bounds and dimensions**: axis-aligned box and derived extents
//! - **Vertex centroid**: mean of all triangle corners
//! - **Analysis**: all of the above in a single pass, optionally in parallel
//!
//! Units follow the input. STL files are in millimetres by convention, so
//! volumes come out in mm³ and areas in mm².
//!
//! # Example
//!
//! ```
//! use mesh_types::unit_cube;
//! use mesh_measure::{analyze, dimensions};
//!
//! let cube = unit_cube();
//!
//! let analysis = analyze(&cube);
//! assert!((analysis.volume - 1.0).abs() < 1e-12);
//! assert!((analysis.surface_area - 6.0).abs() < 1e-12);
//! assert_eq!(analysis.triangle_count, 12);
//!
//! let dims = dimensions(&cube);
//! assert!((dims.height - 1.0).abs() < 1e-12);
//! ```
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod analysis;
mod centroid;
mod dimensions;
mod params;
mod volume;

pub use analysis::{MeshAnalysis, analyze, analyze_with};
pub use centroid::vertex_centroid;
pub use dimensions::{Dimensions, bounding_box, dimensions};
pub use params::MeasureParams;
pub use volume::{signed_volume, surface_area, volume};

/// Number of triangles in the mesh.
///
/// Always at least 1, since a [`mesh_types::TriangleMesh`] is never empty.
#[inline]
#[must_use]
pub fn triangle_count(mesh: &mesh_types::TriangleMesh) -> usize {
    mesh.triangle_count()
}

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
