//! Core mesh types for the STL weight engine.
//!
//! - [`Triangle`] - three concrete vertex positions
//! - [`TriangleMesh`] - a non-empty, immutable triangle soup
//! - [`Aabb`] - axis-aligned bounding box
//!
//! # Units
//!
//! All coordinates are `f64` millimeters. Binary STL stores `f32`; parsers
//! widen on read.
//!
//! # Winding
//!
//! Triangles are counter-clockwise when viewed from outside, so a closed,
//! consistently wound mesh has positive signed volume. Nothing in this crate
//! enforces that: winding is whatever the source file provides.
//!
//! # Example
//!
//! ```
//! use mesh_types::{MeshBounds, Point3, Triangle, TriangleMesh};
//!
//! let mesh = TriangleMesh::from_triangles(vec![Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! )])
//! .unwrap();
//!
//! assert_eq!(mesh.triangle_count(), 1);
//! assert_eq!(mesh.bounds().max, Point3::new(1.0, 1.0, 0.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod mesh;
mod traits;
mod triangle;

pub use bounds::Aabb;
pub use mesh::{TriangleMesh, unit_cube};
pub use traits::MeshBounds;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
