//! Single-pass mesh analysis.
//!
//! Computes volume, surface area, bounds and vertex centroid together. Large
//! meshes are folded per rayon task and the partial sums reduced, so the
//! parallel result can differ from the sequential one in the last few bits.

// Corner counts are far below 2^52.
#![allow(clippy::cast_precision_loss)]

use mesh_types::{Aabb, Point3, Triangle, TriangleMesh, Vector3};
use rayon::prelude::*;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::params::MeasureParams;

/// Geometric summary of a mesh.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_measure::analyze;
///
/// let analysis = analyze(&unit_cube());
/// assert!((analysis.volume - 1.0).abs() < 1e-12);
/// assert!(!analysis.is_inside_out());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeshAnalysis {
    /// Enclosed volume, always non-negative. See [`crate::volume`] for the
    /// winding caveat.
    pub volume: f64,
    /// Signed volume. Negative when the mesh is inside-out.
    pub signed_volume: f64,
    /// Total surface area.
    pub surface_area: f64,
    /// Axis-aligned bounds of every corner.
    pub bounds: Aabb,
    /// Mean of all triangle corners. A display approximation, not the
    /// center of mass.
    pub vertex_centroid: Point3<f64>,
    /// Number of triangles.
    pub triangle_count: usize,
}

impl MeshAnalysis {
    /// Bounding box extents.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::from_bounds(&self.bounds)
    }

    /// Whether the triangles wind inward overall.
    #[must_use]
    pub fn is_inside_out(&self) -> bool {
        self.signed_volume < 0.0
    }
}

/// Running sums over a run of triangles. Two partial sums merge into the sum
/// of both runs.
#[derive(Debug, Clone, Copy)]
struct Accumulator {
    triple_products: f64,
    doubled_area: f64,
    bounds: Aabb,
    corner_sum: Vector3<f64>,
    triangles: usize,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            triple_products: 0.0,
            doubled_area: 0.0,
            bounds: Aabb::empty(),
            corner_sum: Vector3::zeros(),
            triangles: 0,
        }
    }
}

impl Accumulator {
    fn add(mut self, tri: &Triangle) -> Self {
        self.triple_products += tri.triple_product();
        self.doubled_area += tri.normal_unnormalized().norm();
        for corner in &tri.vertices() {
            self.bounds.expand_to_include(corner);
            self.corner_sum += corner.coords;
        }
        self.triangles += 1;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            triple_products: self.triple_products + other.triple_products,
            doubled_area: self.doubled_area + other.doubled_area,
            bounds: self.bounds.union(&other.bounds),
            corner_sum: self.corner_sum + other.corner_sum,
            triangles: self.triangles + other.triangles,
        }
    }

    fn finish(self) -> MeshAnalysis {
        let signed_volume = self.triple_products / 6.0;
        let corners = (self.triangles * 3).max(1) as f64;

        MeshAnalysis {
            volume: signed_volume.abs(),
            signed_volume,
            surface_area: self.doubled_area * 0.5,
            bounds: self.bounds,
            vertex_centroid: Point3::from(self.corner_sum / corners),
            triangle_count: self.triangles,
        }
    }
}

/// Analyze a mesh with default [`MeasureParams`].
#[must_use]
pub fn analyze(mesh: &TriangleMesh) -> MeshAnalysis {
    analyze_with(mesh, &MeasureParams::default())
}

/// Analyze a mesh in one pass over its triangles.
///
/// Meshes with at least `params.parallel_threshold` triangles are split
/// across the rayon thread pool. Both paths agree within floating-point
/// tolerance; only the summation order differs.
///
/// # Example
///
/// ```
/// use mesh_types::unit_cube;
/// use mesh_measure::{analyze_with, MeasureParams};
///
/// let cube = unit_cube();
/// let seq = analyze_with(&cube, &MeasureParams::sequential());
/// let par = analyze_with(&cube, &MeasureParams::default().parallel_threshold(0));
/// assert!((seq.volume - par.volume).abs() < 1e-12);
/// ```
#[must_use]
pub fn analyze_with(mesh: &TriangleMesh, params: &MeasureParams) -> MeshAnalysis {
    let triangles = mesh.triangles();
    let parallel = params.is_parallel(triangles.len());

    let acc = if parallel {
        triangles
            .par_iter()
            .fold(Accumulator::default, Accumulator::add)
            .reduce(Accumulator::default, Accumulator::merge)
    } else {
        triangles
            .iter()
            .fold(Accumulator::default(), Accumulator::add)
    };

    let analysis = acc.finish();
    debug!(
        triangles = analysis.triangle_count,
        parallel,
        volume = analysis.volume,
        surface_area = analysis.surface_area,
        "analyzed mesh"
    );
    analysis
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{signed_volume, surface_area, vertex_centroid};
    use approx::assert_relative_eq;
    use mesh_types::{MeshBounds, unit_cube};

    /// Unit cubes stacked along X, each translated by its index.
    fn cube_row(count: usize) -> TriangleMesh {
        let triangles = (0..count)
            .flat_map(|i| {
                unit_cube()
                    .translated(Vector3::new(i as f64, 0.0, 0.0))
                    .into_triangles()
            })
            .collect();
        TriangleMesh::from_triangles(triangles).unwrap()
    }

    #[test]
    fn unit_cube_analysis() {
        let analysis = analyze(&unit_cube());

        assert_relative_eq!(analysis.volume, 1.0, epsilon = 1e-12);
        assert_relative_eq!(analysis.signed_volume, 1.0, epsilon = 1e-12);
        assert_relative_eq!(analysis.surface_area, 6.0, epsilon = 1e-12);
        assert_eq!(analysis.triangle_count, 12);
        assert_eq!(analysis.bounds.min, Point3::new(-0.5, -0.5, -0.5));
        assert_eq!(analysis.bounds.max, Point3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(analysis.vertex_centroid, Point3::origin(), epsilon = 1e-12);
    }

    #[test]
    fn translated_cube_analysis() {
        let offset = Vector3::new(1000.0, 1000.0, 1000.0);
        let analysis = analyze(&unit_cube().translated(offset));

        assert_relative_eq!(analysis.volume, 1.0, epsilon = 1e-6);
        assert_relative_eq!(analysis.surface_area, 6.0, epsilon = 1e-9);
        assert_relative_eq!(
            analysis.vertex_centroid,
            Point3::from(offset),
            epsilon = 1e-9
        );
        assert_relative_eq!(analysis.dimensions().width, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn matches_individual_functions() {
        let mesh = cube_row(5);
        let analysis = analyze(&mesh);

        assert_relative_eq!(analysis.signed_volume, signed_volume(&mesh), epsilon = 1e-9);
        assert_relative_eq!(analysis.surface_area, surface_area(&mesh), epsilon = 1e-9);
        assert_relative_eq!(analysis.vertex_centroid, vertex_centroid(&mesh), epsilon = 1e-9);
        assert_eq!(analysis.bounds, mesh.bounds());
    }

    #[test]
    fn inside_out_is_reported() {
        let analysis = analyze(&unit_cube().flipped());
        assert!(analysis.is_inside_out());
        assert_relative_eq!(analysis.volume, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mesh = cube_row(200);
        let seq = analyze_with(&mesh, &MeasureParams::sequential());
        let par = analyze_with(&mesh, &MeasureParams::default().parallel_threshold(1));

        assert_eq!(seq.triangle_count, 2400);
        assert_eq!(par.triangle_count, seq.triangle_count);
        assert_relative_eq!(seq.volume, 200.0, epsilon = 1e-9);
        assert_relative_eq!(par.volume, seq.volume, epsilon = 1e-9);
        assert_relative_eq!(par.surface_area, seq.surface_area, epsilon = 1e-9);
        assert_relative_eq!(par.vertex_centroid, seq.vertex_centroid, epsilon = 1e-9);
        assert_eq!(par.bounds, seq.bounds);
    }

    #[test]
    fn empty_accumulator_merges_as_identity() {
        let cube = unit_cube();
        let acc = cube
            .triangles()
            .iter()
            .fold(Accumulator::default(), Accumulator::add);
        let merged = Accumulator::default().merge(acc).finish();
        assert_eq!(merged, acc.finish());
    }
}
