//! End-to-end weight report.

use std::path::Path;

use mesh_io::{load_stl, parse_stl};
use mesh_material::{Material, MaterialWeight, compare_across_materials};
use mesh_measure::{Dimensions, MeshAnalysis, analyze_with};
use mesh_types::TriangleMesh;
use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::WeighResult;

/// Everything known about a model's weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeightReport {
    /// Geometric measurements of the mesh.
    pub analysis: MeshAnalysis,
    /// Bounding box extents.
    pub dimensions: Dimensions,
    /// Weight in the configured primary material.
    pub primary: MaterialWeight,
    /// Weight in every registered material, in registry order.
    pub comparison: Vec<MaterialWeight>,
}

impl WeightReport {
    /// Measure and weigh an already-parsed mesh.
    ///
    /// # Errors
    ///
    /// Returns [`WeighError::Material`](crate::WeighError::Material) if the
    /// measured volume cannot be weighed.
    pub fn from_mesh(mesh: &TriangleMesh, config: &ReportConfig) -> WeighResult<Self> {
        let analysis = analyze_with(mesh, &config.measure);
        let primary = MaterialWeight::new(analysis.volume, config.primary_material)?;
        let comparison = compare_across_materials(analysis.volume)?;

        info!(
            triangles = analysis.triangle_count,
            volume_mm3 = analysis.volume,
            material = config.primary_material.id(),
            grams = primary.weight.grams,
            "weighed mesh"
        );

        Ok(Self {
            dimensions: analysis.dimensions(),
            analysis,
            primary,
            comparison,
        })
    }

    /// Volume in cm³.
    #[must_use]
    pub fn volume_cm3(&self) -> f64 {
        self.analysis.volume / 1000.0
    }

    /// The comparison row for `material`.
    #[must_use]
    pub fn weight_in(&self, material: Material) -> Option<&MaterialWeight> {
        self.comparison.iter().find(|row| row.material == material)
    }
}

/// Parse an in-memory STL and weigh it.
///
/// # Errors
///
/// Returns [`WeighError::Io`](crate::WeighError::Io) if the bytes are not a
/// usable STL, otherwise fails like [`WeightReport::from_mesh`].
///
/// # Example
///
/// ```
/// use mesh_weight::{ReportConfig, analyze_stl};
///
/// let stl = b"solid t
///   facet normal 0 0 0
///     outer loop
///       vertex 0 0 0
///       vertex 0 10 0
///       vertex 10 0 0
///     endloop
///   endfacet
/// endsolid t";
///
/// // A single open triangle through the origin encloses no volume.
/// let report = analyze_stl(stl, &ReportConfig::default()).unwrap();
/// assert_eq!(report.analysis.triangle_count, 1);
/// assert!(report.primary.weight.grams.abs() < 1e-12);
/// ```
pub fn analyze_stl(bytes: &[u8], config: &ReportConfig) -> WeighResult<WeightReport> {
    let mesh = parse_stl(bytes)?;
    WeightReport::from_mesh(&mesh, config)
}

/// Load an STL file and weigh it.
///
/// # Errors
///
/// Fails like [`analyze_stl`], and with
/// [`IoError::FileNotFound`](mesh_io::IoError::FileNotFound) or
/// [`IoError::Io`](mesh_io::IoError::Io) if the file cannot be read.
pub fn analyze_stl_file<P: AsRef<Path>>(
    path: P,
    config: &ReportConfig,
) -> WeighResult<WeightReport> {
    let mesh = load_stl(path)?;
    WeightReport::from_mesh(&mesh, config)
}
