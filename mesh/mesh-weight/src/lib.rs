//! Weight estimates for jewelry models from STL files.
//!
//! This umbrella crate re-exports the `mesh-*` crates behind the estimate
//! and adds the end-to-end pipeline: parse the STL, measure the mesh, then
//! weigh its volume in the chosen metal and in every other registered metal.
//!
//! # Quick Start
//!
//! ```no_run
//! use mesh_weight::prelude::*;
//!
//! let config = ReportConfig::default().primary_material(Material::Platinum950);
//! let report = analyze_stl_file("ring.stl", &config).unwrap();
//!
//! println!("volume: {:.2} mm³", report.analysis.volume);
//! println!(
//!     "{}: {:.3} g ({:.3} dwt)",
//!     report.primary.material,
//!     report.primary.weight.grams,
//!     report.primary.weight.pennyweight,
//! );
//! for row in &report.comparison {
//!     println!("{:>18}: {:.3} g", row.material, row.weight.grams);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `TriangleMesh`, `Triangle`, `Aabb`
//! - [`io`] - Binary and ASCII STL parsing
//! - [`measure`] - Volume, surface area, bounds, centroid
//! - [`material`] - Density registry and weight units
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` on reports and their parts

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod report;

pub use config::ReportConfig;
pub use error::{WeighError, WeighResult};
pub use report::{WeightReport, analyze_stl, analyze_stl_file};

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `TriangleMesh`, `Triangle`, `Aabb`.
pub use mesh_types as types;

/// Binary and ASCII STL parsing.
pub use mesh_io as io;

/// Volume, surface area, bounds and vertex centroid.
pub use mesh_measure as measure;

/// Material densities and weight conversions.
pub use mesh_material as material;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for weight estimation.
///
/// # Usage
///
/// ```
/// use mesh_weight::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{Aabb, MeshBounds, Triangle, TriangleMesh};

    // Parsing
    pub use mesh_io::{IoError, load_stl, parse_stl};

    // Measurement
    pub use mesh_measure::{Dimensions, MeasureParams, MeshAnalysis, analyze};

    // Materials
    pub use mesh_material::{
        Material, MaterialError, MaterialWeight, Weight, compare_across_materials, mass,
    };

    // Pipeline
    pub use crate::{ReportConfig, WeighError, WeightReport, analyze_stl, analyze_stl_file};
}
