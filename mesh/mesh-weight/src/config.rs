//! Report configuration.

use mesh_material::Material;
use mesh_measure::MeasureParams;

/// Configuration for [`analyze_stl`](crate::analyze_stl).
///
/// # Example
///
/// ```
/// use mesh_weight::ReportConfig;
/// use mesh_weight::material::Material;
/// use mesh_weight::measure::MeasureParams;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.primary_material, Material::Gold18K);
///
/// let config = ReportConfig::default()
///     .primary_material(Material::Silver925)
///     .measure(MeasureParams::sequential());
/// assert_eq!(config.primary_material.id(), "Silver (925)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportConfig {
    /// Material the headline weight is given in.
    pub primary_material: Material,
    /// Mesh analysis parameters.
    pub measure: MeasureParams,
}

impl ReportConfig {
    /// Create a config for the given primary material.
    #[must_use]
    pub fn for_material(material: Material) -> Self {
        Self::default().primary_material(material)
    }

    /// Set the primary material.
    #[must_use]
    pub const fn primary_material(mut self, material: Material) -> Self {
        self.primary_material = material;
        self
    }

    /// Set the mesh analysis parameters.
    #[must_use]
    pub const fn measure(mut self, params: MeasureParams) -> Self {
        self.measure = params;
        self
    }
}
