//! Volume to weight conversion.

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MaterialError, MaterialResult};
use crate::registry::Material;

/// Grams in one troy ounce.
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;

/// Grams in one pennyweight (1/20 troy ounce).
pub const PENNYWEIGHT_GRAMS: f64 = 1.55517;

/// Mass in grams of `volume_mm3` cubic millimetres of `material`.
///
/// Computed as `volume_mm3 * density` with no rounding.
///
/// # Errors
///
/// Returns [`MaterialError::InvalidVolume`] if the volume is negative, NaN,
/// or infinite.
///
/// # Example
///
/// ```
/// use mesh_material::{Material, mass};
///
/// let grams = mass(1000.0, Material::Gold24K).unwrap();
/// assert!((grams - 19.3).abs() < 1e-9);
///
/// assert!(mass(-1.0, Material::Gold24K).is_err());
/// ```
pub fn mass(volume_mm3: f64, material: Material) -> MaterialResult<f64> {
    let volume = validate_volume(volume_mm3)?;
    Ok(volume * material.density())
}

/// Mass in grams for a material given by its registry id.
///
/// # Errors
///
/// Returns [`MaterialError::UnknownMaterial`] if the id is not registered.
/// This is checked first, so an unknown id with a bad volume still reports
/// the unknown id. Otherwise fails like [`mass`].
pub fn mass_by_id(volume_mm3: f64, id: &str) -> MaterialResult<f64> {
    let material = Material::from_id(id)?;
    mass(volume_mm3, material)
}

/// Convert grams to troy ounces.
#[inline]
#[must_use]
pub fn troy_ounces(grams: f64) -> f64 {
    grams / TROY_OUNCE_GRAMS
}

/// Convert grams to pennyweight.
#[inline]
#[must_use]
pub fn pennyweight(grams: f64) -> f64 {
    grams / PENNYWEIGHT_GRAMS
}

fn validate_volume(volume: f64) -> MaterialResult<f64> {
    if volume.is_finite() && volume >= 0.0 {
        Ok(volume)
    } else {
        Err(MaterialError::InvalidVolume { volume })
    }
}

/// A mass expressed in the units a jeweler quotes.
///
/// # Example
///
/// ```
/// use mesh_material::Weight;
///
/// let w = Weight::from_grams(31.1035);
/// assert!((w.troy_ounces - 1.0).abs() < 1e-12);
/// assert!((w.pennyweight - 20.0).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weight {
    /// Grams.
    pub grams: f64,
    /// Troy ounces.
    pub troy_ounces: f64,
    /// Pennyweight (dwt).
    pub pennyweight: f64,
}

impl Weight {
    /// Express `grams` in every unit.
    #[must_use]
    pub fn from_grams(grams: f64) -> Self {
        Self {
            grams,
            troy_ounces: troy_ounces(grams),
            pennyweight: pennyweight(grams),
        }
    }
}

/// The weight of a volume in one material.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialWeight {
    /// The material.
    pub material: Material,
    /// Its density in g/mm³.
    pub density: f64,
    /// The resulting weight.
    pub weight: Weight,
}

impl MaterialWeight {
    /// Weigh `volume_mm3` of `material`.
    ///
    /// # Errors
    ///
    /// Fails like [`mass`].
    pub fn new(volume_mm3: f64, material: Material) -> MaterialResult<Self> {
        Ok(Self {
            material,
            density: material.density(),
            weight: Weight::from_grams(mass(volume_mm3, material)?),
        })
    }
}

/// Weigh one volume in every registered material.
///
/// Entries follow registry order ([`Material::ALL`]), one per material.
///
/// # Errors
///
/// Returns [`MaterialError::InvalidVolume`] if the volume is negative, NaN,
/// or infinite.
///
/// # Example
///
/// ```
/// use mesh_material::{Material, compare_across_materials};
///
/// let rows = compare_across_materials(250.0).unwrap();
/// assert_eq!(rows[0].material, Material::Gold14K);
/// assert!((rows[0].weight.grams - 250.0 * 0.0131).abs() < 1e-12);
/// ```
pub fn compare_across_materials(volume_mm3: f64) -> MaterialResult<Vec<MaterialWeight>> {
    validate_volume(volume_mm3)?;
    let rows = Material::ALL
        .into_iter()
        .map(|material| MaterialWeight::new(volume_mm3, material))
        .collect::<MaterialResult<Vec<_>>>()?;
    debug!(volume_mm3, materials = rows.len(), "compared materials");
    Ok(rows)
}
