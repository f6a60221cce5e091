//! The material registry.
//!
//! Densities are in grams per cubic millimetre so that a volume read from an
//! STL file (mm³) multiplies straight into grams.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MaterialError, MaterialResult};

/// Static properties of a registered material.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MaterialSpec {
    /// Display name, also the lookup key.
    pub id: &'static str,
    /// Density in g/mm³.
    pub density: f64,
    /// Purity and typical use.
    pub description: &'static str,
    /// `#RRGGBB` swatch for charts and previews.
    pub display_color: &'static str,
}

/// Registry rows, in [`Material`] declaration order.
static REGISTRY: [MaterialSpec; 10] = [
    MaterialSpec {
        id: "14K Gold",
        density: 0.0131,
        description: "58.3% pure - Common for everyday jewelry",
        display_color: "#DAA520",
    },
    MaterialSpec {
        id: "18K Gold",
        density: 0.0154,
        description: "75.0% pure - Premium jewelry standard",
        display_color: "#FFD700",
    },
    MaterialSpec {
        id: "22K Gold",
        density: 0.0174,
        description: "91.7% pure - High-end, investment grade",
        display_color: "#FFA500",
    },
    MaterialSpec {
        id: "24K Gold",
        density: 0.0193,
        description: "99.9% pure - Pure gold, very soft",
        display_color: "#FFD700",
    },
    MaterialSpec {
        id: "Silver (925)",
        density: 0.0104,
        description: "92.5% pure - Sterling silver standard",
        display_color: "#C0C0C0",
    },
    MaterialSpec {
        id: "Platinum (950)",
        density: 0.0214,
        description: "95.0% pure - Luxury jewelry material",
        display_color: "#E5E4E2",
    },
    MaterialSpec {
        id: "Platinum (900)",
        density: 0.0204,
        description: "90.0% pure - Alternative platinum alloy",
        display_color: "#E5E4E2",
    },
    MaterialSpec {
        id: "Palladium",
        density: 0.0120,
        description: "95.0% pure - Lighter platinum alternative",
        display_color: "#CED0DD",
    },
    MaterialSpec {
        id: "White Gold (18K)",
        density: 0.0147,
        description: "75.0% pure - Gold with white metals",
        display_color: "#F5F5F5",
    },
    MaterialSpec {
        id: "Rose Gold (18K)",
        density: 0.0150,
        description: "75.0% pure - Gold with copper",
        display_color: "#B76E79",
    },
];

/// A registered jewelry material.
///
/// The set is closed: any other id fails with
/// [`MaterialError::UnknownMaterial`]. The default is 18K gold, the usual
/// starting choice in a weight estimate. It is never substituted for an id
/// that fails to resolve.
///
/// # Example
///
/// ```
/// use mesh_material::Material;
///
/// let platinum: Material = "Platinum (950)".parse().unwrap();
/// assert_eq!(platinum, Material::Platinum950);
/// assert!((platinum.density() - 0.0214).abs() < 1e-12);
///
/// assert!("platinum".parse::<Material>().is_err());
/// assert_eq!(Material::default().id(), "18K Gold");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    /// 14 karat yellow gold.
    #[cfg_attr(feature = "serde", serde(rename = "14K Gold"))]
    Gold14K,
    /// 18 karat yellow gold.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "18K Gold"))]
    Gold18K,
    /// 22 karat yellow gold.
    #[cfg_attr(feature = "serde", serde(rename = "22K Gold"))]
    Gold22K,
    /// 24 karat (fine) gold.
    #[cfg_attr(feature = "serde", serde(rename = "24K Gold"))]
    Gold24K,
    /// Sterling silver.
    #[cfg_attr(feature = "serde", serde(rename = "Silver (925)"))]
    Silver925,
    /// 950 platinum.
    #[cfg_attr(feature = "serde", serde(rename = "Platinum (950)"))]
    Platinum950,
    /// 900 platinum.
    #[cfg_attr(feature = "serde", serde(rename = "Platinum (900)"))]
    Platinum900,
    /// Palladium.
    #[cfg_attr(feature = "serde", serde(rename = "Palladium"))]
    Palladium,
    /// 18 karat white gold.
    #[cfg_attr(feature = "serde", serde(rename = "White Gold (18K)"))]
    WhiteGold18K,
    /// 18 karat rose gold.
    #[cfg_attr(feature = "serde", serde(rename = "Rose Gold (18K)"))]
    RoseGold18K,
}

impl Material {
    /// Every material, in registry order.
    pub const ALL: [Self; 10] = [
        Self::Gold14K,
        Self::Gold18K,
        Self::Gold22K,
        Self::Gold24K,
        Self::Silver925,
        Self::Platinum950,
        Self::Platinum900,
        Self::Palladium,
        Self::WhiteGold18K,
        Self::RoseGold18K,
    ];

    /// The registry row for this material.
    #[must_use]
    pub fn spec(self) -> &'static MaterialSpec {
        &REGISTRY[self as usize]
    }

    /// Registry id, e.g. `"Silver (925)"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        self.spec().id
    }

    /// Density in g/mm³.
    #[must_use]
    pub fn density(self) -> f64 {
        self.spec().density
    }

    /// Density in g/cm³ (1 cm³ = 1000 mm³).
    #[must_use]
    pub fn density_g_per_cm3(self) -> f64 {
        self.density() * 1000.0
    }

    /// Purity and typical use.
    #[must_use]
    pub fn description(self) -> &'static str {
        self.spec().description
    }

    /// `#RRGGBB` display color.
    #[must_use]
    pub fn display_color(self) -> &'static str {
        self.spec().display_color
    }

    /// Look up a material by its exact registry id.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::UnknownMaterial`] if no material has this id.
    pub fn from_id(id: &str) -> MaterialResult<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| MaterialError::unknown(id))
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// All registry rows, in registry order.
#[must_use]
pub fn registry() -> &'static [MaterialSpec] {
    &REGISTRY
}

/// Density in g/mm³ of the material with this id.
///
/// # Errors
///
/// Returns [`MaterialError::UnknownMaterial`] if no material has this id.
/// There is no fallback density.
///
/// # Example
///
/// ```
/// use mesh_material::{density_of, MaterialError};
///
/// assert!((density_of("Palladium").unwrap() - 0.0120).abs() < 1e-12);
/// assert!(matches!(
///     density_of("NotARealMaterial"),
///     Err(MaterialError::UnknownMaterial { .. })
/// ));
/// ```
pub fn density_of(id: &str) -> MaterialResult<f64> {
    Material::from_id(id).map(Material::density)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn all_follows_registry_order() {
        assert_eq!(Material::ALL.len(), REGISTRY.len());
        for (material, spec) in Material::ALL.iter().zip(&REGISTRY) {
            assert_eq!(material.spec(), spec);
        }
    }

    #[test]
    fn ids_are_unique() {
        for (i, a) in REGISTRY.iter().enumerate() {
            for b in &REGISTRY[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn every_id_round_trips() {
        for material in Material::ALL {
            assert_eq!(Material::from_id(material.id()).unwrap(), material);
            assert_eq!(material.to_string().parse::<Material>().unwrap(), material);
        }
    }

    #[test]
    fn densities_are_positive() {
        for spec in registry() {
            assert!(spec.density > 0.0, "{} has density {}", spec.id, spec.density);
        }
    }

    #[test]
    fn known_densities() {
        assert_eq!(density_of("14K Gold").unwrap(), 0.0131);
        assert_eq!(density_of("24K Gold").unwrap(), 0.0193);
        assert_eq!(density_of("Silver (925)").unwrap(), 0.0104);
        assert_eq!(density_of("Rose Gold (18K)").unwrap(), 0.0150);
        assert_eq!(Material::Platinum900.density(), 0.0204);
    }

    #[test]
    fn cubic_centimetre_density() {
        assert!((Material::Gold24K.density_g_per_cm3() - 19.3).abs() < 1e-9);
        assert!((Material::Silver925.density_g_per_cm3() - 10.4).abs() < 1e-9);
    }

    #[test]
    fn lookup_is_exact() {
        for id in ["18k gold", " 18K Gold", "18K Gold ", "", "Gold"] {
            assert_eq!(
                Material::from_id(id),
                Err(MaterialError::unknown(id)),
                "{id:?} should not resolve"
            );
        }
    }

    #[test]
    fn unknown_material() {
        let err = density_of("NotARealMaterial").unwrap_err();
        assert_eq!(
            err,
            MaterialError::UnknownMaterial {
                id: "NotARealMaterial".to_string()
            }
        );
    }

    #[test]
    fn display_metadata() {
        assert_eq!(Material::Gold18K.display_color(), "#FFD700");
        assert_eq!(Material::Palladium.display_color(), "#CED0DD");
        assert!(Material::Gold22K.description().starts_with("91.7% pure"));
        assert_eq!(Material::default(), Material::Gold18K);
    }
}
