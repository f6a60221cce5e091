//! Jewelry metal densities and weight conversions.
//!
//! A fixed registry of precious-metal alloys, each with a density in g/mm³,
//! and the conversions from a volume in mm³ to grams, troy ounces and
//! pennyweight.
//!
//! # Example
//!
//! ```
//! use mesh_material::{Material, Weight, compare_across_materials, mass};
//!
//! // A 500 mm³ ring in 18K gold
//! let grams = mass(500.0, Material::Gold18K).unwrap();
//! assert!((grams - 7.7).abs() < 1e-9);
//!
//! let weight = Weight::from_grams(grams);
//! assert!(weight.troy_ounces < 1.0);
//!
//! // The same ring in every registered metal
//! let all = compare_across_materials(500.0).unwrap();
//! assert_eq!(all.len(), Material::ALL.len());
//! ```
//!
//! Material ids are matched exactly: `"18K Gold"` is registered,
//! `"18k gold"` is not.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod registry;
mod weight;

pub use error::{MaterialError, MaterialResult};
pub use registry::{Material, MaterialSpec, density_of, registry};
pub use weight::{
    MaterialWeight, PENNYWEIGHT_GRAMS, TROY_OUNCE_GRAMS, Weight, compare_across_materials, mass,
    mass_by_id, pennyweight, troy_ounces,
};
