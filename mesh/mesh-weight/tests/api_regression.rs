//! API Regression Tests for the weight estimation crates
//!
//! These tests pin the public API across the crates re-exported here. They
//! are organized in tiers that follow the pipeline:
//!
//! - Tier 1: Foundation (mesh-types)
//! - Tier 2: Parsing (mesh-io)
//! - Tier 3: Measurement (mesh-measure)
//! - Tier 4: Materials (mesh-material)
//! - Tier 5: Pipeline (analyze_stl, analyze_stl_file)
//!
//! If any of these tests fail after API changes, it indicates a breaking change
//! that needs a version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]

use mesh_weight::{io, material, measure, prelude::*, types};

/// Encode a mesh as binary STL.
fn binary_stl(mesh: &TriangleMesh) -> Vec<u8> {
    let mut buf = vec![0u8; 80];
    buf[..12].copy_from_slice(b"solid binary");
    let count = u32::try_from(mesh.triangle_count()).unwrap();
    buf.extend_from_slice(&count.to_le_bytes());
    for tri in mesh.triangles() {
        buf.extend_from_slice(&[0u8; 12]);
        for corner in tri.vertices() {
            for c in [corner.x, corner.y, corner.z] {
                #[allow(clippy::cast_possible_truncation)]
                buf.extend_from_slice(&(c as f32).to_le_bytes());
            }
        }
        buf.extend_from_slice(&[0u8; 2]);
    }
    buf
}

/// Closed box of the given size with its minimum corner at the origin.
fn box_mesh(sx: f64, sy: f64, sz: f64) -> TriangleMesh {
    let scale = types::Vector3::new(sx, sy, sz);
    let shift = scale / 2.0;
    let triangles = types::unit_cube()
        .triangles()
        .iter()
        .map(|t| {
            let map = |p: types::Point3<f64>| {
                types::Point3::from(p.coords.component_mul(&scale) + shift)
            };
            Triangle::new(map(t.v0), map(t.v1), map(t.v2))
        })
        .collect();
    TriangleMesh::from_triangles(triangles).unwrap()
}

// =============================================================================
// TIER 1: Foundation - Basic Types
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn triangle_construction() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!((tri.area() - 0.5).abs() < 1e-12);
        assert_eq!(tri.reversed().v1, tri.v2);
    }

    #[test]
    fn mesh_is_never_empty() {
        assert!(TriangleMesh::from_triangles(Vec::new()).is_none());
        assert_eq!(types::unit_cube().triangle_count(), 12);
    }

    #[test]
    fn mesh_bounds_calculation() {
        let bounds = box_mesh(4.0, 2.0, 1.0).bounds();
        assert_eq!(bounds.min, types::Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, types::Point3::new(4.0, 2.0, 1.0));
    }
}

// =============================================================================
// TIER 2: Parsing
// =============================================================================

mod tier2_parsing {
    use super::*;

    #[test]
    fn binary_round_trip() {
        let original = box_mesh(4.0, 2.0, 1.0);
        let parsed = parse_stl(&binary_stl(&original)).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn encoding_detection() {
        let bytes = binary_stl(&types::unit_cube());
        assert_eq!(io::detect_encoding(&bytes), Some(io::StlEncoding::Binary));
        assert_eq!(
            io::detect_encoding(b"solid x\nendsolid x\n"),
            Some(io::StlEncoding::Ascii)
        );
    }

    #[test]
    fn error_variants() {
        assert!(matches!(parse_stl(b""), Err(IoError::UnsupportedEncoding)));
        assert!(matches!(
            parse_stl(b"solid x\nendsolid x\n"),
            Err(IoError::EmptyMesh)
        ));

        let mut bytes = binary_stl(&types::unit_cube());
        bytes.pop();
        assert!(matches!(parse_stl(&bytes), Err(IoError::MalformedFile { .. })));
    }
}

// =============================================================================
// TIER 3: Measurement
// =============================================================================

mod tier3_measurement {
    use super::*;

    #[test]
    fn box_measurements() {
        let mesh = box_mesh(4.0, 2.0, 1.0);
        let analysis = analyze(&mesh);

        assert!((analysis.volume - 8.0).abs() < 1e-12);
        assert!((analysis.surface_area - 28.0).abs() < 1e-12);
        assert_eq!(analysis.triangle_count, 12);
        assert!((analysis.vertex_centroid.x - 2.0).abs() < 1e-12);

        assert!((measure::volume(&mesh) - 8.0).abs() < 1e-12);
        assert!((measure::surface_area(&mesh) - 28.0).abs() < 1e-12);
        assert_eq!(measure::triangle_count(&mesh), 12);
        assert_eq!(measure::bounding_box(&mesh), analysis.bounds);
    }

    #[test]
    fn dimensions_from_analysis() {
        let analysis = analyze(&box_mesh(4.0, 2.0, 1.0));
        let dims: Dimensions = analysis.dimensions();
        assert_eq!((dims.width, dims.depth, dims.height), (4.0, 2.0, 1.0));
    }

    #[test]
    fn params_select_path() {
        let mesh = box_mesh(1.0, 1.0, 1.0);
        let seq = measure::analyze_with(&mesh, &MeasureParams::sequential());
        let params = MeasureParams::default().parallel_threshold(0);
        let par = measure::analyze_with(&mesh, &params);
        assert!((seq.volume - par.volume).abs() < 1e-12);
    }
}

// =============================================================================
// TIER 4: Materials
// =============================================================================

mod tier4_materials {
    use super::*;

    #[test]
    fn registry_lookup() {
        assert_eq!(material::Material::ALL.len(), 10);
        assert_eq!(material::registry().len(), 10);
        assert_eq!(material::density_of("24K Gold").unwrap(), 0.0193);
        assert!(matches!(
            material::density_of("NotARealMaterial"),
            Err(MaterialError::UnknownMaterial { .. })
        ));
    }

    #[test]
    fn weight_conversion() {
        let grams = mass(1000.0, Material::Silver925).unwrap();
        assert!((grams - 10.4).abs() < 1e-9);

        let w = Weight::from_grams(material::TROY_OUNCE_GRAMS);
        assert!((w.troy_ounces - 1.0).abs() < 1e-12);
        assert!((material::pennyweight(material::PENNYWEIGHT_GRAMS) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_volume() {
        assert!(matches!(
            material::mass_by_id(-1.0, "18K Gold"),
            Err(MaterialError::InvalidVolume { .. })
        ));
    }
}

// =============================================================================
// TIER 5: Pipeline
// =============================================================================

mod tier5_pipeline {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn analyze_bytes() {
        let bytes = binary_stl(&box_mesh(10.0, 10.0, 10.0));
        let report = analyze_stl(&bytes, &ReportConfig::default()).unwrap();

        assert!((report.analysis.volume - 1000.0).abs() < 1e-9);
        assert!((report.primary.weight.grams - 15.4).abs() < 1e-9);
        assert_eq!(report.comparison.len(), Material::ALL.len());
        assert_eq!(report.comparison[0].material, Material::Gold14K);
    }

    #[test]
    fn analyze_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("band.stl");
        std::fs::write(&path, binary_stl(&box_mesh(20.0, 2.0, 5.0))).unwrap();

        let config = ReportConfig::for_material(Material::Platinum950);
        let report = analyze_stl_file(&path, &config).unwrap();

        assert_eq!(report.primary.material, Material::Platinum950);
        assert!((report.primary.weight.grams - 200.0 * 0.0214).abs() < 1e-9);
        assert!((report.dimensions.width - 20.0).abs() < 1e-12);
    }

    #[test]
    fn pipeline_errors() {
        let err = analyze_stl(b"not an stl", &ReportConfig::default()).unwrap_err();
        assert!(matches!(err, WeighError::Io(IoError::UnsupportedEncoding)));

        let dir = tempdir().expect("failed to create temp dir");
        let err = analyze_stl_file(dir.path().join("missing.stl"), &ReportConfig::default())
            .unwrap_err();
        assert!(matches!(err, WeighError::Io(IoError::FileNotFound { .. })));
    }

    #[test]
    fn error_conversion() {
        let err: WeighError = MaterialError::unknown("Mithril").into();
        assert!(err.to_string().contains("Mithril"));
    }
}
