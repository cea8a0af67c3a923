//! Integration tests for chemspi CLI commands.
//!
//! Uses tempfile for record directories on disk.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use chemspi::cli::{
    Cli, cmd_field, cmd_fields, cmd_image, cmd_mol, cmd_show, open_compound, resolve_config, run,
};
use chemspi::config::ChemspiConfig;
use chemspi::record_dir::{
    EXTENDED_FILE, INFO_FILE, MOL_2D_FILE, MOL_3D_FILE, RecordDir, THUMBNAIL_FILE,
};
use chemspi_core::{Compound, Csid, Error, Slot};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Create a record directory holding ethanol (682) and a bare record (236).
fn create_records() -> TempDir {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");

    let ethanol = temp.path().join("682");
    std::fs::create_dir(&ethanol).unwrap();
    std::fs::write(
        ethanol.join(INFO_FILE),
        r#"{
            "smiles": "CCO",
            "inchi": "InChI=1S/C2H6O/c1-2-3/h3H,2H2,1H3",
            "inchikey": "LFQSCWFLJHTTHZ-UHFFFAOYSA-N"
        }"#,
    )
    .unwrap();
    std::fs::write(
        ethanol.join(EXTENDED_FILE),
        r#"{
            "molecular_formula": "C_{2}H_{6}O",
            "average_mass": 46.0684,
            "molecular_weight": 46.0684,
            "nominal_mass": 46,
            "xlogp": -0.1,
            "common_name": "Ethanol"
        }"#,
    )
    .unwrap();
    std::fs::write(ethanol.join(MOL_2D_FILE), "682\n  2D\n\nM  END\n").unwrap();
    std::fs::write(ethanol.join(MOL_3D_FILE), "682\n  3D\n\nM  END\n").unwrap();
    std::fs::write(ethanol.join(THUMBNAIL_FILE), PNG).unwrap();

    let bare = temp.path().join("236");
    std::fs::create_dir(&bare).unwrap();
    std::fs::write(bare.join(INFO_FILE), r#"{"smiles": "CCO"}"#).unwrap();

    temp
}

fn config_for(dir: &TempDir) -> ChemspiConfig {
    ChemspiConfig::default().merged(Some(dir.path().to_path_buf()), None)
}

fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<(), Error>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// =============================================================================
// SHOW COMMAND TESTS
// =============================================================================

#[test]
fn test_show_prints_available_fields() {
    let records = create_records();
    let compound = open_compound(&config_for(&records), "682").unwrap();

    let text = output(|out| cmd_show(&compound, out));
    assert!(text.starts_with("csid: 682\n"));
    assert!(text.contains("image_url: http://www.chemspider.com/ImagesHandler.ashx?id=682\n"));
    assert!(text.contains("smiles: CCO\n"));
    assert!(text.contains("common_name: Ethanol\n"));
    assert!(text.contains("average_mass: 46.0684\n"));
    // Absent from extended.json
    assert!(!text.contains("alogp"));
}

#[test]
fn test_show_fails_when_extended_info_missing() {
    let records = create_records();
    let compound = open_compound(&config_for(&records), "236").unwrap();

    let mut buf = Vec::new();
    let err = cmd_show(&compound, &mut buf).unwrap_err();
    assert!(matches!(err, Error::NotFound(ref p) if p.ends_with(EXTENDED_FILE)));
}

// =============================================================================
// FIELD COMMAND TESTS
// =============================================================================

#[test]
fn test_field_prints_single_value() {
    let records = create_records();
    let compound = open_compound(&config_for(&records), "236").unwrap();

    assert_eq!(output(|out| cmd_field(&compound, "smiles", out)), "CCO\n");
    assert!(compound.is_cached(Slot::BasicInfo));
    assert!(!compound.is_cached(Slot::ExtendedInfo));
}

#[test]
fn test_field_missing_and_unknown() {
    let records = create_records();
    let compound = open_compound(&config_for(&records), "682").unwrap();
    let mut buf = Vec::new();

    assert!(matches!(
        cmd_field(&compound, "alogp", &mut buf),
        Err(Error::MissingField("alogp"))
    ));
    assert!(matches!(
        cmd_field(&compound, "boiling_point", &mut buf),
        Err(Error::UnknownField(_))
    ));
    assert!(buf.is_empty());
}

#[test]
fn test_fields_lists_accessors() {
    let text = output(|out| cmd_fields(out));
    assert_eq!(text.lines().count(), 13);
    assert!(text.lines().any(|l| l == "stdinchikey"));
}

// =============================================================================
// MOL COMMAND TESTS
// =============================================================================

#[test]
fn test_mol_dimensions() {
    let records = create_records();
    let compound = open_compound(&config_for(&records), "682").unwrap();

    assert!(output(|out| cmd_mol(&compound, false, out)).contains("2D"));
    assert!(output(|out| cmd_mol(&compound, true, out)).contains("3D"));
    assert!(compound.is_cached(Slot::Mol2d));
    assert!(compound.is_cached(Slot::Mol3d));
}

// =============================================================================
// IMAGE COMMAND TESTS
// =============================================================================

#[test]
fn test_image_to_file() {
    let records = create_records();
    let compound = open_compound(&config_for(&records), "682").unwrap();
    let target = records.path().join("out.png");

    let mut buf = Vec::new();
    cmd_image(&compound, Some(&target), false, &mut buf).unwrap();
    assert_eq!(std::fs::read(&target).unwrap(), PNG);
    assert!(buf.is_empty());
}

#[test]
fn test_image_raw_and_data_uri() {
    let records = create_records();
    let compound = open_compound(&config_for(&records), "682").unwrap();

    let mut raw = Vec::new();
    cmd_image(&compound, None, false, &mut raw).unwrap();
    assert_eq!(raw, PNG);

    let uri = output(|out| cmd_image(&compound, None, true, out));
    assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo=\n");
}

#[test]
fn test_image_missing() {
    let records = create_records();
    let compound = open_compound(&config_for(&records), "236").unwrap();
    let mut buf = Vec::new();
    assert!(matches!(
        cmd_image(&compound, None, false, &mut buf),
        Err(Error::NotFound(_))
    ));
}

// =============================================================================
// CONFIG & DISPATCH TESTS
// =============================================================================

#[test]
fn test_config_file_then_args() {
    let records = create_records();
    let config_path = records.path().join("chemspi.json");
    std::fs::write(
        &config_path,
        format!(
            r#"{{"records_dir": {:?}, "image_host": "mirror.example.org"}}"#,
            records.path().display().to_string()
        ),
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "chemspi",
        "--config",
        config_path.to_str().unwrap(),
        "show",
        "682",
    ])
    .unwrap();
    let config = resolve_config(&cli).unwrap();
    assert_eq!(config.records_dir, records.path());
    assert_eq!(config.image_host, "mirror.example.org");

    let cli = Cli::try_parse_from([
        "chemspi",
        "--config",
        config_path.to_str().unwrap(),
        "--image-host",
        "other.example.org",
        "show",
        "682",
    ])
    .unwrap();
    assert_eq!(resolve_config(&cli).unwrap().image_host, "other.example.org");
}

#[test]
fn test_run_dispatches_field() {
    let records = create_records();
    let cli = Cli::try_parse_from([
        "chemspi",
        "--records",
        records.path().to_str().unwrap(),
        "--image-host",
        "mirror.example.org",
        "field",
        "682",
        "common_name",
    ])
    .unwrap();

    assert_eq!(output(|out| run(&cli, out)), "Ethanol\n");
}

#[test]
fn test_run_rejects_bad_csid() {
    let records = create_records();
    let cli = Cli::try_parse_from([
        "chemspi",
        "--records",
        records.path().to_str().unwrap(),
        "show",
        "ethanol",
    ])
    .unwrap();

    let mut buf = Vec::new();
    assert!(matches!(run(&cli, &mut buf), Err(Error::InvalidCsid(_))));
}

// =============================================================================
// RECORD DIR AS CLIENT
// =============================================================================

#[test]
fn test_record_dir_image_host_in_url() {
    let records = create_records();
    let client = RecordDir::new(records.path()).with_image_host("mirror.example.org");
    let compound = Compound::new(Arc::new(client), 682u64).unwrap();

    assert_eq!(compound.csid(), Csid(682));
    assert_eq!(
        compound.image_url(),
        "http://mirror.example.org/ImagesHandler.ashx?id=682"
    );
    assert_eq!(compound.client().root(), records.path());
}

#[test]
fn test_failed_read_is_retried_after_file_appears() {
    let records = create_records();
    let compound = open_compound(&config_for(&records), "236").unwrap();

    assert!(compound.common_name().is_err());
    std::fs::write(
        Path::new(records.path()).join("236").join(EXTENDED_FILE),
        r#"{"common_name": "Ethanol"}"#,
    )
    .unwrap();
    assert_eq!(compound.common_name().unwrap(), "Ethanol");
}
