use std::path::PathBuf;

use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ColorizeError::manifest("test.col", "x")
            .to_string()
            .contains("manifest error:")
    );
    assert!(
        ColorizeError::load("a.png", "x")
            .to_string()
            .contains("load error:")
    );
    assert!(
        ColorizeError::save("a.png", "x")
            .to_string()
            .contains("save error:")
    );
    assert!(
        ColorizeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn load_error_names_the_path() {
    let err = ColorizeError::load("sprites/base.png", "No such file or directory");
    assert_eq!(
        err.to_string(),
        "load error: cannot load sprites/base.png: No such file or directory"
    );
}

#[test]
fn dimension_mismatch_reports_both_extents() {
    let err = ColorizeError::DimensionMismatch {
        base: Extent::new(64, 64),
        mask: Extent::new(32, 32),
    };
    assert_eq!(
        err.to_string(),
        "dimension mismatch: base is 64x64, mask is 32x32"
    );
}

#[test]
fn color_profile_warning_converts_transparently() {
    let warning = ColorProfileWarning {
        path: PathBuf::from("base.png"),
        reason: "bad profile".to_string(),
    };
    let err = ColorizeError::from(warning.clone());
    assert_eq!(err.to_string(), warning.to_string());
    assert!(matches!(err, ColorizeError::ColorProfile(w) if w == warning));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ColorizeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn constructors_build_their_variants() {
    assert!(matches!(
        ColorizeError::manifest("test.col", "x"),
        ColorizeError::Manifest { path, reason } if path == PathBuf::from("test.col") && reason == "x"
    ));
    assert!(matches!(
        ColorizeError::load("a.png", "x"),
        ColorizeError::Load { path, .. } if path == PathBuf::from("a.png")
    ));
    assert!(matches!(
        ColorizeError::save("b.png", "x"),
        ColorizeError::Save { path, .. } if path == PathBuf::from("b.png")
    ));
    assert!(matches!(
        ColorizeError::validation("bad"),
        ColorizeError::Validation(msg) if msg == "bad"
    ));
}
