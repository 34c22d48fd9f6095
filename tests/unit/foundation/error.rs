use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LandingError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        LandingError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(LandingError::stage("x").to_string().contains("stage error:"));
    assert!(LandingError::render("x").to_string().contains("render error:"));
    assert!(
        LandingError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LandingError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: LandingError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, LandingError::Serde(_)));
}
