use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WirecraftError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WirecraftError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        WirecraftError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        WirecraftError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WirecraftError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let e = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = WirecraftError::from(e);
    assert!(matches!(err, WirecraftError::Serde(_)));
}
