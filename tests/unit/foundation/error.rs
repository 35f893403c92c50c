use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SceneError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SceneError::interval("x")
            .to_string()
            .contains("interval error:")
    );
    assert!(
        SceneError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        SceneError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SceneError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: SceneError = serde_json::from_str::<f64>("not a number")
        .unwrap_err()
        .into();
    assert!(matches!(err, SceneError::Serde(_)));
}
