use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgba(1.0, 0.0, 0.0, 1.0));

    let c: ColorDef = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn rejects_malformed_hex() {
    assert!(serde_json::from_value::<ColorDef>(json!("#fff")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#gg0000")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#+f+f+f")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#-1ffff")).is_err());
    assert!(serde_json::from_value::<ColorDef>(json!("#ff\u{e9}0")).is_err());
}

#[test]
fn parses_rgba_object_and_array() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 1.0));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<ColorDef>(json!([0.1, 0.2])).is_err());
}

#[test]
fn parses_hsla_object() {
    let c: ColorDef = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    // Pure red.
    assert!((c.r - 1.0).abs() < 1e-9);
    assert!((c.g - 0.0).abs() < 1e-9);
    assert!((c.b - 0.0).abs() < 1e-9);

    let c: ColorDef = serde_json::from_value(json!({"h": 480.0, "s": 1.0, "l": 0.25})).unwrap();
    // 480 wraps to 120: dark green.
    assert!((c.r - 0.0).abs() < 1e-9);
    assert!((c.g - 0.5).abs() < 1e-9);
    assert!((c.b - 0.0).abs() < 1e-9);

    let c: ColorDef =
        serde_json::from_value(json!({"h": 200.0, "s": 0.0, "l": 0.4, "a": 0.5})).unwrap();
    assert_eq!(c, ColorDef::rgba(0.4, 0.4, 0.4, 0.5));
}

#[test]
fn converts_into_runtime_color() {
    let c: ColorDef = serde_json::from_value(json!("#A52A2A")).unwrap();
    assert!(Color::from(c).equals_epsilon(Color::BROWN, 1e-6));
}
