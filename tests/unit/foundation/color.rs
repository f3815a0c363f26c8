use super::*;
use serde_json::json;

#[test]
fn parses_hex_names_and_arrays() {
    let c: Rgb8 = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgb8::RED);

    let c: Rgb8 = serde_json::from_value(json!("800080")).unwrap();
    assert_eq!(c, Rgb8::PURPLE);

    let c: Rgb8 = serde_json::from_value(json!("Purple")).unwrap();
    assert_eq!(c, Rgb8::PURPLE);

    let c: Rgb8 = serde_json::from_value(json!([1, 2, 3])).unwrap();
    assert_eq!(c, Rgb8::new(1, 2, 3));
}

#[test]
fn rejects_malformed_colors() {
    assert!("#ff00".parse::<Rgb8>().is_err());
    assert!("#gg0000".parse::<Rgb8>().is_err());
    assert!("chartreuse-ish".parse::<Rgb8>().is_err());
    assert!("#ééé".parse::<Rgb8>().is_err());
    assert!(serde_json::from_value::<Rgb8>(json!([1, 2])).is_err());
}

#[test]
fn hex_display_is_lowercase() {
    assert_eq!(Rgb8::new(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    assert_eq!(serde_json::to_value(Rgb8::PURPLE).unwrap(), json!("#800080"));
}

#[test]
fn hsl_of_reference_colors() {
    let red = Rgb8::RED.to_hsl();
    assert!((red.h - 0.0).abs() < 1e-9);
    assert!((red.s - 1.0).abs() < 1e-9);
    assert!((red.l - 0.5).abs() < 1e-9);

    let purple = Rgb8::PURPLE.to_hsl();
    assert!((purple.h - 5.0 / 6.0).abs() < 1e-9);
    assert!((purple.s - 1.0).abs() < 1e-9);
    assert!((purple.l - 128.0 / 510.0).abs() < 1e-9);

    let gray = Rgb8::new(0x80, 0x80, 0x80).to_hsl();
    assert_eq!(gray.s, 0.0);
}

#[test]
fn hsl_roundtrips_named_colors() {
    for name in [
        "red", "purple", "white", "black", "blue", "green", "yellow", "orange", "cyan", "magenta",
        "gray",
    ] {
        let c = Rgb8::named(name).unwrap();
        assert_eq!(c.to_hsl().to_rgb8(), c, "{name}");
    }
}

#[test]
fn hsl_lerp_endpoints() {
    let a = Rgb8::RED.to_hsl();
    let b = Rgb8::PURPLE.to_hsl();
    assert_eq!(Hsl::lerp(&a, &b, 0.0).to_rgb8(), Rgb8::RED);
    assert_eq!(Hsl::lerp(&a, &b, 1.0).to_rgb8(), Rgb8::PURPLE);
}

#[test]
fn blank_is_not_white() {
    assert_ne!(Cell::Blank, Cell::Color(Rgb8::WHITE));
    assert_eq!(Cell::Blank.display_color(), Rgb8::WHITE);
    assert!(Cell::Blank.is_blank());
    assert_eq!(Cell::from(Rgb8::RED).color(), Some(Rgb8::RED));
}

#[test]
fn cells_serialize_as_hex_or_null() {
    let cells = vec![Cell::Color(Rgb8::RED), Cell::Blank];
    let v = serde_json::to_value(&cells).unwrap();
    assert_eq!(v, json!(["#ff0000", null]));

    let back: Vec<Cell> = serde_json::from_value(v).unwrap();
    assert_eq!(back, cells);
}
