use super::*;

#[test]
fn byte_roundtrip_is_exact() {
    for v in [0u8, 1, 127, 128, 254, 255] {
        let c = Rgba::from_bytes([v, v, v, v]);
        assert_eq!(c.to_bytes(), [v, v, v, v]);
    }
}

#[test]
fn to_bytes_clamps_out_of_range() {
    let c = Rgba::new(-0.5, 1.5, 0.5, 2.0);
    assert_eq!(c.to_bytes(), [0, 255, 128, 255]);
}

#[test]
fn componentwise_ops() {
    let a = Rgba::new(0.5, 0.25, 1.0, 1.0);
    let b = Rgba::new(0.5, 2.0, 0.0, 1.0);
    assert_eq!(a * b, Rgba::new(0.25, 0.5, 0.0, 1.0));
    assert_eq!(a * 2.0, Rgba::new(1.0, 0.5, 2.0, 2.0));
    assert_eq!(a + b, Rgba::new(1.0, 2.25, 1.0, 2.0));
    assert_eq!(a - b, Rgba::new(0.0, -1.75, 1.0, 0.0));
}

#[test]
fn alpha_defaults_to_opaque_in_json() {
    let c: Rgba = serde_json::from_str(r#"{"r": 0.1, "g": 0.2, "b": 0.3}"#).unwrap();
    assert_eq!(c.a, 1.0);
}
