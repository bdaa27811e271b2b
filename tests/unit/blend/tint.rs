use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> image::RgbaImage {
    image::RgbaImage::from_pixel(width, height, image::Rgba(px))
}

#[test]
fn fully_transparent_mask_is_identity() {
    let base = solid(4, 4, [10, 200, 30, 128]);
    let mask = image::RgbaImage::new(4, 4);
    let out = tint_blend(&base, &mask, Rgba::new(1.0, 0.0, 0.0, 1.0), 0.7).unwrap();
    assert_eq!(out.as_raw(), base.as_raw());
}

#[test]
fn nonzero_mask_forces_opaque_alpha() {
    let base = solid(2, 2, [50, 60, 70, 40]);
    let mask = solid(2, 2, [255, 255, 255, 200]);
    let out = tint_blend(&base, &mask, Rgba::new(0.5, 0.5, 0.5, 1.0), 1.0).unwrap();
    for px in out.pixels() {
        assert_eq!(px.0[3], 255);
    }
}

#[test]
fn formula_matches_reference_values() {
    // mask (1,0,0,1) * tint (1,0,0,1) * 1.0 -> r0' = (1,0,0,1)
    // r2 = r1*r0' - r1; result = r2*1 + r1 keeps red, zeroes green/blue.
    let base = solid(1, 1, [128, 128, 128, 255]);
    let mask = solid(1, 1, [255, 0, 0, 255]);
    let out = tint_blend(&base, &mask, Rgba::new(1.0, 0.0, 0.0, 1.0), 1.0).unwrap();
    assert_eq!(out.get_pixel(0, 0).0, [128, 0, 0, 255]);
}

#[test]
fn intensity_scales_mask_alpha() {
    // With intensity 0 the tinted mask contributes nothing, but alpha is
    // still forced opaque wherever the mask had coverage.
    let base = solid(1, 1, [100, 150, 200, 255]);
    let mask = solid(1, 1, [255, 255, 255, 255]);
    let out = tint_blend(&base, &mask, Rgba::new(1.0, 1.0, 1.0, 1.0), 0.0).unwrap();
    assert_eq!(out.get_pixel(0, 0).0, [100, 150, 200, 255]);
}

#[test]
fn dimension_mismatch_is_a_blend_error() {
    let base = solid(4, 4, [0, 0, 0, 255]);
    let mask = solid(4, 3, [0, 0, 0, 255]);
    let err = tint_blend(&base, &mask, Rgba::new(1.0, 1.0, 1.0, 1.0), 1.0).unwrap_err();
    assert!(matches!(err, CardwrightError::Blend(_)));
}
