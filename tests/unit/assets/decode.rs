use super::*;

#[test]
fn premultiply_scales_color_by_alpha() {
    let mut px = [200u8, 100, 0, 128];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [100, 50, 0, 128]);
}

#[test]
fn premultiply_zero_alpha_clears_color() {
    let mut px = [200u8, 100, 50, 0];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0]);
}

#[test]
fn unpremultiply_inverts_within_rounding() {
    for alpha in [1u8, 17, 64, 128, 200, 254] {
        for c in [0u8, 30, 100, 200, 255] {
            let mut px = [c, c, c, alpha];
            premultiply_rgba8_in_place(&mut px);
            unpremultiply_rgba8_in_place(&mut px);
            let diff = (px[0] as i16 - c as i16).unsigned_abs();
            let tolerance = (255 / alpha as u16) + 1;
            assert!(
                diff <= tolerance,
                "alpha {alpha} color {c}: got {} back",
                px[0]
            );
        }
    }
}

#[test]
fn unpremultiply_leaves_opaque_and_empty_pixels_alone() {
    let mut px = [10u8, 20, 30, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [10, 20, 30, 255]);

    let mut px = [0u8, 0, 0, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [0, 0, 0, 0]);
}

#[test]
fn decode_image_reads_png_bytes() {
    let src = image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]));
    let mut bytes = Vec::new();
    src.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();

    let prepared = decode_image(&bytes).unwrap();
    assert_eq!((prepared.width, prepared.height), (3, 2));
    assert_eq!(&prepared.rgba8_premul[..4], &[255, 0, 0, 255]);
}

#[test]
fn decode_image_rejects_garbage() {
    assert!(decode_image(b"not an image").is_err());
}
