use super::*;

use kurbo::Shape;

fn red() -> Rgba {
    Rgba::new(1.0, 0.0, 0.0, 1.0)
}

#[test]
fn rejects_degenerate_dimensions() {
    assert!(RenderCanvas::new(0, 8).is_err());
    assert!(RenderCanvas::new(8, 0).is_err());
    assert!(RenderCanvas::new(70_000, 8).is_err());
}

#[test]
fn empty_canvas_is_fully_transparent() {
    let canvas = RenderCanvas::new(4, 4).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (4, 4));
    let out = canvas.finish().unwrap();
    assert!(out.pixels().all(|px| px.0 == [0, 0, 0, 0]));
}

#[test]
fn clip_restricts_fills_to_its_interior() {
    let mut canvas = RenderCanvas::new(8, 8).unwrap();
    let clip = kurbo::Rect::new(2.0, 2.0, 6.0, 6.0).to_path(0.1);
    canvas.set_clip(&clip);
    assert!(canvas.has_clip());

    let everything = kurbo::Rect::new(0.0, 0.0, 8.0, 8.0).to_path(0.1);
    canvas.fill_path(&everything, red());

    canvas.reset_clip();
    assert!(!canvas.has_clip());

    let out = canvas.finish().unwrap();
    assert_eq!(out.get_pixel(4, 4).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(out.get_pixel(7, 7).0, [0, 0, 0, 0]);
}

#[test]
fn reset_pops_nested_clips() {
    let mut canvas = RenderCanvas::new(8, 8).unwrap();
    let clip = kurbo::Rect::new(1.0, 1.0, 7.0, 7.0).to_path(0.1);
    canvas.set_clip(&clip);
    canvas.set_clip(&clip);
    assert!(canvas.has_clip());
    canvas.reset_clip();
    assert!(!canvas.has_clip());

    // After the reset, fills cover the whole canvas again.
    let everything = kurbo::Rect::new(0.0, 0.0, 8.0, 8.0).to_path(0.1);
    canvas.fill_path(&everything, red());
    let out = canvas.finish().unwrap();
    assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0, 255]);
}

#[test]
fn draw_image_region_scales_to_the_region() {
    let src = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 255, 255]));
    let prepared = decode::prepare_rgba_image(&src);

    let mut canvas = RenderCanvas::new(8, 8).unwrap();
    canvas
        .draw_image_region(
            &prepared,
            &Region {
                x: 2.0,
                y: 2.0,
                width: 4.0,
                height: 4.0,
            },
        )
        .unwrap();

    let out = canvas.finish().unwrap();
    assert_eq!(out.get_pixel(3, 3).0, [0, 0, 255, 255]);
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(out.get_pixel(7, 7).0, [0, 0, 0, 0]);
}
