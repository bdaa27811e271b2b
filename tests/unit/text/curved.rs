use super::*;
use crate::theme::model::FontKind;

/// Synthetic shaper: one closed box outline per character, width
/// proportional to size. Stands in for the external shaping collaborator.
struct BoxShaper;

impl TextShaper for BoxShaper {
    fn shape(&self, _font: &FontSpec, size: f64, text: &str) -> CardwrightResult<ShapedText> {
        let advance = size * 0.6;
        let mut path = BezPath::new();
        for (i, _) in text.chars().enumerate() {
            let x0 = i as f64 * advance;
            path.move_to((x0, 0.0));
            path.line_to((x0 + advance * 0.8, 0.0));
            path.line_to((x0 + advance * 0.8, -size * 0.5));
            path.line_to((x0, -size * 0.5));
            path.close_path();
        }
        Ok(ShapedText {
            path,
            width: advance * text.chars().count() as f64,
            height: size * 0.7,
            x_height: size * 0.5,
        })
    }
}

fn font(size: f64) -> FontSpec {
    FontSpec {
        family: "Test Sans".to_string(),
        replace: None,
        source: "fonts/test.ttf".to_string(),
        size,
        color: Rgba::new(1.0, 1.0, 1.0, 1.0),
        outline: None,
        kind: FontKind::Line,
    }
}

fn arc() -> CubicBezier {
    CubicBezier::new(
        Point::new(0.0, 50.0),
        Point::new(30.0, 0.0),
        Point::new(70.0, 0.0),
        Point::new(100.0, 50.0),
    )
}

#[test]
fn shrink_loop_never_exceeds_curve_length() {
    let curve = arc();
    let text = "A Very Long Card Name Indeed";
    let curved = layout_curved_text(&curve, &font(40.0), text, &BoxShaper).unwrap();
    assert!(curved.fitted_width <= curve.length());
    assert!(curved.fitted_size < 40.0);
}

#[test]
fn short_text_keeps_nominal_size() {
    let curve = arc();
    let curved = layout_curved_text(&curve, &font(12.0), "Hi", &BoxShaper).unwrap();
    assert_eq!(curved.fitted_size, 12.0);
}

#[test]
fn shrink_loop_terminates_at_floor_size() {
    // A curve far too short for the text at any reasonable size.
    let curve = CubicBezier::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 0.0),
    );
    let curved =
        layout_curved_text(&curve, &font(40.0), "Unfittable Title", &BoxShaper).unwrap();
    assert_eq!(curved.fitted_size, 4.0);
}

#[test]
fn remap_preserves_element_structure() {
    let curve = arc();
    let text = "Abc";
    let shaped = BoxShaper.shape(&font(10.0), 10.0, text).unwrap();
    let curved = layout_curved_text(&curve, &font(10.0), text, &BoxShaper).unwrap();
    assert_eq!(curved.path.elements().len(), shaped.path.elements().len());

    use kurbo::PathEl;
    for (a, b) in curved.path.elements().iter().zip(shaped.path.elements()) {
        let same_kind = matches!(
            (a, b),
            (PathEl::MoveTo(_), PathEl::MoveTo(_))
                | (PathEl::LineTo(_), PathEl::LineTo(_))
                | (PathEl::QuadTo(..), PathEl::QuadTo(..))
                | (PathEl::CurveTo(..), PathEl::CurveTo(..))
                | (PathEl::ClosePath, PathEl::ClosePath)
        );
        assert!(same_kind);
    }
}

#[test]
fn remapped_baseline_points_lie_on_the_offset_curve() {
    // y = 0 coordinates must land exactly on the vertically centered curve.
    let curve = arc();
    let text = "I";
    let shaped = BoxShaper.shape(&font(10.0), 10.0, text).unwrap();
    let curved = layout_curved_text(&curve, &font(10.0), text, &BoxShaper).unwrap();
    let centered = curve.translated(Vec2::new(0.0, shaped.x_height / 2.0));

    use kurbo::PathEl;
    let (orig, mapped) = (shaped.path.elements(), curved.path.elements());
    for (o, m) in orig.iter().zip(mapped) {
        if let (PathEl::MoveTo(po), PathEl::MoveTo(pm)) = (o, m)
            && po.y == 0.0
        {
            // Find the curve point for this x fraction and compare.
            let r = po.x / shaped.width;
            let range = {
                let frac = shaped.width / curve.length();
                (0.5 - frac / 2.0, 0.5 + frac / 2.0)
            };
            let nt = range.0 + r * (range.1 - range.0);
            let expected = centered.evaluate(centered.parametrize(nt));
            assert!((*pm - expected).hypot() < 1e-9);
        }
    }
}

#[test]
fn zero_length_curve_is_rejected() {
    let p = Point::new(5.0, 5.0);
    let degenerate = CubicBezier::new(p, p, p, p);
    let err = layout_curved_text(&degenerate, &font(20.0), "X", &BoxShaper).unwrap_err();
    assert!(err.to_string().contains("validation"));
}
