use kurbo::PathEl;

use crate::{
    foundation::core::{BezPath, Point, Rgba, Vec2},
    foundation::error::{CardwrightError, CardwrightResult},
    geometry::bezier::CubicBezier,
    text::shaper::{ShapedText, TextShaper},
    theme::model::FontSpec,
};

/// Size decrement per shrink iteration.
const SIZE_STEP: f64 = 1.0;
/// Floor size terminating the shrink loop on pathological inputs.
const MIN_SIZE: f64 = 4.0;
/// Stroke width used for outlined curved text.
pub(crate) const OUTLINE_WIDTH: f64 = 6.0;

#[derive(Clone, Debug)]
/// A glyph path bent onto a curve, ready to draw.
pub struct CurvedText {
    /// Remapped glyph outlines in canvas coordinates.
    pub path: BezPath,
    /// Fill color.
    pub fill: Rgba,
    /// Outline color; stroked before filling when set.
    pub outline: Option<Rgba>,
    /// Font size the text was finally shaped at.
    pub fitted_size: f64,
    /// Measured width of the shaped run at the fitted size.
    pub fitted_width: f64,
}

/// Fit `text` onto `curve`, shrinking the font until the shaped run is no
/// wider than the curve's arc length, then remapping every outline
/// coordinate onto the curve.
///
/// The rendered text's along-curve extent never exceeds the curve length.
pub fn layout_curved_text(
    curve: &CubicBezier,
    font: &FontSpec,
    text: &str,
    shaper: &dyn TextShaper,
) -> CardwrightResult<CurvedText> {
    let length = curve.length();
    if length <= 0.0 {
        return Err(CardwrightError::validation(
            "curved text requires a curve with nonzero length",
        ));
    }

    let (shaped, size) = shrink_to_fit(curve, font, text, shaper)?;

    // Drop the curve by half the x-height so the glyphs sit centered on it
    // vertically instead of resting above it. A translation keeps the cached
    // arc-length table valid.
    let curve = curve.translated(Vec2::new(0.0, shaped.x_height / 2.0));

    let width = shaped.width;
    let range = if width < length {
        let r = width / length;
        (0.5 - r / 2.0, 0.5 + r / 2.0)
    } else {
        (0.0, 1.0)
    };

    let path = if width > 0.0 {
        remap_path(&shaped.path, &curve, width, range)
    } else {
        BezPath::new()
    };

    Ok(CurvedText {
        path,
        fill: font.color,
        outline: font.outline,
        fitted_size: size,
        fitted_width: width,
    })
}

fn shrink_to_fit(
    curve: &CubicBezier,
    font: &FontSpec,
    text: &str,
    shaper: &dyn TextShaper,
) -> CardwrightResult<(ShapedText, f64)> {
    let length = curve.length();
    let mut size = font.size;
    loop {
        let shaped = shaper.shape(font, size, text)?;
        if shaped.width <= length || size <= MIN_SIZE {
            if shaped.width > length {
                tracing::warn!(
                    width = shaped.width,
                    curve_length = length,
                    size,
                    "curved text still wider than curve at floor size"
                );
            }
            return Ok((shaped, size));
        }
        size = (size - SIZE_STEP).max(MIN_SIZE);
    }
}

/// Remap every coordinate of every path element onto the curve, preserving
/// element structure so cubic segments stay smooth curves.
fn remap_path(path: &BezPath, curve: &CubicBezier, width: f64, range: (f64, f64)) -> BezPath {
    let mut out = BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(fit(curve, width, range, p)),
            PathEl::LineTo(p) => out.line_to(fit(curve, width, range, p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                fit(curve, width, range, p1),
                fit(curve, width, range, p2),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                fit(curve, width, range, p1),
                fit(curve, width, range, p2),
                fit(curve, width, range, p3),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Map one unwrapped text-space coordinate onto the curve: the x fraction of
/// the run width picks an arc-length fraction inside `range`, inverted
/// through the arc-length table to a parameter; y rides the unit normal.
fn fit(curve: &CubicBezier, width: f64, range: (f64, f64), p: Point) -> Point {
    let rfrac = p.x / width;
    let nt = range.0 + rfrac * (range.1 - range.0);
    let t = curve.parametrize(nt);

    let base = curve.evaluate(t);
    let tangent = curve.tangent(t);
    let normal = Vec2::new(-tangent.y, tangent.x);
    let mag = normal.hypot();
    let unit = if mag > 0.0 {
        normal / mag
    } else {
        Vec2::ZERO
    };

    base + unit * p.y
}

#[cfg(test)]
#[path = "../../tests/unit/text/curved.rs"]
mod tests;
