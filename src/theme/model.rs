use std::collections::BTreeMap;

use crate::{
    foundation::core::{Point, Rect, Rgba},
    geometry::bezier::CubicBezier,
};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// A theme definition: one card layout per card category key
/// (`"minion"`, `"spell"`, ...).
///
/// A theme is a pure data model deserialized once from JSON and immutable
/// during rendering.
pub struct Theme {
    /// Layouts keyed by lowercase card category.
    #[serde(flatten)]
    pub layouts: BTreeMap<String, CardLayout>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Canvas dimensions plus the themed components of one card category.
pub struct CardLayout {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Components keyed by component name (`"name"`, `"cost"`, ...).
    #[serde(flatten)]
    pub components: BTreeMap<String, Component>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// One visual layer of a card layout.
///
/// All sub-records are optional; absence of optional data is normal and the
/// pipeline silently skips the corresponding draw step.
pub struct Component {
    /// Z-order; lowest paints first.
    pub layer: i32,
    /// Region for straight text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Region>,
    /// Image region and named asset set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSpec>,
    /// Clip applied to this component's image draw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_region: Option<ClipSpec>,
    /// Curve for curved text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_curve: Option<CurveSpec>,
    /// Font used by the text and curve draws.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
    /// Custom-handler reference with opaque parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Axis-aligned placement rectangle shared by image, text, and clip records.
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Image placement with a named asset map.
pub struct ImageSpec {
    #[serde(flatten)]
    pub region: Region,
    /// Asset file paths (theme-relative) keyed by draw key.
    #[serde(default)]
    pub assets: BTreeMap<String, String>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Clip region with a tagged shape variant.
pub struct ClipSpec {
    #[serde(rename = "type")]
    pub shape: ClipShape,
    #[serde(flatten)]
    pub region: Region,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Clip shape variants. `Curve` appears in theme data but is rejected when
/// used as a clip.
pub enum ClipShape {
    Rectangle,
    Ellipse,
    Curve,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Control points of a text curve in canvas coordinates.
pub struct CurveSpec {
    pub start: PointSpec,
    pub c1: PointSpec,
    pub c2: PointSpec,
    pub end: PointSpec,
}

impl CurveSpec {
    /// Finalize the control points into an immutable [`CubicBezier`] with its
    /// arc-length table computed.
    pub fn build(&self) -> CubicBezier {
        CubicBezier::new(
            self.start.to_point(),
            self.c1.to_point(),
            self.c2.to_point(),
            self.end.to_point(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A 2D coordinate pair as it appears in theme JSON.
pub struct PointSpec {
    pub x: f64,
    pub y: f64,
}

impl PointSpec {
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Font descriptor for straight and curved text.
pub struct FontSpec {
    /// Font family name.
    pub family: String,
    /// Substitute family used instead of `family` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<String>,
    /// Theme-relative path to the font file.
    pub source: String,
    /// Nominal size in pixels.
    pub size: f64,
    /// Fill color.
    pub color: Rgba,
    /// Outline color; when set, text is stroked before filling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Rgba>,
    /// Single line or wrapped block.
    #[serde(default, rename = "type")]
    pub kind: FontKind,
}

impl FontSpec {
    /// Effective family: the substitution when present, else `family`.
    pub fn effective_family(&self) -> &str {
        self.replace.as_deref().unwrap_or(&self.family)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Straight-text layout mode.
pub enum FontKind {
    /// Single line.
    #[default]
    #[serde(rename = "text")]
    Line,
    /// Wrapped block constrained to the text region width.
    #[serde(rename = "textBlock")]
    Block,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Named custom-handler reference; `params` stays opaque to the pipeline and
/// is interpreted by the handler itself.
pub struct CustomSpec {
    /// Handler name looked up in the registry.
    pub name: String,
    /// Implementation-specific parameters.
    #[serde(flatten)]
    pub params: serde_json::Value,
}

#[cfg(test)]
#[path = "../../tests/unit/theme/model.rs"]
mod tests;
