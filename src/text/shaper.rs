use crate::{
    foundation::core::BezPath, foundation::error::CardwrightResult, theme::model::FontSpec,
};

#[derive(Clone, Debug)]
/// Shaped glyph outlines plus measured extents.
///
/// The path lives in an unwrapped text space: x is the distance along the
/// baseline, y the perpendicular offset from it. Curved layout remaps every
/// coordinate onto a curve without flattening the outline commands.
pub struct ShapedText {
    /// Glyph outline path commands.
    pub path: BezPath,
    /// Advance width of the whole run.
    pub width: f64,
    /// Ink height of the run.
    pub height: f64,
    /// x-height of the font at the shaped size, used for vertical centering.
    pub x_height: f64,
}

/// Glyph shaping collaborator.
///
/// Shaping and outline extraction are provided externally; this crate only
/// consumes the resulting path commands and measured extents.
pub trait TextShaper {
    /// Shape `text` with the given font at `size` pixels.
    fn shape(&self, font: &FontSpec, size: f64, text: &str) -> CardwrightResult<ShapedText>;
}
