//! Cardwright renders trading-card artwork by compositing image, text, and
//! vector layers described in a theme definition onto a raster canvas.
//!
//! # Pipeline overview
//!
//! 1. **Theme**: a [`Theme`] maps card categories to layouts of layered
//!    [`Component`]s (pure data, deserialized from JSON).
//! 2. **Inputs**: [`ComponentInputs`] resolves what each component draws for
//!    a given [`CardData`] (asset key, literal text, artwork override).
//! 3. **Compose**: [`render_card`] sorts components by layer and draws each
//!    onto a shared [`RenderCanvas`], managing per-component clip state.
//! 4. **Specials**: curved text is fitted with [`layout_curved_text`] over a
//!    [`CubicBezier`] arc-length parametrization; decorative watermarks run
//!    through the [`HandlerRegistry`] and the [`tint_blend`] pixel math with
//!    disk-backed caching.
//!
//! Rendering is single-threaded and synchronous: component draws are
//! strictly sequential, and a failing component aborts only its own
//! contribution.
#![forbid(unsafe_code)]

mod assets;
mod blend;
mod cards;
mod custom;
mod foundation;
mod geometry;
mod render;
mod text;
mod theme;

pub use assets::decode::{PreparedImage, decode_image, prepare_rgba_image};
pub use assets::store::{AssetLibrary, normalize_rel_path};
pub use blend::tint::tint_blend;
pub use cards::data::{CardData, ComponentInputs, ComponentKind};
pub use custom::registry::{CustomHandler, HandlerContext, HandlerRegistry};
pub use custom::watermark::{SetWatermark, WatermarkKey};
pub use foundation::core::{Affine, BezPath, Point, Rect, Rgba, Vec2};
pub use foundation::error::{CardwrightError, CardwrightResult};
pub use geometry::bezier::CubicBezier;
pub use render::canvas::RenderCanvas;
pub use render::pipeline::{RenderOptions, ordered_components, render_card};
pub use text::curved::{CurvedText, layout_curved_text};
pub use text::layout::{TextBrush, TextLayoutEngine};
pub use text::shaper::{ShapedText, TextShaper};
pub use theme::model::{
    CardLayout, ClipShape, ClipSpec, Component, CurveSpec, CustomSpec, FontKind, FontSpec,
    ImageSpec, PointSpec, Region, Theme,
};
