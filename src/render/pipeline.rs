use std::path::{Path, PathBuf};

use kurbo::Shape;
use tracing::error;

use crate::{
    assets::store::AssetLibrary,
    cards::data::{CardData, ComponentInputs, ComponentKind},
    foundation::core::{BezPath, Point},
    foundation::error::{CardwrightError, CardwrightResult},
    render::canvas::RenderCanvas,
    text::curved::{self, CurvedText, layout_curved_text},
    text::layout::{TextBrush, TextLayoutEngine},
    text::shaper::TextShaper,
    theme::model::{CardLayout, ClipShape, ClipSpec, Component, FontKind, FontSpec, Region, Theme},
    custom::registry::{HandlerContext, HandlerRegistry},
};

/// Flattening tolerance for clip shape paths.
const CLIP_TOLERANCE: f64 = 0.1;

#[derive(Clone, Debug)]
/// Per-render settings.
pub struct RenderOptions {
    /// Directory holding card artwork (portrait overrides).
    pub artwork_dir: PathBuf,
    /// Directory for persisted blend results.
    pub cache_dir: PathBuf,
    /// Render the premium (golden) variant.
    pub premium: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            artwork_dir: PathBuf::from("."),
            cache_dir: PathBuf::from(".cache"),
            premium: false,
        }
    }
}

/// Collect a layout's components in paint order: ascending `layer`, with
/// equal layers keeping the canonical declaration order of
/// [`ComponentKind::ALL`] (stable sort).
pub fn ordered_components(layout: &CardLayout) -> Vec<(ComponentKind, &Component)> {
    let mut components: Vec<(ComponentKind, &Component)> = ComponentKind::ALL
        .iter()
        .filter_map(|&kind| {
            layout
                .components
                .get(kind.theme_key())
                .map(|component| (kind, component))
        })
        .collect();
    components.sort_by_key(|(_, component)| component.layer);
    components
}

/// Render one card onto a transparent canvas of the layout's declared size.
///
/// Unknown card categories are fatal. Per-component failures are logged and
/// abort only that component's contribution; the pipeline continues with the
/// next component.
#[tracing::instrument(skip_all, fields(card = %card.id, category = %card.category))]
pub fn render_card(
    theme: &Theme,
    theme_dir: &Path,
    card: &CardData,
    shaper: &dyn TextShaper,
    registry: &HandlerRegistry,
    opts: &RenderOptions,
) -> CardwrightResult<image::RgbaImage> {
    let layout = theme.layouts.get(&card.category).ok_or_else(|| {
        CardwrightError::theme(format!("unrecognized card category '{}'", card.category))
    })?;

    let mut canvas = RenderCanvas::new(layout.width, layout.height)?;
    let mut theme_assets = AssetLibrary::new(theme_dir);
    let mut artwork_assets = AssetLibrary::new(&opts.artwork_dir);
    let mut text_engine = TextLayoutEngine::new();

    for (kind, component) in ordered_components(layout) {
        let Some(inputs) = ComponentInputs::for_kind(card, kind) else {
            continue;
        };

        let result = render_component(
            &mut canvas,
            component,
            &inputs,
            card,
            theme_dir,
            &mut theme_assets,
            &mut artwork_assets,
            &mut text_engine,
            shaper,
            registry,
            opts,
        );
        if let Err(e) = result {
            error!(component = kind.theme_key(), error = %e, "component aborted");
            // The failed component must not leak clip state into the next.
            canvas.reset_clip();
        }
    }

    canvas.finish()
}

#[allow(clippy::too_many_arguments)]
fn render_component(
    canvas: &mut RenderCanvas,
    component: &Component,
    inputs: &ComponentInputs,
    card: &CardData,
    theme_dir: &Path,
    theme_assets: &mut AssetLibrary,
    artwork_assets: &mut AssetLibrary,
    text_engine: &mut TextLayoutEngine,
    shaper: &dyn TextShaper,
    registry: &HandlerRegistry,
    opts: &RenderOptions,
) -> CardwrightResult<()> {
    // Clip, when present, applies to this component's image draw only.
    if let Some(clip) = &component.clip_region
        && let Some(path) = clip_path(clip)
    {
        canvas.set_clip(&path);
    }

    if let Some(image_spec) = &component.image {
        if let Some(override_asset) = &inputs.override_asset {
            let img = artwork_assets.image(override_asset)?;
            canvas.draw_image_region(&img, &image_spec.region)?;
        } else if let Some(key) = &inputs.key
            && let Some(rel_path) = image_spec.assets.get(key)
        {
            let img = theme_assets.image(rel_path)?;
            canvas.draw_image_region(&img, &image_spec.region)?;
        }
    }
    // Reset after any image attempt; later draws in this component and every
    // following component start unclipped.
    canvas.reset_clip();

    if let (Some(region), Some(font), Some(text)) =
        (&component.text, &component.font, inputs.text.as_deref())
    {
        draw_straight_text(canvas, text_engine, theme_assets, region, font, text)?;
    }

    if let (Some(curve_spec), Some(font), Some(text)) = (
        &component.text_curve,
        &component.font,
        inputs.text.as_deref(),
    ) {
        let curve = curve_spec.build();
        let curved = layout_curved_text(&curve, font, text, shaper)?;
        draw_curved_text(canvas, &curved);
    }

    if let Some(custom) = &component.custom {
        match registry.get(&custom.name) {
            Some(handler) => {
                let ctx = HandlerContext {
                    card,
                    theme_dir,
                    cache_dir: &opts.cache_dir,
                    premium: opts.premium,
                };
                handler.apply(canvas, component, &ctx)?;
            }
            None => {
                error!(name = %custom.name, "unknown custom handler, skipping");
            }
        }
    }

    Ok(())
}

/// Build the clip path for a shape variant. Curves cannot clip; the clip
/// step is skipped for that component with an error logged.
fn clip_path(clip: &ClipSpec) -> Option<BezPath> {
    match clip.shape {
        ClipShape::Rectangle => Some(clip.region.to_rect().to_path(CLIP_TOLERANCE)),
        ClipShape::Ellipse => {
            let rect = clip.region.to_rect();
            let ellipse =
                kurbo::Ellipse::new(rect.center(), (rect.width() / 2.0, rect.height() / 2.0), 0.0);
            Some(ellipse.to_path(CLIP_TOLERANCE))
        }
        ClipShape::Curve => {
            error!("unable to use a curve as a clipping region");
            None
        }
    }
}

fn draw_straight_text(
    canvas: &mut RenderCanvas,
    text_engine: &mut TextLayoutEngine,
    theme_assets: &mut AssetLibrary,
    region: &Region,
    font: &FontSpec,
    text: &str,
) -> CardwrightResult<()> {
    let font_bytes = theme_assets.font_bytes(&font.source)?;
    let brush = TextBrush::from_rgba(font.color);

    match font.kind {
        FontKind::Block => {
            let layout = text_engine.layout_plain(
                text,
                font_bytes.as_slice(),
                font.size as f32,
                brush,
                Some(region.width as f32),
            )?;
            canvas.draw_text_layout(&layout, font_bytes.as_slice(), Point::new(region.x, region.y));
        }
        FontKind::Line => {
            let layout =
                text_engine.layout_plain(text, font_bytes.as_slice(), font.size as f32, brush, None)?;
            // Center a single line inside its region.
            let origin = Point::new(
                region.x + (region.width - f64::from(layout.width())) / 2.0,
                region.y + (region.height - f64::from(layout.height())) / 2.0,
            );
            canvas.draw_text_layout(&layout, font_bytes.as_slice(), origin);
        }
    }
    Ok(())
}

fn draw_curved_text(canvas: &mut RenderCanvas, curved: &CurvedText) {
    if let Some(outline) = curved.outline {
        canvas.stroke_path(&curved.path, outline, curved::OUTLINE_WIDTH);
    }
    canvas.fill_path(&curved.path, curved.fill);
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
