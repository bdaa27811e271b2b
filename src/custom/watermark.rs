use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, error};

use crate::{
    assets::decode,
    blend::tint::tint_blend,
    custom::registry::{CustomHandler, HandlerContext},
    foundation::core::Rgba,
    foundation::error::{CardwrightError, CardwrightResult},
    render::canvas::RenderCanvas,
    theme::model::{Component, ImageSpec, Region},
};

/// Set icon file extension.
const ICON_EXT: &str = "png";

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Handler parameters from the component's `custom` record.
struct WatermarkParams {
    /// Base image placement and asset set; the `default` asset is blended.
    image: ImageSpec,
    /// Placement of the set icon inside the base image, canvas coordinates.
    region: Region,
    /// Extra y offset applied when the card has a race plate.
    #[serde(default)]
    race_offset: f64,
    /// Theme-relative directory holding per-set icon files.
    set_icons: String,
    /// Blend intensity scalar.
    blend_intensity: f64,
    /// Tint color per card category.
    tint: std::collections::BTreeMap<String, Rgba>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Composite identity of one blended watermark, keying the disk cache.
pub struct WatermarkKey {
    /// Lowercase card category.
    pub category: String,
    /// Premium variant flag.
    pub premium: bool,
    /// Whether the watermark is offset for a race plate.
    pub has_race: bool,
    /// Lowercase set identifier.
    pub set_name: String,
}

impl WatermarkKey {
    /// Cache file name for this identity.
    pub fn file_name(&self) -> String {
        let mut name = self.category.clone();
        if self.premium {
            name.push_str("_premium");
        }
        if self.has_race {
            name.push_str("_race");
        }
        name.push('_');
        name.push_str(&self.set_name);
        name.push('.');
        name.push_str(ICON_EXT);
        name
    }
}

/// Draws the decorative set watermark blended into a card's description
/// area, caching the blended result on disk keyed by
/// (category, premium, race-presence, set).
pub struct SetWatermark;

impl CustomHandler for SetWatermark {
    fn apply(
        &self,
        canvas: &mut RenderCanvas,
        component: &Component,
        ctx: &HandlerContext<'_>,
    ) -> CardwrightResult<()> {
        let custom = component
            .custom
            .as_ref()
            .ok_or_else(|| CardwrightError::theme("watermark component has no custom record"))?;
        let params: WatermarkParams = serde_json::from_value(custom.params.clone())
            .map_err(|e| CardwrightError::theme(format!("watermark params: {e}")))?;

        // Uncraftable sets carry no watermark.
        if !ctx.card.set_craftable {
            return Ok(());
        }
        let key = WatermarkKey {
            category: ctx.card.category.clone(),
            premium: ctx.premium,
            has_race: ctx.card.has_race(),
            set_name: ctx.card.card_set.to_lowercase(),
        };

        std::fs::create_dir_all(ctx.cache_dir)
            .with_context(|| format!("create cache dir '{}'", ctx.cache_dir.display()))?;
        let cache_path = ctx.cache_dir.join(key.file_name());

        let blended = if cache_path.is_file() {
            debug!(path = %cache_path.display(), "watermark cache hit");
            image::open(&cache_path)
                .with_context(|| format!("read cached watermark '{}'", cache_path.display()))?
                .to_rgba8()
        } else {
            let blended = blend_watermark(&params, &key, ctx.theme_dir)?;
            blended
                .save(&cache_path)
                .with_context(|| format!("write cached watermark '{}'", cache_path.display()))?;
            blended
        };

        let prepared = decode::prepare_rgba_image(&blended);
        canvas.draw_image(&prepared, params.image.region.x, params.image.region.y)
    }
}

fn blend_watermark(
    params: &WatermarkParams,
    key: &WatermarkKey,
    theme_dir: &Path,
) -> CardwrightResult<image::RgbaImage> {
    let base_rel = params.image.assets.get("default").ok_or_else(|| {
        CardwrightError::theme("watermark image has no 'default' asset")
    })?;
    let base = image::open(theme_dir.join(base_rel))
        .with_context(|| format!("read watermark base '{base_rel}'"))?
        .to_rgba8();

    let mask = build_mask(params, key, theme_dir, base.dimensions());

    let tint = params.tint.get(&key.category).copied().ok_or_else(|| {
        CardwrightError::theme(format!("no watermark tint for category '{}'", key.category))
    })?;

    tint_blend(&base, &mask, tint, params.blend_intensity)
}

/// Resize the set icon to the watermark region and paste it at its offset
/// inside a transparent canvas of the base image's declared size.
///
/// A missing icon file is logged and leaves the region blank; the blend still
/// runs so the base artwork renders.
fn build_mask(
    params: &WatermarkParams,
    key: &WatermarkKey,
    theme_dir: &Path,
    base_dims: (u32, u32),
) -> image::RgbaImage {
    let offset_x = params.region.x - params.image.region.x;
    let mut offset_y = params.region.y - params.image.region.y;
    if key.has_race {
        offset_y += params.race_offset;
    }

    let mut mask = image::RgbaImage::new(base_dims.0, base_dims.1);

    let icon_path = icon_path(theme_dir, &params.set_icons, &key.set_name);
    let icon = match image::open(&icon_path) {
        Ok(icon) => icon.to_rgba8(),
        Err(e) => {
            error!(
                set = %key.set_name,
                path = %icon_path.display(),
                error = %e,
                "set icon missing, watermark region left blank"
            );
            return mask;
        }
    };

    let resized = image::imageops::resize(
        &icon,
        params.region.width.round().max(1.0) as u32,
        params.region.height.round().max(1.0) as u32,
        image::imageops::FilterType::Triangle,
    );
    image::imageops::replace(&mut mask, &resized, offset_x as i64, offset_y as i64);
    mask
}

fn icon_path(theme_dir: &Path, set_icons: &str, set_name: &str) -> PathBuf {
    theme_dir
        .join(set_icons)
        .join(format!("{set_name}.{ICON_EXT}"))
}

#[cfg(test)]
#[path = "../../tests/unit/custom/watermark.rs"]
mod tests;
