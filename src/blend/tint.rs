use crate::{
    foundation::core::Rgba,
    foundation::error::{CardwrightError, CardwrightResult},
};

/// Bespoke per-pixel tint blend used by the set-watermark handler.
///
/// Operates componentwise on fractional RGBA. For mask pixel `r0` and base
/// pixel `r1`:
///
/// - `r0.a == 0`: the base pixel passes through unchanged;
/// - otherwise `r0' = r0 * tint * intensity`, `r2 = r1 * r0' - r1`,
///   `result = r2 * r0'.a + r1` with alpha forced to 1.
///
/// This is not a standard compositing operator and is reproduced exactly for
/// output compatibility. Mask and base must have identical pixel dimensions.
pub fn tint_blend(
    base: &image::RgbaImage,
    mask: &image::RgbaImage,
    tint: Rgba,
    intensity: f64,
) -> CardwrightResult<image::RgbaImage> {
    let (width, height) = base.dimensions();
    if mask.dimensions() != (width, height) {
        return Err(CardwrightError::blend(format!(
            "mask {}x{} does not match base {}x{}",
            mask.width(),
            mask.height(),
            width,
            height
        )));
    }

    let mut out = image::RgbaImage::new(width, height);
    for (out_px, (mask_px, base_px)) in out
        .pixels_mut()
        .zip(mask.pixels().zip(base.pixels()))
    {
        let r0 = Rgba::from_bytes(mask_px.0);
        let r1 = Rgba::from_bytes(base_px.0);

        if r0.a == 0.0 {
            *out_px = image::Rgba(r1.to_bytes());
            continue;
        }

        let r0 = r0 * tint * intensity;
        let r2 = r1 * r0 - r1;
        let mut result = r2 * r0.a + r1;
        result.a = 1.0;
        *out_px = image::Rgba(result.to_bytes());
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/blend/tint.rs"]
mod tests;
