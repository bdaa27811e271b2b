use std::sync::Arc;

use crate::{
    assets::decode::{self, PreparedImage},
    foundation::core::{Affine, BezPath, Point, Rgba},
    foundation::error::{CardwrightError, CardwrightResult},
    text::layout::TextBrush,
    theme::model::Region,
};

/// The shared mutable raster target all components draw into.
///
/// Wraps a `vello_cpu` render context plus the active-clip depth. Clip state
/// must return to "no clip" between components; [`RenderCanvas::reset_clip`]
/// pops every installed clip layer so the invariant holds regardless of how
/// many were pushed.
pub struct RenderCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    clip_depth: usize,
}

impl RenderCanvas {
    /// Create a transparent canvas of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> CardwrightResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| CardwrightError::render("canvas width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| CardwrightError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(CardwrightError::render("canvas dimensions must be > 0"));
        }

        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx: vello_cpu::RenderContext::new(width_u16, height_u16),
            clip_depth: 0,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Install a clip path restricting subsequent draws to its interior.
    pub fn set_clip(&mut self, path: &BezPath) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.push_clip_layer(&bezpath_to_cpu(path));
        self.clip_depth += 1;
    }

    /// Pop every installed clip layer, returning to the unclipped state.
    pub fn reset_clip(&mut self) {
        while self.clip_depth > 0 {
            self.ctx.pop_layer();
            self.clip_depth -= 1;
        }
    }

    /// Whether a clip is currently installed.
    pub fn has_clip(&self) -> bool {
        self.clip_depth > 0
    }

    /// Fill a path with a solid color.
    pub fn fill_path(&mut self, path: &BezPath, color: Rgba) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Stroke a path with round caps and joins.
    pub fn stroke_path(&mut self, path: &BezPath, color: Rgba, stroke_width: f64) {
        let mut stroke = vello_cpu::kurbo::Stroke::new(stroke_width);
        stroke.start_cap = vello_cpu::kurbo::Cap::Round;
        stroke.end_cap = vello_cpu::kurbo::Cap::Round;
        stroke.join = vello_cpu::kurbo::Join::Round;

        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_stroke(stroke);
        self.ctx.set_paint(color_to_cpu(color));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    /// Draw an image at its natural size with its top-left corner at `(x, y)`.
    pub fn draw_image(&mut self, image: &PreparedImage, x: f64, y: f64) -> CardwrightResult<()> {
        let paint = image_paint(image)?;
        self.ctx.set_transform(affine_to_cpu(Affine::translate((x, y))));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        Ok(())
    }

    /// Draw an image scaled to cover `region`.
    pub fn draw_image_region(
        &mut self,
        image: &PreparedImage,
        region: &Region,
    ) -> CardwrightResult<()> {
        if image.width == 0 || image.height == 0 {
            return Err(CardwrightError::render("cannot draw an empty image"));
        }
        let paint = image_paint(image)?;
        let transform = Affine::translate((region.x, region.y))
            * Affine::scale_non_uniform(
                region.width / f64::from(image.width),
                region.height / f64::from(image.height),
            );
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        ));
        Ok(())
    }

    /// Draw a Parley layout with its top-left corner at `origin`.
    pub fn draw_text_layout(
        &mut self,
        layout: &parley::Layout<TextBrush>,
        font_bytes: &[u8],
        origin: Point,
    ) {
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );
        self.ctx
            .set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Finish drawing and return the straight-alpha RGBA output image.
    pub fn finish(mut self) -> CardwrightResult<image::RgbaImage> {
        self.reset_clip();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        decode::unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(u32::from(self.width), u32::from(self.height), data)
            .ok_or_else(|| CardwrightError::render("canvas pixel buffer length mismatch"))
    }
}

fn color_to_cpu(color: Rgba) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = color.to_bytes();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_paint(image: &PreparedImage) -> CardwrightResult<vello_cpu::Image> {
    let pixmap =
        image_premul_bytes_to_pixmap(image.rgba8_premul.as_slice(), image.width, image.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CardwrightResult<vello_cpu::Pixmap> {

    let w: u16 = width
        .try_into()
        .map_err(|_| CardwrightError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardwrightError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CardwrightError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
