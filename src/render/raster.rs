use std::io::Cursor;

use vello_cpu::kurbo::{self as cpu_kurbo, Shape as _};

use crate::{
    foundation::core::{Palette, Rect, Rgba8},
    foundation::error::{IconError, IconResult},
    layout::{Background, IconLayout, PAGE_STROKE_WIDTH},
    render::{BackendKind, IconBackend, check_layout},
};

const PATH_TOLERANCE: f64 = 0.1;

/// PNG backend powered by `vello_cpu` for rasterization and `image` for encoding.
#[derive(Default)]
pub(crate) struct RasterBackend {
    ctx: Option<vello_cpu::RenderContext>,
}

impl RasterBackend {
    pub(crate) fn new() -> Self {
        Self { ctx: None }
    }

    fn with_ctx_mut<R>(
        &mut self,
        side: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> IconResult<R>,
    ) -> IconResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == side && ctx.height() == side => ctx,
            _ => vello_cpu::RenderContext::new(side, side),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Rasterize into straight-alpha RGBA8, row-major, `size * size * 4` bytes.
    pub(crate) fn rasterize(
        &mut self,
        layout: &IconLayout,
        palette: &Palette,
    ) -> IconResult<Vec<u8>> {
        check_layout(layout)?;
        let side: u16 = layout.size().try_into().map_err(|_| {
            IconError::render(format!(
                "raster size {0}x{0} exceeds pixmap limits",
                layout.size()
            ))
        })?;

        let mut pixmap = vello_cpu::Pixmap::new(side, side);
        self.with_ctx_mut(side, |ctx| {
            draw_icon(ctx, layout, palette);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        let mut rgba = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut rgba);
        Ok(rgba)
    }
}

impl IconBackend for RasterBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Raster
    }

    fn render(&mut self, layout: &IconLayout, palette: &Palette) -> IconResult<Vec<u8>> {
        let rgba = self.rasterize(layout, palette)?;
        encode_png(rgba, layout.size())
    }
}

fn draw_icon(ctx: &mut vello_cpu::RenderContext, layout: &IconLayout, palette: &Palette) {
    ctx.set_transform(cpu_kurbo::Affine::IDENTITY);

    ctx.set_paint(color(palette.background));
    let bg = match layout.background {
        Background::Circle { center, radius } => {
            cpu_kurbo::Circle::new((center.x, center.y), radius).to_path(PATH_TOLERANCE)
        }
        Background::RoundedSquare { side, radius } => {
            cpu_kurbo::RoundedRect::new(0.0, 0.0, side, side, radius).to_path(PATH_TOLERANCE)
        }
    };
    ctx.fill_path(&bg);

    let book = &layout.book;
    ctx.set_paint(color(palette.book));
    let cover = cpu_kurbo::RoundedRect::from_rect(
        rect_to_cpu(book.cover_rect()),
        f64::from(book.corner_radius),
    )
    .to_path(PATH_TOLERANCE);
    ctx.fill_path(&cover);

    ctx.set_paint(color(palette.spine));
    ctx.fill_rect(&rect_to_cpu(book.spine_rect()));

    ctx.set_paint(color(palette.pages));
    ctx.set_stroke(cpu_kurbo::Stroke::new(f64::from(PAGE_STROKE_WIDTH)));
    for line in &layout.pages {
        let y = f64::from(line.y);
        let mut p = cpu_kurbo::BezPath::new();
        p.move_to((f64::from(line.x0), y));
        p.line_to((f64::from(line.x1), y));
        ctx.stroke_path(&p);
    }
}

fn color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> cpu_kurbo::Rect {
    cpu_kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        match a {
            0 => px[..3].fill(0),
            255 => {}
            _ => {
                for c in &mut px[..3] {
                    *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
}

fn encode_png(rgba: Vec<u8>, size: u32) -> IconResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(size, size, rgba)
        .ok_or_else(|| IconError::encode("pixel buffer does not match icon size"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| IconError::encode(format!("png encoding failed: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconSpec;

    fn px(rgba: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * size + x) * 4) as usize;
        [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
    }

    fn assert_close(actual: [u8; 4], expected: [u8; 4]) {
        let ok = actual
            .iter()
            .zip(expected.iter())
            .all(|(&a, &e)| a.abs_diff(e) <= 1);
        assert!(ok, "expected ~{expected:?}, got {actual:?}");
    }

    #[test]
    fn unpremultiply_restores_straight_alpha() {
        let mut buf = vec![38, 88, 40, 128, 9, 9, 9, 0, 76, 175, 80, 255];
        unpremultiply_rgba8_in_place(&mut buf);
        assert_eq!(&buf[0..4], &[76, 175, 80, 128]);
        assert_eq!(&buf[4..8], &[0, 0, 0, 0]);
        assert_eq!(&buf[8..12], &[76, 175, 80, 255]);
    }

    #[test]
    fn maskable_corners_are_transparent() {
        let layout = IconLayout::compute(IconSpec::maskable(64)).unwrap();
        let rgba = RasterBackend::new()
            .rasterize(&layout, &Palette::default())
            .unwrap();
        assert_eq!(rgba.len(), 64 * 64 * 4);
        for (x, y) in [(0, 0), (63, 0), (0, 63), (63, 63)] {
            assert_eq!(px(&rgba, 64, x, y)[3], 0, "corner ({x},{y})");
        }
    }

    #[test]
    fn book_centre_is_white_and_margin_is_green() {
        let layout = IconLayout::compute(IconSpec::standard(192)).unwrap();
        let rgba = RasterBackend::new()
            .rasterize(&layout, &Palette::default())
            .unwrap();
        assert_close(px(&rgba, 192, 96, 96), [255, 255, 255, 255]);
        assert_close(px(&rgba, 192, 5, 96), [76, 175, 80, 255]);
        // spine strip
        assert_close(px(&rgba, 192, 25, 96), [230, 230, 230, 255]);
    }

    #[test]
    fn context_is_reused_across_sizes() {
        let mut backend = RasterBackend::new();
        let palette = Palette::default();
        for spec in crate::icon::standard_set() {
            let layout = IconLayout::compute(spec).unwrap();
            let a = backend.rasterize(&layout, &palette).unwrap();
            let b = backend.rasterize(&layout, &palette).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn png_bytes_decode_to_icon_size() {
        let layout = IconLayout::compute(IconSpec::maskable(48)).unwrap();
        let png = RasterBackend::new()
            .render(&layout, &Palette::default())
            .unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let img = image::load_from_memory(&png).unwrap();
        assert_eq!((img.width(), img.height()), (48, 48));
    }
}
