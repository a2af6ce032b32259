use std::fmt::Write as _;

use crate::{
    foundation::core::Palette,
    foundation::error::{IconError, IconResult},
    layout::{Background, IconLayout, PAGE_STROKE_WIDTH},
    render::{BackendKind, IconBackend, check_layout},
};

/// Writes icons as standalone SVG documents.
#[derive(Debug, Default)]
pub(crate) struct SvgBackend;

impl SvgBackend {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl IconBackend for SvgBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Vector
    }

    fn render(&mut self, layout: &IconLayout, palette: &Palette) -> IconResult<Vec<u8>> {
        check_layout(layout)?;
        let markup = svg_markup(layout, palette)
            .map_err(|e| IconError::render(format!("failed to format svg: {e}")))?;
        Ok(markup.into_bytes())
    }
}

pub(crate) fn svg_markup(
    layout: &IconLayout,
    palette: &Palette,
) -> Result<String, std::fmt::Error> {
    let s = layout.size();
    let book = &layout.book;
    let mut out = String::with_capacity(1024);

    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg width="{s}" height="{s}" viewBox="0 0 {s} {s}" xmlns="http://www.w3.org/2000/svg">"#
    )?;

    writeln!(out, "  <!-- Background -->")?;
    let bg = palette.background.to_hex();
    match layout.background {
        Background::Circle { center, radius } => writeln!(
            out,
            r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{bg}"/>"#,
            center.x, center.y
        )?,
        Background::RoundedSquare { side, radius } => writeln!(
            out,
            r#"  <rect width="{side}" height="{side}" rx="{radius}" fill="{bg}"/>"#
        )?,
    }

    writeln!(out)?;
    writeln!(out, "  <!-- Book -->")?;
    writeln!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
        book.x,
        book.y,
        book.width,
        book.height,
        book.corner_radius,
        palette.book.to_hex()
    )?;

    writeln!(out)?;
    writeln!(out, "  <!-- Spine -->")?;
    writeln!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        book.x,
        book.y,
        book.spine_width,
        book.height,
        palette.spine.to_hex()
    )?;

    writeln!(out)?;
    writeln!(out, "  <!-- Pages -->")?;
    let stroke = palette.pages.to_hex();
    for line in &layout.pages {
        writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="{PAGE_STROKE_WIDTH}"/>"#,
            line.x0, line.y, line.x1, line.y
        )?;
    }

    writeln!(out, "</svg>")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconSpec;

    fn markup(spec: IconSpec) -> String {
        let layout = IconLayout::compute(spec).unwrap();
        let bytes = SvgBackend::new()
            .render(&layout, &Palette::default())
            .unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn root_element_is_square() {
        let svg = markup(IconSpec::standard(192));
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(svg.contains(r#"<svg width="192" height="192" viewBox="0 0 192 192""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn standard_uses_rounded_square() {
        let svg = markup(IconSpec::standard(192));
        assert!(svg.contains(r##"<rect width="192" height="192" rx="19" fill="#4caf50"/>"##));
        assert!(!svg.contains("<circle"));
        assert!(svg.contains(
            r##"<rect x="19" y="-4" width="154" height="200" rx="5" fill="#ffffff"/>"##
        ));
    }

    #[test]
    fn maskable_uses_circle() {
        let svg = markup(IconSpec::maskable(512));
        assert!(svg.contains(r##"<circle cx="256" cy="256" r="256" fill="#4caf50"/>"##));
        assert!(svg.contains(
            r##"<rect x="102" y="56" width="24" height="400" fill="#e6e6e6"/>"##
        ));
    }

    #[test]
    fn odd_sizes_keep_fractional_centre() {
        let svg = markup(IconSpec::maskable(33));
        assert!(svg.contains(r#"cx="16.5" cy="16.5" r="16.5""#));
    }

    #[test]
    fn one_line_element_per_page() {
        let layout = IconLayout::compute(IconSpec::maskable(192)).unwrap();
        let svg = markup(IconSpec::maskable(192));
        assert_eq!(svg.matches("<line ").count(), layout.pages.len());
        assert!(svg.contains(
            r##"<line x1="145" y1="51" x2="154" y2="51" stroke="#c8c8c8" stroke-width="2"/>"##
        ));
    }

    #[test]
    fn custom_palette_is_applied() {
        let mut palette = Palette::default();
        palette.background = crate::foundation::core::Rgba8::opaque(0x12, 0x34, 0x56);
        let layout = IconLayout::compute(IconSpec::standard(48)).unwrap();
        let svg = svg_markup(&layout, &palette).unwrap();
        assert!(svg.contains(r##"fill="#123456""##));
    }
}
