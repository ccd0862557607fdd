#![forbid(unsafe_code)]

use std::str::FromStr;

use crate::render::HeadlessError;

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Headless(#[from] HeadlessError),
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("invalid background color for JPG rendering: {0}")]
    JpegBackground(String),
    #[error("JPG rendering requires an opaque background color (e.g. white)")]
    JpegOpaqueBackgroundRequired,
    #[error("failed to encode JPG")]
    JpegEncode,
    #[error("failed to convert SVG to PDF")]
    PdfConvert,
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub scale: f32,
    /// Any SVG colour; `None` keeps PNG output transparent. JPG defaults to white.
    pub background: Option<String>,
    pub jpeg_quality: u8,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            jpeg_quality: 90,
        }
    }
}

pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let pixmap = svg_to_pixmap(svg, options.scale, options.background.as_deref())?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

pub fn svg_to_jpeg(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let bg = options.background.as_deref().unwrap_or("white");
    let Some(color) = parse_color(bg) else {
        return Err(RasterError::JpegBackground(bg.to_string()));
    };
    if color.alpha() != 1.0 {
        return Err(RasterError::JpegOpaqueBackgroundRequired);
    }

    let pixmap = svg_to_pixmap(svg, options.scale, Some(bg))?;
    let (w, h) = (pixmap.width(), pixmap.height());

    // Opaque fill means every alpha byte is 255.
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut out = Vec::new();
    let mut enc =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, options.jpeg_quality);
    enc.encode(&rgb, w, h, image::ExtendedColorType::Rgb8)
        .map_err(|_| RasterError::JpegEncode)?;
    Ok(out)
}

pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    // svg2pdf pins its own usvg, so the options come from its re-export.
    let mut opt = svg2pdf::usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_string();
    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| RasterError::PdfConvert)
}

fn usvg_options() -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    opt.font_family = "Arial".to_string();
    opt
}

/// Width and height of the root `viewBox`. Our renderers always emit one.
fn viewbox_size(svg: &str) -> Option<(f32, f32)> {
    let doc_start = svg.find("<svg")?;
    let root = &svg[doc_start..doc_start + svg[doc_start..].find('>')?];
    let i = root.find("viewBox=\"")?;
    let rest = &root[i + "viewBox=\"".len()..];
    let raw = &rest[..rest.find('"')?];
    let vb = svgtypes::ViewBox::from_str(raw).ok()?;
    let (w, h) = (vb.w as f32, vb.h as f32);
    (w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0).then_some((w, h))
}

fn svg_to_pixmap(svg: &str, scale: f32, background: Option<&str>) -> Result<tiny_skia::Pixmap> {
    let opt = usvg_options();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    // usvg already maps the viewBox origin to (0,0), including negative padding.
    let (width, height) = viewbox_size(svg).unwrap_or_else(|| {
        let size = tree.size();
        (size.width(), size.height())
    });

    let width_px = (width * scale).ceil().max(1.0) as u32;
    let height_px = (height * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;

    if let Some(color) = background.and_then(parse_color) {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

fn parse_color(text: &str) -> Option<tiny_skia::Color> {
    let c = svgtypes::Color::from_str(text.trim()).ok()?;
    Some(tiny_skia::Color::from_rgba8(c.red, c.green, c.blue, c.alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10" fill="black"/></svg>"#;

    #[test]
    fn svg_to_png_produces_png_signature() {
        let bytes = svg_to_png(SQUARE, &RasterOptions::default()).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn svg_to_jpeg_produces_jpeg_signature() {
        let bytes = svg_to_jpeg(SQUARE, &RasterOptions::default()).unwrap();
        assert!(bytes.starts_with(&[0xff, 0xd8]));
    }

    #[test]
    fn jpeg_rejects_transparent_backgrounds() {
        let options = RasterOptions {
            background: Some("transparent".to_string()),
            ..RasterOptions::default()
        };
        assert!(matches!(
            svg_to_jpeg(SQUARE, &options),
            Err(RasterError::JpegOpaqueBackgroundRequired)
        ));
        let options = RasterOptions {
            background: Some("not a colour".to_string()),
            ..RasterOptions::default()
        };
        assert!(matches!(
            svg_to_jpeg(SQUARE, &options),
            Err(RasterError::JpegBackground(_))
        ));
    }

    #[test]
    fn svg_to_pdf_produces_pdf_signature() {
        let bytes = svg_to_pdf(SQUARE).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn viewbox_size_reads_the_root_element() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-10 -10 620 540"></svg>"#;
        assert_eq!(viewbox_size(svg), Some((620.0, 540.0)));
        assert_eq!(viewbox_size("<svg></svg>"), None);
    }

    #[test]
    fn chip_diagram_rasterizes_at_scale() {
        let svg = crate::render::HeadlessRenderer::new()
            .render_svg(crate::render::SvgDiagram::Chip, None)
            .unwrap();
        let options = RasterOptions {
            scale: 0.5,
            ..RasterOptions::default()
        };
        let pixmap = svg_to_pixmap(&svg, options.scale, None).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (300, 260));
    }
}
