use crate::error::RenderError;
use resvg::usvg::{self, fontdb, Transform};
use std::io::Cursor;
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Rasterizes SVG documents to RGBA PNG.
///
/// The SVG is scaled to fit the requested size, centered, and drawn over a
/// white background.
pub struct SvgRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a renderer using the system fonts
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();

        if fontdb.len() == 0 {
            tracing::warn!("No system fonts found, chart text will not be drawn");
        } else {
            tracing::debug!(font_count = fontdb.len(), "Loaded fonts for chart text");
        }

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Render SVG to a `width` x `height` RGBA PNG
    pub fn render_to_png(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize_svg(svg_data, width, height)?;

        let rgba: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        encode_png(width, height, &rgba)
    }

    /// Parse and rasterize SVG to an RGBA pixmap
    fn rasterize_svg(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Pixmap, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::UnsupportedDimensions { width, height });
        }

        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg_data, &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale_x = width as f32 / svg_size.width();
        let scale_y = height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let offset_x = (width as f32 - svg_size.width() * scale) / 2.0;
        let offset_y = (height as f32 - svg_size.height() * scale) / 2.0;

        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode 8-bit RGBA pixel data as a PNG.
fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"
    <svg xmlns="http://www.w3.org/2000/svg" width="20" height="10" viewBox="0 0 20 10">
      <rect x="0" y="0" width="10" height="10" fill="rgb(255,0,0)"/>
    </svg>"#;

    fn decode(png: &[u8]) -> image::RgbaImage {
        image::load_from_memory_with_format(png, image::ImageFormat::Png)
            .unwrap()
            .to_rgba8()
    }

    #[test]
    fn test_render_dimensions_and_colors() {
        let renderer = SvgRenderer::new();
        let png = renderer.render_to_png(SQUARE.as_bytes(), 20, 10).unwrap();

        let img = decode(&png);
        assert_eq!(img.dimensions(), (20, 10));
        assert_eq!(img.get_pixel(2, 5).0, [255, 0, 0, 255]);
        // Uncovered area is the white background
        assert_eq!(img.get_pixel(17, 5).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_scales_to_fit() {
        let renderer = SvgRenderer::new();
        let png = renderer.render_to_png(SQUARE.as_bytes(), 40, 40).unwrap();

        let img = decode(&png);
        assert_eq!(img.dimensions(), (40, 40));
        // Scaled 2x and centered vertically: content spans y 10..30
        assert_eq!(img.get_pixel(5, 20).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 2).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_invalid_svg() {
        let renderer = SvgRenderer::new();
        let result = renderer.render_to_png(b"not svg", 10, 10);
        assert!(matches!(result, Err(RenderError::SvgParse(_))));
    }

    #[test]
    fn test_zero_dimensions() {
        let renderer = SvgRenderer::new();
        let result = renderer.render_to_png(SQUARE.as_bytes(), 0, 10);
        assert!(matches!(
            result,
            Err(RenderError::UnsupportedDimensions {
                width: 0,
                height: 10
            })
        ));
    }
}
