use resvg::usvg::{self, Transform};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use tiny_skia::Pixmap;

use crate::error::RenderError;

/// Rasterizes SVG documents and encodes the result as PNG.
///
/// The PNG color type is picked from the raster content:
/// - 256 colors or fewer → indexed color type 3 with a PLTE chunk (1, 2, 4 or 8 bit)
/// - more than 256 colors → RGB color type 2
pub struct SvgRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgRenderer {
    /// Create a new SVG renderer with fonts loaded from the provided data
    pub fn with_fonts(fonts: Vec<(String, std::borrow::Cow<'static, [u8]>)>) -> Self {
        let mut fontdb = fontdb::Database::new();

        for (name, data) in fonts {
            fontdb.load_font_data(data.into_owned());
            tracing::debug!(font = %name, "Loaded font");
        }

        // Load system fonts as fallback
        fontdb.load_system_fonts();

        tracing::info!(
            font_count = fontdb.len(),
            "Loaded fonts for SVG text rendering"
        );

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Create a new SVG renderer with no custom fonts (system fonts only)
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    /// Access the font database faces
    pub fn font_faces(&self) -> impl Iterator<Item = &fontdb::FaceInfo> {
        self.fontdb.faces()
    }

    /// Parse and rasterize SVG onto a white pixmap, scaled to fit and centered
    pub fn rasterize(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Pixmap, RenderError> {
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

    /// Rasterize SVG and encode it as an optimized PNG
    pub fn render_to_png(
        &self,
        svg_data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize(svg_data, width, height)?;
        let png_bytes = encode_pixmap(&pixmap)?;

        // Re-compress with oxipng (zopfli + adaptive filter selection)
        let optimized = oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        )
        .unwrap_or(png_bytes);

        Ok(optimized)
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Encode an opaque pixmap as indexed PNG, or RGB when it has more than 256 colors.
fn encode_pixmap(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let mut lookup: HashMap<[u8; 3], u8> = HashMap::new();
    let mut plte: Vec<[u8; 3]> = Vec::new();
    let mut indices = Vec::with_capacity((width * height) as usize);

    for px in pixmap.pixels() {
        // Opaque, so premultiplied equals straight RGB
        let rgb = [px.red(), px.green(), px.blue()];
        let index = match lookup.get(&rgb) {
            Some(&index) => index,
            None if plte.len() < 256 => {
                let index = plte.len() as u8;
                lookup.insert(rgb, index);
                plte.push(rgb);
                index
            }
            None => {
                let rgb_data: Vec<u8> = pixmap
                    .pixels()
                    .iter()
                    .flat_map(|p| [p.red(), p.green(), p.blue()])
                    .collect();
                return encode_png(
                    width,
                    height,
                    png::ColorType::Rgb,
                    png::BitDepth::Eight,
                    None,
                    &rgb_data,
                );
            }
        };
        indices.push(index);
    }

    let (depth, bits) = match plte.len() {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    };
    let packed = if bits == 8 {
        indices
    } else {
        pack_nbits(&indices, width, bits)
    };
    let plte: Vec<u8> = plte.concat();

    encode_png(
        width,
        height,
        png::ColorType::Indexed,
        depth,
        Some(&plte),
        &packed,
    )
}

/// Encode packed pixel data as a PNG.
fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    packed: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Fast);
        encoder.set_filter(png::FilterType::NoFilter);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
