//! Aspect-preserving resample onto the square analysis canvas.
//!
//! The source is scaled by `min(A / width, A / height)`, rounded to whole
//! pixels, box-filtered with `fast_image_resize` and alpha-blended at the
//! centre of a white `A x A` canvas. Box filtering keeps integer upscales
//! exact and only blends where a destination pixel straddles source pixels.

use ::image::{imageops, Rgba, RgbaImage};
use fast_image_resize as fr;

use crate::api::ImageError;
use crate::color::Rgb;
use crate::image::ImageRef;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Square opaque canvas the metrics are computed on.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalysisCanvas {
    image: RgbaImage,
}

impl AnalysisCanvas {
    /// A white canvas of side `size`.
    pub(crate) fn blank(size: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, WHITE),
        }
    }

    #[inline]
    pub(crate) fn size(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub(crate) fn get(&self, x: u32, y: u32) -> Rgb {
        let Rgba([r, g, b, _]) = *self.image.get_pixel(x, y);
        Rgb::new(r, g, b)
    }
}

/// Dimensions of the scaled image inside a canvas of side `size`.
fn scaled_dimensions(width: u32, height: u32, size: u32) -> (u32, u32) {
    let scale = (size as f64 / width as f64).min(size as f64 / height as f64);
    let fit = |len: u32| ((len as f64 * scale).round() as u32).clamp(1, size);
    (fit(width), fit(height))
}

/// Box-filter `image` to `width x height`, alpha-aware.
fn resize(image: &ImageRef<'_>, width: u32, height: u32) -> Result<RgbaImage, ImageError> {
    let src = fr::images::Image::from_vec_u8(
        image.width(),
        image.height(),
        image.as_bytes().to_vec(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| ImageError::Resample(e.to_string()))?;
    let mut dst = fr::images::Image::new(width, height, fr::PixelType::U8x4);

    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Box));
    fr::Resizer::new()
        .resize(&src, &mut dst, Some(&options))
        .map_err(|e| ImageError::Resample(e.to_string()))?;

    RgbaImage::from_raw(width, height, dst.into_vec())
        .ok_or_else(|| ImageError::Resample("resized buffer has the wrong length".to_string()))
}

/// Resample `image` onto a centred white canvas of side `size`.
///
/// The caller guarantees a non-empty image and `size >= 1`.
pub(crate) fn resample_to_canvas(
    image: &ImageRef<'_>,
    size: u32,
) -> Result<AnalysisCanvas, ImageError> {
    let (width, height) = scaled_dimensions(image.width(), image.height(), size);
    let scaled = resize(image, width, height)?;

    let mut canvas = AnalysisCanvas::blank(size);
    imageops::overlay(
        &mut canvas.image,
        &scaled,
        ((size - width) / 2) as i64,
        ((size - height) / 2) as i64,
    );
    Ok(canvas)
}
