//! Most frequent exact color inside a rectangle.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::image::ImageRef;

/// Pixel rectangle of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// The most frequent exact RGB value in `rect`, alpha ignored.
///
/// Ties go to the color that reached the winning count first, scanning
/// row-major within the rectangle. The rectangle must be non-empty and lie
/// inside the image.
pub(crate) fn dominant_color(image: &ImageRef<'_>, rect: CellRect) -> Rgb {
    let mut counts: HashMap<u32, u32> = HashMap::new();
    let mut best = 0u32;
    let mut best_count = 0u32;

    for y in rect.y..rect.y + rect.height {
        let row = image.row(y);
        let start = rect.x as usize * 4;
        let end = (rect.x + rect.width) as usize * 4;
        for px in row[start..end].chunks_exact(4) {
            let key = Rgb::from_rgba_slice(px).packed();
            let count = counts.entry(key).or_insert(0);
            *count += 1;
            if *count > best_count {
                best_count = *count;
                best = key;
            }
        }
    }

    Rgb::from_packed(best)
}
