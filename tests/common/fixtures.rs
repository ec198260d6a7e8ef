//! Test images, encoded in memory.

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// First two paints of the standard palette
pub const RED: [u8; 3] = [0xE5, 0x39, 0x35];
pub const BLUE: [u8; 3] = [0x1E, 0x63, 0xD6];

/// Encode an RGBA image as PNG
pub fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).expect("Failed to encode fixture");
    buf.into_inner()
}

/// PNG built from a per-pixel function
pub fn png_from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Vec<u8> {
    let image = ImageBuffer::from_fn(width, height, |x, y| Rgba(f(x, y)));
    encode(&image, ImageFormat::Png)
}

/// Single-color PNG
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    png_from_fn(width, height, |_, _| [rgb[0], rgb[1], rgb[2], 255])
}

/// Left half red, right half blue
pub fn red_blue_png(width: u32, height: u32) -> Vec<u8> {
    png_from_fn(width, height, |x, _| {
        let c = if x < width / 2 { RED } else { BLUE };
        [c[0], c[1], c[2], 255]
    })
}

/// Fine checkerboard of many colors; scores as busy
pub fn busy_png(side: u32) -> Vec<u8> {
    png_from_fn(side, side, |x, y| {
        if (x + y) % 2 == 0 {
            [0, 0, 0, 255]
        } else {
            [(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) % 256) as u8, 255]
        }
    })
}
