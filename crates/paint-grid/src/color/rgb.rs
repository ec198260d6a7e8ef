//! 8-bit RGB color with hex formatting and raw Euclidean distance.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// An opaque 8-bit RGB color.
///
/// This is the unit of both exact-color bucketing (two colors are "the same"
/// only if every channel matches) and nearest-palette matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Read the RGB part of an RGBA (or RGB) pixel slice; alpha is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `pixel` has fewer than three bytes.
    #[inline]
    pub fn from_rgba_slice(pixel: &[u8]) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Pack into `0xRRGGBB`.
    ///
    /// Two colors pack to the same value exactly when their hex strings are
    /// equal, so this is used as the bucket key for color counting.
    #[inline]
    pub const fn packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Inverse of [`packed()`](Self::packed).
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Format as a lowercase `#rrggbb` string.
    ///
    /// ```
    /// use paint_grid::Rgb;
    /// assert_eq!(Rgb::new(255, 8, 171).to_hex(), "#ff08ab");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Squared Euclidean distance in raw RGB space.
    ///
    /// Monotonic in [`distance()`](Self::distance), so it is what the
    /// nearest-color search compares.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in raw RGB space: `sqrt(Δr² + Δg² + Δb²)`.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive, with
    /// surrounding whitespace trimmed.
    ///
    /// ```
    /// use paint_grid::Rgb;
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: 0xF -> 0xFF
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Rgb::new(255, 255, 255).to_hex(), "#ffffff");
        assert_eq!(Rgb::new(1, 10, 171).to_hex(), "#010aab");
        assert_eq!(Rgb::new(1, 10, 171).to_string(), "#010aab");
    }

    #[test]
    fn test_hex_parsing_6digit() {
        let red: Rgb = "#FF0000".parse().unwrap();
        assert_eq!(red, Rgb::new(255, 0, 0));

        let no_hash: Rgb = "00ff80".parse().unwrap();
        assert_eq!(no_hash, Rgb::new(0, 255, 128));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: Rgb = "#ABC".parse().unwrap();
        assert_eq!(color, Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgb>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgb>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!("".parse::<Rgb>(), Err(ParseColorError::InvalidLength)));
        assert!(matches!("#".parse::<Rgb>(), Err(ParseColorError::InvalidLength)));
        // Multi-byte characters must not panic on slicing
        assert!("#ééé".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let upper: Rgb = "  #ABCDEF ".parse().unwrap();
        let lower: Rgb = "#abcdef".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_hex_round_trip_through_string() {
        let color = Rgb::new(18, 52, 86);
        let parsed: Rgb = color.to_hex().parse().unwrap();
        assert_eq!(parsed, color);
    }

    #[test]
    fn test_packed_matches_hex_identity() {
        let a = Rgb::new(1, 2, 3);
        assert_eq!(a.packed(), 0x010203);
        assert_eq!(Rgb::from_packed(a.packed()), a);
        // Off by one in any channel is a different bucket
        assert_ne!(a.packed(), Rgb::new(1, 2, 4).packed());
    }

    #[test]
    fn test_distance() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert_eq!(black.distance(black), 0.0);
        assert_eq!(black.distance_squared(white), 3 * 255 * 255);
        assert!((black.distance(white) - 441.672_955_9).abs() < 1e-6);
        assert_eq!(
            Rgb::new(3, 0, 0).distance(Rgb::new(0, 4, 0)),
            5.0,
            "3-4-5 triangle"
        );
    }

    #[test]
    fn test_from_rgba_slice_ignores_alpha() {
        let opaque = Rgb::from_rgba_slice(&[10, 20, 30, 255]);
        let clear = Rgb::from_rgba_slice(&[10, 20, 30, 0]);
        assert_eq!(opaque, clear);
    }
}
