//! Ordered palette of named paints with nearest-color matching.

use std::collections::HashSet;

use super::error::PaletteError;
use super::standard::STANDARD_COLORS;
use crate::color::Rgb;

/// A paint in the palette: a display name and its color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedColor {
    /// Human readable name printed in the legend ("Sky Blue")
    pub name: String,
    /// The paint color
    pub color: Rgb,
}

impl NamedColor {
    /// Create a named color.
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// The color as a lowercase `#rrggbb` string.
    #[inline]
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }
}

/// An ordered list of named paints.
///
/// Index `i` is paint number `i + 1`. Construction rejects empty palettes and
/// duplicate colors, so every index names a distinct paint.
///
/// # Example
///
/// ```
/// use paint_grid::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&[("Black", "#000000"), ("White", "#ffffff")]).unwrap();
/// let (idx, _) = palette.find_nearest(Rgb::new(200, 200, 200));
/// assert_eq!(palette.get(idx).unwrap().name, "White");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<NamedColor>,
}

impl Palette {
    /// Create a palette from named colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `entries` is empty
    /// - [`PaletteError::DuplicateColor`] if two entries share a color
    pub fn new(entries: Vec<NamedColor>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if !seen.insert(entry.color) {
                return Err(PaletteError::DuplicateColor { index });
            }
        }

        Ok(Self { entries })
    }

    /// Create a palette from `(name, hex)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or the validation errors of [`Palette::new`].
    pub fn from_hex(entries: &[(&str, &str)]) -> Result<Self, PaletteError> {
        let entries = entries
            .iter()
            .map(|(name, hex)| Ok(NamedColor::new(*name, hex.parse::<Rgb>()?)))
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Self::new(entries)
    }

    /// The standard paint palette, in paint-number order.
    ///
    /// See [`STANDARD_PALETTE_VERSION`](super::STANDARD_PALETTE_VERSION).
    pub fn standard() -> Self {
        // The data file is validated by build.rs and its colors are distinct
        // (see test_standard_palette_is_valid), so this skips re-validation.
        Self {
            entries: STANDARD_COLORS
                .iter()
                .map(|&(name, bytes)| NamedColor::new(name, Rgb::from_bytes(bytes)))
                .collect(),
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `idx`.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&NamedColor> {
        self.entries.get(idx)
    }

    /// Get the color at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.entries[idx].color
    }

    /// Iterate entries in paint-number order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.entries.iter()
    }

    /// Keep the first `max_colors` entries, preserving order.
    ///
    /// Paint numbers of the kept entries are unchanged, so a sheet printed
    /// with 8 colors and one printed with 12 agree on what "3" means.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidSize`] if `max_colors` is zero or larger than
    /// the palette.
    pub fn truncate(&self, max_colors: usize) -> Result<Self, PaletteError> {
        if max_colors == 0 || max_colors > self.len() {
            return Err(PaletteError::InvalidSize {
                requested: max_colors,
                available: self.len(),
            });
        }
        Ok(Self {
            entries: self.entries[..max_colors].to_vec(),
        })
    }

    /// Find the palette entry nearest to `color` by raw RGB Euclidean distance.
    ///
    /// Returns `(index, distance)`. Entries are scanned from index 0 upward
    /// and only a strictly smaller distance replaces the current best, so the
    /// lowest index wins ties.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, entry) in self.entries.iter().enumerate() {
            let dist = color.distance_squared(entry.color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, (best_dist as f64).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::STANDARD_PALETTE_VERSION;

    fn bw() -> Palette {
        Palette::from_hex(&[("Black", "#000000"), ("White", "#FFFFFF")]).unwrap()
    }

    #[test]
    fn test_palette_basic_construction() {
        let palette = Palette::from_hex(&[
            ("Black", "#000000"),
            ("White", "#FFFFFF"),
            ("Red", "#FF0000"),
        ])
        .unwrap();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(2).unwrap().name, "Red");
        assert_eq!(palette.get(2).unwrap().hex(), "#ff0000");
        assert!(palette.get(3).is_none());
    }

    #[test]
    fn test_palette_empty_error() {
        assert_eq!(Palette::new(vec![]), Err(PaletteError::EmptyPalette));
    }

    #[test]
    fn test_palette_duplicate_color() {
        let result = Palette::from_hex(&[
            ("Red", "#FF0000"),
            ("Green", "#00FF00"),
            ("Also Red", "#f00"),
        ]);
        assert_eq!(result, Err(PaletteError::DuplicateColor { index: 2 }));
    }

    #[test]
    fn test_from_hex_invalid_hex() {
        let result = Palette::from_hex(&[("Bad", "#ZZZZZZ")]);
        assert!(matches!(result, Err(PaletteError::ParseColor(_))));
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = bw();
        let (idx, dist) = palette.find_nearest(Rgb::new(0, 0, 0));
        assert_eq!(idx, 0);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_find_nearest_uses_raw_rgb() {
        let palette = bw();
        assert_eq!(palette.find_nearest(Rgb::new(100, 100, 100)).0, 0);
        assert_eq!(palette.find_nearest(Rgb::new(150, 150, 150)).0, 1);
    }

    #[test]
    fn test_find_nearest_tie_prefers_lower_index() {
        // (1,1,1) is sqrt(3) away from both entries
        let palette =
            Palette::from_hex(&[("Dark", "#000000"), ("Light", "#020202")]).unwrap();
        let (idx, dist) = palette.find_nearest(Rgb::new(1, 1, 1));
        assert_eq!(idx, 0, "lower index must win an exact tie");
        assert!((dist - 3f64.sqrt()).abs() < 1e-12);

        // Same distances, order swapped: still the lower index
        let swapped =
            Palette::from_hex(&[("Light", "#020202"), ("Dark", "#000000")]).unwrap();
        assert_eq!(swapped.find_nearest(Rgb::new(1, 1, 1)).0, 0);
    }

    #[test]
    fn test_truncate_preserves_order() {
        let palette = Palette::standard();
        let first_five = palette.truncate(5).unwrap();
        assert_eq!(first_five.len(), 5);
        for (i, entry) in first_five.iter().enumerate() {
            assert_eq!(entry, palette.get(i).unwrap());
        }
    }

    #[test]
    fn test_truncate_bounds() {
        let palette = bw();
        assert_eq!(
            palette.truncate(0),
            Err(PaletteError::InvalidSize {
                requested: 0,
                available: 2
            })
        );
        assert_eq!(
            palette.truncate(3),
            Err(PaletteError::InvalidSize {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(palette.truncate(2).unwrap(), palette);
    }

    #[test]
    fn test_truncated_palette_never_returns_dropped_entries() {
        let palette = Palette::from_hex(&[
            ("Black", "#000000"),
            ("White", "#FFFFFF"),
            ("Red", "#FF0000"),
        ])
        .unwrap();
        let (idx, _) = palette.truncate(2).unwrap().find_nearest(Rgb::new(255, 0, 0));
        assert!(idx < 2, "red must map into the first two entries, got {idx}");
    }

    #[test]
    fn test_standard_palette_is_valid() {
        let standard = Palette::standard();
        assert_eq!(standard.len(), 24);
        assert!(STANDARD_PALETTE_VERSION >= 1);

        // Re-validate through the checked constructor
        let checked = Palette::new(standard.iter().cloned().collect()).unwrap();
        assert_eq!(checked, standard);
    }

    #[test]
    fn test_standard_palette_red_and_blue_lead() {
        let two = Palette::standard().truncate(2).unwrap();
        assert_eq!(two.find_nearest(Rgb::new(255, 0, 0)).0, 0);
        assert_eq!(two.find_nearest(Rgb::new(0, 0, 255)).0, 1);
    }
}
