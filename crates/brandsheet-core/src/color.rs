//! Color handling for brandsheet posters
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for turning palette
//! entries into 8-bit pixel values and human-readable labels.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Hsl, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
/// This provides convenience methods for working with colors in brandsheet
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgba8().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#2563EB", "rgb(37, 99, 235)", "white", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandsheet_core::color::Color;
    ///
    /// let blue = Color::new("#2563EB").unwrap();
    /// let white = Color::new("white").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates an opaque color from 8-bit sRGB components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: DynamicColor::from_alpha_color(color::AlphaColor::<Srgb>::from_rgba8(
                r, g, b, 255,
            )),
        }
    }

    /// Returns the color as 8-bit sRGB components with alpha.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandsheet_core::color::Color;
    ///
    /// let blue = Color::new("#2563EB").unwrap();
    /// assert_eq!(blue.to_rgba8(), [37, 99, 235, 255]);
    /// ```
    pub fn to_rgba8(self) -> [u8; 4] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }

    /// Returns the 8-bit sRGB triple, ignoring alpha.
    pub fn rgb8(self) -> (u8, u8, u8) {
        let [r, g, b, _] = self.to_rgba8();
        (r, g, b)
    }

    /// Returns the uppercase `#RRGGBB` form of this color.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandsheet_core::color::Color;
    ///
    /// let amber = Color::new("#d97706").unwrap();
    /// assert_eq!(amber.to_hex_string(), "#D97706");
    /// ```
    pub fn to_hex_string(self) -> String {
        let (r, g, b) = self.rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Returns hue (degrees), saturation and lightness (percentages), rounded
    /// to whole numbers.
    ///
    /// Achromatic colors report a hue of zero.
    pub fn hsl(self) -> (u16, u8, u8) {
        let [hue, saturation, lightness, _] = self.color.to_alpha_color::<Hsl>().components;
        let hue = if hue.is_nan() {
            0.0
        } else {
            hue.rem_euclid(360.0)
        };
        let saturation = if saturation.is_nan() { 0.0 } else { saturation };
        (
            hue.round() as u16 % 360,
            saturation.round().clamp(0.0, 100.0) as u8,
            lightness.round().clamp(0.0, 100.0) as u8,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.to_rgba8();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

impl From<Color> for cosmic_text::Color {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.to_rgba8();
        cosmic_text::Color::rgba(r, g, b, a)
    }
}

/// Parses a `#RRGGBB` string into an 8-bit RGB triple.
///
/// # Examples
///
/// ```
/// use brandsheet_core::color::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#2563EB"), Ok((37, 99, 235)));
/// assert!(hex_to_rgb("#2563").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color `{hex}`: expected #RRGGBB"));
    }
    Color::new(&format!("#{digits}")).map(Color::rgb8)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_color_new() {
        let blue = Color::new("#2563EB");
        assert!(blue.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_hex_to_rgb_primary() {
        assert_eq!(hex_to_rgb("#2563EB"), Ok((37, 99, 235)));
        assert_eq!(hex_to_rgb("FFFFFF"), Ok((255, 255, 255)));
    }

    #[test]
    fn test_hex_to_rgb_rejects_malformed() {
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#GGGGGG").is_err());
        assert!(hex_to_rgb("blue").is_err());
    }

    #[test]
    fn test_color_hex_string_is_uppercase() {
        let violet = Color::new("#7c3aed").unwrap();
        assert_eq!(violet.to_hex_string(), "#7C3AED");
    }

    #[test]
    fn test_color_hsl_primary() {
        let (h, s, l) = Color::new("#2563EB").unwrap().hsl();
        assert_eq!(h, 221);
        assert_eq!(s, 83);
        assert_eq!(l, 53);
    }

    #[test]
    fn test_color_hsl_achromatic() {
        let (h, s, l) = Color::new("#FFFFFF").unwrap().hsl();
        assert_eq!(h, 0);
        assert_eq!(s, 0);
        assert_eq!(l, 100);
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("#0F172A").unwrap();
        let color2 = Color::from_rgb8(15, 23, 42);
        let color3 = Color::new("#F8FAFC").unwrap();

        assert_eq!(color1.to_rgba8(), color2.to_rgba8());
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&Color::new("#0F172A").unwrap()));
        assert!(!set.contains(&color3));
    }

    #[test]
    fn test_tiny_skia_conversion_is_opaque() {
        let color: tiny_skia::Color = Color::new("#059669").unwrap().into();
        assert!(color.is_opaque());
    }

    proptest! {
        #[test]
        fn hex_strings_parse_to_their_components(r: u8, g: u8, b: u8) {
            let hex = format!("#{r:02X}{g:02X}{b:02X}");
            prop_assert_eq!(hex_to_rgb(&hex), Ok((r, g, b)));
        }
    }
}
