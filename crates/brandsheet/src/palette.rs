//! The brand color palette.
//!
//! A [`Palette`] is a name → [`Color`] map. Drawing code refers to
//! colors only by name, so an unknown name surfaces as
//! [`BrandsheetError::Palette`] instead of a panic.

use indexmap::IndexMap;

use brandsheet_core::color::{Color, hex_to_rgb};

use crate::BrandsheetError;

/// Color names and hex values of the brand palette, in declaration order.
pub const BRAND_COLORS: [(&str, &str); 17] = [
    ("primary", "#2563EB"),
    ("primary_light", "#3B82F6"),
    ("primary_dark", "#1D4ED8"),
    ("slate_900", "#0F172A"),
    ("slate_800", "#1E293B"),
    ("slate_700", "#334155"),
    ("slate_600", "#475569"),
    ("slate_500", "#64748B"),
    ("slate_400", "#94A3B8"),
    ("slate_300", "#CBD5E1"),
    ("slate_200", "#E2E8F0"),
    ("slate_100", "#F1F5F9"),
    ("slate_50", "#F8FAFC"),
    ("white", "#FFFFFF"),
    ("violet", "#7C3AED"),
    ("emerald", "#059669"),
    ("amber", "#D97706"),
];

/// An ordered, immutable set of named colors.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: IndexMap<String, Color>,
}

impl Palette {
    /// Builds a palette from `(name, "#RRGGBB")` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`BrandsheetError::Palette`] if a value is not a six digit hex
    /// color.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, BrandsheetError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let colors = entries
            .into_iter()
            .map(|(name, hex)| -> Result<(String, Color), BrandsheetError> {
                let (r, g, b) = hex_to_rgb(hex)
                    .map_err(|err| BrandsheetError::Palette(format!("color `{name}`: {err}")))?;
                Ok((name.to_string(), Color::from_rgb8(r, g, b)))
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;
        Ok(Self { colors })
    }

    /// Looks up a color by name.
    ///
    /// # Errors
    ///
    /// Returns [`BrandsheetError::Palette`] for names not in the palette.
    pub fn color(&self, name: &str) -> Result<Color, BrandsheetError> {
        self.colors
            .get(name)
            .copied()
            .ok_or_else(|| BrandsheetError::Palette(format!("unknown color `{name}`")))
    }
}

impl Default for Palette {
    /// The brand palette from [`BRAND_COLORS`].
    fn default() -> Self {
        Self::from_entries(BRAND_COLORS).expect("brand colors are valid hex values")
    }
}
