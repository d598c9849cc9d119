//! Stroke definitions for outlines and lines.
//!
//! [`StrokeDefinition`] describes how outlines and lines are painted: a
//! solid color and a width in pixels. Endpoints use flat (butt) caps, so a
//! line ends exactly at its endpoints.
//!
//! ```
//! use brandsheet_core::draw::StrokeDefinition;
//! use brandsheet_core::color::Color;
//!
//! let stroke = StrokeDefinition::solid(Color::new("#D97706").unwrap(), 4.0);
//! assert_eq!(stroke.width(), 4.0);
//! ```

use crate::color::Color;

/// Stroke properties for outlines and lines.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
}

impl StrokeDefinition {
    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Builds the tiny-skia stroke used when painting.
    pub(crate) fn to_skia(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: self.width,
            line_cap: tiny_skia::LineCap::Butt,
            ..tiny_skia::Stroke::default()
        }
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_default_stroke() {
        let stroke = StrokeDefinition::default();
        assert_approx_eq!(f32, stroke.width(), 1.0);
        assert_eq!(stroke.color().to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_to_skia_carries_width() {
        let stroke = StrokeDefinition::solid(Color::new("#2563EB").unwrap(), 3.0);
        let skia = stroke.to_skia();
        assert_approx_eq!(f32, skia.width, 3.0);
        assert_eq!(skia.line_cap, tiny_skia::LineCap::Butt);
    }
}
