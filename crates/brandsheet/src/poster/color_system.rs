//! Primary swatch, secondary swatches and the neutral slate scale.
//!
//! Every caption is derived from the palette entry it labels.

use brandsheet_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

use super::{Painter, Section};
use crate::{BrandsheetError, fonts::FontRole};

const PRIMARY_SWATCH: f32 = 160.0;
const SECONDARY_SWATCH: f32 = 80.0;
const SECONDARY_PITCH: f32 = 100.0;
const SECONDARY_COLORS: [(&str, &str); 3] =
    [("Violet", "violet"), ("Emerald", "emerald"), ("Amber", "amber")];

const NEUTRAL_SCALE: [&str; 9] = [
    "slate_900",
    "slate_800",
    "slate_700",
    "slate_600",
    "slate_500",
    "slate_400",
    "slate_300",
    "slate_200",
    "slate_100",
];
const NEUTRAL_HEIGHT: f32 = 40.0;
const NEUTRAL_PADDING: f32 = 4.0;

pub(super) struct ColorSystem;

impl Section for ColorSystem {
    fn name(&self) -> &'static str {
        "color_system"
    }

    fn extent(&self) -> f32 {
        340.0
    }

    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError> {
        let margin = painter.margin();
        painter.section_label(top, "02", "COLOR SYSTEM")?;

        let swatch_top = top + 50.0;
        draw_primary(painter, Point::new(margin, swatch_top))?;

        let secondary_x = margin + PRIMARY_SWATCH + 250.0;
        for (i, (name, key)) in SECONDARY_COLORS.into_iter().enumerate() {
            let x = secondary_x + i as f32 * SECONDARY_PITCH;
            let hex = painter.color(key)?.to_hex_string();
            painter.fill_rect(Point::new(x, swatch_top), Size::square(SECONDARY_SWATCH), key)?;
            painter.text(
                Point::new(x, swatch_top + SECONDARY_SWATCH + 8.0),
                name,
                FontRole::Label,
                "slate_500",
            )?;
            painter.text(
                Point::new(x, swatch_top + SECONDARY_SWATCH + 24.0),
                &hex,
                FontRole::Label,
                "slate_400",
            )?;
        }

        let scale_top = swatch_top + PRIMARY_SWATCH + 20.0;
        let slots = neutral_scale_layout(
            Point::new(margin, scale_top),
            painter.layout().content_width(),
            NEUTRAL_SCALE.len(),
        );
        for (bounds, key) in slots.iter().zip(NEUTRAL_SCALE) {
            painter.fill_rect(bounds.min_point(), bounds.to_size(), key)?;
            let label = key.trim_start_matches("slate_");
            painter.text(
                Point::new(bounds.min_x(), scale_top + 50.0),
                label,
                FontRole::Label,
                "slate_400",
            )?;
        }
        Ok(())
    }
}

fn draw_primary(painter: &mut Painter<'_>, at: Point) -> Result<(), BrandsheetError> {
    let primary = painter.color("primary")?;
    painter.fill_rect(at, Size::square(PRIMARY_SWATCH), "primary")?;

    let x = at.x() + PRIMARY_SWATCH + 24.0;
    painter.text(
        Point::new(x, at.y() + 10.0),
        "Primary Blue",
        FontRole::Heading,
        "slate_900",
    )?;
    for (caption, dy) in color_captions(primary).iter().zip([50.0, 70.0, 90.0]) {
        painter.text(
            Point::new(x, at.y() + dy),
            caption,
            FontRole::Caption,
            "slate_500",
        )?;
    }
    Ok(())
}

/// Hex, RGB and HSL captions for a swatch.
fn color_captions(color: Color) -> [String; 3] {
    let (r, g, b) = color.rgb8();
    let (h, s, l) = color.hsl();
    [
        color.to_hex_string(),
        format!("RGB {r}, {g}, {b}"),
        format!("HSL {h}°, {s}%, {l}%"),
    ]
}

/// Splits `width` into `count` equal slots starting at `origin`.
///
/// Each swatch fills its slot minus the padding on its right, so adjacent
/// swatches are separated by exactly the padding.
fn neutral_scale_layout(origin: Point, width: f32, count: usize) -> Vec<Bounds> {
    if count == 0 {
        return Vec::new();
    }
    let slot = (width / count as f32).floor();
    let swatch = Size::new((slot - NEUTRAL_PADDING).max(0.0), NEUTRAL_HEIGHT);
    (0..count)
        .map(|i| origin.offset(i as f32 * slot, 0.0).to_bounds(swatch))
        .collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_primary_captions() {
        let captions = color_captions(Color::new("#2563EB").unwrap());
        assert_eq!(captions[0], "#2563EB");
        assert_eq!(captions[1], "RGB 37, 99, 235");
        assert_eq!(captions[2], "HSL 221°, 83%, 53%");
    }

    #[test]
    fn test_neutral_scale_spans_content_width() {
        let origin = Point::new(120.0, 0.0);
        let slots = neutral_scale_layout(origin, 1514.0, 9);

        assert_eq!(slots.len(), 9);
        assert_approx_eq!(f32, slots[0].min_x(), 120.0);
        assert_approx_eq!(f32, slots[0].width(), 164.0);
        assert_approx_eq!(f32, slots[0].height(), 40.0);
        assert!(slots[8].max_x() <= 120.0 + 1514.0);
    }

    #[test]
    fn test_neutral_scale_gaps_never_exceed_padding() {
        let slots = neutral_scale_layout(Point::default(), 1514.0, 9);
        for pair in slots.windows(2) {
            let gap = pair[1].min_x() - pair[0].max_x();
            assert_approx_eq!(f32, gap, NEUTRAL_PADDING);
        }
    }

    #[test]
    fn test_neutral_scale_empty() {
        assert!(neutral_scale_layout(Point::default(), 1514.0, 0).is_empty());
    }
}
