use brandsheet_core::geometry::{Point, Size};

use super::{Painter, Section};
use crate::{BrandsheetError, fonts::FontRole};

/// Corner radius tokens: name and radius in pixels.
const RADII: [(&str, f32); 6] = [
    ("none", 0.0),
    ("sm", 4.0),
    ("md", 8.0),
    ("lg", 12.0),
    ("xl", 16.0),
    ("2xl", 24.0),
];
const SAMPLE_WIDTH: f32 = 80.0;
const SAMPLE_HEIGHT: f32 = 50.0;
const SAMPLE_PITCH: f32 = 100.0;

pub(super) struct BorderRadius;

impl Section for BorderRadius {
    fn name(&self) -> &'static str {
        "border_radius"
    }

    fn extent(&self) -> f32 {
        160.0
    }

    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError> {
        painter.section_label(top, "06", "BORDER RADIUS")?;

        let samples_top = top + 50.0;
        let mut x = painter.margin();
        for (name, radius) in RADII {
            painter.rounded_rect(
                Point::new(x, samples_top),
                Size::new(SAMPLE_WIDTH, SAMPLE_HEIGHT),
                radius,
                "slate_200",
                None,
            )?;
            painter.text(
                Point::new(x + 25.0, samples_top + SAMPLE_HEIGHT + 8.0),
                name,
                FontRole::Label,
                "slate_500",
            )?;
            x += SAMPLE_PITCH;
        }
        Ok(())
    }
}
