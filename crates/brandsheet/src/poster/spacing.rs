use brandsheet_core::geometry::{Point, Size};

use super::{Painter, Section};
use crate::{BrandsheetError, fonts::FontRole};

/// Spacing tokens, in pixels.
const GRID_SIZES: [u16; 8] = [4, 8, 12, 16, 24, 32, 48, 64];
const GRID_GAP: f32 = 24.0;

pub(super) struct SpacingGrid;

impl Section for SpacingGrid {
    fn name(&self) -> &'static str {
        "spacing_grid"
    }

    fn extent(&self) -> f32 {
        180.0
    }

    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError> {
        painter.section_label(top, "04", "SPACING GRID")?;

        let squares_top = top + 50.0;
        let labels_top = squares_top + 80.0;
        let mut x = painter.margin();
        for size in GRID_SIZES {
            let side = f32::from(size);
            painter.fill_rect(Point::new(x, squares_top), Size::square(side), "primary_light")?;
            painter.text(
                Point::new(x, labels_top),
                &size.to_string(),
                FontRole::Label,
                "slate_500",
            )?;
            x += side + GRID_GAP;
        }
        Ok(())
    }
}
