use brandsheet_core::geometry::{Point, Size};

use super::{Painter, Section};
use crate::{BrandsheetError, fonts::FontRole};

const PRINCIPLES: [(&str, &str); 4] = [
    ("Clarity", "Information hierarchy through visual weight"),
    ("Restraint", "Purposeful minimalism, no decoration"),
    ("Precision", "Pixel-perfect alignment and spacing"),
    ("Consistency", "Systematic application of all elements"),
];
const COLUMNS: usize = 2;
const COLUMN_GAP: f32 = 30.0;
const ROW_GAP: f32 = 16.0;
const CARD_HEIGHT: f32 = 90.0;
const CARD_RADIUS: f32 = 12.0;

/// Principle cards in a two-column grid.
pub(super) struct Principles;

impl Section for Principles {
    fn name(&self) -> &'static str {
        "principles"
    }

    fn extent(&self) -> f32 {
        280.0
    }

    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError> {
        let margin = painter.margin();
        painter.section_label(top, "07", "DESIGN PRINCIPLES")?;

        let card_width = ((painter.layout().content_width() - COLUMN_GAP) / COLUMNS as f32).floor();
        let grid_top = top + 50.0;
        for (i, (title, description)) in PRINCIPLES.into_iter().enumerate() {
            let (row, column) = (i / COLUMNS, i % COLUMNS);
            let card = Point::new(
                margin + column as f32 * (card_width + COLUMN_GAP),
                grid_top + row as f32 * (CARD_HEIGHT + ROW_GAP),
            );

            painter.rounded_rect(
                card,
                Size::new(card_width, CARD_HEIGHT),
                CARD_RADIUS,
                "slate_50",
                Some("slate_200"),
            )?;
            painter.text(card.offset(20.0, 20.0), title, FontRole::Heading, "slate_900")?;
            painter.text(
                card.offset(20.0, 55.0),
                description,
                FontRole::Caption,
                "slate_500",
            )?;
        }
        Ok(())
    }
}
