use brandsheet_core::geometry::Point;

use super::{Painter, Section};
use crate::{BrandsheetError, fonts::FontRole};

const STATEMENT: [&str; 2] = [
    "Systematic intelligence expressed through geometric certainty,",
    "chromatic restraint, and the weight of considered space.",
];

/// The two-word motto and its statement.
pub(super) struct Philosophy;

impl Section for Philosophy {
    fn name(&self) -> &'static str {
        "philosophy"
    }

    fn extent(&self) -> f32 {
        368.0
    }

    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError> {
        let margin = painter.margin();
        painter.section_label(top, "01", "DESIGN PHILOSOPHY")?;

        painter.text(
            Point::new(margin, top + 40.0),
            "Institutional",
            FontRole::Large,
            "slate_900",
        )?;
        painter.text(
            Point::new(margin, top + 140.0),
            "Precision",
            FontRole::Large,
            "primary",
        )?;

        let mut y = top + 270.0;
        for line in STATEMENT {
            painter.text(Point::new(margin, y), line, FontRole::Body, "slate_600")?;
            y += 28.0;
        }
        Ok(())
    }
}
