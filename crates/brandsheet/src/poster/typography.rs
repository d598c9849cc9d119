use brandsheet_core::geometry::Point;

use super::{Painter, Section};
use crate::{BrandsheetError, fonts::FontRole};

const SPECIMEN_LINES: [&str; 3] = [
    "Aa Bb Cc Dd Ee Ff Gg Hh Ii Jj Kk Ll Mm",
    "Nn Oo Pp Qq Rr Ss Tt Uu Vv Ww Xx Yy Zz",
    "0 1 2 3 4 5 6 7 8 9",
];

const CODE_SAMPLE: &str = "const app = { id: 'hiic-ai-lab', version: '1.0' };";

/// Type specimens for the display and monospace families.
pub(super) struct Typography;

impl Section for Typography {
    fn name(&self) -> &'static str {
        "typography"
    }

    fn extent(&self) -> f32 {
        335.0
    }

    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError> {
        let margin = painter.margin();
        painter.section_label(top, "03", "TYPOGRAPHY")?;

        let mut y = top + 50.0;
        painter.text(
            Point::new(margin, y),
            "Instrument Sans",
            FontRole::Display,
            "slate_900",
        )?;
        painter.text(
            Point::new(margin + 450.0, y + 15.0),
            "Display & Headlines",
            FontRole::Caption,
            "slate_500",
        )?;
        y += 70.0;

        for (i, line) in SPECIMEN_LINES.into_iter().enumerate() {
            painter.text(Point::new(margin, y), line, FontRole::Subhead, "slate_700")?;
            y += if i + 1 < SPECIMEN_LINES.len() { 35.0 } else { 50.0 };
        }

        painter.text(
            Point::new(margin, y),
            "Geist Mono",
            FontRole::MonoDisplay,
            "slate_900",
        )?;
        painter.text(
            Point::new(margin + 220.0, y + 5.0),
            "Code & Labels",
            FontRole::Caption,
            "slate_500",
        )?;
        y += 45.0;

        painter.text(
            Point::new(margin, y),
            CODE_SAMPLE,
            FontRole::Caption,
            "slate_600",
        )
    }
}
