use brandsheet_core::geometry::{Point, Size};

use super::{Painter, Section};
use crate::{BrandsheetError, fonts::FontRole};

const LOGO_SIZE: f32 = 80.0;
const VERSION_COLUMN: f32 = 100.0;
const DIVIDER_OFFSET: f32 = 140.0;

/// Logo mark, title block, version stamp and the rule below them.
pub(super) struct Header;

impl Section for Header {
    fn name(&self) -> &'static str {
        "header"
    }

    fn extent(&self) -> f32 {
        200.0
    }

    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError> {
        let margin = painter.margin();

        painter.fill_rect(Point::new(margin, top), Size::square(LOGO_SIZE), "primary")?;
        painter.text(
            Point::new(margin + 18.0, top + 20.0),
            "AI",
            FontRole::LogoMark,
            "white",
        )?;

        let title_x = margin + LOGO_SIZE + 24.0;
        painter.text(
            Point::new(title_x, top + 8.0),
            "HIIC AI Lab",
            FontRole::Title,
            "slate_900",
        )?;
        painter.text(
            Point::new(title_x, top + 52.0),
            "Brand Guidelines",
            FontRole::Subhead,
            "slate_500",
        )?;

        let version = [("v1.0", FontRole::Caption), ("2026.01", FontRole::Caption)];
        let version_x = painter.right_column_x(VERSION_COLUMN, &version);
        for ((content, role), dy) in version.into_iter().zip([10.0, 28.0]) {
            painter.text(Point::new(version_x, top + dy), content, role, "slate_400")?;
        }

        painter.divider(top + DIVIDER_OFFSET)
    }
}
