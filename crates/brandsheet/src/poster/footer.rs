use brandsheet_core::geometry::Point;

use super::{Painter, Section};
use crate::{BrandsheetError, fonts::FontRole};

const INSTITUTE: &str = "Shenzhen National High-tech Industry Innovation Center";
const INSTITUTE_ZH: &str = "深圳国家高技术产业创新中心";
const SIGNATURE_COLUMN: f32 = 200.0;
const SIGNATURE: [(&str, &str); 3] = [
    ("Institutional Precision", "primary"),
    ("Design System v1.0", "slate_400"),
    ("github.com/liusai0820", "slate_400"),
];

/// Closing rule, institute block and signature block.
pub(super) struct Footer;

impl Section for Footer {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn extent(&self) -> f32 {
        100.0
    }

    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError> {
        let margin = painter.margin();
        painter.divider(top)?;

        let y = top + 30.0;
        painter.text(Point::new(margin, y), "HIIC AI Lab", FontRole::Subhead, "slate_900")?;
        painter.text(
            Point::new(margin, y + 30.0),
            INSTITUTE,
            FontRole::Caption,
            "slate_500",
        )?;
        painter.text(
            Point::new(margin, y + 50.0),
            INSTITUTE_ZH,
            FontRole::ChineseSmall,
            "slate_500",
        )?;

        let lines = SIGNATURE.map(|(content, _)| (content, FontRole::Caption));
        let x = painter.right_column_x(SIGNATURE_COLUMN, &lines);
        let mut line_y = y;
        for (content, color) in SIGNATURE {
            painter.text(Point::new(x, line_y), content, FontRole::Caption, color)?;
            line_y += 18.0;
        }
        Ok(())
    }
}
