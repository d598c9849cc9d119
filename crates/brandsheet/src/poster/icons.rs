use brandsheet_core::geometry::{Point, Size};

use super::{Painter, Section};
use crate::{BrandsheetError, fonts::FontRole};

const CONTAINER_SIZE: f32 = 56.0;
const CONTAINER_RADIUS: f32 = 12.0;
const CONTAINER_PITCH: f32 = 80.0;
const CAPTION_OFFSET: f32 = 520.0;

/// The sample glyphs, one per container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Glyph {
    Circle,
    Square,
    Triangle,
    Bar,
    Cross,
    Dots,
}

impl Glyph {
    const ALL: [Glyph; 6] = [
        Self::Circle,
        Self::Square,
        Self::Triangle,
        Self::Bar,
        Self::Cross,
        Self::Dots,
    ];

    fn draw(self, painter: &mut Painter<'_>, center: Point) -> Result<(), BrandsheetError> {
        match self {
            Self::Circle => painter.oval(center, Size::square(24.0), "primary"),
            Self::Square => {
                painter.fill_rect(center.offset(-10.0, -10.0), Size::square(20.0), "violet")
            }
            Self::Triangle => painter.polygon(
                center,
                vec![
                    Point::new(0.0, -12.0),
                    Point::new(-12.0, 10.0),
                    Point::new(12.0, 10.0),
                ],
                "emerald",
            ),
            Self::Bar => painter.line(
                center.offset(-12.0, 0.0),
                center.offset(12.0, 0.0),
                4.0,
                "amber",
            ),
            Self::Cross => {
                painter.line(
                    center.offset(-10.0, -10.0),
                    center.offset(10.0, 10.0),
                    3.0,
                    "primary",
                )?;
                painter.line(
                    center.offset(10.0, -10.0),
                    center.offset(-10.0, 10.0),
                    3.0,
                    "primary",
                )
            }
            Self::Dots => {
                for (dx, dy) in [(-8.0, -8.0), (8.0, -8.0), (-8.0, 8.0), (8.0, 8.0)] {
                    painter.oval(center.offset(dx, dy), Size::square(6.0), "slate_600")?;
                }
                Ok(())
            }
        }
    }
}

/// Icon containers with sample glyphs and the icon set description.
pub(super) struct IconSystem;

impl Section for IconSystem {
    fn name(&self) -> &'static str {
        "icon_system"
    }

    fn extent(&self) -> f32 {
        150.0
    }

    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError> {
        let margin = painter.margin();
        painter.section_label(top, "05", "ICON SYSTEM")?;

        let icons_top = top + 50.0;
        for (i, glyph) in Glyph::ALL.into_iter().enumerate() {
            let container = Point::new(margin + i as f32 * CONTAINER_PITCH, icons_top);
            painter.rounded_rect(
                container,
                Size::square(CONTAINER_SIZE),
                CONTAINER_RADIUS,
                "slate_100",
                None,
            )?;
            let half = CONTAINER_SIZE / 2.0;
            glyph.draw(painter, container.offset(half, half))?;
        }

        let caption_x = margin + CAPTION_OFFSET;
        painter.text(
            Point::new(caption_x, icons_top + 10.0),
            "Lucide Icons",
            FontRole::Subhead,
            "slate_900",
        )?;
        painter.text(
            Point::new(caption_x, icons_top + 38.0),
            "24px base size / 2px stroke",
            FontRole::Caption,
            "slate_500",
        )
    }
}
