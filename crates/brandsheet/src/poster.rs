//! Poster layout and section drawing.
//!
//! The poster is a fixed sequence of sections drawn top to bottom. A
//! [`LayoutCursor`] tracks where the next section starts; each section draws
//! relative to that offset and then moves the cursor down by its extent.
//!
//! Sections never touch the canvas directly. They go through a `Painter`,
//! which resolves palette names and font roles, so every color and font the
//! poster uses comes from the [`Palette`] and [`FontSet`].

mod color_system;
mod cursor;
mod footer;
mod header;
mod icons;
mod philosophy;
mod principles;
mod radius;
mod spacing;
mod typography;

pub use cursor::LayoutCursor;

use log::{debug, warn};

use brandsheet_core::{
    color::Color,
    draw::{
        Canvas, Drawable, Line, Oval, OvalDefinition, Polygon, Rectangle, RectangleDefinition,
        StrokeDefinition, Text, TextDefinition,
    },
    geometry::{Bounds, Point, Size},
};

use crate::{
    BrandsheetError,
    fonts::{FontRole, FontSet},
    palette::Palette,
};

/// Fixed page geometry: A3 portrait at 150 DPI.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLayout {
    width: u32,
    height: u32,
    margin: f32,
    background: &'static str,
}

impl CanvasLayout {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the margin kept free on every side.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the palette name of the background color.
    pub fn background(&self) -> &'static str {
        self.background
    }

    /// Returns the horizontal space between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.width as f32 - 2.0 * self.margin
    }

    /// Returns the x coordinate of the right margin.
    pub fn right_edge(&self) -> f32 {
        self.width as f32 - self.margin
    }
}

impl Default for CanvasLayout {
    fn default() -> Self {
        Self {
            width: 1754,
            height: 2480,
            margin: 120.0,
            background: "white",
        }
    }
}

/// One block of the poster.
pub(crate) trait Section {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Vertical space the section occupies, including the gap after it.
    fn extent(&self) -> f32;

    /// Draws the section with its top edge at `top`.
    fn draw(&self, painter: &mut Painter<'_>, top: f32) -> Result<(), BrandsheetError>;
}

const SECTIONS: [&dyn Section; 9] = [
    &header::Header,
    &philosophy::Philosophy,
    &color_system::ColorSystem,
    &typography::Typography,
    &spacing::SpacingGrid,
    &icons::IconSystem,
    &radius::BorderRadius,
    &principles::Principles,
    &footer::Footer,
];

/// Draws every section onto `canvas` in order.
///
/// Returns the cursor position after the last section.
///
/// # Errors
///
/// Returns [`BrandsheetError::Palette`] if a section refers to a color the
/// palette does not define.
pub fn render(
    canvas: &mut Canvas,
    palette: &Palette,
    fonts: &FontSet,
    layout: &CanvasLayout,
) -> Result<f32, BrandsheetError> {
    let mut painter = Painter {
        canvas,
        palette,
        fonts,
        layout,
    };
    let mut cursor = LayoutCursor::new(layout.margin());

    for section in SECTIONS {
        debug!(section = section.name(), top = cursor.y(); "Drawing section");
        section.draw(&mut painter, cursor.y())?;
        cursor.advance(section.extent());
    }

    let bottom = layout.height() as f32 - layout.margin();
    if cursor.y() > bottom {
        warn!(end = cursor.y(), limit = bottom; "Poster content runs into the bottom margin");
    }
    Ok(cursor.y())
}

/// Drawing helper handed to sections.
///
/// Positions are absolute canvas coordinates; colors are palette names.
pub(crate) struct Painter<'a> {
    canvas: &'a mut Canvas,
    palette: &'a Palette,
    fonts: &'a FontSet,
    layout: &'a CanvasLayout,
}

impl Painter<'_> {
    pub fn layout(&self) -> &CanvasLayout {
        self.layout
    }

    pub fn margin(&self) -> f32 {
        self.layout.margin()
    }

    pub fn color(&self, name: &str) -> Result<Color, BrandsheetError> {
        self.palette.color(name)
    }

    /// Draws `content` with the top of the line at `at`.
    pub fn text(
        &mut self,
        at: Point,
        content: &str,
        role: FontRole,
        color: &str,
    ) -> Result<(), BrandsheetError> {
        let definition = TextDefinition::new(self.fonts.handle(role).clone(), self.color(color)?);
        Text::new(&definition, content).draw(self.canvas, at);
        Ok(())
    }

    /// Returns the rendered width of `content` in `role`.
    pub fn text_width(&mut self, content: &str, role: FontRole) -> f32 {
        let definition = TextDefinition::new(self.fonts.handle(role).clone(), Color::default());
        self.canvas
            .measure_text(&Text::new(&definition, content))
            .width()
    }

    /// Returns the x coordinate for a left-aligned block of `lines` placed
    /// `column` pixels left of the right margin.
    ///
    /// The block moves further left if its widest line would cross the
    /// margin.
    pub fn right_column_x(&mut self, column: f32, lines: &[(&str, FontRole)]) -> f32 {
        let widest = lines
            .iter()
            .map(|(content, role)| self.text_width(content, *role))
            .fold(0.0, f32::max);
        self.layout.right_edge() - column.max(widest)
    }

    pub fn fill_rect(&mut self, at: Point, size: Size, color: &str) -> Result<(), BrandsheetError> {
        let definition = RectangleDefinition::filled(self.color(color)?);
        Rectangle::new(&definition, size).draw(self.canvas, at);
        Ok(())
    }

    /// Fills a rectangle with corners of `radius`, optionally outlined with a
    /// one pixel stroke.
    pub fn rounded_rect(
        &mut self,
        at: Point,
        size: Size,
        radius: f32,
        fill: &str,
        outline: Option<&str>,
    ) -> Result<(), BrandsheetError> {
        let mut definition = RectangleDefinition::filled(self.color(fill)?).with_rounded(radius);
        if let Some(outline) = outline {
            definition = definition.with_stroke(StrokeDefinition::solid(self.color(outline)?, 1.0));
        }
        Rectangle::new(&definition, size).draw(self.canvas, at);
        Ok(())
    }

    pub fn oval(&mut self, center: Point, size: Size, color: &str) -> Result<(), BrandsheetError> {
        let definition = OvalDefinition::filled(self.color(color)?);
        let position = Bounds::new_from_center(center, size).min_point();
        Oval::new(&definition, size).draw(self.canvas, position);
        Ok(())
    }

    /// Fills a polygon whose `points` are relative to `origin`.
    pub fn polygon(
        &mut self,
        origin: Point,
        points: Vec<Point>,
        color: &str,
    ) -> Result<(), BrandsheetError> {
        Polygon::new(points, self.color(color)?).draw(self.canvas, origin);
        Ok(())
    }

    pub fn line(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: &str,
    ) -> Result<(), BrandsheetError> {
        let stroke = StrokeDefinition::solid(self.color(color)?, width);
        Line::between(from, to, stroke).draw(self.canvas, from);
        Ok(())
    }

    /// Draws a full-width one pixel rule at `y`.
    pub fn divider(&mut self, y: f32) -> Result<(), BrandsheetError> {
        let margin = self.margin();
        let right = self.layout.right_edge();
        self.line(Point::new(margin, y), Point::new(right, y), 1.0, "slate_200")
    }

    /// Draws a numbered section heading such as `02  COLOR SYSTEM`.
    pub fn section_label(&mut self, top: f32, number: &str, title: &str) -> Result<(), BrandsheetError> {
        let margin = self.margin();
        self.text(Point::new(margin, top), number, FontRole::Caption, "primary")?;
        self.text(Point::new(margin + 40.0, top), title, FontRole::Caption, "slate_500")
    }
}
