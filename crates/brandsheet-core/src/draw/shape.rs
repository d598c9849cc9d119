//! Shape definitions and their drawables.
//!
//! Definitions carry style (fill, stroke, corner rounding) and can be shared
//! between many drawables; the drawables add a size or geometry and are
//! painted at a top-left position.
//!
//! - [`RectangleDefinition`] / [`Rectangle`] - plain and rounded rectangles
//! - [`OvalDefinition`] / [`Oval`] - ellipses inscribed in a box
//! - [`Polygon`] - filled closed polygons
//! - [`Line`] - stroked straight segments

use tiny_skia::{Path, PathBuilder, Rect};

use crate::{
    color::Color,
    draw::{Canvas, Drawable, StrokeDefinition},
    geometry::{Bounds, Point, Size},
};

/// Bezier handle length for approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Style for rectangles, optionally with rounded corners.
#[derive(Debug, Clone, Default)]
pub struct RectangleDefinition {
    fill_color: Option<Color>,
    stroke: Option<StrokeDefinition>,
    rounded: f32,
}

impl RectangleDefinition {
    /// Creates a rectangle definition with no fill, no stroke and square corners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a square-cornered rectangle filled with `color`.
    pub fn filled(color: Color) -> Self {
        Self {
            fill_color: Some(color),
            ..Self::default()
        }
    }

    /// Sets the corner radius. Radii larger than half the shorter side are
    /// clamped when painting.
    pub fn set_rounded(&mut self, radius: f32) {
        self.rounded = radius.max(0.0);
    }

    pub fn with_rounded(mut self, radius: f32) -> Self {
        self.set_rounded(radius);
        self
    }

    /// Sets the outline drawn inside the rectangle's edges.
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// A rectangle of a given size painted with a shared [`RectangleDefinition`].
#[derive(Debug, Clone)]
pub struct Rectangle<'a> {
    definition: &'a RectangleDefinition,
    size: Size,
}

impl<'a> Rectangle<'a> {
    pub fn new(definition: &'a RectangleDefinition, size: Size) -> Self {
        Self { definition, size }
    }
}

impl Drawable for Rectangle<'_> {
    fn draw(&self, canvas: &mut Canvas, position: Point) {
        if self.size.is_empty() {
            return;
        }
        let bounds = position.to_bounds(self.size);

        if let Some(fill) = self.definition.fill_color {
            if self.definition.rounded > 0.0 {
                if let Some(path) = rounded_rect_path(bounds, self.definition.rounded) {
                    canvas.fill_path(&path, fill);
                }
            } else {
                canvas.fill_rect(bounds, fill);
            }
        }

        if let Some(stroke) = &self.definition.stroke {
            let inset = stroke.width() / 2.0;
            let outline = Bounds::new_from_top_left(
                position.offset(inset, inset),
                Size::new(
                    self.size.width() - stroke.width(),
                    self.size.height() - stroke.width(),
                ),
            );
            let radius = (self.definition.rounded - inset).max(0.0);
            if let Some(path) = rounded_rect_path(outline, radius) {
                canvas.stroke_path(&path, stroke);
            }
        }
    }
}

/// Style for ellipses.
#[derive(Debug, Clone)]
pub struct OvalDefinition {
    fill_color: Color,
}

impl OvalDefinition {
    /// Creates an oval filled with `color`.
    pub fn filled(color: Color) -> Self {
        Self { fill_color: color }
    }
}

/// An ellipse inscribed in a box of the given size.
#[derive(Debug, Clone)]
pub struct Oval<'a> {
    definition: &'a OvalDefinition,
    size: Size,
}

impl<'a> Oval<'a> {
    pub fn new(definition: &'a OvalDefinition, size: Size) -> Self {
        Self { definition, size }
    }
}

impl Drawable for Oval<'_> {
    fn draw(&self, canvas: &mut Canvas, position: Point) {
        let bounds = position.to_bounds(self.size);
        if let Some(path) = to_rect(bounds).and_then(PathBuilder::from_oval) {
            canvas.fill_path(&path, self.definition.fill_color);
        }
    }
}

/// A filled polygon whose vertices are relative to the drawing position.
#[derive(Debug, Clone)]
pub struct Polygon {
    points: Vec<Point>,
    fill_color: Color,
}

impl Polygon {
    pub fn new(points: Vec<Point>, fill_color: Color) -> Self {
        Self { points, fill_color }
    }
}

impl Drawable for Polygon {
    fn draw(&self, canvas: &mut Canvas, position: Point) {
        let mut points = self.points.iter().map(|point| position.add_point(*point));
        let Some(first) = points.next() else {
            return;
        };

        let mut builder = PathBuilder::new();
        builder.move_to(first.x(), first.y());
        for point in points {
            builder.line_to(point.x(), point.y());
        }
        builder.close();

        if let Some(path) = builder.finish() {
            canvas.fill_path(&path, self.fill_color);
        }
    }
}

/// A straight stroked segment from the drawing position to `position + delta`.
///
/// Endpoints address pixel centers, so a one pixel wide horizontal line covers
/// exactly one row.
#[derive(Debug, Clone)]
pub struct Line {
    delta: Point,
    stroke: StrokeDefinition,
}

impl Line {
    pub fn new(delta: Point, stroke: StrokeDefinition) -> Self {
        Self { delta, stroke }
    }

    /// Creates a line between two absolute points; draw it at `from`.
    pub fn between(from: Point, to: Point, stroke: StrokeDefinition) -> Self {
        Self::new(Point::new(to.x() - from.x(), to.y() - from.y()), stroke)
    }
}

impl Drawable for Line {
    fn draw(&self, canvas: &mut Canvas, position: Point) {
        let start = position.offset(0.5, 0.5);
        let end = start.add_point(self.delta);

        let mut builder = PathBuilder::new();
        builder.move_to(start.x(), start.y());
        builder.line_to(end.x(), end.y());
        if let Some(path) = builder.finish() {
            canvas.stroke_path(&path, &self.stroke);
        }
    }
}

fn to_rect(bounds: Bounds) -> Option<Rect> {
    Rect::from_ltrb(
        bounds.min_x(),
        bounds.min_y(),
        bounds.max_x(),
        bounds.max_y(),
    )
}

/// Builds a rectangle path with quarter-circle corners of `radius`.
fn rounded_rect_path(bounds: Bounds, radius: f32) -> Option<Path> {
    let rect = to_rect(bounds)?;
    let radius = radius
        .min(bounds.width() / 2.0)
        .min(bounds.height() / 2.0)
        .max(0.0);
    if radius == 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }

    let (left, top, right, bottom) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let handle = radius * (1.0 - KAPPA);

    let mut builder = PathBuilder::new();
    builder.move_to(left + radius, top);
    builder.line_to(right - radius, top);
    builder.cubic_to(right - handle, top, right, top + handle, right, top + radius);
    builder.line_to(right, bottom - radius);
    builder.cubic_to(
        right,
        bottom - handle,
        right - handle,
        bottom,
        right - radius,
        bottom,
    );
    builder.line_to(left + radius, bottom);
    builder.cubic_to(left + handle, bottom, left, bottom - handle, left, bottom - radius);
    builder.line_to(left, top + radius);
    builder.cubic_to(left, top + handle, left + handle, top, left + radius, top);
    builder.close();
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::TextEngine;

    fn canvas() -> Canvas {
        Canvas::new(100, 100, Color::new("#FFFFFF").unwrap(), TextEngine::new()).unwrap()
    }

    fn slate() -> Color {
        Color::new("#E2E8F0").unwrap()
    }

    #[test]
    fn test_square_rectangle_fills_corners() {
        let mut canvas = canvas();
        let definition = RectangleDefinition::filled(slate());
        Rectangle::new(&definition, Size::new(80.0, 50.0)).draw(&mut canvas, Point::new(10.0, 10.0));

        assert_eq!(canvas.pixel(10, 10), Some((226, 232, 240)));
        assert_eq!(canvas.pixel(89, 59), Some((226, 232, 240)));
        assert_eq!(canvas.pixel(90, 60), Some((255, 255, 255)));
    }

    #[test]
    fn test_rounded_rectangle_leaves_corners_empty() {
        let mut canvas = canvas();
        let definition = RectangleDefinition::filled(slate()).with_rounded(24.0);
        Rectangle::new(&definition, Size::new(80.0, 50.0)).draw(&mut canvas, Point::new(10.0, 10.0));

        assert_eq!(canvas.pixel(10, 10), Some((255, 255, 255)));
        assert_eq!(canvas.pixel(50, 35), Some((226, 232, 240)));
        assert_eq!(canvas.pixel(50, 10), Some((226, 232, 240)));
    }

    #[test]
    fn test_outline_does_not_fill_interior() {
        let mut canvas = canvas();
        let stroke = StrokeDefinition::solid(Color::new("#0F172A").unwrap(), 2.0);
        let definition = RectangleDefinition::new().with_stroke(stroke);
        Rectangle::new(&definition, Size::new(40.0, 40.0)).draw(&mut canvas, Point::new(20.0, 20.0));

        assert_eq!(canvas.pixel(20, 40), Some((15, 23, 42)));
        assert_eq!(canvas.pixel(40, 40), Some((255, 255, 255)));
    }

    #[test]
    fn test_oval_center_is_filled_and_corner_is_not() {
        let mut canvas = canvas();
        let definition = OvalDefinition::filled(Color::new("#2563EB").unwrap());
        Oval::new(&definition, Size::square(24.0)).draw(&mut canvas, Point::new(30.0, 30.0));

        assert_eq!(canvas.pixel(42, 42), Some((37, 99, 235)));
        assert_eq!(canvas.pixel(30, 30), Some((255, 255, 255)));
    }

    #[test]
    fn test_polygon_triangle() {
        let mut canvas = canvas();
        let triangle = Polygon::new(
            vec![
                Point::new(0.0, -12.0),
                Point::new(-12.0, 10.0),
                Point::new(12.0, 10.0),
            ],
            Color::new("#059669").unwrap(),
        );
        triangle.draw(&mut canvas, Point::new(50.0, 50.0));

        assert_eq!(canvas.pixel(50, 55), Some((5, 150, 105)));
        assert_eq!(canvas.pixel(40, 40), Some((255, 255, 255)));
    }

    #[test]
    fn test_empty_polygon_draws_nothing() {
        let mut canvas = canvas();
        Polygon::new(Vec::new(), slate()).draw(&mut canvas, Point::new(50.0, 50.0));
        assert!(canvas.to_rgb8().iter().all(|&byte| byte == 255));
    }

    #[test]
    fn test_one_pixel_line_covers_single_row() {
        let mut canvas = canvas();
        let stroke = StrokeDefinition::solid(Color::new("#000000").unwrap(), 1.0);
        let line = Line::between(Point::new(10.0, 20.0), Point::new(90.0, 20.0), stroke);
        line.draw(&mut canvas, Point::new(10.0, 20.0));

        assert_eq!(canvas.pixel(50, 20), Some((0, 0, 0)));
        assert_eq!(canvas.pixel(50, 19), Some((255, 255, 255)));
        assert_eq!(canvas.pixel(50, 21), Some((255, 255, 255)));
    }

    #[test]
    fn test_rounded_rect_path_clamps_radius() {
        let bounds = Point::new(0.0, 0.0).to_bounds(Size::new(20.0, 10.0));
        let path = rounded_rect_path(bounds, 50.0).expect("path");
        let path_bounds = path.bounds();
        assert_eq!(path_bounds.width(), 20.0);
        assert_eq!(path_bounds.height(), 10.0);
    }
}
