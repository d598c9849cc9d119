//! The raster surface posters are painted onto.
//!
//! [`Canvas`] owns a [`tiny_skia::Pixmap`] filled with an opaque background
//! and the [`TextEngine`] used for its text. Shapes are filled and stroked
//! through tiny-skia; glyph coverage produced by the text engine is blended
//! into the pixmap directly.

use std::fmt;

use thiserror::Error;
use tiny_skia::{FillRule, Paint, Path, Pixmap, PremultipliedColorU8, Rect, Transform};

use crate::{
    color::Color,
    draw::{StrokeDefinition, Text, TextEngine},
    geometry::{Bounds, Point, Size},
};

/// Errors raised while setting up a canvas.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// A fixed-size RGBA raster with an opaque background.
pub struct Canvas {
    pixmap: Pixmap,
    background: Color,
    text_engine: TextEngine,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("background", &self.background)
            .finish()
    }
}

impl Canvas {
    /// Allocates a canvas of `width`×`height` pixels filled with `background`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::InvalidSize`] when either dimension is zero or the
    /// pixmap cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use brandsheet_core::{color::Color, draw::{Canvas, TextEngine}};
    ///
    /// let white = Color::new("#FFFFFF").unwrap();
    /// let canvas = Canvas::new(64, 32, white, TextEngine::new()).unwrap();
    /// assert_eq!(canvas.pixel(0, 0), Some((255, 255, 255)));
    /// ```
    pub fn new(
        width: u32,
        height: u32,
        background: Color,
        text_engine: TextEngine,
    ) -> Result<Self, DrawError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(DrawError::InvalidSize { width, height })?;
        pixmap.fill(background.into());
        Ok(Self {
            pixmap,
            background,
            text_engine,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fills an axis-aligned box. Empty boxes are ignored.
    pub fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        let Some(rect) = Rect::from_ltrb(
            bounds.min_x(),
            bounds.min_y(),
            bounds.max_x(),
            bounds.max_y(),
        ) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint_for(color), Transform::identity(), None);
    }

    /// Fills an arbitrary path using the non-zero winding rule.
    pub fn fill_path(&mut self, path: &Path, color: Color) {
        self.pixmap.fill_path(
            path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Strokes a path with the given stroke definition.
    pub fn stroke_path(&mut self, path: &Path, stroke: &StrokeDefinition) {
        self.pixmap.stroke_path(
            path,
            &paint_for(stroke.color()),
            &stroke.to_skia(),
            Transform::identity(),
            None,
        );
    }

    /// Paints `text` with the top of its first line at `position`.
    pub fn draw_text(&mut self, text: &Text<'_>, position: Point) {
        let Self {
            pixmap,
            text_engine,
            ..
        } = self;
        text_engine.rasterize(text, position, |x, y, rgba| blend_pixel(pixmap, x, y, rgba));
    }

    /// Measures the box `text` would occupy when painted.
    pub fn measure_text(&mut self, text: &Text<'_>) -> Size {
        self.text_engine.measure(text)
    }

    /// Returns the RGB value at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some((color.red(), color.green(), color.blue()))
    }

    /// Returns the canvas as tightly packed 8-bit RGB rows, dropping alpha.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue()]
            })
            .collect()
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = true;
    paint
}

/// Composites a straight-alpha RGBA sample over the pixel at `(x, y)`.
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, [r, g, b, a]: [u8; 4]) {
    if a == 0 || x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= pixmap.width() || y >= pixmap.height() {
        return;
    }

    let index = (y * pixmap.width() + x) as usize;
    let pixels = pixmap.pixels_mut();
    let dst = pixels[index];

    let alpha = u16::from(a);
    let inverse = 255 - alpha;
    let mix = |src: u8, dst: u8| ((u16::from(src) * alpha + u16::from(dst) * inverse + 127) / 255) as u8;

    if let Some(blended) = PremultipliedColorU8::from_rgba(
        mix(r, dst.red()),
        mix(g, dst.green()),
        mix(b, dst.blue()),
        mix(255, dst.alpha()),
    ) {
        pixels[index] = blended;
    }
}
