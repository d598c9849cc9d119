//! Drawable Components for Poster Rendering
//!
//! This module provides the raster [`Canvas`] and the primitives painted onto
//! it. All primitives implement the [`Drawable`] trait, which paints the
//! element with its top-left corner at a given position.
mod canvas;
mod shape;
mod stroke;
mod text;

pub use canvas::{Canvas, DrawError};
pub use shape::{Line, Oval, OvalDefinition, Polygon, Rectangle, RectangleDefinition};
pub use stroke::StrokeDefinition;
pub use text::{FontFamily, FontHandle, RegisteredFace, Text, TextDefinition, TextEngine};

use crate::geometry::Point;

pub trait Drawable: std::fmt::Debug {
    fn draw(&self, canvas: &mut Canvas, position: Point);
}
