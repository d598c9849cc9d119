//! Text rendering definitions for poster copy.
//!
//! This module provides types for selecting fonts, styling text and turning
//! it into pixels with `cosmic-text`.
//!
//! # Overview
//!
//! - [`FontHandle`] - A family, weight and pixel size resolved against the engine
//! - [`TextDefinition`] - Reusable text style (font + color)
//! - [`Text`] - A drawable combining content with a [`TextDefinition`]
//! - [`TextEngine`] - Font registry, shaper and glyph rasterizer
//!
//! # Font registry
//!
//! The engine starts with an empty font database so that output depends only
//! on the fonts explicitly registered with [`TextEngine::register_font`].
//! [`TextEngine::load_fallback_fonts`] adds the bundled DejaVu Sans and DejaVu
//! Sans Mono faces, which the generic [`FontFamily::SansSerif`] and
//! [`FontFamily::Monospace`] families resolve against. System fonts are never
//! consulted, so a render looks the same on every host.
//!
//! ```
//! # use brandsheet_core::draw::{FontFamily, FontHandle, TextDefinition, Text, TextEngine};
//! # use brandsheet_core::color::Color;
//! let mut engine = TextEngine::new();
//! let style = TextDefinition::new(
//!     FontHandle::new(FontFamily::SansSerif, 400, 18.0),
//!     Color::new("#475569").unwrap(),
//! );
//! let text = Text::new(&style, "Systematic intelligence");
//!
//! // Nothing is registered yet, so nothing can be measured.
//! assert_eq!(engine.face_count(), 0);
//! assert!(engine.measure(&text).is_empty());
//! ```

use std::{collections::HashSet, fmt};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight, fontdb};
use log::{debug, info, warn};

use crate::{
    color::Color,
    draw::{Canvas, Drawable},
    geometry::{Point, Size},
};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

const LOCALE: &str = "en-US";

const FALLBACK_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const FALLBACK_MONO: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono.ttf");
const FALLBACK_SANS_FAMILY: &str = "DejaVu Sans";
const FALLBACK_MONO_FAMILY: &str = "DejaVu Sans Mono";

/// The family a [`FontHandle`] asks the shaper for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A family registered by name, e.g. `"Instrument Sans"`.
    Named(String),
    /// The generic sans-serif family.
    SansSerif,
    /// The generic monospace family.
    Monospace,
}

/// A font family and weight at a specific pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontHandle {
    family: FontFamily,
    weight: u16,
    size: f32,
}

impl FontHandle {
    /// Creates a handle. `weight` uses the CSS scale (400 regular, 700 bold)
    /// and `size` is the em size in pixels.
    pub fn new(family: FontFamily, weight: u16, size: f32) -> Self {
        Self {
            family,
            weight,
            size,
        }
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the same family and weight at another pixel size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    fn attrs(&self) -> Attrs<'_> {
        let family = match &self.family {
            FontFamily::Named(name) => Family::Name(name),
            FontFamily::SansSerif => Family::SansSerif,
            FontFamily::Monospace => Family::Monospace,
        };
        Attrs::new().family(family).weight(Weight(self.weight))
    }
}

/// The family name and weight of a face added with [`TextEngine::register_font`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFace {
    family: String,
    weight: u16,
}

impl RegisteredFace {
    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    /// Returns a handle selecting exactly this face at `size` pixels.
    pub fn to_handle(&self, size: f32) -> FontHandle {
        FontHandle::new(FontFamily::Named(self.family.clone()), self.weight, size)
    }
}

/// Defines the visual style for text: which font, and in which color.
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font: FontHandle,
    color: Color,
}

impl TextDefinition {
    pub fn new(font: FontHandle, color: Color) -> Self {
        Self { font, color }
    }

    pub fn font(&self) -> &FontHandle {
        &self.font
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A renderable text element combining content with styling.
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

}

impl Drawable for Text<'_> {
    fn draw(&self, canvas: &mut Canvas, position: Point) {
        canvas.draw_text(self, position);
    }
}

/// Font registry, shaper and rasterizer backed by `cosmic-text`.
pub struct TextEngine {
    font_system: FontSystem,
    swash_cache: SwashCache,
    fallback_fonts_loaded: bool,
    warned_no_fonts: bool,
}

impl fmt::Debug for TextEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEngine")
            .field("faces", &self.face_count())
            .field("fallback_fonts_loaded", &self.fallback_fonts_loaded)
            .finish()
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    /// Creates an engine with an empty font database.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new_with_locale_and_db(
                LOCALE.to_string(),
                fontdb::Database::new(),
            ),
            swash_cache: SwashCache::new(),
            fallback_fonts_loaded: false,
            warned_no_fonts: false,
        }
    }

    /// Registers font file contents with the engine.
    ///
    /// Returns the family and weight of the first face found in `data`, or
    /// `None` when the data holds no parseable face.
    pub fn register_font(&mut self, data: Vec<u8>) -> Option<RegisteredFace> {
        let db = self.font_system.db_mut();
        let known: HashSet<fontdb::ID> = db.faces().map(|face| face.id).collect();
        db.load_font_data(data);

        let face = db.faces().find(|face| !known.contains(&face.id))?;
        let (family, _) = face.families.first()?;
        debug!(family = family.as_str(), weight = face.weight.0; "Registered font face");

        Some(RegisteredFace {
            family: family.clone(),
            weight: face.weight.0,
        })
    }

    /// Adds the bundled fallback faces and points the generic sans-serif and
    /// monospace families at them. Subsequent calls do nothing.
    pub fn load_fallback_fonts(&mut self) {
        if self.fallback_fonts_loaded {
            return;
        }
        let db = self.font_system.db_mut();
        db.load_font_data(FALLBACK_SANS.to_vec());
        db.load_font_data(FALLBACK_MONO.to_vec());
        db.set_sans_serif_family(FALLBACK_SANS_FAMILY);
        db.set_monospace_family(FALLBACK_MONO_FAMILY);
        self.fallback_fonts_loaded = true;
        info!(
            sans = FALLBACK_SANS_FAMILY, mono = FALLBACK_MONO_FAMILY;
            "Loaded fallback fonts"
        );
    }

    /// Returns the number of faces known to the engine.
    pub fn face_count(&self) -> usize {
        self.font_system.db().len()
    }

    /// Calculate the size of `text` in pixels using real font metrics.
    ///
    /// Returns a zero size for empty text or when no font is available.
    pub fn measure(&mut self, text: &Text<'_>) -> Size {
        let Some(buffer) = self.shape(text) else {
            return Size::default();
        };
        let line_height = buffer.metrics().line_height;

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += line_height;
        }

        Size::new(max_width, total_height)
    }

    /// Shapes `text` and reports every covered pixel, in canvas coordinates,
    /// with its straight-alpha color.
    pub(crate) fn rasterize<F>(&mut self, text: &Text<'_>, origin: Point, mut f: F)
    where
        F: FnMut(i32, i32, [u8; 4]),
    {
        let Some(buffer) = self.shape(text) else {
            return;
        };
        let base: cosmic_text::Color = text.definition.color().into();

        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((origin.x(), origin.y()), 1.0);
                let glyph_color = glyph.color_opt.unwrap_or(base);
                self.swash_cache.with_pixels(
                    &mut self.font_system,
                    physical.cache_key,
                    glyph_color,
                    |x, y, color| {
                        f(
                            physical.x + x,
                            run.line_y as i32 + physical.y + y,
                            [color.r(), color.g(), color.b(), color.a()],
                        );
                    },
                );
            }
        }
    }

    fn shape(&mut self, text: &Text<'_>) -> Option<Buffer> {
        if text.content.is_empty() {
            return None;
        }
        if self.face_count() == 0 {
            if !self.warned_no_fonts {
                warn!("No fonts available, text will not be drawn");
                self.warned_no_fonts = true;
            }
            return None;
        }

        let font = text.definition.font();
        let metrics = Metrics::new(font.size(), font.size() * LINE_HEIGHT_FACTOR);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        {
            let mut buffer = buffer.borrow_with(&mut self.font_system);
            let attrs = font.attrs();
            buffer.set_size(None, None);
            buffer.set_text(text.content, &attrs, Shaping::Advanced, None);
            buffer.shape_until_scroll(true);
        }

        Some(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caption() -> TextDefinition {
        TextDefinition::new(
            FontHandle::new(FontFamily::Monospace, 400, 14.0),
            Color::new("#64748B").unwrap(),
        )
    }

    #[test]
    fn test_new_engine_has_no_faces() {
        let engine = TextEngine::new();
        assert_eq!(engine.face_count(), 0);
    }

    #[test]
    fn test_register_garbage_returns_none() {
        let mut engine = TextEngine::new();
        let face = engine.register_font(b"definitely not a font".to_vec());
        assert!(face.is_none());
        assert_eq!(engine.face_count(), 0);
    }

    #[test]
    fn test_measure_without_fonts_is_empty() {
        let mut engine = TextEngine::new();
        let style = caption();
        let size = engine.measure(&Text::new(&style, "v1.0"));
        assert!(size.is_empty());
    }

    #[test]
    fn test_rasterize_without_fonts_reports_no_pixels() {
        let mut engine = TextEngine::new();
        let style = caption();
        let mut covered = 0;
        engine.rasterize(&Text::new(&style, "2026.01"), Point::default(), |_, _, _| {
            covered += 1;
        });
        assert_eq!(covered, 0);
    }

    #[test]
    fn test_registered_face_to_handle() {
        let face = RegisteredFace {
            family: "Instrument Sans".to_string(),
            weight: 700,
        };
        let handle = face.to_handle(72.0);
        assert_eq!(
            handle.family(),
            &FontFamily::Named("Instrument Sans".to_string())
        );
        assert_eq!(handle.weight(), 700);
        assert_eq!(handle.size(), 72.0);
    }

    #[test]
    fn test_fallback_fonts_resolve_generic_families() {
        let mut engine = TextEngine::new();
        engine.load_fallback_fonts();
        assert_eq!(engine.face_count(), 2);

        let mono = caption();
        assert!(!engine.measure(&Text::new(&mono, "const app = {}")).is_empty());

        let sans = TextDefinition::new(
            FontHandle::new(FontFamily::SansSerif, 700, 72.0),
            Color::new("#0F172A").unwrap(),
        );
        let mut covered = 0;
        engine.rasterize(&Text::new(&sans, "HIIC AI Lab"), Point::default(), |_, _, rgba| {
            if rgba[3] > 0 {
                covered += 1;
            }
        });
        assert!(covered > 0);
    }

    #[test]
    fn test_fallback_fonts_load_once() {
        let mut engine = TextEngine::new();
        engine.load_fallback_fonts();
        engine.load_fallback_fonts();
        assert_eq!(engine.face_count(), 2);
    }

    #[test]
    fn test_monospace_fallback_has_uniform_advance() {
        let mut engine = TextEngine::new();
        engine.load_fallback_fonts();
        let style = caption();

        let narrow = engine.measure(&Text::new(&style, "iiii"));
        let wide = engine.measure(&Text::new(&style, "WWWW"));
        assert!((narrow.width() - wide.width()).abs() < 0.5);
    }
}
