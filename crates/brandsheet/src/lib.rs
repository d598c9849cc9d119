//! Brandsheet - renders the HIIC AI Lab brand-guidelines poster.
//!
//! The poster is drawn procedurally from a fixed palette and font table onto
//! an A3 canvas at 150 DPI and exported as PNG. The only inputs are the
//! location of the brand fonts and the export resolution, both carried in
//! [`config::AppConfig`].

pub mod config;
pub mod export;
pub mod fonts;
pub mod palette;
pub mod poster;

mod error;

pub use brandsheet_core::{color, draw, geometry};

pub use error::BrandsheetError;

use std::path::Path;

use log::{debug, info};

use brandsheet_core::draw::{Canvas, TextEngine};

use config::AppConfig;
use export::{Exporter, png::PngExporter};
use fonts::{FontFallback, FontSet};
use palette::Palette;
use poster::CanvasLayout;

/// Builder for rendering and saving the brand poster.
///
/// # Examples
///
/// ```rust,no_run
/// use brandsheet::{PosterBuilder, config::AppConfig};
///
/// let config = AppConfig::default().with_font_directory("canvas-fonts");
/// let builder = PosterBuilder::new(config);
///
/// // Render and write the PNG
/// builder
///     .save("HIIC-AI-Lab-Brand-Guidelines.png")
///     .expect("Failed to save poster");
///
/// // Or keep the raster in memory
/// let poster = builder.render().expect("Failed to render poster");
/// assert_eq!(poster.canvas().width(), 1754);
/// ```
#[derive(Debug, Default)]
pub struct PosterBuilder {
    config: AppConfig,
    palette: Palette,
    layout: CanvasLayout,
}

impl PosterBuilder {
    /// Create a new poster builder with the given configuration and the brand
    /// palette.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration used for rendering.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Render the poster into an in-memory canvas.
    ///
    /// Fonts that cannot be loaded are replaced by generic families; the
    /// replacements are listed in [`Poster::fallbacks`].
    ///
    /// # Errors
    ///
    /// Returns `BrandsheetError` if a font file cannot be read, the canvas
    /// cannot be allocated or a color is missing from the palette.
    pub fn render(&self) -> Result<Poster, BrandsheetError> {
        let font_dir = self.config.fonts().directory();
        info!(font_dir:? = font_dir; "Loading fonts");
        let mut engine = TextEngine::new();
        let fonts = FontSet::load(font_dir, &mut engine)?;

        let background = self.palette.color(self.layout.background())?;
        let mut canvas = Canvas::new(
            self.layout.width(),
            self.layout.height(),
            background,
            engine,
        )?;
        debug!(width = canvas.width(), height = canvas.height(); "Canvas allocated");

        info!("Drawing poster");
        let content_bottom = poster::render(&mut canvas, &self.palette, &fonts, &self.layout)?;
        info!(content_bottom; "Poster drawn");

        Ok(Poster {
            canvas,
            fallbacks: fonts.fallbacks().to_vec(),
            content_bottom,
        })
    }

    /// Render the poster and encode it as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns `BrandsheetError` for rendering or encoding errors.
    pub fn render_png(&self) -> Result<Vec<u8>, BrandsheetError> {
        let poster = self.render()?;
        Ok(self.exporter().encode(poster.canvas())?)
    }

    /// Render the poster and write it as PNG to `path`.
    ///
    /// # Errors
    ///
    /// Returns `BrandsheetError` for rendering errors, or
    /// [`BrandsheetError::Export`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<Poster, BrandsheetError> {
        let poster = self.render()?;
        self.exporter().export(poster.canvas(), path.as_ref())?;
        info!(output_path:? = path.as_ref(); "Poster saved");
        Ok(poster)
    }

    fn exporter(&self) -> PngExporter {
        PngExporter::new(self.config.export().dpi())
    }
}

/// A rendered poster.
#[derive(Debug)]
pub struct Poster {
    canvas: Canvas,
    fallbacks: Vec<FontFallback>,
    content_bottom: f32,
}

impl Poster {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Returns the font files that were replaced by a generic family.
    pub fn fallbacks(&self) -> &[FontFallback] {
        &self.fallbacks
    }

    /// Returns the y coordinate where the last section ends.
    pub fn content_bottom(&self) -> f32 {
        self.content_bottom
    }
}
