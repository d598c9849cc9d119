//! Configuration types for poster rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field has a default, so an empty file is a valid
//! configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining font and export settings.
//! - [`FontConfig`] - Where the brand font files are looked up.
//! - [`ExportConfig`] - Output resolution written into the PNG.
//!
//! # Example
//!
//! ```
//! # use brandsheet::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.export().dpi(), 150);
//! assert_eq!(config.fonts().directory().to_str(), Some("canvas-fonts"));
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_FONT_DIRECTORY: &str = "canvas-fonts";
const DEFAULT_DPI: u32 = 150;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Font lookup section.
    #[serde(default)]
    fonts: FontConfig,

    /// Export section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(fonts: FontConfig, export: ExportConfig) -> Self {
        Self { fonts, export }
    }

    /// Returns the font configuration.
    pub fn fonts(&self) -> &FontConfig {
        &self.fonts
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Replaces the font directory, keeping every other setting.
    pub fn with_font_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.fonts.directory = directory.into();
        self
    }
}

/// Font lookup configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FontConfig {
    /// Directory holding `InstrumentSans-*.ttf`, `GeistMono-*.ttf` and
    /// `NotoSansSC-*.ttf`.
    #[serde(default = "default_font_directory")]
    directory: PathBuf,
}

impl FontConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Returns the font directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::new(default_font_directory())
    }
}

/// PNG export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Resolution recorded in the PNG `pHYs` chunk, in dots per inch.
    #[serde(default = "default_dpi")]
    dpi: u32,
}

impl ExportConfig {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DPI)
    }
}

fn default_font_directory() -> PathBuf {
    PathBuf::from(DEFAULT_FONT_DIRECTORY)
}

fn default_dpi() -> u32 {
    DEFAULT_DPI
}
