//! Error types for poster rendering.
//!
//! This module provides the main error type [`BrandsheetError`] which wraps
//! the error conditions that can occur while loading fonts, drawing and
//! exporting a poster.

use std::{io, path::PathBuf};

use thiserror::Error;

use brandsheet_core::draw::DrawError;

/// The main error type for brandsheet operations.
#[derive(Debug, Error)]
pub enum BrandsheetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A font file exists but could not be read.
    ///
    /// Missing or unparseable font files are not errors; they fall back to a
    /// generic family instead.
    #[error("Font error: cannot read `{}`: {source}", path.display())]
    Font { path: PathBuf, source: io::Error },

    #[error("Palette error: {0}")]
    Palette(String),

    #[error("Draw error: {0}")]
    Draw(#[from] DrawError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for BrandsheetError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
