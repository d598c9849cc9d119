//! Export functionality for rendered posters.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a painted [`Canvas`] into an output file. It is the final stage of
//! rendering.
//!
//! # Pipeline Position
//!
//! ```text
//! Palette + Fonts
//!     ↓ layout & draw
//! Canvas (RGBA raster)
//!     ↓ export (this module)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`png`]: PNG output via [`png::PngExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering encoding failures and I/O
//! errors. [`Error`] converts into [`BrandsheetError::Export`] at the crate
//! boundary.
//!
//! [`BrandsheetError::Export`]: crate::BrandsheetError::Export

/// PNG export backend.
pub mod png;

use std::path::Path;

use brandsheet_core::draw::Canvas;

/// Abstraction for poster export backends.
pub trait Exporter {
    /// Encodes `canvas` into the backend's format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if the canvas cannot be encoded.
    fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>, Error>;

    /// Encodes `canvas` and writes it to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if encoding fails, or [`Error::Io`] if
    /// writing the output fails.
    fn export(&self, canvas: &Canvas, path: &Path) -> Result<(), Error>;
}

/// Errors that can occur during poster export.
#[derive(Debug)]
pub enum Error {
    /// An encoding failure described by `message`.
    Encode(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(msg) => write!(f, "Encode error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
