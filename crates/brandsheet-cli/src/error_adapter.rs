//! Error adapter for converting BrandsheetError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use brandsheet::BrandsheetError;

/// Adapter rendering a [`BrandsheetError`] as a miette diagnostic.
///
/// Every variant gets an error code; variants with an obvious remedy also
/// get a help message.
pub struct ErrorAdapter<'a>(pub &'a BrandsheetError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BrandsheetError::Io(_) => "brandsheet::io",
            BrandsheetError::Font { .. } => "brandsheet::font",
            BrandsheetError::Palette(_) => "brandsheet::palette",
            BrandsheetError::Draw(_) => "brandsheet::draw",
            BrandsheetError::Export(_) => "brandsheet::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            BrandsheetError::Font { .. } => {
                "make sure the font directory and its .ttf files are readable, or pass --font-dir"
            }
            BrandsheetError::Export(_) => "make sure the output directory exists and is writable",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use super::*;

    #[test]
    fn test_codes_per_variant() {
        let cases = [
            (
                BrandsheetError::Io(io::Error::other("boom")),
                "brandsheet::io",
            ),
            (
                BrandsheetError::Font {
                    path: PathBuf::from("canvas-fonts/GeistMono-Bold.ttf"),
                    source: io::Error::from(io::ErrorKind::PermissionDenied),
                },
                "brandsheet::font",
            ),
            (
                BrandsheetError::Palette("unknown color `teal`".to_string()),
                "brandsheet::palette",
            ),
        ];

        for (err, expected) in &cases {
            let adapter = ErrorAdapter(err);
            let code = adapter.code().map(|code| code.to_string());
            assert_eq!(code.as_deref(), Some(*expected));
        }
    }

    #[test]
    fn test_display_matches_error() {
        let err = BrandsheetError::Palette("unknown color `teal`".to_string());
        let adapter = ErrorAdapter(&err);
        assert_eq!(adapter.to_string(), "Palette error: unknown color `teal`");
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_font_error_has_help() {
        let err = BrandsheetError::Font {
            path: PathBuf::from("canvas-fonts/InstrumentSans-Bold.ttf"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let adapter = ErrorAdapter(&err);
        let help = adapter.help().map(|help| help.to_string());
        assert!(help.is_some_and(|help| help.contains("--font-dir")));
    }
}
