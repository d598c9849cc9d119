//! CLI logic for the brand poster renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::{info, warn};

use brandsheet::{BrandsheetError, PosterBuilder};

/// Run the brandsheet CLI application
///
/// Loads the configuration, renders the poster and writes it to
/// `args.output`. Returns the path that was written.
///
/// # Errors
///
/// Returns `BrandsheetError` for:
/// - Configuration loading errors
/// - Unreadable font files
/// - Export errors
pub fn run(args: &Args) -> Result<PathBuf, BrandsheetError> {
    info!(output_path:? = args.output; "Rendering brand poster");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(font_dir) = &args.font_dir {
        app_config = app_config.with_font_directory(font_dir);
    }

    let builder = PosterBuilder::new(app_config);
    let poster = builder.save(&args.output)?;

    if !poster.fallbacks().is_empty() {
        warn!(
            count = poster.fallbacks().len(),
            font_dir:? = builder.config().fonts().directory();
            "Poster rendered with fallback fonts"
        );
    }

    Ok(args.output.clone())
}
