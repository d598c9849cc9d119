//! The brand font table and font loading.
//!
//! Every piece of poster text is set in one of the [`FontRole`]s. A role maps
//! to a [`FontFile`] inside the configured font directory and a pixel size.
//! [`FontSet::load`] reads each file once, registers it with the
//! [`TextEngine`] and resolves every role to a [`FontHandle`].
//!
//! Loading never fails because a font is absent: a missing file, or one that
//! holds no parseable face, is replaced by the engine's bundled sans-serif or
//! monospace face and reported through [`FontLoad::FallbackUsed`].

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use indexmap::{IndexMap, map::Entry};
use log::{debug, info, warn};

use brandsheet_core::draw::{FontFamily, FontHandle, TextEngine};

use crate::BrandsheetError;

/// The brand typefaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Typeface {
    /// Instrument Sans, used for display and body copy.
    InstrumentSans,
    /// Geist Mono, used for captions, labels and code.
    GeistMono,
    /// Noto Sans SC, used for Chinese text.
    NotoSansSc,
}

impl Typeface {
    fn file_stem(self) -> &'static str {
        match self {
            Self::InstrumentSans => "InstrumentSans",
            Self::GeistMono => "GeistMono",
            Self::NotoSansSc => "NotoSansSC",
        }
    }

    /// The generic family substituted when the typeface cannot be loaded.
    fn fallback_family(self) -> FontFamily {
        match self {
            Self::GeistMono => FontFamily::Monospace,
            Self::InstrumentSans | Self::NotoSansSc => FontFamily::SansSerif,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    /// Returns the CSS numeric weight.
    pub fn value(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Bold => 700,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Bold => "Bold",
        }
    }
}

/// One font file of the brand font set, e.g. `GeistMono-Bold.ttf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontFile {
    typeface: Typeface,
    weight: FontWeight,
}

impl FontFile {
    pub const fn new(typeface: Typeface, weight: FontWeight) -> Self {
        Self { typeface, weight }
    }

    /// Returns the file name inside the font directory.
    pub fn file_name(self) -> String {
        format!("{}-{}.ttf", self.typeface.file_stem(), self.weight.suffix())
    }

    fn fallback_handle(self, size: f32) -> FontHandle {
        FontHandle::new(self.typeface.fallback_family(), self.weight.value(), size)
    }
}

impl fmt::Display for FontFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// The text styles used on the poster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Heading,
    Subhead,
    Body,
    Caption,
    Label,
    Large,
    LogoMark,
    Display,
    MonoDisplay,
    Chinese,
    ChineseSmall,
}

impl FontRole {
    pub const ALL: [FontRole; 12] = [
        Self::Title,
        Self::Heading,
        Self::Subhead,
        Self::Body,
        Self::Caption,
        Self::Label,
        Self::Large,
        Self::LogoMark,
        Self::Display,
        Self::MonoDisplay,
        Self::Chinese,
        Self::ChineseSmall,
    ];

    /// Returns the font file this role is set in.
    pub fn file(self) -> FontFile {
        use FontWeight::{Bold, Regular};
        use Typeface::{GeistMono, InstrumentSans, NotoSansSc};

        match self {
            Self::Title | Self::Heading | Self::Large | Self::LogoMark | Self::Display => {
                FontFile::new(InstrumentSans, Bold)
            }
            Self::Subhead | Self::Body => FontFile::new(InstrumentSans, Regular),
            Self::Caption | Self::Label => FontFile::new(GeistMono, Regular),
            Self::MonoDisplay => FontFile::new(GeistMono, Bold),
            Self::Chinese => FontFile::new(NotoSansSc, Bold),
            Self::ChineseSmall => FontFile::new(NotoSansSc, Regular),
        }
    }

    /// Returns the em size in pixels.
    pub fn size(self) -> f32 {
        match self {
            Self::Title => 72.0,
            Self::Heading => 32.0,
            Self::Subhead => 24.0,
            Self::Body => 18.0,
            Self::Caption => 14.0,
            Self::Label => 12.0,
            Self::Large => 120.0,
            Self::LogoMark => 36.0,
            Self::Display => 48.0,
            Self::MonoDisplay => 28.0,
            Self::Chinese => 28.0,
            Self::ChineseSmall => 16.0,
        }
    }
}

/// Why a font file was replaced by a generic family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The file does not exist.
    Missing,
    /// The file exists but holds no usable font face.
    Unparseable,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("file not found"),
            Self::Unparseable => f.write_str("no usable font face"),
        }
    }
}

/// The outcome of [`load_font`].
#[derive(Debug, Clone, PartialEq)]
pub enum FontLoad {
    /// The file was registered and the handle selects its face.
    Loaded(FontHandle),
    /// The file could not be used; the handle selects a generic family.
    FallbackUsed {
        handle: FontHandle,
        reason: FallbackReason,
    },
}

impl FontLoad {
    pub fn handle(&self) -> &FontHandle {
        match self {
            Self::Loaded(handle) | Self::FallbackUsed { handle, .. } => handle,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FallbackUsed { .. })
    }
}

/// Loads `file` from `font_dir` into `engine` and returns a handle at `size`.
///
/// A fallback registers the bundled fallback faces so the generic family can
/// resolve.
///
/// # Errors
///
/// Returns [`BrandsheetError::Font`] when the file exists but reading it
/// fails for a reason other than absence, such as missing permissions or the
/// path naming a directory.
pub fn load_font(
    engine: &mut TextEngine,
    font_dir: &Path,
    file: FontFile,
    size: f32,
) -> Result<FontLoad, BrandsheetError> {
    let path = font_dir.join(file.file_name());
    let data = match fs::read(&path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(fallback(engine, file, size, FallbackReason::Missing));
        }
        Err(source) => return Err(BrandsheetError::Font { path, source }),
    };

    match engine.register_font(data) {
        Some(face) => {
            debug!(file = file.to_string(), family = face.family(); "Font loaded");
            Ok(FontLoad::Loaded(face.to_handle(size)))
        }
        None => Ok(fallback(engine, file, size, FallbackReason::Unparseable)),
    }
}

fn fallback(engine: &mut TextEngine, file: FontFile, size: f32, reason: FallbackReason) -> FontLoad {
    engine.load_fallback_fonts();
    FontLoad::FallbackUsed {
        handle: file.fallback_handle(size),
        reason,
    }
}

/// A font file that was replaced by a generic family.
#[derive(Debug, Clone, PartialEq)]
pub struct FontFallback {
    path: PathBuf,
    reason: FallbackReason,
}

impl FontFallback {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn reason(&self) -> FallbackReason {
        self.reason
    }
}

/// Every [`FontRole`] resolved to a handle.
#[derive(Debug, Clone)]
pub struct FontSet {
    handles: IndexMap<FontRole, FontHandle>,
    fallbacks: Vec<FontFallback>,
}

impl FontSet {
    /// Loads the brand fonts from `font_dir`, reading each file once.
    ///
    /// Fallbacks are logged at warn level and recorded in
    /// [`FontSet::fallbacks`].
    ///
    /// # Errors
    ///
    /// Propagates the [`BrandsheetError::Font`] errors of [`load_font`].
    pub fn load(font_dir: &Path, engine: &mut TextEngine) -> Result<Self, BrandsheetError> {
        let mut files: IndexMap<FontFile, FontLoad> = IndexMap::new();
        let mut handles = IndexMap::with_capacity(FontRole::ALL.len());
        let mut fallbacks = Vec::new();

        for role in FontRole::ALL {
            let file = role.file();
            let load = match files.entry(file) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let load = load_font(engine, font_dir, file, role.size())?;
                    if let FontLoad::FallbackUsed { reason, .. } = &load {
                        let path = font_dir.join(file.file_name());
                        warn!(
                            file = file.to_string(), reason = reason.to_string();
                            "Font unavailable, using fallback"
                        );
                        fallbacks.push(FontFallback {
                            path,
                            reason: *reason,
                        });
                    }
                    entry.insert(load)
                }
            };
            handles.insert(role, load.handle().clone().with_size(role.size()));
        }

        info!(
            files = files.len(), fallbacks = fallbacks.len();
            "Fonts loaded"
        );
        Ok(Self { handles, fallbacks })
    }

    /// Returns the handle for `role`.
    pub fn handle(&self, role: FontRole) -> &FontHandle {
        &self.handles[&role]
    }

    /// Returns the font files that were replaced by a generic family.
    pub fn fallbacks(&self) -> &[FontFallback] {
        &self.fallbacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(FontRole::Title.file().file_name(), "InstrumentSans-Bold.ttf");
        assert_eq!(FontRole::Body.file().file_name(), "InstrumentSans-Regular.ttf");
        assert_eq!(FontRole::MonoDisplay.file().file_name(), "GeistMono-Bold.ttf");
        assert_eq!(FontRole::Label.file().file_name(), "GeistMono-Regular.ttf");
        assert_eq!(FontRole::Chinese.file().file_name(), "NotoSansSC-Bold.ttf");
        assert_eq!(
            FontRole::ChineseSmall.file().file_name(),
            "NotoSansSC-Regular.ttf"
        );
    }

    #[test]
    fn test_roles_cover_six_files() {
        let unique: std::collections::HashSet<FontFile> =
            FontRole::ALL.iter().map(|role| role.file()).collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = TextEngine::new();
        let file = FontFile::new(Typeface::GeistMono, FontWeight::Regular);

        let load = load_font(&mut engine, dir.path(), file, 14.0).unwrap();
        assert_eq!(
            load,
            FontLoad::FallbackUsed {
                handle: FontHandle::new(FontFamily::Monospace, 400, 14.0),
                reason: FallbackReason::Missing,
            }
        );
    }

    #[test]
    fn test_garbage_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("InstrumentSans-Bold.ttf"), b"not a font").unwrap();
        let mut engine = TextEngine::new();
        let file = FontFile::new(Typeface::InstrumentSans, FontWeight::Bold);

        let load = load_font(&mut engine, dir.path(), file, 72.0).unwrap();
        assert!(load.is_fallback());
        assert_eq!(load.handle().family(), &FontFamily::SansSerif);
        assert_eq!(load.handle().weight(), 700);
        assert!(matches!(
            load,
            FontLoad::FallbackUsed {
                reason: FallbackReason::Unparseable,
                ..
            }
        ));
    }

    #[test]
    fn test_unreadable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("NotoSansSC-Bold.ttf")).unwrap();
        let mut engine = TextEngine::new();
        let file = FontFile::new(Typeface::NotoSansSc, FontWeight::Bold);

        let result = load_font(&mut engine, dir.path(), file, 28.0);
        assert!(matches!(result, Err(BrandsheetError::Font { path, .. }) if path.ends_with("NotoSansSC-Bold.ttf")));
    }

    #[test]
    fn test_font_set_records_one_fallback_per_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = TextEngine::new();

        let fonts = FontSet::load(&dir.path().join("absent"), &mut engine).unwrap();
        assert_eq!(fonts.fallbacks().len(), 6);
        assert!(
            fonts
                .fallbacks()
                .iter()
                .all(|fallback| fallback.reason() == FallbackReason::Missing)
        );

        for role in FontRole::ALL {
            assert_eq!(fonts.handle(role).size(), role.size());
        }
        assert_eq!(fonts.handle(FontRole::Caption).family(), &FontFamily::Monospace);
        assert_eq!(fonts.handle(FontRole::Large).weight(), 700);
    }

    #[test]
    fn test_fallback_registers_bundled_faces() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = TextEngine::new();
        assert_eq!(engine.face_count(), 0);

        FontSet::load(dir.path(), &mut engine).unwrap();
        assert_eq!(engine.face_count(), 2);
    }

    #[test]
    fn test_font_file_display_is_file_name() {
        let file = FontFile::new(Typeface::NotoSansSc, FontWeight::Regular);
        assert_eq!(file.to_string(), "NotoSansSC-Regular.ttf");
    }
}
