//! Font discovery and loading.
//!
//! Lookup goes through a [`FontSource`] so the renderer never touches the
//! system font index directly; tests swap in [`MemoryFonts`].

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use tracing::info;

use crate::error::{CardError, Result};

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// A place fonts can be listed and read from.
pub trait FontSource {
    /// Paths of every font file the source knows about.
    fn list(&self) -> Vec<PathBuf>;

    /// Raw bytes of the font file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    /// Locate the font file whose name best matches `name`.
    fn find(&self, name: &str) -> Option<PathBuf> {
        find_by_stem(&self.list(), name)
    }
}

/// Fonts installed on the host, as indexed by `fontdb`.
#[derive(Debug, Clone, Default)]
pub struct SystemFonts {
    paths: Vec<PathBuf>,
}

impl SystemFonts {
    /// Scan the OS font directories and the user's font directory.
    pub fn scan() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = dirs::font_dir() {
            db.load_fonts_dir(dir);
        }

        let mut paths: Vec<PathBuf> = db
            .faces()
            .filter_map(|face| match &face.source {
                fontdb::Source::File(path) => Some(path.clone()),
                _ => None,
            })
            .filter(|path| has_font_extension(path))
            .collect();
        paths.sort();
        paths.dedup();
        Self { paths }
    }
}

impl FontSource for SystemFonts {
    fn list(&self) -> Vec<PathBuf> {
        self.paths.clone()
    }
}

/// Fixed in-memory font set keyed by a virtual file path.
#[derive(Debug, Clone, Default)]
pub struct MemoryFonts {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryFonts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        self.files.insert(path.into(), bytes);
        self
    }
}

impl FontSource for MemoryFonts {
    fn list(&self) -> Vec<PathBuf> {
        self.files.keys().cloned().collect()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not in the font set", path.display()),
            )
        })
    }
}

/// A parsed font together with the file it came from.
pub struct ResolvedFont {
    pub font: FontVec,
    pub path: PathBuf,
}

impl fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFont").field("path", &self.path).finish_non_exhaustive()
    }
}

/// Resolves font names to parsed outlines.
///
/// Nothing is cached; each call reads and parses the file again.
#[derive(Debug, Clone)]
pub struct FontResolver<S> {
    source: S,
}

impl<S: FontSource> FontResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Find, read and parse the font called `name`.
    pub fn resolve(&self, name: &str) -> Result<ResolvedFont> {
        let path = self
            .source
            .find(name)
            .ok_or_else(|| CardError::FontNotFound(name.to_string()))?;
        info!("found '{}' in '{}'", name, path.display());

        let bytes = self.source.read(&path).map_err(|source| CardError::FontUnreadable {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;
        let font = FontVec::try_from_vec(bytes).map_err(|_| CardError::FontUnparsable {
            name: name.to_string(),
            path: path.clone(),
        })?;
        Ok(ResolvedFont { font, path })
    }

    /// Font names offered to the user: file names without extension, sorted.
    pub fn available_fonts(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .source
            .list()
            .iter()
            .filter_map(|path| font_stem(path))
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

fn font_stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Exact stem match first, then case-insensitive, then substring.
fn find_by_stem(paths: &[PathBuf], name: &str) -> Option<PathBuf> {
    let wanted = name.to_lowercase();
    let stems: Vec<(&PathBuf, &str)> = paths
        .iter()
        .filter_map(|path| font_stem(path).map(|stem| (path, stem)))
        .collect();

    stems
        .iter()
        .find(|(_, stem)| *stem == name)
        .or_else(|| stems.iter().find(|(_, stem)| stem.to_lowercase() == wanted))
        .or_else(|| stems.iter().find(|(_, stem)| stem.to_lowercase().contains(&wanted)))
        .map(|(path, _)| (*path).clone())
}
