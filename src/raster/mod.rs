//! Raster work on card images: PNG I/O, validation, composition and text.

mod compose;
mod png;
mod text;
mod validate;

use std::fs;
use std::path::{Path, PathBuf};

pub use compose::compose;
pub use png::{encode_png, load_png, open_png, write_png};
pub use text::{TEXT_COLOR, TextOverlay, place_lines};
pub use validate::validate_images;

use crate::error::{CardError, Result};

/// Entries of `dir` (non-recursive), sorted by file name.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(CardError::PathNotFound {
            path: dir.to_path_buf(),
        });
    }
    let read = |err: std::io::Error| CardError::io(format!("failed to list {}", dir.display()), err);
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read)? {
        entries.push(entry.map_err(read)?.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn lists_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        for name in ["b.png", "a.png", "c.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let names: Vec<_> = list_dir(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.png", "b.png", "c.txt"]);
    }
}
