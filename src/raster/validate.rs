use std::path::Path;

use tracing::info;

use crate::card::ImageDimensions;
use crate::error::{CardError, Result};
use crate::raster::{list_dir, png::open_png};

/// Check that every entry of `dir` is a PNG of exactly `expected` size.
///
/// Only image headers are decoded. Entries are visited in file name order and
/// the first offending one aborts the check. Returns the number of images seen.
pub fn validate_images(dir: &Path, expected: ImageDimensions) -> Result<usize> {
    let entries = list_dir(dir)?;
    for path in &entries {
        let is_png = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".png"));
        if !is_png {
            return Err(CardError::InvalidImageFormat {
                path: path.clone(),
                reason: format!("all images in '{}' must be PNG files", dir.display()),
            });
        }

        let (width, height) =
            open_png(path)?
                .into_dimensions()
                .map_err(|err| CardError::InvalidImageFormat {
                    path: path.clone(),
                    reason: err.to_string(),
                })?;
        let actual = ImageDimensions::new(width, height);
        if actual != expected {
            return Err(CardError::DimensionMismatch {
                path: path.clone(),
                expected,
                actual,
            });
        }
    }

    info!(
        "all images in '{}' are PNG and satisfy dims ({})",
        dir.display(),
        expected
    );
    Ok(entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const DIMS: ImageDimensions = ImageDimensions::new(8, 6);

    fn png(dir: &TempDir, name: &str, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([1, 2, 3, 255]))
            .save(dir.path().join(name))
            .unwrap();
    }

    #[test]
    fn accepts_matching_pngs() {
        let dir = TempDir::new().unwrap();
        png(&dir, "a.png", 8, 6);
        png(&dir, "b.png", 8, 6);
        assert_eq!(validate_images(dir.path(), DIMS).unwrap(), 2);
    }

    #[test]
    fn empty_directory_passes() {
        let dir = TempDir::new().unwrap();
        assert_eq!(validate_images(dir.path(), DIMS).unwrap(), 0);
    }

    #[test]
    fn rejects_entry_without_png_suffix() {
        let dir = TempDir::new().unwrap();
        png(&dir, "a.png", 8, 6);
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        let err = validate_images(dir.path(), DIMS).unwrap_err();
        match err {
            CardError::InvalidImageFormat { path, .. } => {
                assert_eq!(path.file_name().unwrap(), "notes.txt")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn a_single_wrong_axis_fails() {
        let dir = TempDir::new().unwrap();
        png(&dir, "tall.png", 8, 7);
        let err = validate_images(dir.path(), DIMS).unwrap_err();
        match err {
            CardError::DimensionMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, DIMS);
                assert_eq!(actual, ImageDimensions::new(8, 7));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_first_violation_in_name_order() {
        let dir = TempDir::new().unwrap();
        png(&dir, "c.png", 1, 1);
        png(&dir, "a.png", 8, 6);
        png(&dir, "b.png", 2, 2);
        let err = validate_images(dir.path(), DIMS).unwrap_err();
        match err {
            CardError::DimensionMismatch { path, .. } => {
                assert_eq!(path.file_name().unwrap(), "b.png")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn undecodable_png_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.png"), b"\x89PNG\r\n\x1a\n").unwrap();
        let err = validate_images(dir.path(), DIMS).unwrap_err();
        assert!(matches!(err, CardError::InvalidImageFormat { .. }));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = validate_images(&dir.path().join("nope"), DIMS).unwrap_err();
        assert!(matches!(err, CardError::PathNotFound { .. }));
    }
}
