use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageFormat, ImageReader, ImageResult, RgbaImage};

use crate::error::{CardError, Result};

/// Open `path` for decoding after confirming its contents are PNG.
pub fn open_png(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| CardError::io(format!("impossible to open {}", path.display()), err))?;
    match reader.format() {
        Some(ImageFormat::Png) => Ok(reader),
        Some(other) => Err(CardError::InvalidImageFormat {
            path: path.to_path_buf(),
            reason: format!("contains {other:?} data"),
        }),
        None => Err(CardError::InvalidImageFormat {
            path: path.to_path_buf(),
            reason: "unrecognised image data".to_string(),
        }),
    }
}

/// Fully decode the PNG at `path` into an RGBA buffer.
pub fn load_png(path: &Path) -> Result<RgbaImage> {
    let image = open_png(path)?
        .decode()
        .map_err(|err| CardError::InvalidImageFormat {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    Ok(image.to_rgba8())
}

/// Encode `image` as PNG with the best compression level.
pub fn encode_png(image: &RgbaImage) -> ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive);
    image.write_with_encoder(encoder)?;
    Ok(bytes)
}

/// Encode `image` and replace whatever is stored at `path`.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    let bytes = encode_png(image).map_err(|source| CardError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, bytes)
        .map_err(|err| CardError::io(format!("failed to create {}", path.display()), err))
}
