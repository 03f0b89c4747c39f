//! Card production over a directory of illustrations.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::card::{CardConfig, CardText, ILLUSTRATION_OFFSET, ImageDimensions, TextRenderSpec};
use crate::error::{CardError, Result};
use crate::fonts::{FontResolver, FontSource};
use crate::raster::{TextOverlay, compose, list_dir, load_png, write_png};

/// Turns every illustration in `config.images_path` into a finished card.
pub struct CardPipeline<'a, S> {
    config: &'a CardConfig,
    fonts: &'a FontResolver<S>,
}

impl<'a, S: FontSource> CardPipeline<'a, S> {
    pub fn new(config: &'a CardConfig, fonts: &'a FontResolver<S>) -> Self {
        Self { config, fonts }
    }

    /// Render all cards in file name order, stopping at the first failure.
    ///
    /// Cards written before a failure stay on disk. Returns the written paths.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let template = load_png(&self.config.template)?;
        let overlay = TextOverlay::new(self.fonts);

        let mut written = Vec::new();
        for image_path in list_dir(&self.config.images_path)? {
            written.push(self.render_card(&template, &image_path, &overlay)?);
        }
        info!(
            "rendered {} card(s) into '{}'",
            written.len(),
            self.config.outputs_path.display()
        );
        Ok(written)
    }

    /// Compose one card: illustration over template, then header, title and
    /// body in that order, then a single write to the outputs directory.
    pub fn render_card(
        &self,
        template: &RgbaImage,
        image_path: &Path,
        overlay: &TextOverlay<'_, S>,
    ) -> Result<PathBuf> {
        let name = base_name(image_path)?;
        let illustration = load_png(image_path)?;
        let mut card = compose(template, &illustration, ILLUSTRATION_OFFSET);

        let text = CardText::from_file(&self.config.text_path(&name))?;
        let bounds = ImageDimensions::new(card.width(), card.height());
        for spec in TextRenderSpec::for_card(bounds, self.config, &text) {
            overlay.draw(&mut card, &spec)?;
        }

        let output = self.config.output_path(&name);
        write_png(&output, &card)?;
        info!("wrote '{}'", output.display());
        Ok(output)
    }
}

/// File name without its last extension.
fn base_name(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| CardError::InvalidImageFormat {
            path: path.to_path_buf(),
            reason: "entry has no file name".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_name_drops_last_extension_only() {
        assert_eq!(base_name(Path::new("images/hero.png")).unwrap(), "hero");
        assert_eq!(base_name(Path::new("images/hero.v2.png")).unwrap(), "hero.v2");
        assert!(base_name(Path::new("/")).is_err());
    }
}
