use ab_glyph::{Font, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use tracing::debug;

use crate::card::{TextRenderSpec, wrap_words};
use crate::error::Result;
use crate::fonts::{FontResolver, FontSource};

pub const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Paints wrapped, centred text blocks onto a card buffer.
pub struct TextOverlay<'a, S> {
    fonts: &'a FontResolver<S>,
    color: Rgba<u8>,
}

impl<'a, S: FontSource> TextOverlay<'a, S> {
    pub fn new(fonts: &'a FontResolver<S>) -> Self {
        Self {
            fonts,
            color: TEXT_COLOR,
        }
    }

    /// Draw `spec.label` onto `card` in place.
    ///
    /// The font is resolved on every call, even for empty labels, so a
    /// missing font always aborts the card.
    pub fn draw(&self, card: &mut RgbaImage, spec: &TextRenderSpec) -> Result<()> {
        let resolved = self.fonts.resolve(&spec.font)?;
        let font = &resolved.font;
        let scale = em_scale(font, spec.font_size);
        let measure = |line: &str| text_size(scale, font, line).0 as f32;

        let lines = wrap_words(&spec.label, spec.width, measure);
        let line_height = font.as_scaled(scale).height();
        debug!(
            field = ?spec.field,
            font = %resolved.path.display(),
            lines = lines.len(),
            "drawing text"
        );

        for (x, y, line) in place_lines(&lines, spec, line_height, measure) {
            draw_text_mut(card, self.color, x, y, scale, font, line);
        }
        Ok(())
    }
}

/// Scale at which one em of `font` spans `size` pixels.
fn em_scale(font: &impl Font, size: f32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1.0);
    PxScale::from(size * font.height_unscaled() / units_per_em)
}

/// Top-left corner of each line of a text block.
///
/// The block spans `spec.width` horizontally and is positioned so that the
/// fraction (`spec.ax`, `spec.ay`) of it sits left of / above (`spec.x`,
/// `spec.y`). Each line is centred inside the block.
pub fn place_lines<'l>(
    lines: &'l [String],
    spec: &TextRenderSpec,
    line_height: f32,
    measure: impl Fn(&str) -> f32,
) -> Vec<(i32, i32, &'l str)> {
    let count = lines.len() as f32;
    let block_height = count * line_height * spec.spacing - (spec.spacing - 1.0) * line_height;
    let left = spec.x - spec.ax * spec.width;
    let top = spec.y - spec.ay * block_height;

    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let x = left + (spec.width - measure(line)) / 2.0;
            let y = top + idx as f32 * line_height * spec.spacing;
            (x.round() as i32, y.round() as i32, line.as_str())
        })
        .collect()
}
