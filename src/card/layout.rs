use crate::card::config::{CardConfig, ImageDimensions};
use crate::card::text::CardText;

const HEADER_FONT_SIZE: f32 = 14.0;
const TITLE_FONT_SIZE: f32 = 12.0;
const BODY_FONT_SIZE: f32 = 10.0;
const WRAP_MARGIN: u32 = 10;

/// Text blocks drawn on every card, in painting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Header,
    Title,
    Body,
}

impl TextField {
    pub const ALL: [TextField; 3] = [TextField::Header, TextField::Title, TextField::Body];

    fn font_size(self) -> f32 {
        match self {
            TextField::Header => HEADER_FONT_SIZE,
            TextField::Title => TITLE_FONT_SIZE,
            TextField::Body => BODY_FONT_SIZE,
        }
    }

    /// Vertical distance of the block anchor below the card's centre line.
    fn y_offset(self) -> u32 {
        match self {
            TextField::Header => 20,
            TextField::Title => 50,
            TextField::Body => 80,
        }
    }
}

/// Placement and styling of one text block.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRenderSpec {
    pub field: TextField,
    pub label: String,
    pub font: String,
    pub font_size: f32,
    /// Maximum rendered width of a line, in pixels.
    pub width: f32,
    pub x: f32,
    pub y: f32,
    /// Fraction of the block that sits left of / above the anchor.
    pub ax: f32,
    pub ay: f32,
    /// Distance between line tops as a multiple of the line height.
    pub spacing: f32,
}

impl TextRenderSpec {
    /// Lay out `field` for a card of size `bounds`.
    pub fn for_field(
        field: TextField,
        bounds: ImageDimensions,
        config: &CardConfig,
        text: &CardText,
    ) -> Self {
        let (font, label) = match field {
            TextField::Header => (&config.header_font, text.header()),
            TextField::Title => (&config.title_font, text.title()),
            TextField::Body => (&config.body_font, text.body()),
        };
        Self {
            field,
            label: label.to_string(),
            font: font.clone(),
            font_size: field.font_size(),
            width: bounds.width.saturating_sub(WRAP_MARGIN) as f32,
            x: (bounds.width / 2) as f32,
            y: (bounds.height / 2 + field.y_offset()) as f32,
            ax: 0.5,
            ay: 0.5,
            spacing: 1.0,
        }
    }

    /// Header, title and body specs, in the order they must be painted.
    pub fn for_card(bounds: ImageDimensions, config: &CardConfig, text: &CardText) -> Vec<Self> {
        TextField::ALL
            .into_iter()
            .map(|field| Self::for_field(field, bounds, config, text))
            .collect()
    }
}

/// Break `text` into lines no wider than `max_width` according to `measure`.
///
/// Newlines start a new paragraph. A single word wider than `max_width`
/// is placed on a line of its own rather than split.
pub fn wrap_words(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{current} {word}");
            if measure(&candidate) > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}
