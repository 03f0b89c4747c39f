//! Card data: run configuration, per-card labels and text layout.

pub mod config;
pub mod layout;
pub mod text;

pub use config::{
    CARD_DIMS, CardConfig, DEFAULT_BODY_FONT, DEFAULT_HEADER_FONT, DEFAULT_IMAGES_DIR,
    DEFAULT_OUTPUTS_DIR, DEFAULT_TEMPLATES_DIR, DEFAULT_TEXTS_DIR, ILLUSTRATION_DIMS,
    ILLUSTRATION_OFFSET, ImageDimensions,
};
pub use layout::{TextField, TextRenderSpec, wrap_words};
pub use text::CardText;
