//! Core library for compositing printable game cards.
//!
//! A card is a template PNG with an illustration laid over it and three
//! text blocks (header, title, body) read from a per-illustration text file.

pub mod card;
pub mod error;
pub mod fonts;
pub mod pipeline;
pub mod raster;

pub use card::{
    CARD_DIMS, CardConfig, CardText, ILLUSTRATION_DIMS, ILLUSTRATION_OFFSET, ImageDimensions,
    TextField, TextRenderSpec,
};
pub use error::{CardError, Result};
pub use fonts::{FontResolver, FontSource, MemoryFonts, ResolvedFont, SystemFonts};
pub use pipeline::CardPipeline;
pub use raster::{compose, load_png, validate_images, write_png};
