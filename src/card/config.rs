use std::fmt;
use std::path::PathBuf;

/// Default sub-directory names looked up under the root directory.
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";
pub const DEFAULT_TEXTS_DIR: &str = "texts";
pub const DEFAULT_OUTPUTS_DIR: &str = "outputs";

/// Fonts preselected in the font menus when the system has them.
pub const DEFAULT_HEADER_FONT: &str = "Adventure";
pub const DEFAULT_BODY_FONT: &str = "Arial";

/// Required size of every source illustration.
pub const ILLUSTRATION_DIMS: ImageDimensions = ImageDimensions::new(196, 157);
/// Required size of every template and every finished card.
pub const CARD_DIMS: ImageDimensions = ImageDimensions::new(243, 340);
/// Translation of the illustration from the card origin.
pub const ILLUSTRATION_OFFSET: (i64, i64) = (22, 22);

/// Pixel size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} px", self.width, self.height)
    }
}

/// Selections made at startup; read-only for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    pub images_path: PathBuf,
    pub texts_path: PathBuf,
    pub outputs_path: PathBuf,
    /// Full path of the chosen template file.
    pub template: PathBuf,
    pub header_font: String,
    pub title_font: String,
    pub body_font: String,
}

impl CardConfig {
    /// Output path for the card built from the illustration `name`.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.outputs_path.join(format!("card_{name}.png"))
    }

    /// Text file holding the labels for the illustration `name`.
    pub fn text_path(&self, name: &str) -> PathBuf {
        self.texts_path.join(format!("{name}.txt"))
    }
}
