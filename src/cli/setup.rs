//! Startup questions that build the run's [`CardConfig`].

use std::path::{Path, PathBuf};

use cardmaker::card::{
    DEFAULT_BODY_FONT, DEFAULT_HEADER_FONT, DEFAULT_IMAGES_DIR, DEFAULT_OUTPUTS_DIR,
    DEFAULT_TEMPLATES_DIR, DEFAULT_TEXTS_DIR,
};
use cardmaker::raster::list_dir;
use cardmaker::{
    CARD_DIMS, CardConfig, CardError, FontResolver, FontSource, ILLUSTRATION_DIMS, Result,
    validate_images,
};
use tracing::info;

use crate::cli::prompt::Prompter;

/// Ask for every directory, the template and the fonts, validating image
/// directories as soon as they are chosen.
pub fn configure<P, S>(prompter: &mut P, fonts: &FontResolver<S>, home: &Path) -> Result<CardConfig>
where
    P: Prompter,
    S: FontSource,
{
    let root = prompt_path(prompter, None, "root directory", home)?;

    let images_path = prompt_path(
        prompter,
        Some(root.as_path()),
        "images directory",
        &root.join(DEFAULT_IMAGES_DIR),
    )?;
    validate_images(&images_path, ILLUSTRATION_DIMS)?;

    let templates_path = prompt_path(
        prompter,
        Some(root.as_path()),
        "templates directory",
        &root.join(DEFAULT_TEMPLATES_DIR),
    )?;
    validate_images(&templates_path, CARD_DIMS)?;
    let template = prompt_template(prompter, &templates_path)?;

    let texts_path = prompt_path(
        prompter,
        Some(root.as_path()),
        "texts directory",
        &root.join(DEFAULT_TEXTS_DIR),
    )?;
    let outputs_path = prompt_path(
        prompter,
        Some(root.as_path()),
        "output directory",
        &root.join(DEFAULT_OUTPUTS_DIR),
    )?;

    let header_font = prompt_font(prompter, fonts, "Header", DEFAULT_HEADER_FONT)?;
    let body_font = prompt_font(prompter, fonts, "Title and Body", DEFAULT_BODY_FONT)?;

    Ok(CardConfig {
        images_path,
        texts_path,
        outputs_path,
        template,
        header_font,
        title_font: body_font.clone(),
        body_font,
    })
}

/// Relative answers are taken relative to `root` when one is known.
fn resolve(root: Option<&Path>, input: &str) -> PathBuf {
    let path = PathBuf::from(input.trim());
    match root {
        Some(root) if path.is_relative() => root.join(path),
        _ => path,
    }
}

fn prompt_path<P: Prompter>(
    prompter: &mut P,
    root: Option<&Path>,
    label: &str,
    default: &Path,
) -> Result<PathBuf> {
    let exists = |input: &str| {
        if resolve(root, input).exists() {
            Ok(())
        } else {
            Err("path does not exist".to_string())
        }
    };
    let answer = prompter.text(
        &format!("Location of the {label}"),
        &default.to_string_lossy(),
        &exists,
    )?;
    let path = resolve(root, &answer);
    info!("selected {label} '{}'", path.display());
    Ok(path)
}

fn prompt_template<P: Prompter>(prompter: &mut P, templates_path: &Path) -> Result<PathBuf> {
    let items: Vec<String> = list_dir(templates_path)?
        .iter()
        .filter_map(|path| path.file_name().and_then(|name| name.to_str()))
        .filter(|name| name.ends_with(".png"))
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        return Err(CardError::NoTemplatesFound {
            dir: templates_path.to_path_buf(),
        });
    }

    let choice = prompter.select("Select Template", &items, 0)?;
    info!("selected template '{}'", items[choice]);
    Ok(templates_path.join(&items[choice]))
}

fn prompt_font<P, S>(
    prompter: &mut P,
    fonts: &FontResolver<S>,
    role: &str,
    preferred: &str,
) -> Result<String>
where
    P: Prompter,
    S: FontSource,
{
    let names = fonts.available_fonts();
    if names.is_empty() {
        return Err(CardError::NoFontsFound);
    }
    let default = names.iter().position(|name| name == preferred).unwrap_or(0);

    let choice = prompter.select(&format!("Select {role} Font"), &names, default)?;
    info!("selected {role} font '{}'", names[choice]);
    Ok(names[choice].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::ScriptedPrompter;
    use cardmaker::MemoryFonts;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn png(path: PathBuf, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]))
            .save(path)
            .unwrap();
    }

    fn workspace() -> TempDir {
        let dir = TempDir::new().unwrap();
        for sub in ["images", "templates", "texts", "outputs"] {
            fs::create_dir(dir.path().join(sub)).unwrap();
        }
        png(dir.path().join("images/hero.png"), 196, 157);
        png(dir.path().join("templates/card_bg.png"), 243, 340);
        png(dir.path().join("templates/gold.png"), 243, 340);
        dir
    }

    fn fonts() -> FontResolver<MemoryFonts> {
        FontResolver::new(
            MemoryFonts::new()
                .with_font("/fonts/Adventure.ttf", Vec::new())
                .with_font("/fonts/Arial.ttf", Vec::new())
                .with_font("/fonts/Zapfino.ttf", Vec::new()),
        )
    }

    #[test]
    fn defaults_build_config_under_root() {
        let dir = workspace();
        let root = dir.path().to_path_buf();
        let mut prompter = ScriptedPrompter::new(["", "", "", "", "", "", "", ""]);

        let config = configure(&mut prompter, &fonts(), &root).unwrap();

        assert_eq!(
            config,
            CardConfig {
                images_path: root.join("images"),
                texts_path: root.join("texts"),
                outputs_path: root.join("outputs"),
                template: root.join("templates").join("card_bg.png"),
                header_font: "Adventure".into(),
                title_font: "Arial".into(),
                body_font: "Arial".into(),
            }
        );
        assert_eq!(
            prompter.asked,
            vec![
                "Location of the root directory",
                "Location of the images directory",
                "Location of the templates directory",
                "Select Template",
                "Location of the texts directory",
                "Location of the output directory",
                "Select Header Font",
                "Select Title and Body Font",
            ]
        );
    }

    #[test]
    fn explicit_choices_and_relative_paths() {
        let dir = workspace();
        fs::create_dir(dir.path().join("copy")).unwrap();
        let root = dir.path().to_string_lossy().into_owned();
        let mut prompter = ScriptedPrompter::new([
            root.as_str(),
            "missing-dir",
            "images",
            "",
            "gold.png",
            "",
            "copy",
            "Zapfino",
            "Adventure",
        ]);

        let config = configure(&mut prompter, &fonts(), Path::new("/nowhere")).unwrap();

        assert_eq!(config.images_path, dir.path().join("images"));
        assert_eq!(config.template, dir.path().join("templates").join("gold.png"));
        assert_eq!(config.outputs_path, dir.path().join("copy"));
        assert_eq!(config.header_font, "Zapfino");
        assert_eq!(config.title_font, "Adventure");
        assert_eq!(config.body_font, "Adventure");
    }

    #[test]
    fn wrongly_sized_illustration_stops_setup() {
        let dir = workspace();
        png(dir.path().join("images/huge.png"), 300, 300);
        let mut prompter = ScriptedPrompter::new(["", ""]);

        let err = configure(&mut prompter, &fonts(), dir.path()).unwrap_err();
        assert!(matches!(err, CardError::DimensionMismatch { .. }));
    }

    #[test]
    fn templates_directory_without_png_is_rejected() {
        let dir = workspace();
        fs::remove_file(dir.path().join("templates/card_bg.png")).unwrap();
        fs::remove_file(dir.path().join("templates/gold.png")).unwrap();
        let mut prompter = ScriptedPrompter::new(["", "", ""]);

        let err = configure(&mut prompter, &fonts(), dir.path()).unwrap_err();
        assert!(matches!(err, CardError::NoTemplatesFound { .. }));
    }

    #[test]
    fn no_fonts_is_an_error() {
        let dir = workspace();
        let mut prompter = ScriptedPrompter::new(["", "", "", "", "", ""]);

        let err =
            configure(&mut prompter, &FontResolver::new(MemoryFonts::new()), dir.path()).unwrap_err();
        assert!(matches!(err, CardError::NoFontsFound));
    }
}
