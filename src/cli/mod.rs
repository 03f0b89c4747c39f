//! Command-line interface wiring for the `cardmaker` binary.
//!
//! All paths and choices are collected interactively; the only flags
//! control logging.

use anyhow::{Context, Result, anyhow};
use cardmaker::{CARD_DIMS, CardPipeline, FontResolver, SystemFonts, validate_images};
use clap::Parser;
use tracing::info;

pub mod prompt;
pub mod setup;

use prompt::TerminalPrompter;

/// Parsed CLI entrypoint for the `cardmaker` binary.
#[derive(Parser, Debug)]
#[command(
    name = "cardmaker",
    version,
    about = "Composite templates, illustrations and text into card PNGs"
)]
pub struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored log output.
    #[arg(long)]
    pub no_color: bool,
}

/// Ask for the run configuration, render every card, then check the results.
pub fn run() -> Result<()> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("cannot find the current user's home"))?;
    let fonts = FontResolver::new(SystemFonts::scan());
    let mut prompter = TerminalPrompter::default();

    let config = setup::configure(&mut prompter, &fonts, &home).context("setup failed")?;

    let written = CardPipeline::new(&config, &fonts)
        .run()
        .context("card generation failed")?;
    validate_images(&config.outputs_path, CARD_DIMS)
        .with_context(|| format!("invalid cards in {}", config.outputs_path.display()))?;

    info!("done: {} card(s) written", written.len());
    Ok(())
}
