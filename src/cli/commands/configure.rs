//! Configure command handler for editing the backend URL.

use anyhow::Result;
use inquire::{CustomUserError, Text};
use inquire::validator::Validation;

use crate::config::{ConfigFile, ConfigManager, DEFAULT_BASE_URL, parse_base_url};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the stored settings; otherwise prompts for the backend
/// URL and saves it.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    if show {
        let config = manager.load_or_default()?;
        print_current(&manager, &config);
        return Ok(());
    }
    handle_prompt_cancellation(|| configure_interactive(&manager))
}

fn configure_interactive(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;
    print_current(manager, &config);

    let current = config
        .nile
        .base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let base_url = Text::new("Chronicler backend URL:")
        .with_default(&current)
        .with_help_message("The server that answers POST /api/chat")
        .with_validator(|input: &str| -> Result<Validation, CustomUserError> {
            Ok(match parse_base_url(input) {
                Ok(_) => Validation::Valid,
                Err(e) => Validation::Invalid(e.to_string().into()),
            })
        })
        .prompt()?;

    config.nile.base_url = Some(base_url.trim().trim_end_matches('/').to_string());
    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );
    Ok(())
}

fn print_current(manager: &ConfigManager, config: &ConfigFile) {
    println!("{}", Style::header("Current configuration"));
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}  {}",
        Style::label("base_url"),
        config.nile.base_url.as_deref().map_or_else(
            || Style::secondary(format!("(not set, using {DEFAULT_BASE_URL})")),
            Style::value
        )
    );
    println!();
}
