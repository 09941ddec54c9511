//! watchlist - Terminal Movie Watch List
//!
//! Keep track of movies to watch, rate them and jot down a review.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, Command};
use std::path::PathBuf;
use watchlist::render::ui::{TerminalUI, ThemeName};
use watchlist::{AppConfig, Application};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; redirect it when running with RUST_LOG set
    env_logger::init();

    let matches = Command::new("watchlist")
        .version(watchlist::VERSION)
        .about("A terminal movie watch list with star ratings and notes")
        .long_about(
            "watchlist keeps an in-memory list of movies for the current session. \
             Add titles, rate them from one to five stars and write a short review. \
             Nothing is saved when the program exits.",
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Path to a TOML configuration file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .value_name("NAME")
                .help("Color theme, overrides the configuration file")
                .value_parser(ThemeName::VARIANTS),
        )
        .get_matches();

    let mut config = AppConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("Failed to load configuration")?;

    if let Some(theme) = matches.get_one::<String>("theme") {
        config.theme = theme.parse()?;
    }

    let ui_renderer = Box::new(TerminalUI::with_theme(
        config.theme.color_theme(),
        config.labels(),
    )?);
    let mut app = Application::new(&config, ui_renderer);

    app.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        assert!(!watchlist::VERSION.is_empty());
    }
}
