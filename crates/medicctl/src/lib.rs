//! Medic Control - CLI front end for the diagnosis engine.
//!
//! Obtains the error text (argv, file, stdin, JSON request), runs the
//! engine, and presents or persists the report.

pub mod cli;
pub mod commands;
pub mod display;
pub mod logging;

use cli::{Cli, ColorChoice, Commands};
use commands::Session;
use display::Painter;
use medic_common::config::ColorMode;
use medic_common::MedicConfig;
use std::io::IsTerminal;

/// Decide whether to color stdout. CLI flag beats config; auto honors NO_COLOR.
pub fn color_enabled(flag: Option<ColorChoice>, config: ColorMode, stdout_is_tty: bool) -> bool {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    match (flag, config) {
        (Some(ColorChoice::Always), _) => true,
        (Some(ColorChoice::Never), _) => false,
        (Some(ColorChoice::Auto), _) | (None, ColorMode::Auto) => stdout_is_tty && !no_color,
        (None, ColorMode::Always) => true,
        (None, ColorMode::Never) => false,
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = MedicConfig::load(cli.config.as_deref())?;
    let painter = Painter::new(color_enabled(
        cli.color,
        config.output.color,
        std::io::stdout().is_terminal(),
    ));
    let session = Session { config, painter };

    match cli.command {
        Commands::Analyze {
            message,
            file,
            json,
            minimal,
            output,
        } => commands::analyze(
            &session,
            message,
            file.as_deref(),
            json,
            minimal,
            output.as_deref(),
        ),
        Commands::Request { path } => commands::request(&session, &path),
        Commands::Terminal { message, json } => commands::terminal(&session, message, json),
        Commands::Plan { path, json, output } => {
            commands::plan(&session, &path, json, output.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_config() {
        assert!(color_enabled(Some(ColorChoice::Always), ColorMode::Never, false));
        assert!(!color_enabled(Some(ColorChoice::Never), ColorMode::Always, true));
        assert!(color_enabled(None, ColorMode::Always, false));
        assert!(!color_enabled(None, ColorMode::Never, true));
    }

    #[test]
    fn test_auto_needs_tty() {
        assert!(!color_enabled(None, ColorMode::Auto, false));
        assert!(!color_enabled(Some(ColorChoice::Auto), ColorMode::Always, false));
    }
}
