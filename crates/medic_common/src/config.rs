//! Medic Configuration
//!
//! Engine fallback text and output preferences.
//! Config file: $MEDIC_CONFIG or ~/.config/medic/config.toml

use crate::error::MedicError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fallback used by the standalone diagnosis scripts
pub const MINIMAL_FALLBACK: &str = "Check error message and search for solutions online";

/// Fallback used by the full engine
pub const VERBOSE_FALLBACK: &str =
    "Unable to determine specific solution. Please review error details.";

/// Environment variable that points at a config file
pub const CONFIG_ENV: &str = "MEDIC_CONFIG";

/// Engine settings handed to the synthesizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Sole solution when no handler produced any
    pub fallback_text: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback_text: VERBOSE_FALLBACK.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn minimal() -> Self {
        Self::with_fallback(MINIMAL_FALLBACK)
    }

    pub fn with_fallback(text: impl Into<String>) -> Self {
        Self {
            fallback_text: text.into(),
        }
    }
}

/// Named fallback variants selectable from the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackStyle {
    Minimal,
    #[default]
    Verbose,
}

impl FallbackStyle {
    pub fn text(&self) -> &'static str {
        match self {
            FallbackStyle::Minimal => MINIMAL_FALLBACK,
            FallbackStyle::Verbose => VERBOSE_FALLBACK,
        }
    }
}

/// `[engine]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineSection {
    /// Named style; unset means verbose for analysis and minimal for terminal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackStyle>,

    /// Explicit text, wins over `fallback`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,
}

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// `[output]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Main Medic configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicConfig {
    #[serde(default)]
    pub engine: EngineSection,

    #[serde(default)]
    pub output: OutputConfig,
}

impl MedicConfig {
    /// Get default user config path: ~/.config/medic/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("medic").join("config.toml"))
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. Explicit path (must exist)
    /// 2. $MEDIC_CONFIG
    /// 3. User config (~/.config/medic/config.toml)
    /// 4. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::load_from(&path);
            }
            tracing::warn!("{} points at missing file {}", CONFIG_ENV, path.display());
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load and validate one file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: MedicConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), MedicError> {
        if let Some(text) = &self.engine.fallback_text {
            if text.trim().is_empty() {
                return Err(MedicError::Config(
                    "engine.fallback_text must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Engine settings this file selects
    pub fn engine_config(&self) -> EngineConfig {
        match &self.engine.fallback_text {
            Some(text) => EngineConfig::with_fallback(text.clone()),
            None => EngineConfig::with_fallback(self.engine.fallback.unwrap_or_default().text()),
        }
    }

    /// Fallback text for terminal diagnoses: explicit text, then an explicit
    /// style, then the short text.
    pub fn terminal_fallback(&self) -> &str {
        match (&self.engine.fallback_text, self.engine.fallback) {
            (Some(text), _) => text.as_str(),
            (None, Some(style)) => style.text(),
            (None, None) => MINIMAL_FALLBACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = MedicConfig::default();
        assert_eq!(config.engine.fallback, None);
        assert_eq!(config.terminal_fallback(), MINIMAL_FALLBACK);
        assert_eq!(config.output.color, ColorMode::Auto);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_minimal_style() {
        let config = MedicConfig::from_toml("[engine]\nfallback = \"minimal\"\n").unwrap();
        assert_eq!(config.engine_config().fallback_text, MINIMAL_FALLBACK);
    }

    #[test]
    fn test_explicit_text_wins() {
        let config = MedicConfig::from_toml(
            "[engine]\nfallback = \"minimal\"\nfallback_text = \"Ask the build team\"\n",
        )
        .unwrap();
        assert_eq!(config.engine_config().fallback_text, "Ask the build team");
    }

    #[test]
    fn test_terminal_fallback_follows_explicit_style() {
        let verbose = MedicConfig::from_toml("[engine]\nfallback = \"verbose\"\n").unwrap();
        assert_eq!(verbose.terminal_fallback(), VERBOSE_FALLBACK);

        let text = MedicConfig::from_toml(
            "[engine]\nfallback = \"verbose\"\nfallback_text = \"Ping ops\"\n",
        )
        .unwrap();
        assert_eq!(text.terminal_fallback(), "Ping ops");
    }

    #[test]
    fn test_blank_fallback_rejected() {
        let err = MedicConfig::from_toml("[engine]\nfallback_text = \"   \"\n").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_unknown_style_rejected() {
        assert!(MedicConfig::from_toml("[engine]\nfallback = \"chatty\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\ncolor = \"never\"\nformat = \"json\"").unwrap();

        let config = MedicConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.output.color, ColorMode::Never);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(MedicConfig::load(Some(&missing)).is_err());
    }
}
