//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.marquee/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The theme preference is written back through [`save_theme`] when the
//! user toggles it at runtime; nothing else is ever persisted.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::rail::DEFAULT_RAIL_LIMIT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
    pub rail_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a catalog TOML; relative paths resolve against `~/.marquee/`.
    pub file: Option<String>,
}

/// Color theme. Process-wide, initialized from config and persisted on
/// toggle — entirely outside the filtering core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub rail_limit: usize,
    /// Catalog file override; `None` means the built-in catalog.
    pub catalog_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            rail_limit: DEFAULT_RAIL_LIMIT,
            catalog_file: None,
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.marquee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".marquee").join("config.toml"))
}

/// Load config from `~/.marquee/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MarqueeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MarqueeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MarqueeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MarqueeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MarqueeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Marquee Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "dark"          # "dark" or "light"; updated when you press Ctrl+T
# rail_limit = 4          # items shown per rail

# [catalog]
# file = "catalog.toml"   # Path relative to ~/.marquee/ (or absolute)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI flags.
///
/// `cli_theme` and `cli_catalog` come from CLI flags (None = not given).
pub fn resolve(
    config: &MarqueeConfig,
    cli_theme: Option<Theme>,
    cli_catalog: Option<&std::path::Path>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli_theme
        .or_else(|| std::env::var("MARQUEE_THEME").ok().and_then(|s| parse_theme(&s)))
        .or(config.general.theme)
        .unwrap_or_default();

    // Catalog file: CLI → env → config → builtin
    let catalog_file = cli_catalog
        .map(PathBuf::from)
        .or_else(|| std::env::var("MARQUEE_CATALOG").ok().map(PathBuf::from))
        .or_else(|| config.catalog.file.as_deref().map(resolve_catalog_path));

    ResolvedConfig {
        theme,
        rail_limit: config.general.rail_limit.unwrap_or(DEFAULT_RAIL_LIMIT),
        catalog_file,
    }
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.trim().to_lowercase().as_str() {
        "dark" => Some(Theme::Dark),
        "light" => Some(Theme::Light),
        other => {
            warn!("Unknown MARQUEE_THEME value `{other}`, ignoring");
            None
        }
    }
}

/// Relative config paths resolve against `~/.marquee/`.
fn resolve_catalog_path(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match dirs::home_dir() {
        Some(home) => home.join(".marquee").join(path),
        None => path,
    }
}

// ============================================================================
// Write-through
// ============================================================================

/// Persist the theme preference, keeping the rest of the config intact.
pub fn save_theme(theme: Theme) -> Result<(), ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, theme not persisted");
            return Ok(());
        }
    };

    // Re-read so a concurrent hand-edit of other fields isn't clobbered.
    let mut config = match load_config() {
        Ok(c) => c,
        Err(e) => {
            warn!("Config unreadable ({e}), rewriting with defaults");
            MarqueeConfig::default()
        }
    };
    config.general.theme = Some(theme);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    let serialized = toml::to_string_pretty(&config)
        .expect("config serialization cannot fail for plain structs");
    fs::write(&path, serialized).map_err(ConfigError::Io)?;
    info!("Persisted theme `{}` to {}", theme.label(), path.display());
    Ok(())
}
