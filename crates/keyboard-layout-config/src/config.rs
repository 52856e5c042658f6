//! TOML configuration schema for keyboard layouts.
//!
//! The embedding application owns its configuration file; this module only
//! understands the `keyboard_layout.layout` entry inside it:
//!
//! ```toml
//! [keyboard_layout.layout]
//! leds = [
//!   { id = "l1", x = 0, y = 0 },
//!   { id = "l2", x = 2, y = 1.5 },
//! ]
//! keys = [
//!   { id = "k1", x = 0, y = 0, opts = { led = "l1" } },
//!   { id = "k2", x = 2, y = 1.5, opts = { width = 1.5, height = 2, led = "l2" } },
//!   { id = "k3", x = 5, y = 0 },
//! ]
//! ```
//!
//! Other top-level tables are ignored, so the layout can live in the same file
//! as the rest of the application's settings.
//!
//! # Serde defaults (for beginners)
//!
//! Fields annotated with `#[serde(default)]` fall back to `Default::default()`
//! when absent: an omitted `leds` or `keys` list is simply empty, and an
//! omitted `opts` table means "standard 1×1 key without an LED".  `opts` is
//! the one place with `deny_unknown_fields`: a misspelt `widht = 2` fails to
//! parse instead of silently producing a 1-wide key.

use std::path::{Path, PathBuf};

use keyboard_layout_core::{KeyId, LayoutError, LedId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for loading a layout from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration has no `keyboard_layout.layout` entry.
    #[error("keyboard layout configuration is missing: expected a [keyboard_layout.layout] entry")]
    MissingConfiguration,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The decoded keys and LEDs do not form a valid layout.
    #[error("invalid keyboard layout: {0}")]
    Layout(#[from] LayoutError),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration document.
///
/// Only the `keyboard_layout` namespace is modelled; anything else in the file
/// belongs to the embedding application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_layout: Option<KeyboardLayoutSection>,
}

/// The `keyboard_layout` namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KeyboardLayoutSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutConfig>,
}

/// The `keyboard_layout.layout` entry: every LED and key of one keyboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default)]
    pub leds: Vec<LedEntry>,
    #[serde(default)]
    pub keys: Vec<KeyEntry>,
}

/// One LED record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedEntry {
    pub id: LedId,
    pub x: f64,
    pub y: f64,
}

/// One key record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyEntry {
    pub id: KeyId,
    pub x: f64,
    pub y: f64,
    /// Size and LED overrides; absent means a 1×1 key without an LED.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opts: Option<KeyOptsEntry>,
}

/// Per-key options.  Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeyOptsEntry {
    /// Relative width, default 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Relative height, default 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Id of the LED beneath the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub led: Option<LedId>,
}

impl AppConfig {
    /// Returns the `keyboard_layout.layout` entry, if present.
    pub fn layout(&self) -> Option<&LayoutConfig> {
        self.keyboard_layout.as_ref()?.layout.as_ref()
    }
}

impl From<LayoutConfig> for AppConfig {
    fn from(layout: LayoutConfig) -> Self {
        Self {
            keyboard_layout: Some(KeyboardLayoutSection {
                layout: Some(layout),
            }),
        }
    }
}

// ── Parsing and file access ───────────────────────────────────────────────────

/// Parses a configuration document from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the TOML is malformed or does not match
/// the schema (including unknown fields inside a key's `opts`).
pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    let cfg: AppConfig = toml::from_str(text)?;
    debug!(
        has_layout = cfg.layout().is_some(),
        "parsed keyboard layout configuration"
    );
    Ok(cfg)
}

/// Reads and parses the configuration file at `path`.
///
/// A missing file is an error: there is no built-in default keyboard.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if its contents are malformed.
pub fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg = parse_config(&content)?;
    info!(path = %path.display(), "loaded keyboard layout configuration");
    Ok(cfg)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
