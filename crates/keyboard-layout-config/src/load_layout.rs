//! Decoding configuration records into a [`Layout`].
//!
//! The main entry point is [`load_from_config`], which takes the parsed
//! [`AppConfig`] supplied by the embedding application, turns every record
//! into a [`Key`] or [`Led`], and hands them to [`Layout::new`] for
//! validation and indexing.
//!
//! The configuration is always passed in explicitly.  There is no global
//! registry to read from, so the same process can load several keyboards and
//! tests can build configurations in memory.

use std::path::Path;

use keyboard_layout_core::{Key, KeyOptions, Layout, Led, DEFAULT_KEY_SIZE};
use tracing::{debug, warn};

use crate::config::{
    load_config_file, AppConfig, ConfigError, KeyEntry, KeyOptsEntry, LayoutConfig, LedEntry,
};

/// Builds a [`Layout`] from the `keyboard_layout.layout` entry of `config`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingConfiguration`] if the entry is absent, and
/// [`ConfigError::Layout`] if the decoded keys and LEDs are inconsistent (for
/// example a key naming an LED that does not exist).
pub fn load_from_config(config: &AppConfig) -> Result<Layout, ConfigError> {
    let Some(layout_cfg) = config.layout() else {
        warn!("no [keyboard_layout.layout] entry in configuration");
        return Err(ConfigError::MissingConfiguration);
    };
    layout_cfg.build_layout()
}

/// Reads the file at `path` and builds the layout it describes.
///
/// # Errors
///
/// Any error from [`load_config_file`] or [`load_from_config`].
pub fn load_layout_file(path: impl AsRef<Path>) -> Result<Layout, ConfigError> {
    let config = load_config_file(path)?;
    load_from_config(&config)
}

impl LayoutConfig {
    /// Decodes every record, preserving list order.
    pub fn decode(&self) -> (Vec<Key>, Vec<Led>) {
        let keys = self.keys.iter().map(KeyEntry::to_key).collect();
        let leds = self.leds.iter().map(LedEntry::to_led).collect();
        (keys, leds)
    }

    /// Decodes the records and builds a validated [`Layout`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Layout`] if [`Layout::new`] rejects the records.
    pub fn build_layout(&self) -> Result<Layout, ConfigError> {
        let (keys, leds) = self.decode();
        debug!(
            keys = keys.len(),
            leds = leds.len(),
            "decoded keyboard layout records"
        );
        Ok(Layout::new(keys, leds)?)
    }
}

impl KeyEntry {
    /// Converts the record into a domain [`Key`].
    pub fn to_key(&self) -> Key {
        let options = self.opts.as_ref().map(KeyOptions::from).unwrap_or_default();
        Key::new(self.id.clone(), self.x, self.y, options)
    }
}

impl LedEntry {
    /// Converts the record into a domain [`Led`].
    pub fn to_led(&self) -> Led {
        Led::new(self.id.clone(), self.x, self.y)
    }
}

impl From<&KeyOptsEntry> for KeyOptions {
    fn from(opts: &KeyOptsEntry) -> Self {
        Self {
            width: opts.width,
            height: opts.height,
            led: opts.led.clone(),
        }
    }
}

/// Describes an existing layout with configuration records.
///
/// Sizes equal to [`DEFAULT_KEY_SIZE`] are left out, and keys with nothing
/// to override get no `opts` table at all, so the output stays as terse as a
/// hand-written file.
impl From<&Layout> for LayoutConfig {
    fn from(layout: &Layout) -> Self {
        let leds = layout
            .leds()
            .iter()
            .map(|led| LedEntry {
                id: led.id().clone(),
                x: led.x(),
                y: led.y(),
            })
            .collect();
        let keys = layout.keys().iter().map(key_entry).collect();
        Self { leds, keys }
    }
}

fn key_entry(key: &Key) -> KeyEntry {
    let non_default = |size: f64| (size != DEFAULT_KEY_SIZE).then_some(size);
    let opts = KeyOptsEntry {
        width: non_default(key.width()),
        height: non_default(key.height()),
        led: key.led().cloned(),
    };
    KeyEntry {
        id: key.id().clone(),
        x: key.x(),
        y: key.y(),
        opts: (opts != KeyOptsEntry::default()).then_some(opts),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
