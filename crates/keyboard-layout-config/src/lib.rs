//! # keyboard-layout-config
//!
//! Thin adapter between an application's configuration file and
//! [`keyboard_layout_core::Layout`].
//!
//! The core crate never reads configuration on its own.  Instead the embedding
//! application parses its settings (usually TOML) into an [`AppConfig`] and
//! passes it to [`load_from_config`]:
//!
//! ```rust
//! use keyboard_layout_config::{load_from_config, parse_config};
//!
//! let config = parse_config(r#"
//!     [keyboard_layout.layout]
//!     leds = [{ id = "l1", x = 0, y = 0 }]
//!     keys = [{ id = "k1", x = 0, y = 0, opts = { led = "l1" } }]
//! "#)?;
//! let layout = load_from_config(&config)?;
//! assert_eq!(layout.key_for_led("l1").map(|k| k.id().as_str()), Some("k1"));
//! # Ok::<(), keyboard_layout_config::ConfigError>(())
//! ```

pub mod config;
pub mod load_layout;

pub use config::{
    load_config_file, parse_config, AppConfig, ConfigError, KeyEntry, KeyOptsEntry,
    KeyboardLayoutSection, LayoutConfig, LedEntry,
};
pub use load_layout::{load_from_config, load_layout_file};
