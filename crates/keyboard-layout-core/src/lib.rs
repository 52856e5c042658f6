//! # keyboard-layout-core
//!
//! Data model for a physical keyboard: where each key sits, how big it is,
//! where each LED sits, and which LED is mounted beneath which key.
//!
//! This crate is used by firmware and host code that needs to translate key
//! identifiers to LED identifiers (for per-key backlighting, say) and back.
//! It has no dependencies on OS APIs, hardware, or configuration files.
//!
//! # Overview (for beginners)
//!
//! - **[`Key`]** – one physical key.  Position `(x, y)`, relative `width` and
//!   `height` (both default to 1), and optionally the id of an LED.
//! - **[`Led`]** – one physical LED.  Just an id and a position.
//! - **[`Layout`]** – every key and LED of one keyboard.  Building a layout
//!   checks that each key's LED really exists and indexes the key↔LED pairs
//!   so both directions can be looked up in constant time.
//!
//! ```rust
//! use keyboard_layout_core::{Key, KeyOptions, Layout, Led};
//!
//! let layout = Layout::new(
//!     vec![
//!         Key::new("k1", 0.0, 0.0, KeyOptions::default().with_led("l1")),
//!         Key::new("k2", 1.0, 0.0, KeyOptions::default()),
//!     ],
//!     vec![Led::new("l1", 0.0, 0.0)],
//! )
//! .expect("every referenced LED exists");
//!
//! assert_eq!(layout.led_for_key("k1").map(|l| l.id().as_str()), Some("l1"));
//! assert_eq!(layout.key_for_led("l1").map(|k| k.id().as_str()), Some("k1"));
//! assert!(layout.led_for_key("k2").is_none());
//! ```

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `keyboard_layout_core::Layout` instead of `keyboard_layout_core::domain::layout::Layout`.
pub use domain::id::{KeyId, LedId};
pub use domain::key::{Key, KeyOptions, DEFAULT_KEY_SIZE};
pub use domain::layout::{Layout, LayoutError, LedLookup};
pub use domain::led::Led;
