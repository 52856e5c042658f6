//! Opaque identifiers for keys and LEDs.
//!
//! Both are plain strings chosen by whoever describes the keyboard (`"k1"`,
//! `"esc"`, `"led_07"`, ...).  They are wrapped in separate newtypes so a key
//! id can never be handed to a function expecting an LED id.
//!
//! # Lookups by `&str` (for beginners)
//!
//! Each id implements [`Borrow<str>`], which lets a `HashMap<KeyId, _>` be
//! queried with a plain `&str`.  Callers can therefore write
//! `layout.led_for_key("k1")` without first allocating a `KeyId`.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Identifier of a key, unique within a layout's key list.
    KeyId
);

define_id!(
    /// Identifier of an LED, unique within a layout's LED list.
    LedId
);

// ── Tests ─────────────────────────────────────────────────────────────────────
