//! Keyboard layout domain entity.
//!
//! A [`Layout`] owns the full list of keys and LEDs for one keyboard and two
//! derived indexes that answer "which LED sits under this key?" and "which key
//! sits above this LED?".  The indexes are built once in [`Layout::new`]; the
//! layout is never mutated afterwards, so it can be shared freely between
//! threads (e.g. behind an `Arc`).

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, warn};

use super::id::{KeyId, LedId};
use super::key::Key;
use super::led::Led;

/// Errors that can occur when building a layout.
///
/// All of them describe inconsistent input.  They are reported at
/// construction time so a layout that exists is always consistent.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LayoutError {
    /// A key declares an LED that is not in the LED list.
    #[error("key {key_id} references unknown LED {led_id}")]
    MissingLedReference { key_id: KeyId, led_id: LedId },

    /// Two keys share the same id.
    #[error("duplicate key id: {0}")]
    DuplicateKeyId(KeyId),

    /// Two LEDs share the same id.
    #[error("duplicate LED id: {0}")]
    DuplicateLedId(LedId),

    /// Two keys declare the same LED, so the LED cannot map back to one key.
    #[error("LED {led_id} is claimed by both key {first_key} and key {second_key}")]
    SharedLed {
        led_id: LedId,
        first_key: KeyId,
        second_key: KeyId,
    },
}

/// Result of [`Layout::lookup_led`].
///
/// Unlike [`Layout::led_for_key`], this keeps "no such key" apart from "key
/// without an LED".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LedLookup<'a> {
    /// No key with the requested id exists.
    UnknownKey,
    /// The key exists but declares no LED.
    NoAssociation,
    /// The LED beneath the key.
    Found(&'a Led),
}

impl<'a> LedLookup<'a> {
    /// Collapses the lookup into an `Option`, losing the reason for absence.
    pub fn led(self) -> Option<&'a Led> {
        match self {
            LedLookup::Found(led) => Some(led),
            LedLookup::UnknownKey | LedLookup::NoAssociation => None,
        }
    }
}

/// The keys and LEDs of one keyboard plus the key↔LED indexes.
///
/// Indexes hold positions into the owned `keys` / `leds` vectors, so every
/// query hands out a borrow of the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    keys: Vec<Key>,
    leds: Vec<Led>,
    /// Every key id → position in `keys`.
    key_index: HashMap<KeyId, usize>,
    /// Every LED id → position in `leds`.
    led_index: HashMap<LedId, usize>,
    /// Key id → position in `leds`, only for keys that declare an LED.
    key_to_led: HashMap<KeyId, usize>,
    /// LED id → position in `keys`, only for LEDs some key declares.
    led_to_key: HashMap<LedId, usize>,
}

impl Layout {
    /// Builds a layout and its lookup indexes.
    ///
    /// The LED list is indexed first, then the keys are walked once in input
    /// order.  The first inconsistency found is returned.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::DuplicateLedId`] if two LEDs share an id.
    /// - [`LayoutError::DuplicateKeyId`] if two keys share an id.
    /// - [`LayoutError::MissingLedReference`] if a key names an LED that is not
    ///   in `leds`.
    /// - [`LayoutError::SharedLed`] if two keys name the same LED.
    pub fn new(keys: Vec<Key>, leds: Vec<Led>) -> Result<Self, LayoutError> {
        let mut led_index = HashMap::with_capacity(leds.len());
        for (pos, led) in leds.iter().enumerate() {
            if led_index.insert(led.id().clone(), pos).is_some() {
                return Err(rejected(LayoutError::DuplicateLedId(led.id().clone())));
            }
        }

        let mut key_index = HashMap::with_capacity(keys.len());
        let mut key_to_led = HashMap::new();
        let mut led_to_key: HashMap<LedId, usize> = HashMap::new();

        for (pos, key) in keys.iter().enumerate() {
            if key_index.insert(key.id().clone(), pos).is_some() {
                return Err(rejected(LayoutError::DuplicateKeyId(key.id().clone())));
            }

            let Some(led_id) = key.led() else {
                continue;
            };
            let Some(&led_pos) = led_index.get(led_id) else {
                return Err(rejected(LayoutError::MissingLedReference {
                    key_id: key.id().clone(),
                    led_id: led_id.clone(),
                }));
            };
            if let Some(&owner) = led_to_key.get(led_id) {
                return Err(rejected(LayoutError::SharedLed {
                    led_id: led_id.clone(),
                    first_key: keys[owner].id().clone(),
                    second_key: key.id().clone(),
                }));
            }

            key_to_led.insert(key.id().clone(), led_pos);
            led_to_key.insert(led_id.clone(), pos);
        }

        debug!(
            keys = keys.len(),
            leds = leds.len(),
            associations = key_to_led.len(),
            "keyboard layout built"
        );

        Ok(Self {
            keys,
            leds,
            key_index,
            led_index,
            key_to_led,
            led_to_key,
        })
    }

    /// Builds a layout that has keys but no LEDs.
    ///
    /// # Errors
    ///
    /// Same as [`Layout::new`]; any key declaring an LED fails with
    /// [`LayoutError::MissingLedReference`].
    pub fn from_keys(keys: Vec<Key>) -> Result<Self, LayoutError> {
        Self::new(keys, Vec::new())
    }

    /// All keys, in the order they were supplied.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// All LEDs, in the order they were supplied.
    pub fn leds(&self) -> &[Led] {
        &self.leds
    }

    /// Returns the LED beneath `key_id`.
    ///
    /// `None` both when the key is unknown and when it has no LED; use
    /// [`Layout::lookup_led`] to tell the two apart.
    pub fn led_for_key(&self, key_id: &str) -> Option<&Led> {
        self.key_to_led.get(key_id).map(|&pos| &self.leds[pos])
    }

    /// Returns the key above `led_id`.
    ///
    /// `None` both when the LED is unknown and when no key declares it.
    pub fn key_for_led(&self, led_id: &str) -> Option<&Key> {
        self.led_to_key.get(led_id).map(|&pos| &self.keys[pos])
    }

    /// Like [`Layout::led_for_key`] but reports why no LED was found.
    pub fn lookup_led(&self, key_id: &str) -> LedLookup<'_> {
        if let Some(led) = self.led_for_key(key_id) {
            LedLookup::Found(led)
        } else if self.key_index.contains_key(key_id) {
            LedLookup::NoAssociation
        } else {
            LedLookup::UnknownKey
        }
    }

    /// Returns the key with the given id, with or without an LED.
    pub fn key(&self, key_id: &str) -> Option<&Key> {
        self.key_index.get(key_id).map(|&pos| &self.keys[pos])
    }

    /// Returns the LED with the given id, whether or not a key declares it.
    pub fn led(&self, led_id: &str) -> Option<&Led> {
        self.led_index.get(led_id).map(|&pos| &self.leds[pos])
    }

    /// Iterates over every key that has an LED, paired with that LED, in key
    /// order.
    pub fn associations(&self) -> impl Iterator<Item = (&Key, &Led)> + '_ {
        self.keys.iter().filter_map(move |key| {
            self.key_to_led
                .get(key.id().as_str())
                .map(|&pos| (key, &self.leds[pos]))
        })
    }
}

fn rejected(err: LayoutError) -> LayoutError {
    warn!(error = %err, "rejected keyboard layout");
    err
}

// ── Tests ─────────────────────────────────────────────────────────────────────
