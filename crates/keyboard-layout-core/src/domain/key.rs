//! A single physical key and its construction options.

use super::id::{KeyId, LedId};

/// Width and height a key gets when no size is given.
pub const DEFAULT_KEY_SIZE: f64 = 1.0;

/// Optional attributes accepted by [`Key::new`].
///
/// Every field is optional.  Missing sizes fall back to [`DEFAULT_KEY_SIZE`]
/// and a missing `led` means the key has no LED beneath it.
///
/// ```rust
/// use keyboard_layout_core::{Key, KeyOptions};
///
/// let space = Key::new("space", 3.75, 4.0, KeyOptions::default().with_width(6.25));
/// assert_eq!(space.width(), 6.25);
/// assert_eq!(space.height(), 1.0);
/// assert!(space.led().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyOptions {
    /// Relative width; `2.0` is twice as wide as a standard key.
    pub width: Option<f64>,
    /// Relative height.
    pub height: Option<f64>,
    /// LED mounted beneath the key, if any.
    pub led: Option<LedId>,
}

impl KeyOptions {
    /// Sets the key width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the key height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Associates the key with an LED.
    #[must_use]
    pub fn with_led(mut self, led: impl Into<LedId>) -> Self {
        self.led = Some(led.into());
        self
    }
}

/// One physical key: position, size and the optional LED beneath it.
///
/// Keys are immutable once built.  Whether `led` actually names an LED is only
/// checked when the key is placed into a [`Layout`](super::layout::Layout).
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    id: KeyId,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    led: Option<LedId>,
}

impl Key {
    /// Creates a key at `(x, y)`.
    ///
    /// No validation is done on the id or on numeric ranges.
    pub fn new(id: impl Into<KeyId>, x: f64, y: f64, options: KeyOptions) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width: options.width.unwrap_or(DEFAULT_KEY_SIZE),
            height: options.height.unwrap_or(DEFAULT_KEY_SIZE),
            led: options.led,
        }
    }

    pub fn id(&self) -> &KeyId {
        &self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The LED declared for this key, if any.
    pub fn led(&self) -> Option<&LedId> {
        self.led.as_ref()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
