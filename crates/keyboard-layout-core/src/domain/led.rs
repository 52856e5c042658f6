//! A single LED mounted on the keyboard.

use super::id::LedId;

/// One physical LED: an identifier and a position.
///
/// Coordinates use the same arbitrary unit as [`Key`](super::key::Key)
/// positions.  No validation is performed on either.
#[derive(Debug, Clone, PartialEq)]
pub struct Led {
    id: LedId,
    x: f64,
    y: f64,
}

impl Led {
    /// Creates an LED at `(x, y)`.
    pub fn new(id: impl Into<LedId>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    pub fn id(&self) -> &LedId {
        &self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}
