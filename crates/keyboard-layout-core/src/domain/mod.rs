//! Domain entities for keyboard layouts.
//!
//! This module contains pure data and lookup logic with no infrastructure
//! dependencies.
//!
//! # What lives here? (for beginners)
//!
//! The innermost layer of the workspace is the **domain**.  Domain code:
//!
//! - Describes the keyboard itself: where each key sits, how large it is and
//!   which LED is mounted beneath it.
//! - Never reads files, environment variables or global settings.  Turning a
//!   configuration file into keys and LEDs is the job of the
//!   `keyboard-layout-config` crate.
//! - Can be compiled and tested on any platform without any external setup.

/// Key and LED identifiers.
pub mod id;
/// A single physical key.
pub mod key;
/// The layout aggregate and its lookup indexes.
///
/// See [`layout::Layout`] for the main type.
pub mod layout;
/// A single physical LED.
pub mod led;
