//! Basic input types shared by the keymap crates.

/// Compass and vertical directions.
pub mod direction;
/// Key codes, their classification and display names.
pub mod key;

pub use direction::Direction;
pub use key::{KEY_ALT, KEY_MAX, KeyCode, KeyKind};
