//! Command input for the curses client.
//!
//! * [`Session`]: registry, keymap and pending input of one UI session
//! * [`Session::get_command`]: resolves key presses into one [`Turn`]
//! * [`Session::show_keymap_menu`]: the key binding editor
//! * [`Frontend`]: what a terminal backend must provide
//!
//! Everything runs on the caller's thread and blocks in the [`Frontend`]
//! methods.

pub mod collab;
mod count;
mod editor;
mod internal;
pub mod menu;
mod resolve;
mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
mod types;

pub use collab::{Frontend, KeyContext, KeySource, MenuBackend, UiHooks};
pub use count::{MAX_REPEAT_COUNT, RepeatCount};
pub use menu::{Menu, MenuRow, MenuView, PickMode, RowKind};
pub use session::{Session, SessionOptions};
pub use types::{CommandArg, ExitRequest, FollowMode, NextCommand, ResolvedCommand, Turn};
