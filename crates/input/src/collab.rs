//! Interfaces to the rest of the client.
//!
//! The resolution loop and the binding editor never touch the terminal or the
//! game directly. They block on these traits instead, which a frontend
//! implements once per backend.

use nhcurses_primitives::KeyCode;

use crate::menu::MenuView;
use crate::types::{FollowMode, NextCommand};

/// Why a key is being read. Frontends may use it to pick a prompt or cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
	/// Waiting for the next command.
	GetCommand,
	/// Entering a repeat count.
	Count,
	/// Waiting for the direction of a movement command.
	MoveDirection,
	/// Asking for a key to bind or explain.
	Keybinding,
	/// A notification that any key dismisses.
	Notification,
}

/// Source of key presses.
pub trait KeySource {
	/// Blocks until a key is available.
	///
	/// With `allow_mouse` the source may return sidebar and map click codes.
	fn read_key(&mut self, blocking: bool, allow_mouse: bool, ctx: KeyContext) -> KeyCode;
}

/// Menus and message windows.
pub trait MenuBackend {
	/// Shows a menu and returns the index of the selected row, or `None` if
	/// the menu was cancelled or nothing can be picked.
	fn display_menu(&mut self, menu: &MenuView) -> Option<usize>;

	/// Shows `text` in a message window and returns the key that closed it.
	fn message(&mut self, text: &str, ctx: KeyContext) -> KeyCode;

	/// Adds `text` to the message line without waiting.
	fn print_message(&mut self, text: &str);

	/// Asks a question answered by one of `choices`; returns the answer.
	fn yes_no(&mut self, prompt: &str, choices: &str, default: char) -> char;

	/// Reads the name of an extended command.
	///
	/// `None` or an empty string means the prompt was cancelled.
	fn read_extended_command(&mut self, names: &[&str], descs: &[&str]) -> Option<String>;
}

/// Game-side effects of commands handled by the client.
pub trait UiHooks {
	/// Opens the options dialog.
	fn display_options(&mut self);

	/// Shows the list of options and their values.
	fn print_options(&mut self);

	fn show_previous_messages(&mut self);

	/// Suspends the process. Returns false if that is not possible here.
	fn suspend(&mut self) -> bool;

	/// Current autopickup setting, or `None` if the game has no such option.
	fn autopickup(&self) -> Option<bool>;

	fn set_autopickup(&mut self, on: bool);

	fn follow_mode(&self) -> FollowMode;

	fn set_follow_mode(&mut self, mode: FollowMode);

	/// Rebuilds the screen.
	fn redraw(&mut self);

	/// Runs the item menu for an inventory sidebar click.
	///
	/// May return a command that should be executed straight away.
	fn sidebar_item_action(&mut self, slot: u8) -> Option<NextCommand>;
}

/// Everything a session needs from its frontend.
pub trait Frontend: KeySource + MenuBackend + UiHooks {}

impl<T: KeySource + MenuBackend + UiHooks + ?Sized> Frontend for T {}
