use nhcurses_primitives::{Direction, KeyCode};

use crate::CommandFlags;

/// Longest command name accepted from the game, in bytes.
pub const MAX_COMMAND_NAME: usize = 31;

/// A game or UI command with display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
	/// Unique, case-sensitive name.
	pub name: String,
	/// One-line description shown in menus.
	pub desc: String,
	/// Key bound by default.
	pub default_key: Option<KeyCode>,
	/// Key bound by default when it is not already taken.
	pub alt_key: Option<KeyCode>,
	pub flags: CommandFlags,
	/// Client-side behavior for built-in commands.
	pub ui: Option<UiCommand>,
}

impl CommandDescriptor {
	/// Creates a game command with no default keys.
	pub fn new(name: impl Into<String>, desc: impl Into<String>, flags: CommandFlags) -> Self {
		Self {
			name: name.into(),
			desc: desc.into(),
			default_key: None,
			alt_key: None,
			flags,
			ui: None,
		}
	}

	/// Sets the default key.
	pub fn with_default_key(mut self, key: KeyCode) -> Self {
		self.default_key = Some(key);
		self
	}

	/// Sets the alternate key.
	pub fn with_alt_key(mut self, key: KeyCode) -> Self {
		self.alt_key = Some(key);
		self
	}

	/// Returns true for commands handled on the client.
	pub fn is_ui(&self) -> bool {
		self.flags.contains(CommandFlags::UI)
	}

	/// Returns true if the extended command prompt offers this command.
	pub fn is_extended(&self) -> bool {
		self.flags.contains(CommandFlags::EXT)
	}

	/// Returns the plain-direction argument of a directional built-in.
	///
	/// Only plain (unshifted, no ctrl) direction commands qualify; this is what
	/// a direction prompt accepts.
	pub fn plain_direction(&self) -> Option<Direction> {
		match self.ui {
			Some(UiCommand::Direction { dir, style: DirStyle::Move }) => Some(dir),
			_ => None,
		}
	}
}

/// How a directional key moves the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirStyle {
	/// Plain key: move, fight or interact one step.
	Move,
	/// Shifted key: run until something is in the way.
	Run,
	/// Control key: run until something interesting is seen.
	Go,
}

impl DirStyle {
	/// Name of the game command a directional key is rewritten into.
	pub const fn command_name(self) -> &'static str {
		match self {
			DirStyle::Move => "move",
			DirStyle::Run => "run",
			DirStyle::Go => "go",
		}
	}
}

/// Client-side behavior of a built-in command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiCommand {
	/// Rewritten into `move`, `run` or `go` with a direction argument.
	Direction { dir: Direction, style: DirStyle },
	Options,
	ExtCmd,
	Help,
	MainMenu,
	/// Save or quit the game.
	Detach,
	/// Suspend the process to the shell.
	Stop,
	PrevMsg,
	WhatDoes,
	TogglePickup,
	/// Starts repeat count entry.
	RepeatCount,
	/// Silently does nothing.
	Nothing,
	/// The server already has a command.
	ServerCancel,
}
