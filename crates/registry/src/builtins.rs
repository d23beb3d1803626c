//! Commands implemented by the client itself.
//!
//! Built-ins are listed after the game's commands in the registry, so a game
//! command with the same name shadows the built-in on lookup. Default keys of
//! built-ins win over game defaults when the keymap is reset.

use nhcurses_primitives::{Direction, KeyCode};

use crate::{CommandDescriptor, CommandFlags, DirStyle, UiCommand};

/// Name of the repeat count meta-command.
pub const REPEAT_COUNT: &str = "repeatcount";
/// Name of the command that suppresses "Bad command" for a key.
pub const NOTHING: &str = "(nothing)";
/// Name of the internal command returned when the server interrupts a read.
pub const SERVER_CANCEL: &str = "servercancel";
/// Built-in that opens the save menu.
pub const SAVE: &str = "save";
/// Built-in that opens the main menu.
pub const MAIN_MENU: &str = "mainmenu";

/// Static definition of a built-in command.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinDef {
	pub name: &'static str,
	pub desc: &'static str,
	pub default_key: Option<KeyCode>,
	pub alt_key: Option<KeyCode>,
	pub flags: CommandFlags,
	pub ui: UiCommand,
}

impl BuiltinDef {
	/// Builds an owned descriptor for the registry.
	pub fn to_descriptor(&self) -> CommandDescriptor {
		CommandDescriptor {
			name: self.name.to_string(),
			desc: self.desc.to_string(),
			default_key: self.default_key,
			alt_key: self.alt_key,
			flags: self.flags,
			ui: Some(self.ui),
		}
	}
}

const fn direction(name: &'static str, desc: &'static str, key: KeyCode, dir: Direction, style: DirStyle) -> BuiltinDef {
	BuiltinDef {
		name,
		desc,
		default_key: Some(key),
		alt_key: None,
		flags: CommandFlags::UI,
		ui: UiCommand::Direction { dir, style },
	}
}

const fn ui(name: &'static str, desc: &'static str, key: Option<KeyCode>, ui: UiCommand) -> BuiltinDef {
	BuiltinDef {
		name,
		desc,
		default_key: key,
		alt_key: None,
		flags: CommandFlags::UI,
		ui,
	}
}

/// Every built-in command, in menu order.
pub static BUILTIN_COMMANDS: &[BuiltinDef] = &[
	direction("east", "move, fight or interact to the east", KeyCode::char('l'), Direction::E, DirStyle::Move),
	direction("north", "move, fight or interact to the north", KeyCode::char('k'), Direction::N, DirStyle::Move),
	direction("north_east", "move, fight or interact to the northeast", KeyCode::char('u'), Direction::NE, DirStyle::Move),
	direction("north_west", "move, fight or interact to the northwest", KeyCode::char('y'), Direction::NW, DirStyle::Move),
	direction("south", "move, fight or interact to the south", KeyCode::char('j'), Direction::S, DirStyle::Move),
	direction("south_east", "move, fight or interact to the southeast", KeyCode::char('n'), Direction::SE, DirStyle::Move),
	direction("south_west", "move, fight or interact to the southwest", KeyCode::char('b'), Direction::SW, DirStyle::Move),
	direction("west", "move, fight or interact to the west", KeyCode::char('h'), Direction::W, DirStyle::Move),
	direction("up", "climb stairs or ladders", KeyCode::char('<'), Direction::Up, DirStyle::Move),
	direction("down", "go down stairs or ladders or jump into holes", KeyCode::char('>'), Direction::Down, DirStyle::Move),
	direction("run_east", "go east until you run into something", KeyCode::char('L'), Direction::E, DirStyle::Run),
	direction("run_north", "go north until you run into something", KeyCode::char('K'), Direction::N, DirStyle::Run),
	direction("run_north_east", "go northeast until you run into something", KeyCode::char('U'), Direction::NE, DirStyle::Run),
	direction("run_north_west", "go northwest until you run into something", KeyCode::char('Y'), Direction::NW, DirStyle::Run),
	direction("run_south", "go south until you run into something", KeyCode::char('J'), Direction::S, DirStyle::Run),
	direction("run_south_east", "go southeast until you run into something", KeyCode::char('N'), Direction::SE, DirStyle::Run),
	direction("run_south_west", "go southwest until you run into something", KeyCode::char('B'), Direction::SW, DirStyle::Run),
	direction("run_west", "go west until you run into something", KeyCode::char('H'), Direction::W, DirStyle::Run),
	direction("go_east", "run east until something interesting is seen", KeyCode::ctrl('l'), Direction::E, DirStyle::Go),
	direction("go_north", "run north until something interesting is seen", KeyCode::ctrl('k'), Direction::N, DirStyle::Go),
	direction("go_north_east", "run northeast until something interesting is seen", KeyCode::ctrl('u'), Direction::NE, DirStyle::Go),
	direction("go_north_west", "run northwest until something interesting is seen", KeyCode::ctrl('y'), Direction::NW, DirStyle::Go),
	direction("go_south", "run south until something interesting is seen", KeyCode::ctrl('j'), Direction::S, DirStyle::Go),
	direction("go_south_east", "run southeast until something interesting is seen", KeyCode::ctrl('n'), Direction::SE, DirStyle::Go),
	direction("go_south_west", "run southwest until something interesting is seen", KeyCode::ctrl('b'), Direction::SW, DirStyle::Go),
	direction("go_west", "run west until something interesting is seen", KeyCode::ctrl('h'), Direction::W, DirStyle::Go),
	ui("extcommand", "perform an extended command", Some(KeyCode::char('#')), UiCommand::ExtCmd),
	ui("help", "show the help menu", Some(KeyCode::char('?')), UiCommand::Help),
	BuiltinDef {
		name: MAIN_MENU,
		desc: "show the main menu",
		default_key: Some(KeyCode::char('!')),
		alt_key: Some(KeyCode::ctrl('c')),
		flags: CommandFlags::UI,
		ui: UiCommand::MainMenu,
	},
	ui("options", "show or change option settings", Some(KeyCode::char('O')), UiCommand::Options),
	ui("prevmsg", "list previously displayed messages", Some(KeyCode::ctrl('p')), UiCommand::PrevMsg),
	ui(SAVE, "save or quit the game", Some(KeyCode::char('S')), UiCommand::Detach),
	ui("stop", "suspend to shell", Some(KeyCode::ctrl('z')), UiCommand::Stop),
	ui("togglepickup", "toggle the autopickup option", Some(KeyCode::char('@')), UiCommand::TogglePickup),
	ui("whatdoes", "describe what a key does", Some(KeyCode::char('&')), UiCommand::WhatDoes),
	ui(REPEAT_COUNT, "enter a number of turns to perform a command", None, UiCommand::RepeatCount),
	ui(NOTHING, "bind keys to this command to suppress \"Bad command\"", None, UiCommand::Nothing),
	BuiltinDef {
		name: SERVER_CANCEL,
		desc: "(internal use only) the server already has a command",
		default_key: None,
		alt_key: None,
		flags: CommandFlags::UI.union(CommandFlags::INTERNAL),
		ui: UiCommand::ServerCancel,
	},
];
