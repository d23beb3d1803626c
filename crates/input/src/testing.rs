//! Scripted collaborators for driving a [`Session`](crate::Session) without a
//! terminal.
//!
//! [`TestUi`] combines a key script, menu answers and recorded side effects.
//! When the key script runs out it returns [`KeyCode::SIGNAL`], which
//! resolves to the server-cancel command and ends any loop. Notifications are
//! dismissed without consuming a scripted key.

use std::collections::VecDeque;
use std::path::Path;

use nhcurses_keymap::KeymapLocation;
use nhcurses_primitives::KeyCode;
use nhcurses_registry::{CommandDescriptor, CommandFlags};

use crate::collab::{KeyContext, KeySource, MenuBackend, UiHooks};
use crate::menu::MenuView;
use crate::session::{Session, SessionOptions};
use crate::types::{FollowMode, NextCommand};

/// A small game command list covering every flag the client reacts to.
pub fn sample_commands() -> Vec<CommandDescriptor> {
	let dir_move = CommandFlags::ARG_DIR | CommandFlags::MOVE;
	vec![
		CommandDescriptor::new("move", "move one step", dir_move),
		CommandDescriptor::new("run", "run until something is in the way", dir_move),
		CommandDescriptor::new("go", "rush until something interesting is seen", dir_move).with_default_key(KeyCode::char('G')),
		CommandDescriptor::new("fight", "fight a monster", dir_move).with_default_key(KeyCode::char('F')),
		CommandDescriptor::new("kick", "kick something", CommandFlags::ARG_DIR).with_default_key(KeyCode::ctrl('d')),
		CommandDescriptor::new("interrupt", "stop the current action", CommandFlags::NOTIME),
		CommandDescriptor::new("redraw", "redraw the screen", CommandFlags::NOTIME).with_default_key(KeyCode::ctrl('r')),
		CommandDescriptor::new("repeat", "repeat the previous command", CommandFlags::empty()).with_default_key(KeyCode::ctrl('a')),
		CommandDescriptor::new("inventory", "show your inventory", CommandFlags::NOTIME).with_default_key(KeyCode::char('i')),
		CommandDescriptor::new("search", "search for hidden things", CommandFlags::ARG_LIMIT).with_default_key(KeyCode::char('s')),
		CommandDescriptor::new("wait", "rest one move", CommandFlags::ARG_LIMIT).with_default_key(KeyCode::char('.')),
		CommandDescriptor::new("pray", "pray to your god", CommandFlags::EXT).with_default_key(KeyCode::meta('p')),
		CommandDescriptor::new("offer", "offer a sacrifice", CommandFlags::EXT).with_default_key(KeyCode::meta('o')),
		CommandDescriptor::new("wizwish", "wish for an object", CommandFlags::EXT | CommandFlags::DEBUG).with_default_key(KeyCode::ctrl('w')),
		CommandDescriptor::new("overview", "show the dungeon overview", CommandFlags::EXT | CommandFlags::MAINMENU | CommandFlags::NOTIME)
			.with_default_key(KeyCode::ctrl('o')),
		CommandDescriptor::new("attributes", "show your attributes", CommandFlags::MAINMENU).with_default_key(KeyCode::ctrl('x')),
		CommandDescriptor::new("discoveries", "show discovered objects", CommandFlags::HELP | CommandFlags::NOTIME).with_default_key(KeyCode::char('\\')),
	]
}

/// Starts a session over [`sample_commands`] with its keymap file in `dir`.
pub fn sample_session(dir: &Path) -> Session {
	Session::start(sample_commands(), KeymapLocation::local(dir), SessionOptions::default())
}

/// Keys returned in order, with the context each was read in.
#[derive(Debug, Default)]
pub struct ScriptedKeys {
	keys: VecDeque<KeyCode>,
	/// Contexts of every read, including reads after the script ran out.
	pub contexts: Vec<KeyContext>,
}

impl ScriptedKeys {
	pub fn push(&mut self, key: KeyCode) {
		self.keys.push_back(key);
	}

	pub fn push_str(&mut self, keys: &str) {
		self.keys.extend(keys.chars().map(KeyCode::char));
	}

	pub fn remaining(&self) -> usize {
		self.keys.len()
	}

	fn next(&mut self, ctx: KeyContext) -> KeyCode {
		self.contexts.push(ctx);
		self.keys.pop_front().unwrap_or(KeyCode::SIGNAL)
	}
}

/// How a scripted menu is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAnswer {
	/// Pick the first item whose text contains this string.
	Pick(String),
	Cancel,
}

impl MenuAnswer {
	pub fn pick(text: impl Into<String>) -> Self {
		MenuAnswer::Pick(text.into())
	}
}

/// Answers for menus and prompts, plus a record of the menus shown.
#[derive(Debug, Default)]
pub struct ScriptedMenus {
	answers: VecDeque<MenuAnswer>,
	yes_no: VecDeque<char>,
	extended: VecDeque<Option<String>>,
	/// Every menu displayed, in order.
	pub shown: Vec<MenuView>,
}

impl ScriptedMenus {
	pub fn answer(&mut self, answer: MenuAnswer) {
		self.answers.push_back(answer);
	}

	pub fn answer_yes_no(&mut self, answer: char) {
		self.yes_no.push_back(answer);
	}

	pub fn answer_extended(&mut self, answer: Option<&str>) {
		self.extended.push_back(answer.map(str::to_string));
	}

	/// Titles of the menus shown so far.
	pub fn titles(&self) -> Vec<&str> {
		self.shown.iter().map(|menu| menu.title.as_str()).collect()
	}

	fn display(&mut self, menu: &MenuView) -> Option<usize> {
		self.shown.push(menu.clone());
		match self.answers.pop_front()? {
			MenuAnswer::Cancel => None,
			MenuAnswer::Pick(text) => menu.items().find(|(_, row)| row.text.contains(&text)).map(|(idx, _)| idx),
		}
	}
}

/// Side effects requested through [`UiHooks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
	DisplayOptions,
	PrintOptions,
	PreviousMessages,
	Suspend,
	SetAutopickup(bool),
	SetFollowMode(FollowMode),
	Redraw,
	SidebarItem(u8),
}

#[derive(Debug)]
pub struct RecordingHooks {
	pub events: Vec<HookEvent>,
	pub follow_mode: FollowMode,
	/// `None` simulates a game without the option.
	pub autopickup: Option<bool>,
	pub can_suspend: bool,
	/// Command produced by the next sidebar click.
	pub sidebar_command: Option<NextCommand>,
}

impl Default for RecordingHooks {
	fn default() -> Self {
		Self {
			events: Vec::new(),
			follow_mode: FollowMode::Play,
			autopickup: Some(false),
			can_suspend: true,
			sidebar_command: None,
		}
	}
}

/// A complete scripted frontend.
#[derive(Debug, Default)]
pub struct TestUi {
	pub keys: ScriptedKeys,
	pub menus: ScriptedMenus,
	pub hooks: RecordingHooks,
	/// Message windows shown and messages printed, in order.
	pub messages: Vec<String>,
}

impl TestUi {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a UI whose key script is the characters of `keys`.
	pub fn with_keys(keys: &str) -> Self {
		let mut ui = Self::new();
		ui.keys.push_str(keys);
		ui
	}
}

impl KeySource for TestUi {
	fn read_key(&mut self, _blocking: bool, _allow_mouse: bool, ctx: KeyContext) -> KeyCode {
		self.keys.next(ctx)
	}
}

impl MenuBackend for TestUi {
	fn display_menu(&mut self, menu: &MenuView) -> Option<usize> {
		self.menus.display(menu)
	}

	fn message(&mut self, text: &str, ctx: KeyContext) -> KeyCode {
		self.messages.push(text.to_string());
		match ctx {
			KeyContext::Notification => KeyCode::SPACE,
			_ => self.keys.next(ctx),
		}
	}

	fn print_message(&mut self, text: &str) {
		self.messages.push(text.to_string());
	}

	fn yes_no(&mut self, prompt: &str, _choices: &str, default: char) -> char {
		self.messages.push(prompt.to_string());
		self.menus.yes_no.pop_front().unwrap_or(default)
	}

	fn read_extended_command(&mut self, _names: &[&str], _descs: &[&str]) -> Option<String> {
		self.menus.extended.pop_front().flatten()
	}
}

impl UiHooks for TestUi {
	fn display_options(&mut self) {
		self.hooks.events.push(HookEvent::DisplayOptions);
	}

	fn print_options(&mut self) {
		self.hooks.events.push(HookEvent::PrintOptions);
	}

	fn show_previous_messages(&mut self) {
		self.hooks.events.push(HookEvent::PreviousMessages);
	}

	fn suspend(&mut self) -> bool {
		self.hooks.events.push(HookEvent::Suspend);
		self.hooks.can_suspend
	}

	fn autopickup(&self) -> Option<bool> {
		self.hooks.autopickup
	}

	fn set_autopickup(&mut self, on: bool) {
		self.hooks.autopickup = Some(on);
		self.hooks.events.push(HookEvent::SetAutopickup(on));
	}

	fn follow_mode(&self) -> FollowMode {
		self.hooks.follow_mode
	}

	fn set_follow_mode(&mut self, mode: FollowMode) {
		self.hooks.follow_mode = mode;
		self.hooks.events.push(HookEvent::SetFollowMode(mode));
	}

	fn redraw(&mut self) {
		self.hooks.events.push(HookEvent::Redraw);
	}

	fn sidebar_item_action(&mut self, slot: u8) -> Option<NextCommand> {
		self.hooks.events.push(HookEvent::SidebarItem(slot));
		self.hooks.sidebar_command.take()
	}
}
