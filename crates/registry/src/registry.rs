use tracing::{debug, warn};

use crate::builtins::BUILTIN_COMMANDS;
use crate::{CommandDescriptor, MAX_COMMAND_NAME, RegistryError};

/// Supplies the game's command list.
///
/// Implemented by the game-logic side of the client; consulted once when the
/// registry is loaded and again when key bindings are reset to defaults.
pub trait CommandSource {
	/// Returns the current game commands.
	fn commands(&self) -> Vec<CommandDescriptor>;
}

impl CommandSource for [CommandDescriptor] {
	fn commands(&self) -> Vec<CommandDescriptor> {
		self.to_vec()
	}
}

impl CommandSource for Vec<CommandDescriptor> {
	fn commands(&self) -> Vec<CommandDescriptor> {
		self.clone()
	}
}

/// Index of a command in a [`CommandRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(u32);

impl CommandId {
	/// Returns the registry position of this command.
	pub const fn index(self) -> usize {
		self.0 as usize
	}
}

/// Owned copies of the game's commands followed by the built-in commands.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
	commands: Vec<CommandDescriptor>,
	game_count: usize,
}

impl Default for CommandRegistry {
	fn default() -> Self {
		Self::with_builtins()
	}
}

impl CommandRegistry {
	/// Creates a registry holding only the built-in commands.
	pub fn with_builtins() -> Self {
		Self {
			commands: BUILTIN_COMMANDS.iter().map(|def| def.to_descriptor()).collect(),
			game_count: 0,
		}
	}

	/// Creates a registry from the game's command list.
	pub fn from_source(source: &(impl CommandSource + ?Sized)) -> Self {
		let mut registry = Self::with_builtins();
		registry.load(source);
		registry
	}

	/// Replaces the game commands with a fresh copy from `source`.
	///
	/// Built-ins keep their current flags. Ids handed out before the call are
	/// invalidated.
	pub fn load(&mut self, source: &(impl CommandSource + ?Sized)) {
		let mut game = source.commands();
		for cmd in &mut game {
			if cmd.name.len() > MAX_COMMAND_NAME {
				warn!(command = %cmd.name, "command name too long, truncating");
				truncate_name(&mut cmd.name);
			}
			cmd.ui = None;
		}
		let builtins = self.commands.split_off(self.game_count);
		self.game_count = game.len();
		self.commands = game;
		self.commands.extend(builtins);
		debug!(game = self.game_count, total = self.commands.len(), "command registry loaded");
	}

	/// Drops the game commands, keeping the built-ins.
	pub fn unload(&mut self) {
		self.commands.drain(..self.game_count);
		self.game_count = 0;
	}

	/// Finds a command by exact name, game commands first.
	pub fn lookup(&self, name: &str) -> Option<CommandId> {
		self.commands.iter().position(|cmd| cmd.name == name).map(|idx| CommandId(idx as u32))
	}

	/// Finds a command by name and returns its descriptor.
	pub fn find(&self, name: &str) -> Option<&CommandDescriptor> {
		self.lookup(name).map(|id| self.get(id))
	}

	/// Returns the descriptor for `id`.
	///
	/// # Panics
	///
	/// Panics if `id` does not belong to this registry.
	pub fn get(&self, id: CommandId) -> &CommandDescriptor {
		&self.commands[id.index()]
	}

	/// Returns the descriptor for `id` mutably.
	pub fn get_mut(&mut self, id: CommandId) -> &mut CommandDescriptor {
		&mut self.commands[id.index()]
	}

	/// Returns true if `id` names a built-in command.
	pub fn is_builtin(&self, id: CommandId) -> bool {
		id.index() >= self.game_count
	}

	/// Number of commands, game and built-in.
	pub fn len(&self) -> usize {
		self.commands.len()
	}

	/// Returns true if the registry has no commands at all.
	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Ids of the game commands, in game order.
	pub fn game_ids(&self) -> impl Iterator<Item = CommandId> + use<> {
		(0..self.game_count).map(|idx| CommandId(idx as u32))
	}

	/// Ids of the built-in commands, in table order.
	pub fn builtin_ids(&self) -> impl Iterator<Item = CommandId> + use<> {
		(self.game_count..self.commands.len()).map(|idx| CommandId(idx as u32))
	}

	/// Every command with its id, game commands first.
	pub fn iter(&self) -> impl Iterator<Item = (CommandId, &CommandDescriptor)> {
		self.commands.iter().enumerate().map(|(idx, cmd)| (CommandId(idx as u32), cmd))
	}

	/// Restores flags of every command named by `source` to the source's values.
	///
	/// Used when key bindings are reset, undoing extended-command toggles.
	pub fn restore_flags(&mut self, source: &(impl CommandSource + ?Sized)) {
		for fresh in source.commands() {
			if let Some(id) = self.lookup(&fresh.name) {
				self.get_mut(id).flags = fresh.flags;
			}
		}
	}
}

fn truncate_name(name: &mut String) {
	let mut end = MAX_COMMAND_NAME;
	while !name.is_char_boundary(end) {
		end -= 1;
	}
	name.truncate(end);
}

/// Checks a game command list for names the keymap file cannot represent.
pub fn validate_commands(commands: &[CommandDescriptor]) -> Result<(), RegistryError> {
	let mut seen = std::collections::HashSet::new();
	for cmd in commands {
		if cmd.name.is_empty() || cmd.name.chars().any(char::is_whitespace) || cmd.name.starts_with('-') {
			return Err(RegistryError::InvalidName(cmd.name.clone()));
		}
		if cmd.name.len() > MAX_COMMAND_NAME {
			return Err(RegistryError::NameTooLong(cmd.name.clone()));
		}
		if !seen.insert(cmd.name.as_str()) {
			return Err(RegistryError::DuplicateCommand(cmd.name.clone()));
		}
	}
	Ok(())
}
