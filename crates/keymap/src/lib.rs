//! Key binding table and its on-disk form.
//!
//! * [`KeymapTable`]: dense map from key code to [`CommandId`]
//! * [`UnknownBindings`]: bindings to names the registry does not know
//! * [`Keymap`]: both of the above, plus load and save
//! * [`KeymapLocation`]: which file a session reads and writes

mod error;
mod location;
mod persist;
mod table;
mod unknown;

#[cfg(test)]
mod tests;

pub use error::KeymapError;
pub use location::{KEYMAP_FILE, KeymapLocation};
use nhcurses_primitives::{Direction, KeyCode};
use nhcurses_registry::{CommandId, CommandRegistry};
pub use persist::LoadReport;
pub use table::{KEY_COUNT, KeymapTable};
pub use unknown::{UnknownBindings, UnknownCommand};

/// Names of game commands that act on the player's own square.
const SELF_DIRECTION_COMMANDS: [&str; 2] = ["wait", "search"];

/// The active key bindings of a session.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
	table: KeymapTable,
	unknown: UnknownBindings,
}

impl Keymap {
	/// Creates a keymap with no bindings at all.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a keymap holding the default bindings for `registry`.
	pub fn with_defaults(registry: &CommandRegistry) -> Self {
		let mut keymap = Self::new();
		keymap.reset_to_defaults(registry);
		keymap
	}

	pub fn table(&self) -> &KeymapTable {
		&self.table
	}

	pub fn unknown(&self) -> &UnknownBindings {
		&self.unknown
	}

	/// Returns the command bound to `key`.
	pub fn resolve(&self, key: KeyCode) -> Option<CommandId> {
		self.table.resolve(key)
	}

	/// Binds `key` to a known command, replacing whatever it was bound to.
	pub fn bind(&mut self, key: KeyCode, id: CommandId) -> Option<CommandId> {
		self.unknown.unbind(key);
		self.table.bind(key, id)
	}

	/// Binds `key` to a command name the registry does not know.
	pub fn bind_unknown(&mut self, key: KeyCode, name: &str) {
		let slot = self.unknown.intern(name);
		self.table.unbind(key);
		self.unknown.bind(key, slot);
	}

	/// Removes every binding of `key`.
	pub fn unbind(&mut self, key: KeyCode) {
		self.table.unbind(key);
		self.unknown.unbind(key);
	}

	/// Keys bound to `id`, ascending.
	pub fn keys_for(&self, id: CommandId) -> Vec<KeyCode> {
		self.table.keys_for(id)
	}

	/// Restores the default bindings. Unknown bindings are kept.
	pub fn reset_to_defaults(&mut self, registry: &CommandRegistry) {
		self.table.reset_to_defaults(registry);
	}

	/// Interprets `key` as a direction.
	///
	/// Keys bound to plain direction commands give their direction; keys bound
	/// to `wait` or `search` mean the player's own square.
	pub fn key_to_dir(&self, key: KeyCode, registry: &CommandRegistry) -> Option<Direction> {
		if key.raw() == 0 {
			return None;
		}
		let cmd = registry.get(self.resolve(key)?);
		if SELF_DIRECTION_COMMANDS.contains(&cmd.name.as_str()) {
			return Some(Direction::Here);
		}
		cmd.plain_direction()
	}
}
