use nhcurses_primitives::KeyCode;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::table::KEY_COUNT;

/// A command name from the keymap file that the registry does not know.
///
/// Typically a debug-mode command or one from a different game build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand {
	pub name: String,
	/// Last `EXT`/`NOEXT` state read for this name.
	pub ext: bool,
}

/// Bindings to unknown command names, kept so they survive a save.
///
/// Entries are stored by value and referenced by slot index, so growing the
/// store never invalidates key associations.
#[derive(Clone)]
pub struct UnknownBindings {
	commands: Vec<UnknownCommand>,
	by_key: Box<[Option<u32>; KEY_COUNT]>,
	by_name: FxHashMap<String, u32>,
}

impl Default for UnknownBindings {
	fn default() -> Self {
		Self {
			commands: Vec::new(),
			by_key: Box::new([None; KEY_COUNT]),
			by_name: FxHashMap::default(),
		}
	}
}

impl std::fmt::Debug for UnknownBindings {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("UnknownBindings")
			.field("commands", &self.commands)
			.field("bound", &self.iter().count())
			.finish()
	}
}

impl UnknownBindings {
	/// Drops every unknown command and binding.
	pub fn clear(&mut self) {
		self.commands.clear();
		self.by_key.fill(None);
		self.by_name.clear();
	}

	/// Returns the slot for `name`, adding a non-extended entry if needed.
	pub fn intern(&mut self, name: &str) -> usize {
		if let Some(&slot) = self.by_name.get(name) {
			return slot as usize;
		}
		let slot = self.commands.len() as u32;
		debug!(command = name, slot, "preserving unknown command");
		self.commands.push(UnknownCommand {
			name: name.to_string(),
			ext: false,
		});
		self.by_name.insert(name.to_string(), slot);
		slot as usize
	}

	/// Associates `key` with the unknown command in `slot`.
	pub fn bind(&mut self, key: KeyCode, slot: usize) {
		if let Some(idx) = key.index()
			&& slot < self.commands.len()
		{
			self.by_key[idx] = Some(slot as u32);
		}
	}

	/// Removes any unknown binding of `key`.
	pub fn unbind(&mut self, key: KeyCode) {
		if let Some(idx) = key.index() {
			self.by_key[idx] = None;
		}
	}

	/// Sets the extended-command state of the entry in `slot`.
	pub fn set_ext(&mut self, slot: usize, ext: bool) {
		if let Some(cmd) = self.commands.get_mut(slot) {
			cmd.ext = ext;
		}
	}

	/// Returns the unknown command bound to `key`.
	pub fn get(&self, key: KeyCode) -> Option<&UnknownCommand> {
		let slot = self.by_key[key.index()?]?;
		self.commands.get(slot as usize)
	}

	/// Looks up an unknown command by name.
	pub fn find(&self, name: &str) -> Option<&UnknownCommand> {
		self.by_name.get(name).and_then(|&slot| self.commands.get(slot as usize))
	}

	/// Every unknown command in the order first seen.
	pub fn commands(&self) -> &[UnknownCommand] {
		&self.commands
	}

	/// Bound keys in ascending key order.
	pub fn iter(&self) -> impl Iterator<Item = (KeyCode, &UnknownCommand)> + '_ {
		self.by_key.iter().enumerate().filter_map(|(raw, slot)| {
			let cmd = self.commands.get((*slot)? as usize)?;
			Some((KeyCode::new(raw as u32), cmd))
		})
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}
