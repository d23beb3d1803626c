use nhcurses_primitives::{KEY_ALT, KEY_MAX, KeyCode};
use nhcurses_registry::builtins::{NOTHING, REPEAT_COUNT};
use nhcurses_registry::{CommandId, CommandRegistry};

/// Number of slots in a key table.
pub const KEY_COUNT: usize = KEY_MAX as usize + 1;

/// Keypad and cursor keys bound before any command defaults.
const KEYPAD_DEFAULTS: &[(KeyCode, &str)] = &[
	(KeyCode::UP, "north"),
	(KeyCode::DOWN, "south"),
	(KeyCode::LEFT, "west"),
	(KeyCode::RIGHT, "east"),
	(KeyCode::A2, "north"),
	(KeyCode::C2, "south"),
	(KeyCode::B1, "west"),
	(KeyCode::B3, "east"),
	(KeyCode::A1, "north_west"),
	(KeyCode::A3, "north_east"),
	(KeyCode::C1, "south_west"),
	(KeyCode::C3, "south_east"),
	(KeyCode::B2, "go"),
	(KeyCode::D1, "inventory"),
	(KeyCode::HOME, "north_west"),
	(KeyCode::PPAGE, "north_east"),
	(KeyCode::END, "south_west"),
	(KeyCode::NPAGE, "south_east"),
	(KeyCode::RETURN, NOTHING),
	(KeyCode::SPACE, NOTHING),
];

/// Dense map from every bindable key to at most one command.
///
/// The table records associations only; descriptors live in the
/// [`CommandRegistry`].
#[derive(Clone, PartialEq, Eq)]
pub struct KeymapTable {
	slots: Box<[Option<CommandId>; KEY_COUNT]>,
}

impl Default for KeymapTable {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for KeymapTable {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl KeymapTable {
	/// Creates a table with every key unbound.
	pub fn new() -> Self {
		Self {
			slots: Box::new([None; KEY_COUNT]),
		}
	}

	/// Binds `key` to `id`, evicting any previous binding.
	///
	/// Returns the evicted command. Keys above [`KEY_MAX`] are ignored.
	pub fn bind(&mut self, key: KeyCode, id: CommandId) -> Option<CommandId> {
		let idx = key.index()?;
		self.slots[idx].replace(id)
	}

	/// Clears the binding of `key`.
	pub fn unbind(&mut self, key: KeyCode) -> Option<CommandId> {
		self.slots[key.index()?].take()
	}

	/// Returns the command bound to `key`.
	pub fn resolve(&self, key: KeyCode) -> Option<CommandId> {
		self.slots[key.index()?]
	}

	/// Unbinds every key.
	pub fn clear(&mut self) {
		self.slots.fill(None);
	}

	/// Bound keys in ascending key order.
	pub fn iter(&self) -> impl Iterator<Item = (KeyCode, CommandId)> + '_ {
		self.slots
			.iter()
			.enumerate()
			.filter_map(|(raw, slot)| slot.map(|id| (KeyCode::new(raw as u32), id)))
	}

	/// Keys bound to `id`, ascending.
	pub fn keys_for(&self, id: CommandId) -> Vec<KeyCode> {
		self.iter().filter(|&(_, bound)| bound == id).map(|(key, _)| key).collect()
	}

	/// Rebuilds the default bindings for `registry`.
	///
	/// Later steps overwrite earlier ones:
	///
	/// 1. keypad and cursor keys, `RETURN` and `SPACE`
	/// 2. `1`..`9` start a repeat count
	/// 3. default keys of game commands, then of built-ins
	/// 4. alternate keys of game commands, then of built-ins, on free keys only
	/// 5. Alt + ASCII keys still free mirror the meta byte binding
	pub fn reset_to_defaults(&mut self, registry: &CommandRegistry) {
		self.clear();

		for &(key, name) in KEYPAD_DEFAULTS {
			self.set(key, registry.lookup(name));
		}

		let repeat = registry.lookup(REPEAT_COUNT);
		for digit in b'1'..=b'9' {
			self.set(KeyCode::from(digit), repeat);
		}

		for id in registry.game_ids().chain(registry.builtin_ids()) {
			if let Some(key) = registry.get(id).default_key {
				self.bind(key, id);
			}
		}

		for id in registry.game_ids().chain(registry.builtin_ids()) {
			if let Some(key) = registry.get(id).alt_key
				&& key.is_bindable()
				&& self.resolve(key).is_none()
			{
				self.bind(key, id);
			}
		}

		for meta in 0x80..0x100u32 {
			let alt = KeyCode::new(KEY_ALT | (meta - 0x80));
			if self.resolve(alt).is_none() {
				self.set(alt, self.resolve(KeyCode::new(meta)));
			}
		}
	}

	fn set(&mut self, key: KeyCode, id: Option<CommandId>) {
		if let Some(idx) = key.index() {
			self.slots[idx] = id;
		}
	}
}
