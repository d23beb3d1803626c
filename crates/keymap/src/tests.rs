use nhcurses_primitives::{Direction, KEY_ALT, KEY_MAX, KeyCode};
use nhcurses_registry::builtins::{NOTHING, REPEAT_COUNT};
use nhcurses_registry::{CommandDescriptor, CommandFlags, CommandRegistry};
use proptest::prelude::*;

use super::*;

fn game_commands() -> Vec<CommandDescriptor> {
	vec![
		CommandDescriptor::new("go", "rush until something interesting", CommandFlags::ARG_DIR | CommandFlags::MOVE),
		CommandDescriptor::new("inventory", "show your inventory", CommandFlags::NOTIME).with_default_key(KeyCode::char('i')),
		CommandDescriptor::new("pray", "pray to your god", CommandFlags::EXT).with_default_key(KeyCode::meta('p')),
		CommandDescriptor::new("search", "search", CommandFlags::ARG_LIMIT).with_default_key(KeyCode::char('s')),
		CommandDescriptor::new("wait", "rest one move", CommandFlags::ARG_LIMIT).with_default_key(KeyCode::char('.')),
		// Collides with the built-in `help` default key.
		CommandDescriptor::new("gamehelp", "game help", CommandFlags::HELP).with_default_key(KeyCode::char('?')),
		// Alternate key collides with the `inventory` default key.
		CommandDescriptor::new("look", "look here", CommandFlags::NOTIME)
			.with_default_key(KeyCode::char(':'))
			.with_alt_key(KeyCode::char('i')),
		CommandDescriptor::new("kick", "kick something", CommandFlags::ARG_DIR).with_alt_key(KeyCode::ctrl('d')),
	]
}

fn registry() -> CommandRegistry {
	CommandRegistry::from_source(game_commands().as_slice())
}

fn name_of(keymap: &Keymap, registry: &CommandRegistry, key: KeyCode) -> Option<String> {
	keymap.resolve(key).map(|id| registry.get(id).name.clone())
}

#[test]
fn bind_overwrites_silently() {
	let registry = registry();
	let mut table = KeymapTable::new();
	let search = registry.lookup("search").expect("search");
	let pray = registry.lookup("pray").expect("pray");
	assert_eq!(table.bind(KeyCode::char('x'), search), None);
	assert_eq!(table.bind(KeyCode::char('x'), pray), Some(search));
	assert_eq!(table.resolve(KeyCode::char('x')), Some(pray));
	assert_eq!(table.keys_for(search), Vec::<KeyCode>::new());
}

#[test]
fn synthetic_keys_never_bind() {
	let registry = registry();
	let mut table = KeymapTable::new();
	let search = registry.lookup("search").expect("search");
	assert_eq!(table.bind(KeyCode::ESCAPE, search), None);
	assert_eq!(table.resolve(KeyCode::ESCAPE), None);
	assert_eq!(table.resolve(KeyCode::new(KEY_MAX + 1)), None);
}

#[test]
fn defaults_bind_keypad_digits_and_blanks() {
	let registry = registry();
	let keymap = Keymap::with_defaults(&registry);
	assert_eq!(name_of(&keymap, &registry, KeyCode::UP).as_deref(), Some("north"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::C3).as_deref(), Some("south_east"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::B2).as_deref(), Some("go"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::D1).as_deref(), Some("inventory"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::HOME).as_deref(), Some("north_west"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::RETURN).as_deref(), Some(NOTHING));
	assert_eq!(name_of(&keymap, &registry, KeyCode::SPACE).as_deref(), Some(NOTHING));
	for digit in '1'..='9' {
		assert_eq!(name_of(&keymap, &registry, KeyCode::char(digit)).as_deref(), Some(REPEAT_COUNT));
	}
	assert_eq!(keymap.resolve(KeyCode::char('0')), None);
}

#[test]
fn builtin_defaults_win_over_game_defaults() {
	let registry = registry();
	let keymap = Keymap::with_defaults(&registry);
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('?')).as_deref(), Some("help"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('l')).as_deref(), Some("east"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::ctrl('l')).as_deref(), Some("go_east"));
}

#[test]
fn alternate_keys_only_fill_free_keys() {
	let registry = registry();
	let keymap = Keymap::with_defaults(&registry);
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('i')).as_deref(), Some("inventory"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::ctrl('d')).as_deref(), Some("kick"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::ctrl('c')).as_deref(), Some("mainmenu"));
}

#[test]
fn alt_keys_mirror_meta_bytes() {
	let registry = registry();
	let keymap = Keymap::with_defaults(&registry);
	assert_eq!(name_of(&keymap, &registry, KeyCode::meta('p')).as_deref(), Some("pray"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::alt('p')).as_deref(), Some("pray"));
	assert_eq!(keymap.resolve(KeyCode::alt('q')), None);
	assert_eq!(KeyCode::alt('p').raw(), KEY_ALT | u32::from(b'p'));
}

#[test]
fn declared_alt_keys_survive_meta_mirroring() {
	let mut commands = game_commands();
	commands.push(CommandDescriptor::new("quaff", "quaff a potion", CommandFlags::empty()).with_default_key(KeyCode::alt('q')));
	let registry = CommandRegistry::from_source(commands.as_slice());
	let mut keymap = Keymap::with_defaults(&registry);
	assert_eq!(name_of(&keymap, &registry, KeyCode::alt('q')).as_deref(), Some("quaff"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::alt('p')).as_deref(), Some("pray"));

	keymap.reset_to_defaults(&registry);
	assert_eq!(name_of(&keymap, &registry, KeyCode::alt('q')).as_deref(), Some("quaff"));
}

#[test]
fn reset_discards_manual_bindings() {
	let registry = registry();
	let mut keymap = Keymap::with_defaults(&registry);
	let pray = registry.lookup("pray").expect("pray");
	keymap.bind(KeyCode::char('l'), pray);
	keymap.unbind(KeyCode::char('k'));
	keymap.reset_to_defaults(&registry);
	assert_eq!(keymap.table(), Keymap::with_defaults(&registry).table());
}

#[test]
fn keys_for_lists_every_binding() {
	let registry = registry();
	let keymap = Keymap::with_defaults(&registry);
	let north = registry.lookup("north").expect("north");
	assert_eq!(keymap.keys_for(north), vec![KeyCode::char('k'), KeyCode::UP, KeyCode::A2]);
}

#[test]
fn key_to_dir_accepts_plain_directions_and_self() {
	let registry = registry();
	let keymap = Keymap::with_defaults(&registry);
	assert_eq!(keymap.key_to_dir(KeyCode::char('h'), &registry), Some(Direction::W));
	assert_eq!(keymap.key_to_dir(KeyCode::char('>'), &registry), Some(Direction::Down));
	assert_eq!(keymap.key_to_dir(KeyCode::char('.'), &registry), Some(Direction::Here));
	assert_eq!(keymap.key_to_dir(KeyCode::char('s'), &registry), Some(Direction::Here));
	assert_eq!(keymap.key_to_dir(KeyCode::char('H'), &registry), None);
	assert_eq!(keymap.key_to_dir(KeyCode::char('i'), &registry), None);
	assert_eq!(keymap.key_to_dir(KeyCode::new(0), &registry), None);
	assert_eq!(keymap.key_to_dir(KeyCode::ESCAPE, &registry), None);
}

#[test]
fn unknown_bindings_are_deduplicated_by_name() {
	let mut unknown = UnknownBindings::default();
	let first = unknown.intern("wizard_wish");
	let again = unknown.intern("wizard_wish");
	assert_eq!(first, again);
	unknown.bind(KeyCode::char('W'), first);
	unknown.bind(KeyCode::ctrl('w'), again);
	unknown.set_ext(first, true);
	assert_eq!(unknown.len(), 1);
	assert_eq!(unknown.iter().count(), 2);
	assert!(unknown.get(KeyCode::char('W')).is_some_and(|cmd| cmd.ext));
	assert!(unknown.find("wizard_wish").is_some());
	unknown.clear();
	assert!(unknown.is_empty());
	assert!(unknown.get(KeyCode::char('W')).is_none());
}

#[test]
fn location_paths() {
	let local = KeymapLocation::local("/cfg");
	assert_eq!(local.path(), std::path::Path::new("/cfg/keymap.conf"));
	let account = KeymapLocation::account("/cfg", "alice");
	assert_eq!(account.path(), std::path::Path::new("/cfg/alice.keymap"));
}

proptest! {
	#[test]
	fn reset_is_deterministic(edits in proptest::collection::vec((0u32..=KEY_MAX, 0usize..40), 0..32)) {
		let registry = registry();
		let ids: Vec<_> = registry.iter().map(|(id, _)| id).collect();
		let mut keymap = Keymap::with_defaults(&registry);
		for (raw, idx) in edits {
			keymap.bind(KeyCode::new(raw), ids[idx % ids.len()]);
		}
		keymap.reset_to_defaults(&registry);
		let fresh = Keymap::with_defaults(&registry);
		for raw in 0..=KEY_MAX {
			let key = KeyCode::new(raw);
			prop_assert_eq!(keymap.resolve(key), fresh.resolve(key));
		}
	}

	#[test]
	fn save_load_round_trips(edits in proptest::collection::vec((1u32..=KEY_MAX, 0usize..40, any::<bool>()), 0..24)) {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("keymap.conf");
		let mut registry = registry();
		let ids: Vec<_> = registry.iter().map(|(id, _)| id).collect();
		let mut keymap = Keymap::with_defaults(&registry);
		for (raw, idx, delete) in edits {
			let key = KeyCode::new(raw);
			if delete {
				keymap.unbind(key);
			} else {
				keymap.bind(key, ids[idx % ids.len()]);
			}
		}
		keymap.save(&registry, &path).expect("save");

		let mut loaded = Keymap::with_defaults(&registry);
		loaded.load(&mut registry, &path).expect("load");
		for raw in 1..=KEY_MAX {
			let key = KeyCode::new(raw);
			if keymap.resolve(key).is_some() {
				prop_assert_eq!(loaded.resolve(key), keymap.resolve(key));
			}
		}
	}
}
