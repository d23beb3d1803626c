use std::path::PathBuf;

use nhcurses_primitives::KeyCode;
use nhcurses_registry::{CommandDescriptor, CommandFlags, CommandRegistry};
use pretty_assertions::assert_eq;

use super::*;
use crate::Keymap;

fn game_commands() -> Vec<CommandDescriptor> {
	vec![
		CommandDescriptor::new("inventory", "show your inventory", CommandFlags::NOTIME).with_default_key(KeyCode::char('i')),
		CommandDescriptor::new("pray", "pray to your god", CommandFlags::EXT).with_default_key(KeyCode::meta('p')),
		CommandDescriptor::new("search", "search for hidden things", CommandFlags::ARG_LIMIT).with_default_key(KeyCode::char('s')),
	]
}

fn setup() -> (tempfile::TempDir, PathBuf, CommandRegistry, Keymap) {
	let dir = tempfile::tempdir().expect("temp dir");
	let path = dir.path().join("keymap.conf");
	let registry = CommandRegistry::from_source(game_commands().as_slice());
	let keymap = Keymap::with_defaults(&registry);
	(dir, path, registry, keymap)
}

fn name_of(keymap: &Keymap, registry: &CommandRegistry, key: KeyCode) -> Option<String> {
	keymap.resolve(key).map(|id| registry.get(id).name.clone())
}

#[test]
fn missing_file_keeps_defaults() {
	let (_dir, path, mut registry, mut keymap) = setup();
	let before = keymap.table().clone();
	let report = keymap.load(&mut registry, &path).expect("missing file is fine");
	assert!(!report.found);
	assert_eq!(keymap.table(), &before);
}

#[test]
fn binding_lines_overlay_defaults() {
	let (_dir, path, mut registry, mut keymap) = setup();
	std::fs::write(&path, "69 search\n73 inventory\nEXT search\nNOEXT pray\n").expect("write");

	let report = keymap.load(&mut registry, &path).expect("load");
	assert_eq!(report.bound, 2);
	assert_eq!(report.ext, 2);
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('i')).as_deref(), Some("search"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('s')).as_deref(), Some("inventory"));
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('l')).as_deref(), Some("east"));
	assert!(registry.find("search").expect("search").is_extended());
	assert!(!registry.find("pray").expect("pray").is_extended());
}

#[test]
fn crlf_and_blank_lines_are_accepted() {
	let (_dir, path, mut registry, mut keymap) = setup();
	std::fs::write(&path, "\r\n69 search\r\n\r\n").expect("write");
	let report = keymap.load(&mut registry, &path).expect("load");
	assert_eq!(report.bound, 1);
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('i')).as_deref(), Some("search"));
}

#[test]
fn save_then_load_reproduces_bindings() {
	let (_dir, path, mut registry, mut keymap) = setup();
	let search = registry.lookup("search").expect("search");
	keymap.bind(KeyCode::char('z'), search);
	keymap.bind(KeyCode::function(1).expect("F1"), search);
	keymap.unbind(KeyCode::char('h'));
	keymap.save(&registry, &path).expect("save");

	let mut fresh = Keymap::with_defaults(&registry);
	fresh.load(&mut registry, &path).expect("load");
	for raw in 1..=nhcurses_primitives::KEY_MAX {
		let key = KeyCode::new(raw);
		if keymap.resolve(key).is_some() {
			assert_eq!(fresh.resolve(key), keymap.resolve(key), "key {key:?}");
		}
	}
}

#[test]
fn unknown_lines_are_written_back_verbatim() {
	let (_dir, path, mut registry, mut keymap) = setup();
	std::fs::write(&path, "1b0 wizard_genesis\n44 levelchange\nEXT wizard_genesis\n").expect("write");

	let report = keymap.load(&mut registry, &path).expect("load");
	assert_eq!(report.unknown, 2);
	assert!(keymap.resolve(KeyCode::new(0x44)).is_none());

	let text = keymap.render(&registry);
	assert!(text.lines().any(|line| line == "1b0 wizard_genesis"));
	assert!(text.lines().any(|line| line == "44 levelchange"));
	assert!(text.lines().any(|line| line == "EXT wizard_genesis"));
	assert!(text.lines().any(|line| line == "NOEXT levelchange"));
	assert_eq!(text.matches("wizard_genesis").count(), 2);
}

#[test]
fn rebinding_a_key_drops_its_unknown_binding() {
	let (_dir, path, mut registry, mut keymap) = setup();
	std::fs::write(&path, "44 levelchange\n").expect("write");
	keymap.load(&mut registry, &path).expect("load");

	let search = registry.lookup("search").expect("search");
	keymap.bind(KeyCode::new(0x44), search);
	let text = keymap.render(&registry);
	assert!(text.lines().any(|line| line == "44 search"));
	assert!(!text.lines().any(|line| line == "44 levelchange"));
	assert!(text.lines().any(|line| line == "NOEXT levelchange"));
}

#[test]
fn legacy_file_reverts_and_rewrites() {
	let (_dir, path, mut registry, mut keymap) = setup();
	std::fs::write(&path, "69 search\n6a -\n").expect("write");

	let err = keymap.load(&mut registry, &path).expect_err("legacy file");
	assert!(matches!(err, KeymapError::LegacyFormat { line: 2 }));
	assert!(err.is_corruption());
	assert_eq!(keymap.table(), Keymap::with_defaults(&registry).table());
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('i')).as_deref(), Some("inventory"));

	let rewritten = std::fs::read_to_string(&path).expect("rewritten");
	assert_eq!(rewritten, keymap.render(&registry));
}

#[test]
fn unparsable_key_reverts_to_defaults() {
	let (_dir, path, mut registry, mut keymap) = setup();
	std::fs::write(&path, "69 search\nzz inventory\n").expect("write");

	let err = keymap.load(&mut registry, &path).expect_err("bad key");
	match err {
		KeymapError::BadKey { line, token } => {
			assert_eq!(line, 2);
			assert_eq!(token, "zz");
		}
		other => panic!("unexpected error {other:?}"),
	}
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('i')).as_deref(), Some("inventory"));
	assert_eq!(std::fs::read_to_string(&path).expect("untouched"), "69 search\nzz inventory\n");
}

#[test]
fn zero_key_is_corruption() {
	let (_dir, path, mut registry, mut keymap) = setup();
	std::fs::write(&path, "0 search\n").expect("write");
	assert!(matches!(keymap.load(&mut registry, &path), Err(KeymapError::BadKey { .. })));
}

#[test]
fn out_of_range_keys_are_skipped() {
	let (_dir, path, mut registry, mut keymap) = setup();
	std::fs::write(&path, "200 search\n-5 search\n69 search\n").expect("write");
	let report = keymap.load(&mut registry, &path).expect("load");
	assert_eq!(report.skipped, 2);
	assert_eq!(report.bound, 1);
}

#[test]
fn render_omits_unbound_keys_and_lists_ext_state() {
	let registry = CommandRegistry::from_source(game_commands().as_slice());
	let keymap = Keymap::new();
	assert_eq!(keymap.render(&registry), "NOEXT inventory\nEXT pray\nNOEXT search\n");
}

#[test]
fn render_uses_lowercase_hex() {
	let registry = CommandRegistry::from_source(game_commands().as_slice());
	let mut keymap = Keymap::new();
	let search = registry.lookup("search").expect("search");
	keymap.bind(KeyCode::UP, search);
	assert!(keymap.render(&registry).starts_with("181 search\n"));
}

#[test]
fn hex_prefix_follows_strtol() {
	assert_eq!(parse_hex_prefix("6c"), Some(0x6c));
	assert_eq!(parse_hex_prefix("0x1B0"), Some(0x1b0));
	assert_eq!(parse_hex_prefix("12zz"), Some(0x12));
	assert_eq!(parse_hex_prefix("-3"), Some(-3));
	assert_eq!(parse_hex_prefix("zz"), None);
	assert_eq!(parse_hex_prefix(""), None);
}

#[test]
fn parse_line_classifies_records() {
	assert_eq!(parse_line(1, "EXT pray").expect("ext"), Record::Ext { name: "pray", ext: true });
	assert_eq!(parse_line(1, "NOEXT pray").expect("noext"), Record::Ext { name: "pray", ext: false });
	assert_eq!(
		parse_line(1, "6c\teast").expect("bind"),
		Record::Bind {
			key: KeyCode::char('l'),
			name: "east"
		}
	);
	assert_eq!(parse_line(1, "6c").expect("no name"), Record::Skip);
	assert!(matches!(parse_line(3, "EXT -"), Err(KeymapError::LegacyFormat { line: 3 })));
}

#[test]
fn non_utf8_names_do_not_discard_the_file() {
	let (_dir, path, mut registry, mut keymap) = setup();
	std::fs::write(&path, b"69 search\n1b0 wiz\xe9\n").expect("write");

	let report = keymap.load(&mut registry, &path).expect("load");
	assert_eq!(report.bound, 1);
	assert_eq!(report.unknown, 1);
	assert_eq!(name_of(&keymap, &registry, KeyCode::char('i')).as_deref(), Some("search"));
	assert!(keymap.render(&registry).contains("69 search\n"));
}
