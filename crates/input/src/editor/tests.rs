use nhcurses_primitives::KeyCode;
use nhcurses_registry::CommandId;
use nhcurses_registry::builtins::NOTHING;
use pretty_assertions::assert_eq;

use crate::testing::{MenuAnswer, TestUi, sample_session};
use crate::{MenuView, RowKind, Session};

fn id_of(session: &Session, name: &str) -> CommandId {
	session.registry().lookup(name).expect("command exists")
}

fn item_texts(menu: &MenuView) -> Vec<&str> {
	menu.items().map(|(_, row)| row.text.as_str()).collect()
}

#[test]
fn keymap_menu_lists_builtins_then_game_commands() {
	let dir = tempfile::tempdir().expect("temp dir");
	let mut session = sample_session(dir.path());
	let mut ui = TestUi::new();
	ui.menus.answer(MenuAnswer::Cancel);

	session.show_keymap_menu(&mut ui, false);
	let menu = &ui.menus.shown[0];
	assert_eq!(menu.title, "Keymap");
	assert_eq!(menu.rows[0].kind, RowKind::Heading);
	assert_eq!(menu.rows[0].text, "Command\tDescription\tKey");

	let items = item_texts(menu);
	assert_eq!(items[0], "east\tmove, fight or interact to the east\tl RIGHT KP_6");
	assert!(items.contains(&"#pray\tpray to your god\tM-p A-p"));
	assert!(items.contains(&"move\tmove one step\t"));
	assert!(!items.iter().any(|row| row.starts_with("servercancel")));

	let last = menu.rows.last().expect("reset row");
	assert_eq!(last.text, "!!!\tReset all key bindings to built-in defaults\t!!!");
	assert_eq!(last.accel, Some('!'));
}

#[test]
fn leaving_editor_saves_bindings() {
	let dir = tempfile::tempdir().expect("temp dir");
	let mut session = sample_session(dir.path());
	let mut ui = TestUi::new();
	ui.keys.push_str("z");
	ui.menus.answer(MenuAnswer::pick("search for hidden things"));
	ui.menus.answer(MenuAnswer::pick("Add a new key"));
	ui.menus.answer(MenuAnswer::Cancel);
	ui.menus.answer(MenuAnswer::Cancel);

	session.show_keymap_menu(&mut ui, false);
	assert_eq!(ui.menus.titles(), ["Keymap", "Key bindings for search", "Key bindings for search", "Keymap"]);
	assert_eq!(ui.messages, ["Press the key you want to use for \"search\""]);

	let saved = std::fs::read_to_string(session.location().path()).expect("keymap saved");
	assert!(saved.lines().any(|line| line == "7a search"));
	assert!(saved.lines().any(|line| line == "73 search"));
}

#[test]
fn adding_free_key_binds_it() {
	let dir = tempfile::tempdir().expect("temp dir");
	let mut session = sample_session(dir.path());
	let search = id_of(&session, "search");
	let mut ui = TestUi::with_keys("z");
	ui.menus.answer(MenuAnswer::pick("Add a new key"));

	session.command_settings_menu(&mut ui, search);
	assert_eq!(session.keymap().keys_for(search), [KeyCode::char('s'), KeyCode::char('z')]);
	let second = item_texts(&ui.menus.shown[1]);
	assert_eq!(second, ["delete key s", "delete key z", "Add a new key", "Use as an extended command"]);
}

#[test]
fn replacing_bound_key_asks_first() {
	let dir = tempfile::tempdir().expect("temp dir");
	let mut session = sample_session(dir.path());
	let search = id_of(&session, "search");
	let inventory = id_of(&session, "inventory");
	let mut ui = TestUi::with_keys("i");
	ui.menus.answer(MenuAnswer::pick("Add a new key"));

	session.command_settings_menu(&mut ui, search);
	assert_eq!(session.keymap().resolve(KeyCode::char('i')), Some(inventory));
	assert_eq!(ui.messages[1], "That key is already in use by \"inventory\"! Replace?");

	let mut ui = TestUi::with_keys("i");
	ui.menus.answer(MenuAnswer::pick("Add a new key"));
	ui.menus.answer_yes_no('y');
	session.command_settings_menu(&mut ui, search);
	assert_eq!(session.keymap().resolve(KeyCode::char('i')), Some(search));
}

#[test]
fn escape_and_nul_cancel_new_key() {
	let dir = tempfile::tempdir().expect("temp dir");
	let mut session = sample_session(dir.path());
	let search = id_of(&session, "search");
	let before = session.keymap().table().clone();
	let mut ui = TestUi::new();
	ui.keys.push(KeyCode::ESC_BYTE);
	ui.menus.answer(MenuAnswer::pick("Add a new key"));
	ui.menus.answer(MenuAnswer::pick("Add a new key"));
	ui.keys.push(KeyCode::ESCAPE);
	ui.menus.answer(MenuAnswer::pick("Add a new key"));
	ui.keys.push(KeyCode::new(0));

	session.command_settings_menu(&mut ui, search);
	assert_eq!(session.keymap().table(), &before);
	assert_eq!(ui.messages.len(), 3);
}

#[test]
fn deleting_key_binds_it_to_nothing() {
	let dir = tempfile::tempdir().expect("temp dir");
	let mut session = sample_session(dir.path());
	let search = id_of(&session, "search");
	let mut ui = TestUi::new();
	ui.menus.answer(MenuAnswer::pick("delete key s"));

	session.command_settings_menu(&mut ui, search);
	assert_eq!(session.keymap().resolve(KeyCode::char('s')), Some(id_of(&session, NOTHING)));
	assert!(session.keymap().keys_for(search).is_empty());
	assert_eq!(item_texts(&ui.menus.shown[1]), ["Add a new key", "Use as an extended command"]);

	let mut ui = TestUi::with_keys("si");
	assert_eq!(session.get_command(&mut ui).command_name(), Some("inventory"));
	assert!(ui.messages.is_empty());
}

#[test]
fn toggling_extended_flag_then_resetting_restores_it() {
	let dir = tempfile::tempdir().expect("temp dir");
	let mut session = sample_session(dir.path());
	let search = id_of(&session, "search");
	let mut ui = TestUi::new();
	ui.menus.answer(MenuAnswer::pick("search for hidden things"));
	ui.menus.answer(MenuAnswer::pick("Use as an extended command"));
	ui.menus.answer(MenuAnswer::Cancel);
	ui.menus.answer(MenuAnswer::Cancel);

	session.show_keymap_menu(&mut ui, false);
	assert!(session.registry().get(search).is_extended());
	let saved = std::fs::read_to_string(session.location().path()).expect("keymap saved");
	assert!(saved.lines().any(|line| line == "EXT search"));

	let mut ui = TestUi::new();
	ui.menus.answer(MenuAnswer::pick("Reset all key bindings"));
	ui.menus.answer(MenuAnswer::Cancel);
	session.show_keymap_menu(&mut ui, false);
	assert!(!session.registry().get(search).is_extended());
}

#[test]
fn reset_restores_deleted_keys() {
	let dir = tempfile::tempdir().expect("temp dir");
	let mut session = sample_session(dir.path());
	let search = id_of(&session, "search");
	session.keymap_mut().unbind(KeyCode::char('s'));
	let mut ui = TestUi::new();
	ui.menus.answer(MenuAnswer::pick("Reset all"));
	ui.menus.answer(MenuAnswer::Cancel);

	session.show_keymap_menu(&mut ui, false);
	assert_eq!(session.keymap().keys_for(search), [KeyCode::char('s')]);
}

#[test]
fn client_commands_cannot_become_extended() {
	let dir = tempfile::tempdir().expect("temp dir");
	let mut session = sample_session(dir.path());
	let north = id_of(&session, "north");
	let mut ui = TestUi::new();

	session.command_settings_menu(&mut ui, north);
	assert_eq!(item_texts(&ui.menus.shown[0]), ["delete key k", "delete key UP", "delete key KP_8", "Add a new key"]);
	assert_eq!(ui.menus.shown[0].rows[3].text, "");
}
