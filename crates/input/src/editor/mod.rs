//! Interactive key binding editor.
//!
//! Changes apply to the session's keymap immediately and are written to disk
//! once the top-level keymap menu is closed.

#[cfg(test)]
mod tests;

use nhcurses_primitives::KeyCode;
use nhcurses_registry::builtins::NOTHING;
use nhcurses_registry::{CommandDescriptor, CommandFlags, CommandId};
use tracing::debug;

use crate::collab::{KeyContext, MenuBackend};
use crate::menu::{Menu, PickMode};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeymapEntry {
	Command(CommandId),
	ResetAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsEntry {
	Delete(KeyCode),
	Add,
	ToggleExt,
}

impl Session {
	/// Lists every command with its keys; unless `readonly`, lets the player
	/// edit them.
	pub fn show_keymap_menu<B: MenuBackend + ?Sized>(&mut self, ui: &mut B, readonly: bool) {
		loop {
			let menu = self.keymap_menu(readonly);
			match menu.show(ui) {
				Some(KeymapEntry::Command(id)) => self.command_settings_menu(ui, id),
				Some(KeymapEntry::ResetAll) => self.reset_bindings(),
				None => break,
			}
		}
		if !readonly {
			self.persist();
		}
	}

	fn keymap_menu(&self, readonly: bool) -> Menu<KeymapEntry> {
		let pick = if readonly { PickMode::None } else { PickMode::One };
		let mut menu = Menu::new("Keymap", pick);
		menu.heading("Command\tDescription\tKey");

		for id in self.registry.builtin_ids().chain(self.registry.game_ids()) {
			let cmd = self.registry.get(id);
			if cmd.flags.contains(CommandFlags::INTERNAL) {
				continue;
			}
			let row = self.command_row(id, cmd);
			if readonly {
				menu.text(row);
			} else {
				menu.item(KeymapEntry::Command(id), row);
			}
		}

		if !readonly {
			menu.text("");
			menu.item_with_accel(KeymapEntry::ResetAll, "!!!\tReset all key bindings to built-in defaults\t!!!", '!');
		}
		menu
	}

	fn command_row(&self, id: CommandId, cmd: &CommandDescriptor) -> String {
		let keys = self.keymap.keys_for(id).iter().map(|key| key.display_name()).collect::<Vec<_>>().join(" ");
		let prefix = if cmd.is_extended() { "#" } else { "" };
		format!("{prefix}{:.15}\t{:.50}\t{keys:.17}", cmd.name, cmd.desc)
	}

	/// Edits the keys and extended-command state of one command.
	pub fn command_settings_menu<B: MenuBackend + ?Sized>(&mut self, ui: &mut B, id: CommandId) {
		loop {
			let cmd = self.registry.get(id);
			let mut menu = Menu::new(format!("Key bindings for {}", cmd.name), PickMode::One);
			let keys = self.keymap.keys_for(id);
			for &key in &keys {
				menu.item(SettingsEntry::Delete(key), format!("delete key {}", key.display_name()));
			}
			if !keys.is_empty() {
				menu.text("");
			}
			menu.item_with_accel(SettingsEntry::Add, "Add a new key", '+');
			if !cmd.is_ui() {
				let toggle = if cmd.is_extended() {
					"Don't use as an extended command"
				} else {
					"Use as an extended command"
				};
				menu.item(SettingsEntry::ToggleExt, toggle);
			}

			match menu.show(ui) {
				Some(SettingsEntry::Delete(key)) => self.delete_key(key),
				Some(SettingsEntry::Add) => self.add_key(ui, id),
				Some(SettingsEntry::ToggleExt) => self.registry.get_mut(id).flags.toggle(CommandFlags::EXT),
				None => break,
			}
		}
	}

	/// Rebinds `key` to the no-op command so it stops reporting "Bad command".
	fn delete_key(&mut self, key: KeyCode) {
		if let Some(nothing) = self.registry.lookup(NOTHING) {
			debug!(key = %key, "key binding deleted");
			self.keymap.bind(key, nothing);
		}
	}

	fn add_key<B: MenuBackend + ?Sized>(&mut self, ui: &mut B, id: CommandId) {
		let name = self.registry.get(id).name.clone();
		let key = ui.message(&format!("Press the key you want to use for \"{name}\""), KeyContext::Keybinding);
		// Key 0 cannot be written to the keymap file.
		if key.is_escape() || !key.is_bindable() || key.raw() == 0 {
			return;
		}
		if let Some(current) = self.keymap.resolve(key) {
			let prompt = format!("That key is already in use by \"{}\"! Replace?", self.registry.get(current).name);
			if ui.yes_no(&prompt, "yn", 'n') != 'y' {
				return;
			}
		}
		debug!(key = %key, command = %name, "key bound");
		self.keymap.bind(key, id);
	}
}
