//! Commands the client handles itself.


use nhcurses_registry::{CommandFlags, CommandId, UiCommand};
use tracing::{debug, warn};

use crate::collab::{Frontend, KeyContext, MenuBackend};
use crate::menu::{Menu, PickMode};
use crate::session::Session;
use crate::types::{CommandArg, ExitRequest, FollowMode};

/// Game command returned after client-side changes that need a screen update.
const INTERRUPT: &str = "interrupt";
/// Name shown at the extended command prompt for the command list.
const EXT_HELP: &str = "?";

/// Result of running a client-side command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Internal {
	/// Continue with this command instead.
	Command(CommandId),
	/// Fully handled; the turn starts over.
	Handled,
	/// The player left the game.
	Exit(ExitRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HelpTopic {
	Commands,
	WhatDoes,
	Options,
	Game(CommandId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainMenuEntry {
	Game(CommandId),
	Options,
	Replay,
	Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveChoice {
	Close,
	Quit,
	Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirm {
	Yes,
	No,
}

impl Session {
	pub(crate) fn run_internal<F: Frontend + ?Sized>(&mut self, ui: &mut F, id: CommandId, arg: &mut CommandArg) -> Internal {
		let Some(command) = self.registry.get(id).ui else {
			return Internal::Command(id);
		};
		debug!(command = %self.registry.get(id).name, "running client command");

		match command {
			UiCommand::Direction { dir, style } => {
				arg.dir = Some(dir);
				self.command_or_handled(style.command_name())
			}
			UiCommand::Options => {
				ui.display_options();
				ui.redraw();
				self.command_or_handled(INTERRUPT)
			}
			UiCommand::ExtCmd => match self.extended_command(ui) {
				Some(id) => Internal::Command(id),
				None => Internal::Handled,
			},
			UiCommand::Help => {
				*arg = CommandArg::default();
				self.show_help(ui)
			}
			UiCommand::MainMenu => {
				*arg = CommandArg::default();
				self.show_main_menu(ui, false)
			}
			UiCommand::Detach => match self.save_menu(ui) {
				Some(request) => Internal::Exit(request),
				None => Internal::Handled,
			},
			UiCommand::Stop => {
				self.stop(ui);
				Internal::Handled
			}
			UiCommand::PrevMsg => {
				ui.show_previous_messages();
				Internal::Handled
			}
			UiCommand::WhatDoes => {
				self.show_whatdoes(ui);
				Internal::Handled
			}
			UiCommand::TogglePickup => {
				toggle_pickup(ui);
				self.command_or_handled(INTERRUPT)
			}
			UiCommand::RepeatCount | UiCommand::Nothing => Internal::Handled,
			UiCommand::ServerCancel => Internal::Command(id),
		}
	}

	fn command_or_handled(&self, name: &str) -> Internal {
		match self.registry.lookup(name) {
			Some(id) => Internal::Command(id),
			None => {
				warn!(command = name, "game does not provide command");
				Internal::Handled
			}
		}
	}

	/// Extended commands offered at the prompt, in game order.
	pub(crate) fn extended_commands(&self) -> Vec<CommandId> {
		self.registry
			.game_ids()
			.filter(|&id| {
				let flags = self.registry.get(id).flags;
				flags.contains(CommandFlags::EXT) && (self.options.include_debug || !flags.contains(CommandFlags::DEBUG))
			})
			.collect()
	}

	/// Prompts for an extended command until something other than `?` is
	/// entered.
	fn extended_command<B: MenuBackend + ?Sized>(&self, ui: &mut B) -> Option<CommandId> {
		let ids = self.extended_commands();
		let mut names: Vec<&str> = ids.iter().map(|&id| self.registry.get(id).name.as_str()).collect();
		let mut descs: Vec<&str> = ids.iter().map(|&id| self.registry.get(id).desc.as_str()).collect();
		names.push(EXT_HELP);
		descs.push("get this list of extended commands");

		loop {
			let answer = ui.read_extended_command(&names, &descs)?;
			let name = answer.as_str();
			if name.is_empty() || name.starts_with('\x1b') {
				return None;
			}
			if name == EXT_HELP {
				show_extended_list(ui, &names, &descs);
				continue;
			}
			return match self.registry.lookup(name) {
				Some(id) if !self.registry.get(id).is_ui() => Some(id),
				_ => {
					ui.message(&format!("{name}: unknown extended command."), KeyContext::Notification);
					None
				}
			};
		}
	}

	fn show_whatdoes<B: MenuBackend + ?Sized>(&self, ui: &mut B) {
		let key = ui.message("What command?", KeyContext::Keybinding);
		let text = match self.keymap.resolve(key) {
			Some(id) => {
				let cmd = self.registry.get(id);
				format!("'{}': {} - {}", key.display_name(), cmd.name, cmd.desc)
			}
			None => format!("'{}' is not bound to any command.", key.display_name()),
		};
		ui.message(&text, KeyContext::Notification);
	}

	fn show_help<F: Frontend + ?Sized>(&mut self, ui: &mut F) -> Internal {
		let mut menu = Menu::new("Help topics:", PickMode::One);
		menu.item(HelpTopic::Commands, "list of game commands")
			.item(HelpTopic::WhatDoes, "explain what a key does")
			.item(HelpTopic::Options, "list of options");
		for id in self.registry.game_ids() {
			let cmd = self.registry.get(id);
			if cmd.flags.contains(CommandFlags::HELP) {
				menu.item(HelpTopic::Game(id), cmd.desc.clone());
			}
		}

		match menu.show(ui) {
			Some(HelpTopic::Commands) => self.show_keymap_menu(ui, true),
			Some(HelpTopic::WhatDoes) => self.show_whatdoes(ui),
			Some(HelpTopic::Options) => ui.print_options(),
			Some(HelpTopic::Game(id)) => return Internal::Command(id),
			None => {}
		}
		Internal::Handled
	}

	/// Shows the main menu.
	///
	/// Inside another command only the replay and save entries are offered.
	pub(crate) fn show_main_menu<F: Frontend + ?Sized>(&mut self, ui: &mut F, inside_another_command: bool) -> Internal {
		let mode = ui.follow_mode();
		let mut menu = Menu::new("Main menu", PickMode::One);
		if !inside_another_command {
			for id in self.registry.game_ids() {
				let cmd = self.registry.get(id);
				if cmd.flags.contains(CommandFlags::MAINMENU) && (mode == FollowMode::Play || cmd.flags.contains(CommandFlags::NOTIME)) {
					menu.item(MainMenuEntry::Game(id), cmd.desc.clone());
				}
			}
			let options = if mode == FollowMode::Play { "set options" } else { "set interface options" };
			menu.item(MainMenuEntry::Options, options);
		}
		if mode != FollowMode::Replay {
			menu.item(MainMenuEntry::Replay, "view a replay of this game");
		}
		let leave = if mode == FollowMode::Play { "save or quit the game" } else { "stop viewing" };
		menu.item(MainMenuEntry::Save, leave);

		match menu.show(ui) {
			Some(MainMenuEntry::Game(id)) => Internal::Command(id),
			Some(MainMenuEntry::Options) => {
				ui.display_options();
				ui.redraw();
				self.command_or_handled(INTERRUPT)
			}
			Some(MainMenuEntry::Replay) => {
				debug!("switching to replay mode");
				ui.set_follow_mode(FollowMode::Replay);
				Internal::Exit(ExitRequest::Restart)
			}
			Some(MainMenuEntry::Save) => match self.save_menu(ui) {
				Some(request) => Internal::Exit(request),
				None => Internal::Handled,
			},
			None => Internal::Handled,
		}
	}

	/// Asks whether to close or quit the game.
	///
	/// Watching or replaying leaves without asking.
	pub(crate) fn save_menu<F: Frontend + ?Sized>(&mut self, ui: &mut F) -> Option<ExitRequest> {
		if ui.follow_mode() != FollowMode::Play {
			return Some(ExitRequest::Save);
		}

		let mut menu = Menu::new("Do you want to stop playing?", PickMode::One);
		menu.item_with_accel(SaveChoice::Close, "Close the game.", 'y')
			.text("Your save file will remain stored on disk, and")
			.text("you can resume the game later.")
			.text("")
			.item_with_accel(SaveChoice::Quit, "Quit the game.", '!')
			.text("You will see your statistics, as if you had died;")
			.text("the save file will be deleted (although a replay")
			.text("will be kept). You will not be able to resume the")
			.text("game, not even from an earlier save file.")
			.text("")
			.item_with_accel(SaveChoice::Keep, "Keep playing.", 'n');

		match menu.show(ui)? {
			SaveChoice::Close => Some(ExitRequest::Save),
			SaveChoice::Keep => None,
			SaveChoice::Quit => {
				let mut confirm = Menu::new("Really delete the save file?", PickMode::One);
				confirm
					.item_with_accel(Confirm::Yes, "Yes, delete the save file", 'y')
					.item_with_accel(Confirm::No, "No, I want to keep playing", 'n');
				(confirm.show(ui) == Some(Confirm::Yes)).then_some(ExitRequest::Quit)
			}
		}
	}

	fn stop<F: Frontend + ?Sized>(&self, ui: &mut F) {
		if self.options.no_stop || !ui.suspend() {
			ui.message("Process suspension is disabled on this instance.", KeyContext::Notification);
		}
	}
}

fn show_extended_list<B: MenuBackend + ?Sized>(ui: &mut B, names: &[&str], descs: &[&str]) {
	let mut menu: Menu<()> = Menu::new("Extended Commands List", PickMode::None);
	for (name, desc) in names.iter().zip(descs) {
		menu.text(format!(" {name}\t- {desc}."));
	}
	menu.show(ui);
}

fn toggle_pickup<F: Frontend + ?Sized>(ui: &mut F) {
	let Some(current) = ui.autopickup() else {
		ui.message("Error: No autopickup option found.", KeyContext::Notification);
		return;
	};
	let on = !current;
	ui.set_autopickup(on);
	ui.message(if on { "Autopickup now ON" } else { "Autopickup now OFF" }, KeyContext::Notification);
}
