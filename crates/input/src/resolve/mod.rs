//! Turning key presses into one command per turn.
//!
//! A turn reads a command key, optionally preceded by a repeat count and
//! followed by a direction key. Client-side commands are run on the spot and
//! either yield a game command or restart the turn. Keys that resolve to
//! nothing report "Bad command" and restart the turn; escape restarts it
//! silently.


use nhcurses_primitives::{Direction, KeyCode, KeyKind};
use nhcurses_registry::builtins::{MAIN_MENU, REPEAT_COUNT, SAVE, SERVER_CANCEL};
use nhcurses_registry::CommandFlags;
use tracing::debug;

use crate::collab::{Frontend, KeyContext};
use crate::count::RepeatCount;
use crate::internal::Internal;
use crate::session::Session;
use crate::types::{CommandArg, ExitRequest, ResolvedCommand, Turn};

/// Game command that forces a full redraw on the client as well.
const REDRAW: &str = "redraw";
/// Game command that repeats the previous command.
const REPEAT: &str = "repeat";

/// Outcome of a single pass through the resolution loop.
#[derive(Debug)]
enum Step {
	Done(Turn),
	/// Start over without a message.
	Restart,
	/// Report the key and start over.
	Bad(KeyCode),
}

impl Session {
	/// Reads keys until they resolve to a command or an exit request.
	pub fn get_command<F: Frontend + ?Sized>(&mut self, ui: &mut F) -> Turn {
		let saved_repeats = std::mem::take(&mut self.repeats_remaining);

		if let Some(next) = self.next_command.take() {
			debug!(command = %next.name, "using queued command");
			return Turn::Command(next.into());
		}

		loop {
			match self.step(ui, saved_repeats) {
				Step::Done(turn) => return turn,
				Step::Restart => {}
				Step::Bad(key) => {
					debug!(key = %key, "bad command");
					ui.print_message(&format!("Bad command: '{}'.", key.display_name()));
				}
			}
		}
	}

	fn step<F: Frontend + ?Sized>(&mut self, ui: &mut F, saved_repeats: u32) -> Step {
		let mut arg = CommandArg::default();
		let mut key = ui.read_key(true, true, KeyContext::GetCommand);

		let mut count = RepeatCount::default();
		if self.is_bound_to(key, REPEAT_COUNT) {
			key = read_count(ui, key, &mut count);
		}

		if key.is_escape() {
			return Step::Restart;
		}

		let cmd = match key.kind() {
			KeyKind::Bindable => self.keymap.resolve(key),
			KeyKind::Signal => self.registry.lookup(SERVER_CANCEL),
			KeyKind::SidebarItem(slot) => {
				return match ui.sidebar_item_action(slot) {
					Some(next) => Step::Done(Turn::Command(next.into())),
					None => Step::Restart,
				};
			}
			KeyKind::MapClick(_) | KeyKind::Resize => return Step::Restart,
			KeyKind::Escape | KeyKind::Other => None,
		};
		let Some(mut id) = cmd else {
			return Step::Bad(key);
		};

		if self.registry.get(id).is_ui() {
			match self.run_internal(ui, id, &mut arg) {
				Internal::Command(replacement) => id = replacement,
				Internal::Handled => return Step::Restart,
				Internal::Exit(request) => return Step::Done(Turn::Exit(request)),
			}
		}

		let flags = self.registry.get(id).flags;
		if !count.is_zero() && flags.contains(CommandFlags::ARG_LIMIT) {
			arg.limit = Some(count.value());
		} else {
			self.repeats_remaining = count.value();
		}

		match self.registry.get(id).name.as_str() {
			REDRAW => ui.redraw(),
			REPEAT => self.repeats_remaining = saved_repeats,
			_ => {}
		}

		if flags.wants_direction() && arg.dir.is_none() {
			let key2 = ui.read_key(true, false, KeyContext::MoveDirection);
			if key2.is_escape() {
				return Step::Restart;
			}
			if key2.kind() == KeyKind::Signal {
				match self.registry.lookup(SERVER_CANCEL) {
					Some(cancel) => id = cancel,
					None => return Step::Bad(key),
				}
			} else {
				match self.direction_of(key2) {
					Some(dir) => arg.dir = Some(dir),
					None => return Step::Bad(key),
				}
			}
		}

		let cmd = self.registry.get(id);
		debug!(command = %cmd.name, dir = ?arg.dir, limit = ?arg.limit, "command resolved");
		Step::Done(Turn::Command(ResolvedCommand {
			name: cmd.name.clone(),
			arg,
			zero_time: cmd.flags.contains(CommandFlags::NOTIME),
		}))
	}

	/// Runs save and main menu keys pressed while another prompt is active.
	///
	/// Commands picked from a nested main menu are not executed.
	pub fn handle_nested_key<F: Frontend + ?Sized>(&mut self, ui: &mut F, key: KeyCode) -> Option<ExitRequest> {
		if self.is_bound_to(key, SAVE) {
			return self.save_menu(ui);
		}
		if self.is_bound_to(key, MAIN_MENU) {
			return match self.show_main_menu(ui, true) {
				Internal::Exit(request) => Some(request),
				Internal::Command(_) | Internal::Handled => None,
			};
		}
		None
	}

	pub(crate) fn is_bound_to(&self, key: KeyCode, name: &str) -> bool {
		let bound = self.keymap.resolve(key);
		bound.is_some() && bound == self.registry.lookup(name)
	}

	/// Direction of a key bound to a plain direction command.
	fn direction_of(&self, key: KeyCode) -> Option<Direction> {
		let id = self.keymap.resolve(key)?;
		self.registry.get(id).plain_direction()
	}
}

/// Reads the rest of a repeat count starting with `key`.
///
/// Returns the first key that is not part of the count.
fn read_count<F: Frontend + ?Sized>(ui: &mut F, mut key: KeyCode, count: &mut RepeatCount) -> KeyCode {
	loop {
		if key.is_backspace() {
			count.backspace();
		} else if let Some(digit) = key.as_digit() {
			count.push_digit(digit);
		}
		key = ui.message(&format!("Count: {}", count.value()), KeyContext::Count);
		if key.as_digit().is_none() && !(key.is_backspace() && !count.is_zero()) {
			return key;
		}
	}
}
