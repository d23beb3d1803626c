use nhcurses_keymap::{Keymap, KeymapError, KeymapLocation};
use nhcurses_registry::{CommandRegistry, CommandSource};
use tracing::{debug, warn};

use crate::types::NextCommand;

/// Per-session switches supplied by the frontend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
	/// Offer debug-only commands at the extended command prompt.
	pub include_debug: bool,
	/// Refuse to suspend the process.
	pub no_stop: bool,
}

/// Command registry, key bindings and pending input of one UI session.
pub struct Session {
	pub(crate) source: Box<dyn CommandSource>,
	pub(crate) registry: CommandRegistry,
	pub(crate) keymap: Keymap,
	pub(crate) location: KeymapLocation,
	pub(crate) options: SessionOptions,
	pub(crate) next_command: Option<NextCommand>,
	pub(crate) repeats_remaining: u32,
	load_error: Option<KeymapError>,
}

impl std::fmt::Debug for Session {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Session")
			.field("commands", &self.registry.len())
			.field("location", &self.location)
			.field("options", &self.options)
			.field("next_command", &self.next_command)
			.field("repeats_remaining", &self.repeats_remaining)
			.finish_non_exhaustive()
	}
}

impl Session {
	/// Copies the game's commands and loads the user's key bindings.
	///
	/// A damaged keymap file leaves the defaults in place; the error is kept
	/// for [`take_load_error`](Self::take_load_error).
	pub fn start(source: impl CommandSource + 'static, location: KeymapLocation, options: SessionOptions) -> Self {
		let mut registry = CommandRegistry::from_source(&source);
		let mut keymap = Keymap::with_defaults(&registry);
		let load_error = match keymap.load(&mut registry, &location.path()) {
			Ok(_) => None,
			Err(err) => {
				warn!(error = %err, "using default key bindings");
				Some(err)
			}
		};
		debug!(path = %location.path().display(), commands = registry.len(), "session started");
		Self {
			source: Box::new(source),
			registry,
			keymap,
			location,
			options,
			next_command: None,
			repeats_remaining: 0,
			load_error,
		}
	}

	/// Releases the session's copy of the game commands.
	pub fn end(mut self) {
		self.registry.unload();
		debug!(path = %self.location.path().display(), "session ended");
	}

	/// Returns the keymap load failure, once.
	pub fn take_load_error(&mut self) -> Option<KeymapError> {
		self.load_error.take()
	}

	pub fn registry(&self) -> &CommandRegistry {
		&self.registry
	}

	pub fn keymap(&self) -> &Keymap {
		&self.keymap
	}

	pub fn keymap_mut(&mut self) -> &mut Keymap {
		&mut self.keymap
	}

	pub fn location(&self) -> &KeymapLocation {
		&self.location
	}

	pub fn options(&self) -> SessionOptions {
		self.options
	}

	/// Repeat count carried over for a following `repeat` command.
	pub fn repeats_remaining(&self) -> u32 {
		self.repeats_remaining
	}

	/// Makes the next [`get_command`](Self::get_command) return `next`
	/// without reading a key.
	pub fn set_next_command(&mut self, next: NextCommand) {
		self.next_command = Some(next);
	}

	/// Restores the default bindings and the game's extended-command flags.
	pub fn reset_bindings(&mut self) {
		self.keymap.reset_to_defaults(&self.registry);
		self.registry.restore_flags(&*self.source);
		debug!("key bindings reset to defaults");
	}

	/// Writes the key bindings to the session's keymap file.
	///
	/// Failures are logged and otherwise ignored.
	pub fn persist(&self) {
		let path = self.location.path();
		if let Err(err) = self.keymap.save(&self.registry, &path) {
			warn!(path = %path.display(), error = %err, "failed to save keymap");
		}
	}
}
