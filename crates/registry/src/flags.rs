bitflags::bitflags! {
	/// Behavioral flags carried by every command.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct CommandFlags: u32 {
		/// Handled by the client; never sent to the game as-is.
		const UI = 1 << 0;
		/// Reserved for internal use; hidden from key binding menus.
		const INTERNAL = 1 << 1;
		/// Offered by the extended command prompt.
		const EXT = 1 << 2;
		/// Only available in debug mode.
		const DEBUG = 1 << 3;
		/// Takes a direction argument.
		const ARG_DIR = 1 << 4;
		/// Is a movement command.
		const MOVE = 1 << 5;
		/// Accepts a repeat count as its argument.
		const ARG_LIMIT = 1 << 6;
		/// Takes no game time.
		const NOTIME = 1 << 7;
		/// Listed in the help menu.
		const HELP = 1 << 8;
		/// Listed in the main menu.
		const MAINMENU = 1 << 9;
	}
}

impl CommandFlags {
	/// Returns true if the command needs a direction read after the command key.
	pub fn wants_direction(self) -> bool {
		self.contains(CommandFlags::ARG_DIR | CommandFlags::MOVE)
	}
}
