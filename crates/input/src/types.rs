use nhcurses_primitives::Direction;

/// Argument attached to a resolved command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandArg {
	/// Direction chosen by a direction key or a direction prompt.
	pub dir: Option<Direction>,
	/// Repeat count for commands flagged `ARG_LIMIT`.
	pub limit: Option<u32>,
}

impl CommandArg {
	pub fn with_dir(dir: Direction) -> Self {
		Self { dir: Some(dir), limit: None }
	}
}

/// A command ready to be sent to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
	pub name: String,
	pub arg: CommandArg,
	/// The command takes no game time.
	pub zero_time: bool,
}

impl ResolvedCommand {
	pub fn new(name: impl Into<String>, arg: CommandArg) -> Self {
		Self {
			name: name.into(),
			arg,
			zero_time: false,
		}
	}
}

/// Command queued by another part of the UI to be returned by the next read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextCommand {
	pub name: String,
	pub arg: CommandArg,
}

impl NextCommand {
	pub fn new(name: impl Into<String>, arg: CommandArg) -> Self {
		Self { name: name.into(), arg }
	}
}

impl From<NextCommand> for ResolvedCommand {
	fn from(next: NextCommand) -> Self {
		ResolvedCommand::new(next.name, next.arg)
	}
}

/// How the player asked to leave the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRequest {
	/// Close the game, keeping the save file.
	Save,
	/// Quit and delete the save file.
	Quit,
	/// Reload the game, for example in replay mode.
	Restart,
}

/// What the client is currently doing with the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FollowMode {
	#[default]
	Play,
	Watch,
	Replay,
}

/// Result of one call to [`Session::get_command`](crate::Session::get_command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
	Command(ResolvedCommand),
	Exit(ExitRequest),
}

impl Turn {
	/// Returns the command name, if this turn produced a command.
	pub fn command_name(&self) -> Option<&str> {
		match self {
			Turn::Command(cmd) => Some(&cmd.name),
			Turn::Exit(_) => None,
		}
	}
}
