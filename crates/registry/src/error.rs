use crate::MAX_COMMAND_NAME;

/// Problems found in a command list supplied by the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two game commands share a name.
	#[error("duplicate command name: {0}")]
	DuplicateCommand(String),

	/// A command name exceeds [`MAX_COMMAND_NAME`] bytes.
	#[error("command name longer than {MAX_COMMAND_NAME} bytes: {0}")]
	NameTooLong(String),

	/// A command name is empty or contains whitespace.
	#[error("invalid command name: {0:?}")]
	InvalidName(String),
}
