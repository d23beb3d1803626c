use std::path::PathBuf;

/// Failure to load a keymap file.
///
/// For the corruption variants the keymap has already been reset to its
/// defaults by the time the error is returned.
#[derive(Debug, thiserror::Error)]
pub enum KeymapError {
	#[error("failed to read keymap {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The file predates the current format.
	#[error("keymap uses an obsolete format (line {line})")]
	LegacyFormat { line: usize },

	/// A binding line does not start with a usable hex key code.
	#[error("bad key {token:?} on keymap line {line}")]
	BadKey { line: usize, token: String },
}

impl KeymapError {
	/// One-line notification shown to the player.
	pub fn user_message(&self) -> &'static str {
		match self {
			KeymapError::Io { .. } => "Could not read keymap.conf. Using default keybindings.",
			KeymapError::LegacyFormat { .. } => "keymap.conf has changed format. Your keybindings have reverted to defaults.",
			KeymapError::BadKey { .. } => "Bad/damaged keymap.conf. Reverting to defaults.",
		}
	}

	/// Returns true if the keymap was reset because of this error.
	pub fn is_corruption(&self) -> bool {
		!matches!(self, KeymapError::Io { .. })
	}
}
