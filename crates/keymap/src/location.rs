use std::path::{Path, PathBuf};

/// File name used when playing locally.
pub const KEYMAP_FILE: &str = "keymap.conf";

/// Where the keymap of a session is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapLocation {
	/// Configuration directory.
	pub dir: PathBuf,
	/// Account name when connected to a server; selects a per-account file.
	pub account: Option<String>,
}

impl KeymapLocation {
	/// Local play: `<dir>/keymap.conf`.
	pub fn local(dir: impl Into<PathBuf>) -> Self {
		Self {
			dir: dir.into(),
			account: None,
		}
	}

	/// Connection mode: `<dir>/<account>.keymap`.
	pub fn account(dir: impl Into<PathBuf>, account: impl Into<String>) -> Self {
		Self {
			dir: dir.into(),
			account: Some(account.into()),
		}
	}

	/// Full path of the keymap file.
	pub fn path(&self) -> PathBuf {
		match &self.account {
			Some(account) => self.dir.join(format!("{account}.keymap")),
			None => self.dir.join(KEYMAP_FILE),
		}
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}
}
