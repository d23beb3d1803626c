//! Optional `settings.toml` in the configuration directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use nhcurses_input::SessionOptions;
use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;


/// File name of the settings file.
pub const SETTINGS_FILE: &str = "settings.toml";

/// Values read from `settings.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	pub no_stop: bool,
	pub include_debug: bool,
	pub account: Option<String>,
	/// Command list file; relative paths are resolved against the config dir.
	pub commands: Option<PathBuf>,
}

impl Settings {
	/// Reads `<dir>/settings.toml`, returning defaults when it does not exist.
	pub fn load(dir: &Path) -> anyhow::Result<Self> {
		let path = dir.join(SETTINGS_FILE);
		let text = match std::fs::read_to_string(&path) {
			Ok(text) => text,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "no settings file");
				return Ok(Self::default());
			}
			Err(err) => return Err(err).with_context(|| format!("failed to read {}", path.display())),
		};
		let mut settings: Settings = toml::from_str(&text).with_context(|| format!("invalid settings in {}", path.display()))?;
		if let Some(commands) = &settings.commands
			&& commands.is_relative()
		{
			settings.commands = Some(dir.join(commands));
		}
		Ok(settings)
	}

	/// Applies command-line overrides.
	pub fn merge_cli(mut self, cli: &Cli) -> Self {
		self.no_stop |= cli.no_stop;
		self.include_debug |= cli.debug_commands;
		if cli.account.is_some() {
			self.account = cli.account.clone();
		}
		if cli.commands.is_some() {
			self.commands = cli.commands.clone();
		}
		self
	}

	pub fn session_options(&self) -> SessionOptions {
		SessionOptions {
			include_debug: self.include_debug,
			no_stop: self.no_stop,
		}
	}
}
