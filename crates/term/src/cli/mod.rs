//! CLI schema for the nhcurses binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[cfg(test)]
mod tests;

/// Environment variable naming the configuration directory.
pub const CONFIG_DIR_ENV: &str = "NHCURSES_CONFIG_DIR";

#[derive(Parser, Debug)]
#[command(name = "nhcurses")]
#[command(about = "Curses client key bindings and command input")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Directory holding keymap.conf and settings.toml
	#[arg(long, value_name = "DIR", global = true)]
	pub config_dir: Option<PathBuf>,

	/// Use the per-account keymap of a server account
	#[arg(long, value_name = "NAME", global = true)]
	pub account: Option<String>,

	/// TOML file with the game's command list
	#[arg(long, value_name = "PATH", global = true)]
	pub commands: Option<PathBuf>,

	/// Offer debug-only commands at the extended command prompt
	#[arg(long, global = true)]
	pub debug_commands: bool,

	/// Refuse to suspend the process
	#[arg(long, global = true)]
	pub no_stop: bool,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute (defaults to `play`).
	#[command(subcommand)]
	pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Read commands from the keyboard and print what they resolve to
	Play,
	/// Inspect or change key bindings
	Keymap {
		/// Keymap subcommand action.
		#[command(subcommand)]
		action: KeymapAction,
	},
}

/// Keymap management subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapAction {
	/// Open the interactive key binding editor
	Edit,
	/// List every command with its keys
	Show,
	/// Restore the default bindings and save them
	Reset,
	/// Print the keymap file location
	Path,
}

impl Cli {
	/// Returns the subcommand, defaulting to [`Command::Play`].
	pub fn command(&self) -> Command {
		self.command.clone().unwrap_or(Command::Play)
	}

	/// Resolves the configuration directory.
	///
	/// `--config-dir` wins over `$NHCURSES_CONFIG_DIR`, which wins over the
	/// platform config directory.
	pub fn config_dir(&self) -> Option<PathBuf> {
		self.config_dir
			.clone()
			.or_else(|| std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()).map(PathBuf::from))
			.or_else(|| dirs::config_dir().map(|dir| dir.join("nhcurses")))
	}
}
