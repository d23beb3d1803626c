use std::path::PathBuf;

use clap::Parser;

use super::*;

#[test]
fn defaults_to_play() {
	let cli = Cli::try_parse_from(["nhcurses"]).expect("parse");
	assert_eq!(cli.command(), Command::Play);
	assert!(!cli.verbose);
	assert!(cli.account.is_none());
}

#[test]
fn keymap_subcommands() {
	let cli = Cli::try_parse_from(["nhcurses", "keymap", "edit"]).expect("parse");
	assert_eq!(cli.command(), Command::Keymap { action: KeymapAction::Edit });

	let cli = Cli::try_parse_from(["nhcurses", "keymap", "path", "--account", "wizard"]).expect("parse");
	assert_eq!(cli.command(), Command::Keymap { action: KeymapAction::Path });
	assert_eq!(cli.account.as_deref(), Some("wizard"));
}

#[test]
fn global_flags_after_subcommand() {
	let cli = Cli::try_parse_from(["nhcurses", "play", "-v", "--config-dir", "/tmp/nh", "--debug-commands"]).expect("parse");
	assert!(cli.verbose);
	assert!(cli.debug_commands);
	assert_eq!(cli.config_dir(), Some(PathBuf::from("/tmp/nh")));
}

#[test]
fn keymap_needs_an_action() {
	assert!(Cli::try_parse_from(["nhcurses", "keymap"]).is_err());
	assert!(Cli::try_parse_from(["nhcurses", "keymap", "bogus"]).is_err());
}
