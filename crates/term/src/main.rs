//! `nhcurses`: drives the command input engine from a real terminal.

mod cli;
mod commands;
mod logging;
mod settings;
#[cfg(test)]
mod tests;
mod ui;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, KeymapAction};
use nhcurses_input::{ExitRequest, KeyContext, MenuBackend, ResolvedCommand, Session, Turn, UiHooks};
use nhcurses_keymap::KeymapLocation;
use settings::Settings;
use tracing::info;
use ui::TerminalUi;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let config_dir = cli.config_dir().context("no configuration directory found; pass --config-dir")?;
	logging::setup_tracing(cli.verbose, Some(&config_dir));

	let settings = Settings::load(&config_dir)?.merge_cli(&cli);
	let location = match &settings.account {
		Some(account) => KeymapLocation::account(&config_dir, account),
		None => KeymapLocation::local(&config_dir),
	};

	let command = cli.command();
	if command == (Command::Keymap { action: KeymapAction::Path }) {
		println!("{}", location.path().display());
		return Ok(());
	}

	let commands = match &settings.commands {
		Some(path) => commands::load_commands(path)?,
		None => commands::demo_commands(),
	};
	let mut session = Session::start(commands, location, settings.session_options());
	info!(command = ?command, path = %session.location().path().display(), "starting");

	let result = match command {
		Command::Play => with_terminal(&mut session, &settings, play),
		Command::Keymap { action: KeymapAction::Edit } => with_terminal(&mut session, &settings, |session, ui| {
			session.show_keymap_menu(ui, false);
			Ok(())
		}),
		Command::Keymap { action: KeymapAction::Show } => with_terminal(&mut session, &settings, |session, ui| {
			session.show_keymap_menu(ui, true);
			Ok(())
		}),
		Command::Keymap { action: KeymapAction::Reset } => reset(&mut session),
		Command::Keymap { action: KeymapAction::Path } => Ok(()),
	};
	session.end();
	result
}

/// Runs `f` with the terminal in raw mode, reporting a damaged keymap first.
fn with_terminal(
	session: &mut Session,
	settings: &Settings,
	f: impl FnOnce(&mut Session, &mut TerminalUi) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
	let mut ui = TerminalUi::new(option_lines(settings)).context("failed to set up the terminal")?;
	if let Some(err) = session.take_load_error() {
		ui.message(err.user_message(), KeyContext::Notification);
	}
	f(session, &mut ui)
}

fn play(session: &mut Session, ui: &mut TerminalUi) -> anyhow::Result<()> {
	ui.push_log("Type commands; use the main menu (!) to leave.");
	loop {
		match session.get_command(ui) {
			Turn::Command(_) if ui.input_failed() => anyhow::bail!("lost the terminal"),
			Turn::Command(cmd) => ui.push_log(describe(&cmd)),
			Turn::Exit(ExitRequest::Restart) => {
				info!(mode = ?ui.follow_mode(), "restart requested");
				ui.push_log(format!("-- restarted ({:?}) --", ui.follow_mode()));
			}
			Turn::Exit(request) => {
				info!(?request, "leaving");
				return Ok(());
			}
		}
	}
}

fn reset(session: &mut Session) -> anyhow::Result<()> {
	session.reset_bindings();
	let path = session.location().path();
	session.keymap().save(session.registry(), &path).with_context(|| format!("failed to write {}", path.display()))?;
	println!("Key bindings reset: {}", path.display());
	Ok(())
}

/// One log line for a resolved command.
fn describe(cmd: &ResolvedCommand) -> String {
	let mut line = cmd.name.clone();
	if let Some(dir) = cmd.arg.dir {
		line.push_str(&format!(" dir={dir}"));
	}
	if let Some(limit) = cmd.arg.limit {
		line.push_str(&format!(" count={limit}"));
	}
	if cmd.zero_time {
		line.push_str(" (no time)");
	}
	line
}

fn option_lines(settings: &Settings) -> Vec<String> {
	vec![
		format!("no_stop\t{}", settings.no_stop),
		format!("include_debug\t{}", settings.include_debug),
		format!("account\t{}", settings.account.as_deref().unwrap_or("(none)")),
		format!(
			"commands\t{}",
			settings.commands.as_ref().map_or_else(|| "(demo list)".to_string(), |path| path.display().to_string())
		),
	]
}
