use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable overriding the log directory.
const LOG_DIR_ENV: &str = "NHCURSES_LOG_DIR";

/// Installs the global subscriber.
///
/// The terminal is in raw mode while the UI runs, so logs go to a file:
/// `$NHCURSES_LOG_DIR/nhcurses.<pid>.log`, else `<config dir>/nhcurses.log`.
/// Falls back to stderr when neither can be opened.
pub fn setup_tracing(verbose: bool, config_dir: Option<&Path>) {
	let log_path = match std::env::var_os(LOG_DIR_ENV).map(PathBuf::from) {
		Some(dir) => Some(dir.join(format!("nhcurses.{}.log", std::process::id()))),
		None => config_dir.map(|dir| dir.join("nhcurses.log")),
	};

	if let Some(log_path) = log_path
		&& let Some(dir) = log_path.parent()
		&& std::fs::create_dir_all(dir).is_ok()
		&& let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path)
	{
		let file_layer = tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false).with_target(true);
		tracing_subscriber::registry().with(filter(verbose)).with(file_layer).init();
		tracing::info!(path = %log_path.display(), "tracing initialized");
		return;
	}

	tracing_subscriber::fmt()
		.with_max_level(if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.with_writer(std::io::stderr)
		.init();
}

fn filter(verbose: bool) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("nhcurses=debug,nhcurses_input=debug,nhcurses_keymap=debug,nhcurses_registry=debug,info")
		} else {
			EnvFilter::new("nhcurses=info,nhcurses_input=info,nhcurses_keymap=info,nhcurses_registry=info,warn")
		}
	})
}
