use nhcurses_input::{CommandArg, ResolvedCommand};
use nhcurses_primitives::Direction;
use pretty_assertions::assert_eq;

use super::{describe, option_lines};
use crate::settings::Settings;

#[test]
fn describes_arguments() {
	let cmd = ResolvedCommand::new("move", CommandArg::with_dir(Direction::NE));
	assert_eq!(describe(&cmd), "move dir=north_east");

	let cmd = ResolvedCommand {
		name: "search".to_string(),
		arg: CommandArg { dir: None, limit: Some(20) },
		zero_time: false,
	};
	assert_eq!(describe(&cmd), "search count=20");

	let cmd = ResolvedCommand {
		zero_time: true,
		..ResolvedCommand::new("inventory", CommandArg::default())
	};
	assert_eq!(describe(&cmd), "inventory (no time)");
}

#[test]
fn option_lines_show_defaults() {
	let lines = option_lines(&Settings::default());
	assert_eq!(lines, ["no_stop\tfalse", "include_debug\tfalse", "account\t(none)", "commands\t(demo list)"]);
}
