//! Game command lists.
//!
//! The binary has no game attached, so it ships a demo list of common game
//! commands. A TOML file can replace it:
//!
//! ```toml
//! [[command]]
//! name = "pray"
//! desc = "pray to your god"
//! default_key = "M-p"
//! flags = ["ext"]
//! ```
//!
//! Keys are written the way menus display them (`s`, `^D`, `M-p`, `A-p`,
//! `F5`, `SPACE`, `KP_5`).

use std::path::Path;

use anyhow::{Context, bail};
use nhcurses_primitives::{KEY_MAX, KeyCode};
use nhcurses_registry::{CommandDescriptor, CommandFlags, validate_commands};
use serde::Deserialize;
use tracing::info;


const DIR_MOVE: CommandFlags = CommandFlags::ARG_DIR.union(CommandFlags::MOVE);
const EXT_NOTIME: CommandFlags = CommandFlags::EXT.union(CommandFlags::NOTIME);

/// Demo game commands: name, description, default key, flags.
static DEMO_COMMANDS: &[(&str, &str, Option<KeyCode>, CommandFlags)] = &[
	("move", "move one step in a direction", None, DIR_MOVE),
	("run", "run until something is in the way", None, DIR_MOVE),
	("go", "rush until something interesting is seen", Some(KeyCode::char('G')), DIR_MOVE),
	("fight", "fight a monster even if you only guess it is there", Some(KeyCode::char('F')), DIR_MOVE),
	("interrupt", "stop what you are doing", None, CommandFlags::NOTIME),
	("redraw", "redraw the screen", Some(KeyCode::ctrl('r')), CommandFlags::NOTIME),
	("repeat", "repeat the previous command", Some(KeyCode::ctrl('a')), CommandFlags::empty()),
	("apply", "apply or use a tool", Some(KeyCode::char('a')), CommandFlags::empty()),
	("close", "close a door", Some(KeyCode::char('c')), CommandFlags::ARG_DIR),
	("open", "open a door", Some(KeyCode::char('o')), CommandFlags::ARG_DIR),
	("kick", "kick something", Some(KeyCode::ctrl('d')), CommandFlags::ARG_DIR),
	("drop", "drop an item", Some(KeyCode::char('d')), CommandFlags::empty()),
	("eat", "eat something", Some(KeyCode::char('e')), CommandFlags::empty()),
	("fire", "fire ammunition from your quiver", Some(KeyCode::char('f')), CommandFlags::ARG_DIR),
	("inventory", "show your inventory", Some(KeyCode::char('i')), CommandFlags::NOTIME),
	("look", "look at what is here", Some(KeyCode::char(':')), CommandFlags::NOTIME),
	("pickup", "pick up items from the floor", Some(KeyCode::char(',')), CommandFlags::empty()),
	("quaff", "drink something", Some(KeyCode::char('q')), CommandFlags::empty()),
	("read", "read a scroll or spellbook", Some(KeyCode::char('r')), CommandFlags::empty()),
	("search", "search for hidden doors and traps", Some(KeyCode::char('s')), CommandFlags::ARG_LIMIT),
	("wait", "rest one move", Some(KeyCode::char('.')), CommandFlags::ARG_LIMIT),
	("throw", "throw something", Some(KeyCode::char('t')), CommandFlags::ARG_DIR),
	("wear", "wear a piece of armor", Some(KeyCode::char('W')), CommandFlags::empty()),
	("wield", "wield a weapon", Some(KeyCode::char('w')), CommandFlags::empty()),
	("zap", "zap a wand", Some(KeyCode::char('z')), CommandFlags::empty()),
	("cast", "cast a spell", Some(KeyCode::char('Z')), CommandFlags::empty()),
	("chat", "talk to someone", Some(KeyCode::meta('c')), CommandFlags::EXT),
	("enhance", "advance or check weapon and spell skills", Some(KeyCode::meta('e')), EXT_NOTIME),
	("loot", "loot a box on the floor", Some(KeyCode::meta('l')), CommandFlags::EXT),
	("offer", "offer a sacrifice to the gods", Some(KeyCode::meta('o')), CommandFlags::EXT),
	("pray", "pray to the gods for help", Some(KeyCode::meta('p')), CommandFlags::EXT),
	("pray_check", "check whether praying is safe", None, EXT_NOTIME.union(CommandFlags::DEBUG)),
	("wizwish", "wish for an object", Some(KeyCode::ctrl('w')), CommandFlags::EXT.union(CommandFlags::DEBUG)),
	("overview", "show an overview of the dungeon", Some(KeyCode::ctrl('o')), EXT_NOTIME.union(CommandFlags::MAINMENU)),
	("attributes", "show your attributes", Some(KeyCode::ctrl('x')), CommandFlags::MAINMENU.union(CommandFlags::NOTIME)),
	("discoveries", "show what object types have been discovered", Some(KeyCode::char('\\')), CommandFlags::HELP.union(CommandFlags::NOTIME)),
	("history", "show a short history of the game", Some(KeyCode::char('V')), CommandFlags::HELP.union(CommandFlags::NOTIME)),
];

/// Returns the demo command list.
pub fn demo_commands() -> Vec<CommandDescriptor> {
	DEMO_COMMANDS
		.iter()
		.map(|&(name, desc, key, flags)| {
			let cmd = CommandDescriptor::new(name, desc, flags);
			match key {
				Some(key) => cmd.with_default_key(key),
				None => cmd,
			}
		})
		.collect()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandFile {
	#[serde(rename = "command", default)]
	commands: Vec<CommandEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CommandEntry {
	name: String,
	#[serde(default)]
	desc: String,
	default_key: Option<String>,
	alt_key: Option<String>,
	#[serde(default)]
	flags: Vec<String>,
}

/// Reads a command list file.
pub fn load_commands(path: &Path) -> anyhow::Result<Vec<CommandDescriptor>> {
	let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
	let commands = parse_commands(&text).with_context(|| format!("invalid command list {}", path.display()))?;
	info!(path = %path.display(), commands = commands.len(), "command list loaded");
	Ok(commands)
}

/// Parses the TOML command list format.
pub fn parse_commands(text: &str) -> anyhow::Result<Vec<CommandDescriptor>> {
	let file: CommandFile = toml::from_str(text)?;
	let commands = file.commands.into_iter().map(CommandEntry::into_descriptor).collect::<anyhow::Result<Vec<_>>>()?;
	validate_commands(&commands)?;
	Ok(commands)
}

impl CommandEntry {
	fn into_descriptor(self) -> anyhow::Result<CommandDescriptor> {
		let mut flags = CommandFlags::empty();
		for name in &self.flags {
			let Some(flag) = CommandFlags::from_name(&name.to_ascii_uppercase()) else {
				bail!("{}: unknown flag {name:?}", self.name);
			};
			if flag.intersects(CommandFlags::UI | CommandFlags::INTERNAL) {
				bail!("{}: flag {name:?} is reserved for client commands", self.name);
			}
			flags |= flag;
		}

		let mut cmd = CommandDescriptor::new(self.name, self.desc, flags);
		if let Some(spec) = &self.default_key {
			cmd.default_key = Some(parse_key(spec).with_context(|| format!("{}: unknown key {spec:?}", cmd.name))?);
		}
		if let Some(spec) = &self.alt_key {
			cmd.alt_key = Some(parse_key(spec).with_context(|| format!("{}: unknown key {spec:?}", cmd.name))?);
		}
		Ok(cmd)
	}
}

/// Finds the bindable key whose display name is `spec`.
pub fn parse_key(spec: &str) -> Option<KeyCode> {
	(1..=KEY_MAX).map(KeyCode::new).find(|key| key.display_name() == spec)
}
