//! Line-oriented keymap file.
//!
//! ```text
//! 6c east
//! 1b0 debug_only_command
//! EXT pray
//! NOEXT inventory
//! ```
//!
//! Binding lines start with a hex key code. `EXT`/`NOEXT` lines set the
//! extended-command state of a name. Names the registry does not know are
//! kept in [`UnknownBindings`](crate::UnknownBindings) and written back
//! unchanged.

#[cfg(test)]
mod tests;

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write as _};
use std::path::Path;

use nhcurses_primitives::{KEY_MAX, KeyCode};
use nhcurses_registry::{CommandFlags, CommandRegistry};
use tracing::{debug, info, warn};

use crate::{Keymap, KeymapError};

/// Outcome of reading a keymap file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
	/// Whether a file existed at all.
	pub found: bool,
	/// Binding lines applied to known commands.
	pub bound: usize,
	/// Binding lines preserved for unknown commands.
	pub unknown: usize,
	/// `EXT`/`NOEXT` lines applied.
	pub ext: usize,
	/// Lines ignored, such as keys out of range.
	pub skipped: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Record<'a> {
	Ext { name: &'a str, ext: bool },
	Bind { key: KeyCode, name: &'a str },
	Skip,
}

impl Keymap {
	/// Overlays the bindings stored at `path` onto the current table.
	///
	/// A missing file leaves the keymap untouched. A corrupt file resets the
	/// keymap to its defaults before the error is returned; a file in the old
	/// format is also overwritten with those defaults.
	pub fn load(&mut self, registry: &mut CommandRegistry, path: &Path) -> Result<LoadReport, KeymapError> {
		let bytes = match fs::read(path) {
			Ok(bytes) => bytes,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "no keymap file, using defaults");
				return Ok(LoadReport::default());
			}
			Err(source) => {
				return Err(KeymapError::Io {
					path: path.to_path_buf(),
					source,
				});
			}
		};

		// Bytes that are not UTF-8 are replaced, not rejected.
		let data = String::from_utf8_lossy(&bytes);
		self.unknown.clear();
		let records = match parse(&data) {
			Ok(records) => records,
			Err(err) => {
				warn!(path = %path.display(), error = %err, "keymap file rejected, reverting to defaults");
				self.reset_to_defaults(registry);
				if matches!(err, KeymapError::LegacyFormat { .. })
					&& let Err(save_err) = self.save(registry, path)
				{
					warn!(path = %path.display(), error = %save_err, "failed to rewrite keymap");
				}
				return Err(err);
			}
		};

		let mut report = LoadReport {
			found: true,
			..LoadReport::default()
		};
		for record in records {
			match record {
				Record::Ext { name, ext } => {
					report.ext += 1;
					match registry.lookup(name) {
						Some(id) => registry.get_mut(id).flags.set(CommandFlags::EXT, ext),
						None => {
							let slot = self.unknown.intern(name);
							self.unknown.set_ext(slot, ext);
						}
					}
				}
				Record::Bind { key, name } => match registry.lookup(name) {
					Some(id) => {
						self.bind(key, id);
						report.bound += 1;
					}
					None => {
						self.bind_unknown(key, name);
						report.unknown += 1;
					}
				},
				Record::Skip => report.skipped += 1,
			}
		}

		info!(
			path = %path.display(),
			bound = report.bound,
			unknown = report.unknown,
			skipped = report.skipped,
			"keymap loaded"
		);
		Ok(report)
	}

	/// Renders the keymap file contents.
	///
	/// Every bound key in `1..=KEY_MAX` gets a line, then every game command
	/// and every unknown command gets an `EXT` or `NOEXT` line.
	pub fn render(&self, registry: &CommandRegistry) -> String {
		let mut out = String::new();
		for raw in 1..=KEY_MAX {
			let key = KeyCode::new(raw);
			let name = match self.table.resolve(key) {
				Some(id) => registry.get(id).name.as_str(),
				None => match self.unknown.get(key) {
					Some(cmd) => cmd.name.as_str(),
					None => continue,
				},
			};
			let _ = writeln!(out, "{key:x} {name}");
		}
		for id in registry.game_ids() {
			let cmd = registry.get(id);
			let _ = writeln!(out, "{} {}", ext_keyword(cmd.is_extended()), cmd.name);
		}
		for cmd in self.unknown.commands() {
			let _ = writeln!(out, "{} {}", ext_keyword(cmd.ext), cmd.name);
		}
		out
	}

	/// Writes the keymap to `path`, replacing the previous file.
	pub fn save(&self, registry: &CommandRegistry, path: &Path) -> io::Result<()> {
		if let Some(parent) = path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)?;
		}
		let mut writer = BufWriter::new(File::create(path)?);
		writer.write_all(self.render(registry).as_bytes())?;
		writer.flush()?;
		debug!(path = %path.display(), "keymap saved");
		Ok(())
	}
}

fn ext_keyword(ext: bool) -> &'static str {
	if ext { "EXT" } else { "NOEXT" }
}

/// Parses every line, stopping at the first line that invalidates the file.
fn parse(data: &str) -> Result<Vec<Record<'_>>, KeymapError> {
	let mut records = Vec::new();
	for (idx, line) in data.lines().enumerate() {
		if line.is_empty() {
			continue;
		}
		records.push(parse_line(idx + 1, line)?);
	}
	Ok(records)
}

fn parse_line(line_no: usize, line: &str) -> Result<Record<'_>, KeymapError> {
	let (word, name) = match line.find(char::is_whitespace) {
		Some(split) => (&line[..split], line[split..].trim()),
		None => (line, ""),
	};

	if name.starts_with('-') {
		return Err(KeymapError::LegacyFormat { line: line_no });
	}

	let ext = match word {
		"EXT" => Some(true),
		"NOEXT" => Some(false),
		_ => None,
	};
	if let Some(ext) = ext {
		return Ok(if name.is_empty() { Record::Skip } else { Record::Ext { name, ext } });
	}

	let key = parse_hex_prefix(word).filter(|&key| key != 0).ok_or_else(|| KeymapError::BadKey {
		line: line_no,
		token: word.to_string(),
	})?;
	match u32::try_from(key) {
		Ok(raw) if raw <= KEY_MAX && !name.is_empty() => Ok(Record::Bind { key: KeyCode::new(raw), name }),
		_ => Ok(Record::Skip),
	}
}

/// Reads a leading hex number the way `strtol(.., 16)` does.
///
/// Accepts an optional sign and `0x` prefix and stops at the first non-hex
/// character. Returns `None` when no digits were consumed.
fn parse_hex_prefix(word: &str) -> Option<i64> {
	let (negative, rest) = match word.as_bytes().first() {
		Some(b'-') => (true, &word[1..]),
		Some(b'+') => (false, &word[1..]),
		_ => (false, word),
	};
	let digits = match rest.get(..2) {
		Some("0x" | "0X") if rest[2..].starts_with(|c: char| c.is_ascii_hexdigit()) => &rest[2..],
		_ => rest,
	};
	let len = digits.bytes().take_while(u8::is_ascii_hexdigit).count();
	if len == 0 {
		return None;
	}
	let value = digits[..len]
		.bytes()
		.fold(0i64, |acc, b| acc.saturating_mul(16).saturating_add(hex_value(b)));
	Some(if negative { -value } else { value })
}

fn hex_value(b: u8) -> i64 {
	match b {
		b'0'..=b'9' => (b - b'0') as i64,
		b'a'..=b'f' => (b - b'a' + 10) as i64,
		b'A'..=b'F' => (b - b'A' + 10) as i64,
		_ => 0,
	}
}
