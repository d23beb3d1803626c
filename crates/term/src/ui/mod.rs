//! Crossterm frontend for a [`Session`](nhcurses_input::Session).
//!
//! The screen has a message line at the top and a scrolling log of resolved
//! commands below it. Menus take over the whole screen until dismissed.

mod layout;

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use nhcurses_input::{FollowMode, KeyContext, KeySource, Menu, MenuBackend, MenuView, NextCommand, PickMode, RowKind, UiHooks};
use nhcurses_primitives::KeyCode;
use tracing::{debug, warn};

/// Rows used by the message line and the gap under it.
const HEADER_ROWS: u16 = 2;
/// Most messages kept for the previous-messages window.
const MAX_HISTORY: usize = 200;
/// Most log lines kept for the main screen.
const MAX_LOG: usize = 500;

/// Raw-mode terminal frontend.
///
/// Dropping it restores the terminal.
pub struct TerminalUi {
	stdout: Stdout,
	message: String,
	history: Vec<String>,
	log: Vec<String>,
	options: Vec<String>,
	autopickup: Option<bool>,
	follow_mode: FollowMode,
	input_failed: bool,
}

impl TerminalUi {
	/// Switches the terminal to raw mode on the alternate screen.
	///
	/// `options` are the lines shown by the options commands.
	pub fn new(options: Vec<String>) -> io::Result<Self> {
		terminal::enable_raw_mode()?;
		let mut stdout = io::stdout();
		execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide, terminal::Clear(ClearType::All))?;
		Ok(Self {
			stdout,
			message: String::new(),
			history: Vec::new(),
			log: Vec::new(),
			options,
			autopickup: Some(false),
			follow_mode: FollowMode::Play,
			input_failed: false,
		})
	}

	/// Returns true once reading the terminal has failed.
	pub fn input_failed(&self) -> bool {
		self.input_failed
	}

	/// Appends a line to the main screen log.
	pub fn push_log(&mut self, line: impl Into<String>) {
		if self.log.len() >= MAX_LOG {
			self.log.remove(0);
		}
		self.log.push(line.into());
		report(self.draw_screen());
	}

	fn draw_screen(&mut self) -> io::Result<()> {
		let (width, height) = terminal::size().unwrap_or((80, 24));
		queue!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0), Print(clip(&self.message, width)))?;
		let body = height.saturating_sub(HEADER_ROWS) as usize;
		let start = self.log.len().saturating_sub(body);
		for (row, line) in self.log[start..].iter().enumerate() {
			queue!(self.stdout, cursor::MoveTo(0, HEADER_ROWS + row as u16), Print(clip(line, width)))?;
		}
		self.stdout.flush()
	}

	fn draw_message_line(&mut self, text: &str, show_cursor: bool) -> io::Result<()> {
		let (width, _) = terminal::size().unwrap_or((80, 24));
		queue!(self.stdout, cursor::MoveTo(0, 0), terminal::Clear(ClearType::CurrentLine), Print(clip(text, width)))?;
		if show_cursor {
			queue!(self.stdout, cursor::Show)?;
		} else {
			queue!(self.stdout, cursor::Hide)?;
		}
		self.stdout.flush()
	}

	fn remember(&mut self, text: &str) {
		if self.history.len() >= MAX_HISTORY {
			self.history.remove(0);
		}
		self.history.push(text.to_string());
	}

	fn next_key(&mut self, blocking: bool) -> KeyCode {
		loop {
			if !blocking {
				match event::poll(Duration::ZERO) {
					Ok(true) => {}
					Ok(false) => return KeyCode::SIGNAL,
					Err(err) => return self.fail(err),
				}
			}
			match event::read() {
				Ok(Event::Key(event)) => {
					if let Some(key) = KeyCode::from_crossterm(&event) {
						return key;
					}
				}
				Ok(Event::Resize(..)) => return KeyCode::RESIZE,
				Ok(_) => {}
				Err(err) => return self.fail(err),
			}
		}
	}

	fn fail(&mut self, err: io::Error) -> KeyCode {
		warn!(error = %err, "terminal read failed");
		self.input_failed = true;
		KeyCode::SIGNAL
	}

	fn draw_menu_page(&mut self, view: &MenuView, lines: &[String], page: std::ops::Range<usize>, footer: &str) -> io::Result<()> {
		let (width, _) = terminal::size().unwrap_or((80, 24));
		let accels = layout::page_accels(view, page.clone());
		queue!(
			self.stdout,
			terminal::Clear(ClearType::All),
			cursor::MoveTo(0, 0),
			SetAttribute(Attribute::Bold),
			Print(clip(&view.title, width)),
			SetAttribute(Attribute::Reset)
		)?;
		for (screen_row, idx) in page.enumerate() {
			let row = &view.rows[idx];
			let text = match accels.iter().find(|(item, _)| *item == idx) {
				Some((_, letter)) => format!("{letter} - {}", lines[idx]),
				None => format!("    {}", lines[idx]),
			};
			queue!(self.stdout, cursor::MoveTo(0, 2 + screen_row as u16))?;
			if row.kind == RowKind::Heading {
				queue!(self.stdout, SetAttribute(Attribute::Underlined), Print(clip(&text, width)), SetAttribute(Attribute::Reset))?;
			} else {
				queue!(self.stdout, Print(clip(&text, width)))?;
			}
		}
		let (_, height) = terminal::size().unwrap_or((80, 24));
		queue!(self.stdout, cursor::MoveTo(0, height.saturating_sub(1)), Print(clip(footer, width)))?;
		self.stdout.flush()
	}
}

impl Drop for TerminalUi {
	fn drop(&mut self) {
		let _ = execute!(self.stdout, terminal::LeaveAlternateScreen, cursor::Show);
		let _ = terminal::disable_raw_mode();
	}
}

impl KeySource for TerminalUi {
	fn read_key(&mut self, blocking: bool, _allow_mouse: bool, ctx: KeyContext) -> KeyCode {
		let key = self.next_key(blocking);
		debug!(key = %key, ?ctx, "key read");
		key
	}
}

impl MenuBackend for TerminalUi {
	fn display_menu(&mut self, view: &MenuView) -> Option<usize> {
		let (_, height) = terminal::size().unwrap_or((80, 24));
		let pages = layout::paginate(view.rows.len(), height.saturating_sub(4) as usize);
		let lines = layout::align_columns(view);
		let mut page = 0;

		let picked = loop {
			let last = page + 1 == pages.len();
			let footer = match (pages.len(), view.pick) {
				(1, PickMode::None) => "(end)".to_string(),
				(1, PickMode::One) => "(pick a letter, ESC to cancel)".to_string(),
				(total, _) => format!("({} of {total}; < > to turn pages)", page + 1),
			};
			report(self.draw_menu_page(view, &lines, pages[page].clone(), &footer));

			let key = self.next_key(true);
			if key.is_escape() || self.input_failed {
				break None;
			}
			match key.as_char() {
				Some('>') if !last => page += 1,
				Some('<') if page > 0 => page -= 1,
				_ if key == KeyCode::NPAGE && !last => page += 1,
				_ if key == KeyCode::PPAGE && page > 0 => page -= 1,
				Some(' ') if !last => page += 1,
				_ if key == KeyCode::RETURN || key == KeyCode::SPACE => break None,
				Some(c) if view.pick == PickMode::One => {
					if let Some(&(idx, _)) = layout::page_accels(view, pages[page].clone()).iter().find(|(_, letter)| *letter == c) {
						break Some(idx);
					}
				}
				_ if view.pick == PickMode::None && last => break None,
				_ => {}
			}
		};

		report(self.draw_screen());
		picked
	}

	fn message(&mut self, text: &str, ctx: KeyContext) -> KeyCode {
		let key = if ctx == KeyContext::Notification {
			self.remember(text);
			report(self.draw_message_line(&format!("{text} --More--"), false));
			loop {
				let key = self.next_key(true);
				if key == KeyCode::SPACE || key == KeyCode::RETURN || key.is_escape() || self.input_failed {
					break key;
				}
			}
		} else {
			report(self.draw_message_line(text, false));
			self.next_key(true)
		};
		self.message.clear();
		report(self.draw_screen());
		key
	}

	fn print_message(&mut self, text: &str) {
		self.remember(text);
		self.message = text.to_string();
		report(self.draw_message_line(text, false));
	}

	fn yes_no(&mut self, prompt: &str, choices: &str, default: char) -> char {
		report(self.draw_message_line(&format!("{prompt} [{choices}] ({default})"), false));
		let answer = loop {
			let key = self.next_key(true);
			if key.is_escape() || key == KeyCode::RETURN || key == KeyCode::SPACE || self.input_failed {
				break default;
			}
			if let Some(c) = key.as_char()
				&& choices.contains(c)
			{
				break c;
			}
		};
		self.message.clear();
		report(self.draw_screen());
		answer
	}

	fn read_extended_command(&mut self, names: &[&str], descs: &[&str]) -> Option<String> {
		let mut input = String::new();
		let answer = loop {
			let matches: Vec<usize> = (0..names.len()).filter(|&idx| !input.is_empty() && names[idx].starts_with(input.as_str())).collect();
			let hint = match matches.as_slice() {
				[only] => format!("# {input}    {}", descs.get(*only).copied().unwrap_or("")),
				_ => format!("# {input}"),
			};
			report(self.draw_message_line(&hint, true));

			let key = self.next_key(true);
			if key.is_escape() || self.input_failed {
				break None;
			}
			if key == KeyCode::RETURN {
				break Some(input);
			}
			if key.is_backspace() || key == KeyCode::new(0x7f) || key == KeyCode::ctrl('h') {
				input.pop();
			} else if key == KeyCode::char('\t') {
				if let [only] = matches.as_slice() {
					input = names[*only].to_string();
				}
			} else if let Some(c) = key.as_char() {
				input.push(c);
			}
		};
		report(self.draw_message_line("", false));
		report(self.draw_screen());
		answer
	}
}

impl UiHooks for TerminalUi {
	fn display_options(&mut self) {
		let mut menu: Menu<()> = Menu::new("Options", PickMode::None);
		for line in self.options.clone() {
			menu.text(line);
		}
		menu.text(format!("autopickup\t{}", on_off(self.autopickup.unwrap_or(false))));
		menu.show(self);
	}

	fn print_options(&mut self) {
		let mut menu: Menu<()> = Menu::new("Current options", PickMode::None);
		menu.heading("Option\tValue");
		for line in self.options.clone() {
			menu.text(line);
		}
		menu.show(self);
	}

	fn show_previous_messages(&mut self) {
		let mut menu: Menu<()> = Menu::new("Previous messages", PickMode::None);
		for line in self.history.clone() {
			menu.text(line);
		}
		menu.show(self);
	}

	fn suspend(&mut self) -> bool {
		debug!("suspension not supported by this frontend");
		false
	}

	fn autopickup(&self) -> Option<bool> {
		self.autopickup
	}

	fn set_autopickup(&mut self, on: bool) {
		self.autopickup = Some(on);
	}

	fn follow_mode(&self) -> FollowMode {
		self.follow_mode
	}

	fn set_follow_mode(&mut self, mode: FollowMode) {
		self.follow_mode = mode;
	}

	fn redraw(&mut self) {
		report(self.draw_screen());
	}

	fn sidebar_item_action(&mut self, _slot: u8) -> Option<NextCommand> {
		None
	}
}

fn on_off(on: bool) -> &'static str {
	if on { "on" } else { "off" }
}

fn clip(text: &str, width: u16) -> String {
	text.chars().take(width as usize).collect()
}

fn report(result: io::Result<()>) {
	if let Err(err) = result {
		warn!(error = %err, "terminal write failed");
	}
}
