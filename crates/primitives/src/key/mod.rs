//! Integer key codes as delivered by the terminal layer.
//!
//! The code space is dense so that a keymap can be a flat array:
//!
//! * `0x000..=0x0FF` raw bytes, including meta bytes `128..=255`
//! * `0x100..=0x17F` Alt + ASCII ([`KeyCode::alt`])
//! * `0x180..=0x1FF` function and keypad keys
//!
//! Everything above [`KEY_MAX`] is synthetic (sidebar and map clicks,
//! escape, interrupt signals) and can never be bound.

#[cfg(feature = "crossterm")]
mod terminal;
mod name;

#[cfg(test)]
mod tests;

use std::fmt;

/// Highest bindable key code.
pub const KEY_MAX: u32 = 0x1FF;

/// Alt modifier bit for ASCII keys.
pub const KEY_ALT: u32 = 0x100;

const KEY_F0: u32 = 0x1A0;
const MAX_FUNCTION_KEY: u8 = 24;
const MAP_CLICK_BASE: u32 = KEY_MAX + 256;

/// A single key press.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyCode(u32);

/// Coarse classification of a [`KeyCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
	/// A key that can appear in the keymap.
	Bindable,
	/// Click on an inventory sidebar item (1-based slot).
	SidebarItem(u8),
	/// The terminal's escape key as reported outside the byte range.
	Escape,
	/// The game server interrupted the read.
	Signal,
	/// The terminal was resized.
	Resize,
	/// Click on the map window (offset from the first map click code).
	MapClick(u32),
	/// Anything else above [`KEY_MAX`].
	Other,
}

impl KeyCode {
	pub const DOWN: Self = Self(0x180);
	pub const UP: Self = Self(0x181);
	pub const LEFT: Self = Self(0x182);
	pub const RIGHT: Self = Self(0x183);
	pub const HOME: Self = Self(0x184);
	pub const BACKSPACE: Self = Self(0x185);
	pub const END: Self = Self(0x186);
	pub const PPAGE: Self = Self(0x187);
	pub const NPAGE: Self = Self(0x188);
	pub const IC: Self = Self(0x189);
	pub const DC: Self = Self(0x18A);
	pub const ENTER: Self = Self(0x18B);
	pub const BACKTAB: Self = Self(0x18C);

	/// Keypad upper left.
	pub const A1: Self = Self(0x190);
	/// Keypad upper middle.
	pub const A2: Self = Self(0x191);
	/// Keypad upper right.
	pub const A3: Self = Self(0x192);
	/// Keypad middle left.
	pub const B1: Self = Self(0x193);
	/// Keypad center.
	pub const B2: Self = Self(0x194);
	/// Keypad middle right.
	pub const B3: Self = Self(0x195);
	/// Keypad lower left.
	pub const C1: Self = Self(0x196);
	/// Keypad lower middle.
	pub const C2: Self = Self(0x197);
	/// Keypad lower right.
	pub const C3: Self = Self(0x198);
	/// Keypad bottom row (insert/zero).
	pub const D1: Self = Self(0x199);

	/// Escape reported by the terminal layer as a key rather than a byte.
	pub const ESCAPE: Self = Self(KEY_MAX + 128);
	/// The server already has a command; the read was interrupted.
	pub const SIGNAL: Self = Self(KEY_MAX + 129);
	/// Terminal resize notification.
	pub const RESIZE: Self = Self(KEY_MAX + 130);

	/// The ESC byte.
	pub const ESC_BYTE: Self = Self(0x1B);
	/// Carriage return, as produced by the Enter key in raw mode.
	pub const RETURN: Self = Self(b'\r' as u32);
	/// The space bar.
	pub const SPACE: Self = Self(b' ' as u32);

	/// Wraps a raw code.
	pub const fn new(raw: u32) -> Self {
		Self(raw)
	}

	/// Returns the raw code.
	pub const fn raw(self) -> u32 {
		self.0
	}

	/// Key for an ASCII character.
	pub const fn char(c: char) -> Self {
		Self(c as u32)
	}

	/// Control character for `c` (`^C` is `0x03`).
	pub const fn ctrl(c: char) -> Self {
		Self(0x1f & c as u32)
	}

	/// Meta byte for `c` (high bit set).
	pub const fn meta(c: char) -> Self {
		Self(0x80 | (c as u32 & 0x7f))
	}

	/// Alt + ASCII `c` as reported by terminals that do not send meta bytes.
	pub const fn alt(c: char) -> Self {
		Self(KEY_ALT | (c as u32 & 0x7f))
	}

	/// Function key `F<n>` for `n` in `1..=24`.
	pub fn function(n: u8) -> Option<Self> {
		(1..=MAX_FUNCTION_KEY).contains(&n).then(|| Self(KEY_F0 + n as u32))
	}

	/// Synthetic key for a click on sidebar slot `slot` (`1..=127`).
	pub fn sidebar_item(slot: u8) -> Option<Self> {
		(1..128).contains(&slot).then(|| Self(KEY_MAX + slot as u32))
	}

	/// Synthetic key for a click at map offset `offset`.
	pub const fn map_click(offset: u32) -> Self {
		Self(MAP_CLICK_BASE + offset)
	}

	/// Returns the table index for bindable keys.
	pub fn index(self) -> Option<usize> {
		self.is_bindable().then_some(self.0 as usize)
	}

	/// Returns true for codes in `0..=KEY_MAX`.
	pub const fn is_bindable(self) -> bool {
		self.0 <= KEY_MAX
	}

	/// Classifies this key.
	pub fn kind(self) -> KeyKind {
		match self.0 {
			0..=KEY_MAX => KeyKind::Bindable,
			raw if raw < KEY_MAX + 128 => KeyKind::SidebarItem((raw - KEY_MAX) as u8),
			_ if self == Self::ESCAPE => KeyKind::Escape,
			_ if self == Self::SIGNAL => KeyKind::Signal,
			_ if self == Self::RESIZE => KeyKind::Resize,
			raw if raw >= MAP_CLICK_BASE => KeyKind::MapClick(raw - MAP_CLICK_BASE),
			_ => KeyKind::Other,
		}
	}

	/// Escape byte or escape key.
	pub fn is_escape(self) -> bool {
		self == Self::ESC_BYTE || self == Self::ESCAPE
	}

	/// The curses backspace key.
	pub fn is_backspace(self) -> bool {
		self == Self::BACKSPACE
	}

	/// Returns the value of an ASCII digit key.
	pub fn as_digit(self) -> Option<u32> {
		match self.0 {
			0x30..=0x39 => Some(self.0 - 0x30),
			_ => None,
		}
	}

	/// Returns the printable ASCII character for this key, if any.
	pub fn as_char(self) -> Option<char> {
		match self.0 {
			0x20..=0x7e => char::from_u32(self.0),
			_ => None,
		}
	}

	/// Human-readable key name used in menus and messages.
	pub fn display_name(self) -> String {
		name::display_name(self)
	}
}

impl fmt::Debug for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "KeyCode({:#x} {})", self.0, self.display_name())
	}
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.display_name())
	}
}

impl fmt::LowerHex for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(&self.0, f)
	}
}

impl From<u8> for KeyCode {
	fn from(byte: u8) -> Self {
		Self(byte as u32)
	}
}
