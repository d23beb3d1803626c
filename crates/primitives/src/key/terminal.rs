use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::KeyCode;

impl KeyCode {
	/// Converts a crossterm key event into a curses-style key code.
	///
	/// Returns `None` for releases and keys with no curses equivalent.
	pub fn from_crossterm(event: &KeyEvent) -> Option<Self> {
		if event.kind == KeyEventKind::Release {
			return None;
		}

		let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
		let alt = event.modifiers.contains(KeyModifiers::ALT);

		let key = match event.code {
			CtKeyCode::Char(c) if !c.is_ascii() => return None,
			CtKeyCode::Char(c) if ctrl && c.is_ascii_alphabetic() => KeyCode::ctrl(c),
			CtKeyCode::Char(c) if alt => KeyCode::alt(c),
			CtKeyCode::Char(c) => KeyCode::char(c),
			CtKeyCode::Esc => KeyCode::ESC_BYTE,
			CtKeyCode::Enter => KeyCode::RETURN,
			CtKeyCode::Tab => KeyCode::char('\t'),
			CtKeyCode::BackTab => KeyCode::BACKTAB,
			CtKeyCode::Backspace => KeyCode::BACKSPACE,
			CtKeyCode::Delete => KeyCode::DC,
			CtKeyCode::Insert => KeyCode::IC,
			CtKeyCode::Home => KeyCode::HOME,
			CtKeyCode::End => KeyCode::END,
			CtKeyCode::PageUp => KeyCode::PPAGE,
			CtKeyCode::PageDown => KeyCode::NPAGE,
			CtKeyCode::Up => KeyCode::UP,
			CtKeyCode::Down => KeyCode::DOWN,
			CtKeyCode::Left => KeyCode::LEFT,
			CtKeyCode::Right => KeyCode::RIGHT,
			CtKeyCode::KeypadBegin => KeyCode::B2,
			CtKeyCode::F(n) => KeyCode::function(n)?,
			_ => return None,
		};

		Some(key)
	}
}

#[cfg(test)]
mod tests {
	use crossterm::event::{KeyCode as CtKeyCode, KeyEvent, KeyModifiers};

	use super::KeyCode;

	#[test]
	fn ctrl_letter_becomes_control_byte() {
		let event = KeyEvent::new(CtKeyCode::Char('l'), KeyModifiers::CONTROL);
		assert_eq!(KeyCode::from_crossterm(&event), Some(KeyCode::ctrl('l')));
	}

	#[test]
	fn alt_letter_sets_alt_bit() {
		let event = KeyEvent::new(CtKeyCode::Char('x'), KeyModifiers::ALT);
		assert_eq!(KeyCode::from_crossterm(&event), Some(KeyCode::alt('x')));
	}

	#[test]
	fn shifted_letters_arrive_uppercase() {
		let event = KeyEvent::new(CtKeyCode::Char('L'), KeyModifiers::SHIFT);
		assert_eq!(KeyCode::from_crossterm(&event), Some(KeyCode::char('L')));
	}

	#[test]
	fn arrows_map_to_curses_codes() {
		let event = KeyEvent::new(CtKeyCode::Up, KeyModifiers::NONE);
		assert_eq!(KeyCode::from_crossterm(&event), Some(KeyCode::UP));
	}
}
