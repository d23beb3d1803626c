use super::{KEY_ALT, KEY_F0, KEY_MAX, KeyCode, MAX_FUNCTION_KEY};

const SPECIAL_NAMES: &[(KeyCode, &str)] = &[
	(KeyCode::DOWN, "DOWN"),
	(KeyCode::UP, "UP"),
	(KeyCode::LEFT, "LEFT"),
	(KeyCode::RIGHT, "RIGHT"),
	(KeyCode::HOME, "HOME"),
	(KeyCode::BACKSPACE, "BACKSPACE"),
	(KeyCode::END, "END"),
	(KeyCode::PPAGE, "PGUP"),
	(KeyCode::NPAGE, "PGDN"),
	(KeyCode::IC, "INS"),
	(KeyCode::DC, "DEL"),
	(KeyCode::ENTER, "ENTER"),
	(KeyCode::BACKTAB, "BTAB"),
	(KeyCode::A1, "KP_7"),
	(KeyCode::A2, "KP_8"),
	(KeyCode::A3, "KP_9"),
	(KeyCode::B1, "KP_4"),
	(KeyCode::B2, "KP_5"),
	(KeyCode::B3, "KP_6"),
	(KeyCode::C1, "KP_1"),
	(KeyCode::C2, "KP_2"),
	(KeyCode::C3, "KP_3"),
	(KeyCode::D1, "KP_0"),
	(KeyCode::ESCAPE, "ESC"),
];

pub(super) fn display_name(key: KeyCode) -> String {
	let raw = key.raw();
	match raw {
		0x20 => "SPACE".to_string(),
		0x1b => "ESC".to_string(),
		0x0d => "RETURN".to_string(),
		0x09 => "TAB".to_string(),
		0x7f => "^?".to_string(),
		0x00..=0x1f => format!("^{}", char::from(b'@' + raw as u8)),
		0x21..=0x7e => char::from(raw as u8).to_string(),
		0x80..=0xff => format!("M-{}", display_name(KeyCode::new(raw & 0x7f))),
		_ if raw & !0x7f == KEY_ALT => format!("A-{}", display_name(KeyCode::new(raw & 0x7f))),
		_ => special_name(key).unwrap_or_else(|| format!("KEY_#{raw}")),
	}
}

fn special_name(key: KeyCode) -> Option<String> {
	if let Some((_, name)) = SPECIAL_NAMES.iter().find(|(k, _)| *k == key) {
		return Some((*name).to_string());
	}
	let raw = key.raw();
	if raw > KEY_F0 && raw <= KEY_F0 + MAX_FUNCTION_KEY as u32 {
		return Some(format!("F{}", raw - KEY_F0));
	}
	if raw > KEY_MAX && raw < KEY_MAX + 128 {
		return Some(format!("ITEM_{}", raw - KEY_MAX));
	}
	None
}
