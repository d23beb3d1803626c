use proptest::prelude::*;

use super::*;

#[test]
fn control_and_meta_constructors() {
	assert_eq!(KeyCode::ctrl('l').raw(), 0x0c);
	assert_eq!(KeyCode::ctrl('L').raw(), 0x0c);
	assert_eq!(KeyCode::meta('a').raw(), 0xe1);
	assert_eq!(KeyCode::alt('a').raw(), KEY_ALT | 0x61);
}

#[test]
fn classification_of_synthetic_codes() {
	assert_eq!(KeyCode::char('x').kind(), KeyKind::Bindable);
	assert_eq!(KeyCode::UP.kind(), KeyKind::Bindable);
	assert_eq!(KeyCode::new(KEY_MAX).kind(), KeyKind::Bindable);
	assert_eq!(KeyCode::sidebar_item(3).map(KeyCode::kind), Some(KeyKind::SidebarItem(3)));
	assert_eq!(KeyCode::ESCAPE.kind(), KeyKind::Escape);
	assert_eq!(KeyCode::SIGNAL.kind(), KeyKind::Signal);
	assert_eq!(KeyCode::RESIZE.kind(), KeyKind::Resize);
	assert_eq!(KeyCode::map_click(7).kind(), KeyKind::MapClick(7));
	assert_eq!(KeyCode::new(KEY_MAX + 200).kind(), KeyKind::Other);
}

#[test]
fn sidebar_slots_are_bounded() {
	assert_eq!(KeyCode::sidebar_item(0), None);
	assert_eq!(KeyCode::sidebar_item(128), None);
	assert!(KeyCode::sidebar_item(127).is_some());
}

#[test]
fn escape_byte_and_key_both_escape() {
	assert!(KeyCode::ESC_BYTE.is_escape());
	assert!(KeyCode::ESCAPE.is_escape());
	assert!(!KeyCode::char('[').is_escape());
}

#[test]
fn digits() {
	assert_eq!(KeyCode::char('0').as_digit(), Some(0));
	assert_eq!(KeyCode::char('9').as_digit(), Some(9));
	assert_eq!(KeyCode::char('a').as_digit(), None);
}

#[test]
fn display_names() {
	assert_eq!(KeyCode::SPACE.display_name(), "SPACE");
	assert_eq!(KeyCode::ESC_BYTE.display_name(), "ESC");
	assert_eq!(KeyCode::ctrl('p').display_name(), "^P");
	assert_eq!(KeyCode::char('l').display_name(), "l");
	assert_eq!(KeyCode::meta('e').display_name(), "M-e");
	assert_eq!(KeyCode::alt('e').display_name(), "A-e");
	assert_eq!(KeyCode::UP.display_name(), "UP");
	assert_eq!(KeyCode::function(5).map(KeyCode::display_name).as_deref(), Some("F5"));
	assert_eq!(KeyCode::new(0x1f0).display_name(), "KEY_#496");
}

#[test]
fn hex_formatting_matches_raw() {
	assert_eq!(format!("{:x}", KeyCode::char('l')), "6c");
	assert_eq!(format!("{:x}", KeyCode::UP), "181");
}

proptest! {
	#[test]
	fn index_is_some_exactly_for_bindable(raw in 0u32..2048) {
		let key = KeyCode::new(raw);
		prop_assert_eq!(key.index().is_some(), raw <= KEY_MAX);
	}

	#[test]
	fn display_name_never_empty(raw in 0u32..2048) {
		prop_assert!(!KeyCode::new(raw).display_name().is_empty());
	}
}
