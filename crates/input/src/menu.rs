//! Backend-neutral menus.
//!
//! [`MenuView`] is what a backend renders. [`Menu`] wraps it with a typed id
//! per selectable row so callers never deal in row indices.

use crate::collab::MenuBackend;

/// Whether a menu accepts a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickMode {
	/// Display only.
	None,
	/// Exactly one item may be picked.
	One,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
	Heading,
	Text,
	Item,
}

/// One line of a menu. Columns are separated by tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
	pub kind: RowKind,
	pub text: String,
	/// Preferred selection letter.
	pub accel: Option<char>,
}

impl MenuRow {
	pub fn is_item(&self) -> bool {
		self.kind == RowKind::Item
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
	pub title: String,
	pub pick: PickMode,
	pub rows: Vec<MenuRow>,
}

impl MenuView {
	/// Selectable rows with their row index.
	pub fn items(&self) -> impl Iterator<Item = (usize, &MenuRow)> {
		self.rows.iter().enumerate().filter(|(_, row)| row.is_item())
	}
}

/// A menu whose selectable rows carry ids of type `T`.
#[derive(Debug, Clone)]
pub struct Menu<T> {
	view: MenuView,
	ids: Vec<Option<T>>,
}

impl<T: Clone> Menu<T> {
	pub fn new(title: impl Into<String>, pick: PickMode) -> Self {
		Self {
			view: MenuView {
				title: title.into(),
				pick,
				rows: Vec::new(),
			},
			ids: Vec::new(),
		}
	}

	pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
		self.push(RowKind::Heading, text.into(), None, None)
	}

	pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
		self.push(RowKind::Text, text.into(), None, None)
	}

	pub fn item(&mut self, id: T, text: impl Into<String>) -> &mut Self {
		self.push(RowKind::Item, text.into(), None, Some(id))
	}

	pub fn item_with_accel(&mut self, id: T, text: impl Into<String>, accel: char) -> &mut Self {
		self.push(RowKind::Item, text.into(), Some(accel), Some(id))
	}

	fn push(&mut self, kind: RowKind, text: String, accel: Option<char>, id: Option<T>) -> &mut Self {
		self.view.rows.push(MenuRow { kind, text, accel });
		self.ids.push(id);
		self
	}

	/// Number of selectable rows.
	pub fn item_count(&self) -> usize {
		self.ids.iter().filter(|id| id.is_some()).count()
	}

	pub fn view(&self) -> &MenuView {
		&self.view
	}

	/// Shows the menu and returns the id of the picked row.
	pub fn show<B: MenuBackend + ?Sized>(&self, backend: &mut B) -> Option<T> {
		let picked = backend.display_menu(&self.view)?;
		if self.view.pick == PickMode::None {
			return None;
		}
		self.ids.get(picked).cloned().flatten()
	}
}
