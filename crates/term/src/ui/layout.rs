//! Menu layout: column alignment, paging and selection letters.

use std::ops::Range;

use nhcurses_input::{MenuView, RowKind};

/// Letters handed out to items without an accelerator, in order.
const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Spaces between aligned columns.
const COLUMN_GAP: usize = 2;

/// Expands the tab-separated columns of every row so columns line up.
pub fn align_columns(view: &MenuView) -> Vec<String> {
	let mut widths: Vec<usize> = Vec::new();
	for row in &view.rows {
		let cols: Vec<&str> = row.text.split('\t').collect();
		if cols.len() < 2 {
			continue;
		}
		for (idx, col) in cols[..cols.len() - 1].iter().enumerate() {
			let width = col.chars().count();
			match widths.get_mut(idx) {
				Some(max) => *max = (*max).max(width),
				None => widths.push(width),
			}
		}
	}

	view.rows
		.iter()
		.map(|row| {
			let cols: Vec<&str> = row.text.split('\t').collect();
			let mut line = String::new();
			for (idx, col) in cols.iter().enumerate() {
				line.push_str(col);
				if idx + 1 < cols.len() {
					let pad = widths.get(idx).copied().unwrap_or(0).saturating_sub(col.chars().count()) + COLUMN_GAP;
					line.extend(std::iter::repeat_n(' ', pad));
				}
			}
			line.trim_end().to_string()
		})
		.collect()
}

/// Splits `rows` rows into pages of at most `height` rows.
pub fn paginate(rows: usize, height: usize) -> Vec<Range<usize>> {
	let height = height.max(1);
	if rows == 0 {
		return vec![0..0];
	}
	(0..rows).step_by(height).map(|start| start..(start + height).min(rows)).collect()
}

/// Selection letter of every item on one page, as `(row index, letter)`.
///
/// Items keep their own accelerator; the rest get the first unused letter.
/// Items beyond the available letters get none.
pub fn page_accels(view: &MenuView, page: Range<usize>) -> Vec<(usize, char)> {
	let rows = &view.rows[page.clone()];
	let taken: Vec<char> = rows.iter().filter(|row| row.kind == RowKind::Item).filter_map(|row| row.accel).collect();
	let mut free = LETTERS.chars().filter(|c| !taken.contains(c));

	let mut accels = Vec::new();
	for (idx, row) in page.zip(rows) {
		if row.kind != RowKind::Item {
			continue;
		}
		if let Some(letter) = row.accel.or_else(|| free.next()) {
			accels.push((idx, letter));
		}
	}
	accels
}
