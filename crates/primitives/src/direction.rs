use std::fmt;

/// A direction argument for movement and directional commands.
///
/// Discriminants follow the game's direction numbering so they can be passed
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
	W = 0,
	NW = 1,
	N = 2,
	NE = 3,
	E = 4,
	SE = 5,
	S = 6,
	SW = 7,
	Up = 8,
	Down = 9,
	/// The player's own square.
	Here = 10,
}

impl Direction {
	/// Every direction, in numeric order.
	pub const ALL: [Direction; 11] = [
		Direction::W,
		Direction::NW,
		Direction::N,
		Direction::NE,
		Direction::E,
		Direction::SE,
		Direction::S,
		Direction::SW,
		Direction::Up,
		Direction::Down,
		Direction::Here,
	];

	/// Returns the direction with the given game number.
	pub fn from_index(index: u8) -> Option<Self> {
		Self::ALL.get(index as usize).copied()
	}

	/// Returns the game number of this direction.
	pub const fn index(self) -> u8 {
		self as u8
	}

	/// Returns a lowercase name such as `north_east` or `down`.
	pub const fn name(self) -> &'static str {
		match self {
			Direction::W => "west",
			Direction::NW => "north_west",
			Direction::N => "north",
			Direction::NE => "north_east",
			Direction::E => "east",
			Direction::SE => "south_east",
			Direction::S => "south",
			Direction::SW => "south_west",
			Direction::Up => "up",
			Direction::Down => "down",
			Direction::Here => "self",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn index_round_trips() {
		for dir in Direction::ALL {
			assert_eq!(Direction::from_index(dir.index()), Some(dir));
		}
		assert_eq!(Direction::from_index(11), None);
	}
}
