/// Largest repeat count that can be typed.
pub const MAX_REPEAT_COUNT: u32 = 0xffff;

/// Repeat count being typed before a command.
///
/// Digits that would push the count past [`MAX_REPEAT_COUNT`] are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatCount(u32);

impl RepeatCount {
	pub fn value(self) -> u32 {
		self.0
	}

	pub fn is_zero(self) -> bool {
		self.0 == 0
	}

	/// Appends a decimal digit.
	pub fn push_digit(&mut self, digit: u32) {
		let next = self.0 * 10 + digit;
		self.0 = if next > MAX_REPEAT_COUNT { next / 10 } else { next };
	}

	/// Drops the last digit.
	pub fn backspace(&mut self) {
		self.0 /= 10;
	}
}
