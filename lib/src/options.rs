/// Largest integer every IEEE-754 double represents exactly, 2^53 - 1.
pub const MAX_SAFE_INTEGER: i128 = (1 << 53) - 1;

/// Accepted input range for the 64-bit integer writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Int64Range {
	/// `0..=2^53-1` unsigned and `-(2^53-1)..=2^53-1` signed.
	#[default]
	SafeInteger,
	/// The whole `u64` / `i64` domain. Accepts inputs the safe-integer mode refuses.
	Full,
}

impl Int64Range {
	pub fn unsigned_bounds(self) -> (i128, i128) {
		match self {
			Int64Range::SafeInteger => (0, MAX_SAFE_INTEGER),
			Int64Range::Full => (0, u64::MAX as i128),
		}
	}

	pub fn signed_bounds(self) -> (i128, i128) {
		match self {
			Int64Range::SafeInteger => (-MAX_SAFE_INTEGER, MAX_SAFE_INTEGER),
			Int64Range::Full => (i64::MIN as i128, i64::MAX as i128),
		}
	}
}

/// Construction-time settings for a [`Writer`](crate::Writer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriterOptions {
	pub int64_range: Int64Range,
	/// Initial capacity of the operation log.
	pub capacity: usize,
}

impl WriterOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn int64_range(mut self, range: Int64Range) -> Self {
		self.int64_range = range;
		self
	}

	pub fn capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::{Int64Range, WriterOptions, MAX_SAFE_INTEGER};

	#[test]
	fn test_defaults() {
		let options = WriterOptions::new();
		assert_eq!(options.int64_range, Int64Range::SafeInteger);
		assert_eq!(options.capacity, 0);
		assert_eq!(MAX_SAFE_INTEGER, 9_007_199_254_740_991);
	}

	#[test]
	fn test_bounds() {
		assert_eq!(
			Int64Range::SafeInteger.signed_bounds(),
			(-9_007_199_254_740_991, 9_007_199_254_740_991)
		);
		assert_eq!(Int64Range::Full.unsigned_bounds(), (0, 18_446_744_073_709_551_615));
		assert_eq!(
			Int64Range::Full.signed_bounds(),
			(-9_223_372_036_854_775_808, 9_223_372_036_854_775_807)
		);
	}

	#[test]
	fn test_setters_chain() {
		let options = WriterOptions::new().int64_range(Int64Range::Full).capacity(16);
		assert_eq!(options.int64_range, Int64Range::Full);
		assert_eq!(options.capacity, 16);
	}
}
