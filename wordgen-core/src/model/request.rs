use super::chunk::CHUNK_LENGTH;
use crate::error::{Error, Result};

/// Default length of a generated word.
pub const DEFAULT_LENGTH: usize = 6;
/// Longest word a request may ask for.
pub const MAX_LENGTH: usize = 20;
/// Default number of words per request.
pub const DEFAULT_COUNT: usize = 150;
/// Largest number of words a request may ask for.
pub const MAX_COUNT: usize = 1000;
/// Words printed on one line by the console front-end.
pub const WORDS_PER_LINE: usize = 5;

/// A validated batch request: how long each word is and how many to make.
///
/// # Invariants
/// - `CHUNK_LENGTH <= length <= MAX_LENGTH`
/// - `count <= MAX_COUNT`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordRequest {
	length: usize,
	count: usize,
}

impl WordRequest {
	/// Builds a request, clamping oversized values.
	///
	/// # Errors
	/// Returns `Error::InvalidLength` if `length` is shorter than a chunk;
	/// such lengths are rejected rather than silently raised.
	pub fn new(length: usize, count: usize) -> Result<Self> {
		if length < CHUNK_LENGTH {
			return Err(Error::InvalidLength { requested: length, minimum: CHUNK_LENGTH });
		}
		Ok(Self {
			length: length.min(MAX_LENGTH),
			count: count.min(MAX_COUNT),
		})
	}

	pub fn length(&self) -> usize {
		self.length
	}

	pub fn count(&self) -> usize {
		self.count
	}
}

impl Default for WordRequest {
	fn default() -> Self {
		Self { length: DEFAULT_LENGTH, count: DEFAULT_COUNT }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let request = WordRequest::default();
		assert_eq!((request.length(), request.count()), (6, 150));
	}

	#[test]
	fn oversized_values_are_clamped() {
		let request = WordRequest::new(50, 5000).unwrap();
		assert_eq!((request.length(), request.count()), (MAX_LENGTH, MAX_COUNT));
	}

	#[test]
	fn short_lengths_are_rejected() {
		for length in 0..CHUNK_LENGTH {
			let err = WordRequest::new(length, 1).unwrap_err();
			assert!(matches!(err, Error::InvalidLength { requested, minimum: 3 } if requested == length));
		}
	}

	#[test]
	fn minimum_length_is_accepted() {
		assert_eq!(WordRequest::new(3, 0).unwrap().length(), 3);
	}
}
