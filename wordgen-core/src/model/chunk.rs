use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of characters in a chunk.
pub const CHUNK_LENGTH: usize = 3;

/// A fixed-length run of three characters taken from a token.
///
/// A chunk is the atomic unit of the model. During generation a chunk is
/// followed by any chunk whose first two characters equal its last two;
/// choosing that follower appends the follower's last character to the word.
///
/// ## Invariants
/// - Always exactly `CHUNK_LENGTH` characters (enforced by the array type)
/// - Immutable once created
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chunk([char; CHUNK_LENGTH]);

impl Chunk {
	pub fn new(chars: [char; CHUNK_LENGTH]) -> Self {
		Self(chars)
	}

	/// First two characters, the key of the adjacency bucket holding this chunk.
	pub fn prefix(&self) -> [char; 2] {
		[self.0[0], self.0[1]]
	}

	/// Last two characters, the key used to look up followers.
	pub fn suffix(&self) -> [char; 2] {
		[self.0[1], self.0[2]]
	}

	/// Character appended to the word when this chunk is chosen as a follower.
	pub fn extension(&self) -> char {
		self.0[2]
	}

	pub fn chars(&self) -> &[char; CHUNK_LENGTH] {
		&self.0
	}
}

impl fmt::Display for Chunk {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for c in self.0 {
			write!(f, "{c}")?;
		}
		Ok(())
	}
}

impl FromStr for Chunk {
	type Err = String;

	/// Parses a chunk from exactly three characters.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let chars: Vec<char> = s.chars().collect();
		<[char; CHUNK_LENGTH]>::try_from(chars.as_slice())
			.map(Chunk)
			.map_err(|_| format!("a chunk needs exactly {CHUNK_LENGTH} characters, got {s:?}"))
	}
}

/// Slices a token into its overlapping chunks, left to right.
///
/// A token of `L` characters yields `L - 2` chunks; tokens shorter than
/// `CHUNK_LENGTH` yield none.
///
/// Example: `"explain"` → `exp`, `xpl`, `pla`, `lai`, `ain`
pub fn chunks_of(token: &str) -> Vec<Chunk> {
	let chars: Vec<char> = token.chars().collect();
	chars
		.windows(CHUNK_LENGTH)
		.map(|w| Chunk([w[0], w[1], w[2]]))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn chunk(s: &str) -> Chunk {
		s.parse().unwrap()
	}

	#[test]
	fn one_word() {
		let expected: Vec<Chunk> = ["exp", "xpl", "pla", "lai", "ain"].into_iter().map(chunk).collect();
		assert_eq!(chunks_of("explain"), expected);
	}

	#[test]
	fn three_letter_word() {
		assert_eq!(chunks_of("hat"), vec![chunk("hat")]);
	}

	#[test]
	fn short_words_yield_nothing() {
		for word in ["", "i", "is"] {
			assert!(chunks_of(word).is_empty(), "{word:?} should have no chunks");
		}
	}

	#[test]
	fn accessors() {
		let c = chunk("the");
		assert_eq!(c.prefix(), ['t', 'h']);
		assert_eq!(c.suffix(), ['h', 'e']);
		assert_eq!(c.extension(), 'e');
		assert_eq!(c.to_string(), "the");
	}

	#[test]
	fn parse_rejects_wrong_lengths() {
		assert!("th".parse::<Chunk>().is_err());
		assert!("then".parse::<Chunk>().is_err());
		assert_eq!("été".parse::<Chunk>().map(|c| c.to_string()), Ok("été".to_owned()));
	}

	proptest! {
		#[test]
		fn chunk_count_and_reconstruction(token in "[a-z]{3,24}") {
			let chunks = chunks_of(&token);
			prop_assert_eq!(chunks.len(), token.len() - 2);

			let mut rebuilt: String = chunks.iter().map(|c| c.chars()[0]).collect();
			let last = chunks.last().unwrap();
			rebuilt.push(last.chars()[1]);
			rebuilt.push(last.chars()[2]);
			prop_assert_eq!(rebuilt, token);
		}

		#[test]
		fn short_tokens_have_no_chunks(token in "[a-z]{0,2}") {
			prop_assert!(chunks_of(&token).is_empty());
		}
	}
}
