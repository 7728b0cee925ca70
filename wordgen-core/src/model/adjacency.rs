use std::collections::HashMap;

use super::chunk::Chunk;

/// Distinct chunks grouped by their first two characters.
///
/// Looking up the suffix of a chunk returns every chunk that may follow it.
///
/// # Invariants
/// - Each chunk sits in exactly one bucket, keyed by its own prefix
/// - Buckets keep insertion order (callers feed sorted chunks for
///   reproducible walks)
#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex {
	buckets: HashMap<[char; 2], Vec<Chunk>>,
}

impl AdjacencyIndex {
	/// Groups `chunks` by prefix. An empty input gives an empty index.
	pub fn new<I: IntoIterator<Item = Chunk>>(chunks: I) -> Self {
		let mut buckets: HashMap<[char; 2], Vec<Chunk>> = HashMap::new();
		for chunk in chunks {
			buckets.entry(chunk.prefix()).or_default().push(chunk);
		}
		Self { buckets }
	}

	/// Chunks whose first two characters equal `prefix`, if any.
	pub fn bucket(&self, prefix: [char; 2]) -> Option<&[Chunk]> {
		self.buckets.get(&prefix).map(Vec::as_slice)
	}

	/// Chunks that may follow `chunk`; empty on a dead end.
	pub fn followers(&self, chunk: &Chunk) -> &[Chunk] {
		self.bucket(chunk.suffix()).unwrap_or(&[])
	}

	/// Number of buckets.
	pub fn len(&self) -> usize {
		self.buckets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}

	/// Iterates over `(prefix, bucket)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = ([char; 2], &[Chunk])> {
		self.buckets.iter().map(|(prefix, chunks)| (*prefix, chunks.as_slice()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	fn chunks(values: &[&str]) -> Vec<Chunk> {
		values.iter().map(|v| v.parse::<Chunk>().unwrap()).collect()
	}

	fn members(index: &AdjacencyIndex, prefix: [char; 2]) -> HashSet<Chunk> {
		index.bucket(prefix).unwrap_or(&[]).iter().copied().collect()
	}

	#[test]
	fn groups_by_prefix() {
		let index = AdjacencyIndex::new(chunks(&["the", "thi", "her", "hep", "hel", "ill"]));

		assert_eq!(index.len(), 3);
		assert_eq!(members(&index, ['t', 'h']), chunks(&["the", "thi"]).into_iter().collect::<HashSet<_>>());
		assert_eq!(members(&index, ['h', 'e']), chunks(&["her", "hep", "hel"]).into_iter().collect::<HashSet<_>>());
		assert_eq!(members(&index, ['i', 'l']), chunks(&["ill"]).into_iter().collect::<HashSet<_>>());
	}

	#[test]
	fn followers_use_the_suffix() {
		let index = AdjacencyIndex::new(chunks(&["the", "her", "hep", "ill"]));
		let the: Chunk = "the".parse().unwrap();
		assert_eq!(index.followers(&the), chunks(&["her", "hep"]).as_slice());

		let ill: Chunk = "ill".parse().unwrap();
		assert!(index.followers(&ill).is_empty());
	}

	#[test]
	fn empty_input() {
		let index = AdjacencyIndex::new(Vec::new());
		assert!(index.is_empty());
		assert!(index.bucket(['a', 'b']).is_none());
	}

	#[test]
	fn rebuilding_gives_the_same_buckets() {
		let input = chunks(&["the", "thi", "her", "hep", "hel", "ill"]);
		let first = AdjacencyIndex::new(input.clone());
		let second = AdjacencyIndex::new(input.into_iter().rev());

		assert_eq!(first.len(), second.len());
		for (prefix, _) in first.iter() {
			assert_eq!(members(&first, prefix), members(&second, prefix));
		}
	}
}
