use std::fmt::Write;

use serde::Serialize;

use crate::model::adjacency::AdjacencyIndex;
use crate::model::chunk_table::ChunkTable;

/// Size figures of a loaded model.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
	pub distinct_chunks: usize,
	pub total_chunks: usize,
	pub buckets: usize,
}

impl Stats {
	pub fn of(table: &ChunkTable, index: &AdjacencyIndex) -> Self {
		Self {
			distinct_chunks: table.len(),
			total_chunks: table.total(),
			buckets: index.len(),
		}
	}
}

/// Renders the frequency table and the adjacency index, sorted, one entry per line.
///
/// ```text
/// chunks (3 distinct, 4 total)
///   hat 2
///   ...
/// adjacency (2 buckets)
///   ha: hat
///   ...
/// ```
pub fn dump(table: &ChunkTable, index: &AdjacencyIndex) -> String {
	let mut out = String::new();

	let mut counts: Vec<_> = table.iter().collect();
	counts.sort_unstable();
	let _ = writeln!(out, "chunks ({} distinct, {} total)", table.len(), table.total());
	for (chunk, count) in counts {
		let _ = writeln!(out, "  {chunk} {count}");
	}

	let mut buckets: Vec<_> = index.iter().collect();
	buckets.sort_unstable_by_key(|(prefix, _)| *prefix);
	let _ = writeln!(out, "adjacency ({} buckets)", index.len());
	for ([a, b], chunks) in buckets {
		let members: Vec<String> = chunks.iter().map(ToString::to_string).collect();
		let _ = writeln!(out, "  {a}{b}: {}", members.join(" "));
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dump_is_sorted() {
		let table = ChunkTable::from_text("that hat");
		let index = AdjacencyIndex::new(table.chunks());
		let expected = "\
chunks (2 distinct, 3 total)
  hat 2
  tha 1
adjacency (2 buckets)
  ha: hat
  th: tha
";
		assert_eq!(dump(&table, &index), expected);
	}

	#[test]
	fn stats() {
		let table = ChunkTable::from_text("This is his hat, that is her hair, whistfully");
		let index = AdjacencyIndex::new(table.chunks());
		let stats = Stats::of(&table, &index);
		assert_eq!(stats, Stats { distinct_chunks: 14, total_chunks: 17, buckets: 12 });
	}
}
