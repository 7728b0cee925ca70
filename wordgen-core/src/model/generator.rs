use std::io::Read;
use std::path::Path;

use log::{debug, info, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::adjacency::AdjacencyIndex;
use super::chunk::{CHUNK_LENGTH, Chunk};
use super::chunk_table::ChunkTable;
use super::request::WordRequest;
use crate::config::CorpusConfig;
use crate::error::{Error, Result};
use crate::inspect::{self, Stats};

/// Outcome of a single walk attempt.
enum Walk {
	/// The word reached the requested length.
	Complete(String),
	/// No chunk follows the given one; the attempt is thrown away.
	DeadEnd(Chunk),
}

/// Generates pronounceable words by a weighted random walk over chunks.
///
/// # Responsibilities
/// - Own the frequency table of one corpus for its whole lifetime
/// - Keep the adjacency index and the start chunks derived from it
/// - Walk from a random start chunk, one character at a time, restarting on
///   dead ends until the retry budget runs out
///
/// # Invariants
/// - The table is non-empty and never mutated after construction, so the
///   cached index can never go stale
/// - `starts` and every index bucket are sorted, so a seeded RNG gives a
///   reproducible word
///
/// Generation only reads shared state: one generator can serve concurrent
/// callers, each with its own RNG.
#[derive(Debug)]
pub struct WordGenerator {
	table: ChunkTable,
	starts: Vec<Chunk>,
	index: AdjacencyIndex,
}

impl WordGenerator {
	/// Creates a generator over an existing table.
	///
	/// # Errors
	/// Returns `Error::EmptyCorpus` if the table holds no chunk.
	pub fn new(table: ChunkTable) -> Result<Self> {
		if table.is_empty() {
			return Err(Error::EmptyCorpus { min_length: CHUNK_LENGTH });
		}
		let starts = table.chunks();
		let index = AdjacencyIndex::new(starts.iter().copied());
		Ok(Self { table, starts, index })
	}

	/// Creates a generator from an in-memory corpus.
	pub fn from_text(text: &str) -> Result<Self> {
		Self::new(ChunkTable::from_text(text))
	}

	/// Creates a generator from a readable corpus stream.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Self::new(ChunkTable::from_reader(reader)?)
	}

	/// Creates a generator from a corpus file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		Self::new(ChunkTable::from_file(path)?)
	}

	/// Creates a generator from a corpus configuration.
	///
	/// # Behavior
	/// - Builds the table of `config.source` (through the snapshot cache for
	///   files when `config.cache` is set)
	/// - If the source cannot be read and a fallback is configured, builds
	///   the table of the fallback text instead
	///
	/// # Errors
	/// - `Error::CorpusRead` if the source is unreadable and no fallback is set
	/// - `Error::EmptyCorpus` if the chosen corpus yields no chunk
	/// - `Error::Cache` if a snapshot is corrupt
	pub fn from_config(config: &CorpusConfig) -> Result<Self> {
		let table = match config.source.load_table(config.cache) {
			Ok(table) => table,
			Err(Error::CorpusRead(err)) => match &config.fallback {
				Some(text) => {
					warn!("could not read corpus {}: {err}, using the fallback corpus", config.source);
					ChunkTable::from_text(text)
				}
				None => return Err(Error::CorpusRead(err)),
			},
			Err(err) => return Err(err),
		};
		info!("corpus loaded: {} distinct chunks", table.len());
		Self::new(table)
	}

	pub fn table(&self) -> &ChunkTable {
		&self.table
	}

	pub fn index(&self) -> &AdjacencyIndex {
		&self.index
	}

	/// Generates one word of exactly `length` characters.
	pub fn generate(&self, length: usize) -> Result<String> {
		self.generate_with_rng(length, &mut rand::rng())
	}

	/// Generates one word of exactly `length` characters using `rng`.
	///
	/// Each dead end restarts the word from a fresh random chunk. More than
	/// `2 * length` restarts abort the call.
	///
	/// # Errors
	/// - `Error::InvalidLength` if `length` is shorter than a chunk
	/// - `Error::GenerationExhausted` once the retry budget is spent
	pub fn generate_with_rng<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<String> {
		if length < CHUNK_LENGTH {
			return Err(Error::InvalidLength { requested: length, minimum: CHUNK_LENGTH });
		}

		let budget = length * 2;
		let mut failures = 0;
		loop {
			let start = *self
				.starts
				.choose(rng)
				.ok_or(Error::EmptyCorpus { min_length: CHUNK_LENGTH })?;

			match self.walk(start, length, rng) {
				Walk::Complete(word) => return Ok(word),
				Walk::DeadEnd(chunk) => {
					failures += 1;
					debug!("no adjacent chunk found for {chunk} ({failures}/{budget})");
					if failures > budget {
						warn!("gave up on a word of length {length} after {failures} dead ends");
						return Err(Error::GenerationExhausted { length, failures });
					}
				}
			}
		}
	}

	/// Generates `request.count()` words of `request.length()` characters.
	///
	/// Stops at the first failing word.
	pub fn generate_many(&self, request: &WordRequest) -> Result<Vec<String>> {
		let mut rng = rand::rng();
		(0..request.count())
			.map(|_| self.generate_with_rng(request.length(), &mut rng))
			.collect()
	}

	/// Human-readable dump of the table and the index.
	pub fn inspect(&self) -> String {
		inspect::dump(&self.table, &self.index)
	}

	/// Size figures of the model.
	pub fn stats(&self) -> Stats {
		Stats::of(&self.table, &self.index)
	}

	/// Extends `start` one character at a time up to `length` characters.
	fn walk<R: Rng + ?Sized>(&self, start: Chunk, length: usize, rng: &mut R) -> Walk {
		let mut word = start.to_string();
		let mut current = start;

		for _ in CHUNK_LENGTH..length {
			let Some(next) = pick_weighted(self.index.followers(&current), &self.table, rng) else {
				return Walk::DeadEnd(current);
			};
			word.push(next.extension());
			// The follower shares two characters with `current`, so it is
			// exactly the word's trailing chunk.
			current = next;
		}

		Walk::Complete(word)
	}
}

/// Picks one candidate with a probability proportional to its count.
///
/// - `None` for no candidates
/// - A single candidate is returned without touching `rng`
/// - Otherwise draws `r` in `[0, total)` and walks the candidates in their
///   given order, subtracting each weight until `r` falls inside one
pub(crate) fn pick_weighted<R: Rng + ?Sized>(candidates: &[Chunk], table: &ChunkTable, rng: &mut R) -> Option<Chunk> {
	match candidates {
		[] => None,
		[only] => Some(*only),
		_ => {
			let total: usize = candidates.iter().map(|chunk| table.count(chunk)).sum();
			if total == 0 {
				// Unreachable while candidates come from the table
				return candidates.first().copied();
			}

			let mut r = rng.random_range(0..total);
			for chunk in candidates {
				let weight = table.count(chunk);
				if r < weight {
					return Some(*chunk);
				}
				r -= weight;
			}
			candidates.last().copied()
		}
	}
}
