use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::chunk::{Chunk, chunks_of};
use crate::error::Result;
use crate::io::{build_output_path, for_each_line, is_fresh, read_file};
use crate::tokenizer::tokenize;

/// Occurrence counts of every distinct chunk seen in a corpus.
///
/// The table is the whole statistical model: generation only ever reads it.
///
/// # Responsibilities
/// - Count chunks while ingesting text, token by token
/// - Merge with another table (parallel building)
/// - Serialize to / from a compact binary snapshot
///
/// # Invariants
/// - Every stored count is >= 1 (unseen chunks are never stored)
/// - Iteration order is unspecified
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkTable {
	/// Mapping from a chunk to the number of times it was observed.
	counts: HashMap<Chunk, usize>,
}

impl ChunkTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Counts the chunks of a single, already tokenized word.
	///
	/// Words shorter than a chunk contribute nothing.
	pub fn add_token(&mut self, token: &str) {
		for chunk in chunks_of(token) {
			*self.counts.entry(chunk).or_insert(0) += 1;
		}
	}

	/// Tokenizes `text` and counts the chunks of every token.
	pub fn add_text(&mut self, text: &str) {
		for token in tokenize(text) {
			self.add_token(&token);
		}
	}

	/// Builds a table from an in-memory corpus.
	pub fn from_text(text: &str) -> Self {
		let mut table = Self::new();
		table.add_text(text);
		table
	}

	/// Builds a table by streaming a corpus line by line.
	///
	/// Invalid UTF-8 is replaced, not rejected, so it only splits tokens.
	///
	/// # Errors
	/// Returns `Error::CorpusRead` if the source fails before its end.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let mut table = Self::new();
		for_each_line(reader, |line| table.add_text(line))?;
		Ok(table)
	}

	/// Builds a table from corpus lines, counting slices of them in parallel.
	///
	/// # Behavior
	/// - Splits the lines into `cpus * 8` slices
	/// - Spawns one thread per slice, each building a partial table
	/// - Collects the partial tables over a channel and merges them
	///
	/// The result is identical to a sequential build.
	pub fn from_lines(lines: &[String]) -> Self {
		let slices = num_cpus::get() * 8;
		let slice_size = lines.len().div_ceil(slices).max(1);

		let (tx, rx) = mpsc::channel();
		for slice in lines.chunks(slice_size) {
			let tx = tx.clone();
			let slice: Vec<String> = slice.to_vec();

			thread::spawn(move || {
				let mut partial = ChunkTable::new();
				for line in slice {
					partial.add_text(&line);
				}
				// The receiver outlives every sender
				let _ = tx.send(partial);
			});
		}
		drop(tx);

		let mut table = ChunkTable::new();
		for partial in rx.iter() {
			table.merge(&partial);
		}
		debug!("built table of {} distinct chunks from {} lines", table.len(), lines.len());
		table
	}

	/// Reads a corpus file and builds its table in parallel.
	///
	/// # Errors
	/// Returns `Error::CorpusRead` if the file cannot be read.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let lines = read_file(&path)?;
		Ok(Self::from_lines(&lines))
	}

	/// Loads the table of a corpus file from its binary snapshot, or builds it.
	///
	/// - The snapshot lives next to the corpus with a `.bin` extension
	/// - It is used only when at least as new as the corpus
	/// - Otherwise the table is built from the file and the snapshot rewritten
	/// - A snapshot that cannot be read or written only costs a rebuild
	///
	/// # Errors
	/// Returns `Error::CorpusRead` only if the corpus itself cannot be read,
	/// and `Error::Cache` if a readable snapshot cannot be decoded.
	pub fn from_file_cached<P: AsRef<Path>>(path: P) -> Result<Self> {
		let snapshot_path = match build_output_path(&path, "bin") {
			Ok(snapshot_path) => snapshot_path,
			Err(err) => {
				warn!("no snapshot for {}: {err}", path.as_ref().display());
				return Self::from_file(&path);
			}
		};

		if is_fresh(&snapshot_path, &path) {
			match std::fs::read(&snapshot_path) {
				Ok(bytes) => {
					let table = Self::from_bytes(&bytes)?;
					info!("loaded {} chunks from snapshot {}", table.len(), snapshot_path.display());
					return Ok(table);
				}
				Err(err) => warn!("could not read snapshot {}: {err}, rebuilding", snapshot_path.display()),
			}
		}

		let table = Self::from_file(&path)?;
		match table.to_bytes() {
			Ok(bytes) => match std::fs::write(&snapshot_path, bytes) {
				Ok(()) => info!("wrote snapshot {}", snapshot_path.display()),
				Err(err) => warn!("could not write snapshot {}: {err}", snapshot_path.display()),
			},
			Err(err) => warn!("could not encode snapshot {}: {err}", snapshot_path.display()),
		}
		Ok(table)
	}

	/// Merges another table into this one, summing the counts.
	pub fn merge(&mut self, other: &Self) {
		for (chunk, count) in &other.counts {
			*self.counts.entry(*chunk).or_insert(0) += *count;
		}
	}

	/// Number of times `chunk` was observed, `0` if never.
	pub fn count(&self, chunk: &Chunk) -> usize {
		self.counts.get(chunk).copied().unwrap_or(0)
	}

	/// Number of distinct chunks.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Iterates over `(chunk, count)` pairs in unspecified order.
	pub fn iter(&self) -> impl Iterator<Item = (&Chunk, usize)> {
		self.counts.iter().map(|(chunk, count)| (chunk, *count))
	}

	/// Returns every distinct chunk, sorted.
	pub fn chunks(&self) -> Vec<Chunk> {
		let mut chunks: Vec<Chunk> = self.counts.keys().copied().collect();
		chunks.sort_unstable();
		chunks
	}

	/// Encodes the table with `postcard`.
	pub fn to_bytes(&self) -> Result<Vec<u8>> {
		Ok(postcard::to_stdvec(self)?)
	}

	/// Decodes a table produced by `to_bytes`.
	///
	/// Zero counts cannot come from counting and are dropped.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
		let mut table: Self = postcard::from_bytes(bytes)?;
		table.counts.retain(|_, count| *count > 0);
		Ok(table)
	}
}
