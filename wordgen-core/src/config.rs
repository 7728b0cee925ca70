use std::fmt;
use std::path::PathBuf;

use crate::error::Result;
use crate::model::chunk_table::ChunkTable;

/// Where the corpus text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorpusSource {
	/// Corpus held in memory.
	Text(String),
	/// Corpus read from a text file.
	File(PathBuf),
}

impl CorpusSource {
	/// Builds the frequency table of this source.
	///
	/// `cache` only applies to files, see `ChunkTable::from_file_cached`.
	pub(crate) fn load_table(&self, cache: bool) -> Result<ChunkTable> {
		match self {
			CorpusSource::Text(text) => Ok(ChunkTable::from_text(text)),
			CorpusSource::File(path) if cache => ChunkTable::from_file_cached(path),
			CorpusSource::File(path) => ChunkTable::from_file(path),
		}
	}
}

impl fmt::Display for CorpusSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CorpusSource::Text(text) => write!(f, "<text, {} bytes>", text.len()),
			CorpusSource::File(path) => write!(f, "{}", path.display()),
		}
	}
}

/// Corpus selection handed to `WordGenerator::from_config`.
///
/// The fallback text replaces the source only when the source cannot be
/// read; a readable source that yields no chunk is still an error.
#[derive(Clone, Debug)]
pub struct CorpusConfig {
	pub source: CorpusSource,
	pub fallback: Option<String>,
	pub cache: bool,
}

impl CorpusConfig {
	pub fn new(source: CorpusSource) -> Self {
		Self { source, fallback: None, cache: false }
	}

	pub fn with_fallback<S: Into<String>>(mut self, text: S) -> Self {
		self.fallback = Some(text.into());
		self
	}

	pub fn with_cache(mut self, cache: bool) -> Self {
		self.cache = cache;
		self
	}
}
