//! Pronounceable word generation from chunk statistics.
//!
//! This crate models a corpus as overlapping three-character chunks and
//! generates new words by a weighted random walk over them:
//! - Tokenization of raw text into lowercase words
//! - Chunk counting over the whole corpus (sequential, streaming or parallel)
//! - Adjacency of chunks sharing two characters
//! - Generation with restart on dead ends, bounded by a retry budget
//!
//! Most callers only need `WordGenerator`, `CorpusConfig` and `WordRequest`.

/// Closed set of errors returned by this crate.
pub mod error;

/// Corpus selection and fallback.
pub mod config;

/// Debug dump and size figures of a model.
pub mod inspect;

/// Chunk model and generation logic.
pub mod model;

/// Splitting raw text into lowercase tokens.
pub mod tokenizer;

/// I/O utilities (line reading, snapshot paths).
///
/// Not exposed
pub(crate) mod io;

pub use config::{CorpusConfig, CorpusSource};
pub use error::{Error, Result};
pub use inspect::Stats;
pub use model::chunk::{CHUNK_LENGTH, Chunk};
pub use model::chunk_table::ChunkTable;
pub use model::adjacency::AdjacencyIndex;
pub use model::generator::WordGenerator;
pub use model::request::{DEFAULT_COUNT, DEFAULT_LENGTH, MAX_COUNT, MAX_LENGTH, WORDS_PER_LINE, WordRequest};
