//! Statistical model and word generation.
//!
//! - Chunks, the three-character unit of the model (`Chunk`)
//! - Corpus-wide chunk counts (`ChunkTable`)
//! - Prefix buckets used to find followers (`AdjacencyIndex`)
//! - The weighted random walk (`WordGenerator`)
//! - Validated batch requests (`WordRequest`)

/// Three-character chunks and chunk extraction.
pub mod chunk;

/// Frequency table of chunks over a whole corpus.
///
/// Supports streaming and parallel construction, merging,
/// and binary snapshots.
pub mod chunk_table;

/// Chunks grouped by their two leading characters.
pub mod adjacency;

/// Weighted random walk over chunk adjacency.
pub mod generator;

/// Length and count of a batch of words, with clamping.
pub mod request;
