use thiserror::Error;

/// Errors produced while building a generator or generating a word.
///
/// Construction errors (`CorpusRead`, `EmptyCorpus`, `Cache`) abort the whole
/// setup, no partially built generator is ever returned. Generation errors
/// (`GenerationExhausted`, `InvalidLength`) are per call and leave the
/// generator untouched.
#[derive(Error, Debug)]
pub enum Error {
	/// The corpus source could not be read to completion.
	#[error("could not read corpus: {0}")]
	CorpusRead(#[from] std::io::Error),

	/// The corpus contains no word long enough to yield a chunk.
	#[error("corpus contains no word of at least {min_length} letters")]
	EmptyCorpus { min_length: usize },

	/// The random walk hit more dead ends than the retry budget allows.
	#[error("could not find matching chunks after {failures} tries for a word of length {length}, maybe your input text is too small")]
	GenerationExhausted { length: usize, failures: usize },

	/// The requested word length is shorter than a single chunk.
	#[error("requested word length {requested} is below the minimum of {minimum}")]
	InvalidLength { requested: usize, minimum: usize },

	/// A cached table snapshot could not be encoded or decoded.
	#[error("invalid table snapshot: {0}")]
	Cache(#[from] postcard::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
