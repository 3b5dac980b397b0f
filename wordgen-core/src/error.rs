use thiserror::Error;

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the word-generation core.
///
/// All variants are immediate, synchronous conditions: nothing is retried
/// internally and callers are expected to pre-validate or handle them.
/// Running into a dead end while generating a chain is not an error, the
/// walk resets to the seed word instead.
#[derive(Debug, Error)]
pub enum Error {
	/// Peek or extraction attempted on an empty priority heap.
	#[error("heap is empty")]
	EmptyHeap,

	/// A graph query was issued for a seed word that was never ingested.
	#[error("seed word {0:?} is not in the graph")]
	SeedNotFound(String),

	/// The input file could not be read.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
