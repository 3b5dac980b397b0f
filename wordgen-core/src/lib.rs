//! Word-level Markov text generation library.
//!
//! This crate builds a first-order transition graph over a sequence of
//! words and answers three queries against it:
//! - The k most probable direct successors of a seed word
//! - A greedy chain that always follows the most probable successor
//! - A random chain weighted by observed successor frequencies
//!
//! Ranking and sampling both run on a generic binary max-heap with a
//! pluggable comparison strategy.

/// Shared error type and result alias.
pub mod error;

/// Generic binary max-heap used for top-k ranking and weighted draws.
pub mod heap;

/// I/O utilities: file loading and word cleanup.
pub mod io;

/// The transition graph and its per-word nodes.
pub mod model;
