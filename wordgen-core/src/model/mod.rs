//! Markov model over words.
//!
//! A [`graph::TransitionGraph`] owns one [`node::TransitionNode`] per
//! distinct word; the nodes carry the occurrence and successor counts and
//! answer the per-word queries, the graph handles ingestion and the
//! chain walks.

/// The word-keyed transition graph and its three queries.
pub mod graph;

/// A single word with its occurrence count and weighted outgoing edges.
pub mod node;
