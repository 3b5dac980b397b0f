use std::collections::HashMap;

use rand::Rng;

use crate::error::{Error, Result};

use super::node::TransitionNode;

/// First-order Markov graph over a sequence of words.
///
/// The graph owns one [`TransitionNode`] per distinct word, keyed by the
/// word itself. Edges are stored inside the nodes as successor counts;
/// every cross-reference is a plain word key looked up in `nodes`, never a
/// direct alias, so a word can be both the current word and its own
/// predecessor during ingestion without trouble.
///
/// # Responsibilities
/// - Ingest an ordered word sequence in one linear pass
/// - Answer the three queries: top-k successors, greedy chain, weighted
///   random chain
///
/// # Invariants
/// - Every word recorded as someone's successor has a node in `nodes`
/// - The sum of all node occurrence counts equals the number of ingested
///   words
/// - After construction the graph is read-only
#[derive(Debug, Clone)]
pub struct TransitionGraph {
	nodes: HashMap<String, TransitionNode>,
	/// Most recently ingested word, `None` before the first one.
	previous: Option<String>,
}

impl TransitionGraph {
	/// Builds a graph from an ordered, finite sequence of words.
	///
	/// Words are processed left to right: the first word only creates its
	/// node; every later word increments (or creates) its node and then
	/// records an edge from the previous word to itself.
	pub fn new<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut graph = Self {
			nodes: HashMap::new(),
			previous: None,
		};
		for word in words {
			graph.add_word(word.as_ref());
		}
		graph
	}

	/// Number of distinct words in the graph.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns `true` if no word was ever ingested.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Looks up the node of `word`, if the word was ever ingested.
	pub fn node(&self, word: &str) -> Option<&TransitionNode> {
		self.nodes.get(word)
	}

	/// Ingests one word: bumps or creates its node, then records the edge
	/// coming from the previous word.
	fn add_word(&mut self, word: &str) {
		match self.nodes.get_mut(word) {
			Some(node) => node.record_occurrence(),
			None => {
				self.nodes.insert(word.to_owned(), TransitionNode::new(word));
			}
		}

		if let Some(previous) = self.previous.take() {
			// the previous word was ingested before us, its node exists
			if let Some(previous_node) = self.nodes.get_mut(&previous) {
				previous_node.record_successor(word);
			}
		}
		self.previous = Some(word.to_owned());
	}

	fn seed_node(&self, seed: &str) -> Result<&TransitionNode> {
		self.nodes
			.get(seed)
			.ok_or_else(|| Error::SeedNotFound(seed.to_owned()))
	}

	/// Returns the `k` most probable words following `seed`, best first.
	///
	/// Fewer than `k` words are returned when the seed has fewer distinct
	/// successors.
	///
	/// # Errors
	/// [`Error::SeedNotFound`] if `seed` was never ingested.
	pub fn top_successors(&self, seed: &str, k: usize) -> Result<Vec<String>> {
		Ok(self.seed_node(seed)?.top_successors(k))
	}

	/// Generates a chain of exactly `k` words, always advancing to the
	/// most probable successor of the current word.
	///
	/// When the current word has no successor the walk resets to the seed
	/// word instead of stopping, so the chain always reaches length `k`.
	///
	/// # Errors
	/// [`Error::SeedNotFound`] if `seed` was never ingested.
	pub fn generate_greedy_chain(&self, seed: &str, k: usize) -> Result<Vec<String>> {
		let seed_node = self.seed_node(seed)?;

		let mut chain = Vec::with_capacity(k);
		let mut current = seed_node;
		for _ in 0..k {
			chain.push(current.word().to_owned());
			current = current
				.most_probable_successor()
				.and_then(|next| self.nodes.get(next))
				.unwrap_or(seed_node);
		}
		Ok(chain)
	}

	/// Generates a chain of exactly `k` words, drawing each step at random
	/// weighted by successor frequency.
	///
	/// Same dead-end policy as [`Self::generate_greedy_chain`]: the walk
	/// resets to the seed word and the chain always reaches length `k`.
	/// The randomness source is supplied by the caller so runs can be made
	/// reproducible.
	///
	/// # Errors
	/// [`Error::SeedNotFound`] if `seed` was never ingested.
	pub fn generate_weighted_chain<R: Rng>(
		&self,
		seed: &str,
		k: usize,
		rng: &mut R,
	) -> Result<Vec<String>> {
		let seed_node = self.seed_node(seed)?;

		let mut chain = Vec::with_capacity(k);
		let mut current = seed_node;
		for _ in 0..k {
			chain.push(current.word().to_owned());
			current = current
				.weighted_random_successor(rng)
				.and_then(|next| self.nodes.get(next))
				.unwrap_or(seed_node);
		}
		Ok(chain)
	}
}
