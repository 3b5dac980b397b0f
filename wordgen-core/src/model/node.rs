use std::cmp::Ordering;
use std::collections::HashMap;

use rand::Rng;

use crate::heap::BinaryMaxHeap;

/// One distinct word of the ingested sequence, together with the words
/// observed immediately after it.
///
/// Conceptually a vertex of a first-order Markov chain whose outgoing
/// edges are weighted by observation counts.
///
/// # Responsibilities
/// - Count how many times this word occurs in the input
/// - Count, per following word, how many times it comes right after
/// - Answer successor queries: single best, top k, weighted random draw
///
/// # Invariants
/// - `occurrences >= 1` from creation onward
/// - `total_successors` always equals the sum of all `successors` counts
#[derive(Debug, Clone)]
pub struct TransitionNode {
	/// The word this node stands for, fixed at creation.
	word: String,
	/// Number of times the word occurs in the ingested sequence.
	occurrences: usize,
	/// Sum of all successor counts, kept in step with `successors`.
	total_successors: usize,
	/// Words that follow this one, with how often each was seen.
	successors: HashMap<String, usize>,
}

impl TransitionNode {
	/// Creates a node for `word` with a single occurrence and no edges.
	pub(crate) fn new(word: &str) -> Self {
		Self {
			word: word.to_owned(),
			occurrences: 1,
			total_successors: 0,
			successors: HashMap::new(),
		}
	}

	/// The word stored at this node.
	pub fn word(&self) -> &str {
		&self.word
	}

	/// Number of times this word occurs in the ingested sequence.
	pub fn occurrences(&self) -> usize {
		self.occurrences
	}

	/// Number of distinct words observed after this one.
	pub fn distinct_successors(&self) -> usize {
		self.successors.len()
	}

	/// Total number of recorded follow-ups, over all successors.
	pub fn total_successors(&self) -> usize {
		self.total_successors
	}

	/// Records one more sighting of this word.
	pub(crate) fn record_occurrence(&mut self) {
		self.occurrences += 1;
	}

	/// Records that `next_word` was observed right after this word.
	pub(crate) fn record_successor(&mut self, next_word: &str) {
		*self.successors.entry(next_word.to_owned()).or_insert(0) += 1;
		self.total_successors += 1;
	}

	/// Returns the successor with the highest count, or `None` if no word
	/// was ever observed after this one.
	///
	/// Count ties go to the lexicographically smaller word.
	pub fn most_probable_successor(&self) -> Option<&str> {
		let mut best: Option<(&str, usize)> = None;

		for (word, &count) in &self.successors {
			let replace = match best {
				None => true,
				Some((best_word, best_count)) => {
					count > best_count || (count == best_count && word.as_str() < best_word)
				}
			};
			if replace {
				best = Some((word.as_str(), count));
			}
		}

		best.map(|(word, _)| word)
	}

	/// Returns up to `k` successors, most frequent first.
	///
	/// Builds a fresh heap over the distinct successors and extracts
	/// `min(k, distinct)` of them, so asking for more words than exist is
	/// not an error. On a count tie the lexicographically smaller word is
	/// extracted first, matching [`Self::most_probable_successor`].
	pub fn top_successors(&self, k: usize) -> Vec<String> {
		let mut heap = self.successor_heap();
		let count = k.min(heap.len());

		let mut output = Vec::with_capacity(count);
		for _ in 0..count {
			// cannot fail, count is bounded by the heap size
			let Ok(word) = heap.extract_max() else { break };
			output.push(word.to_owned());
		}
		output
	}

	/// Draws one successor at random, weighted by observation count.
	///
	/// Returns `None` if no word was ever observed after this one. Each
	/// call is independent: a fresh heap is built from the current counts
	/// and discarded afterwards.
	///
	/// # Notes
	/// - The draw range is inclusive of `total_successors`; the boundary
	///   value walks through every successor and lands on the last one
	///   extracted, so it slightly favors the rarest word. Kept as is so
	///   generated chains stay reproducible under a fixed rng seed.
	pub fn weighted_random_successor<R: Rng>(&self, rng: &mut R) -> Option<&str> {
		if self.successors.is_empty() {
			return None;
		}

		let mut remaining = rng.random_range(0..=self.total_successors as i64);
		let mut heap = self.successor_heap();

		loop {
			// the heap cannot run dry before `remaining` reaches zero:
			// the successor counts sum to the draw's upper bound
			let word = heap.extract_max().ok()?;
			remaining -= self.successors[word] as i64;
			if remaining <= 0 {
				return Some(word);
			}
		}
	}

	/// Builds an ephemeral heap over the distinct successors, ranked by
	/// count. Count ties compare the words in reverse lexical order, which
	/// makes the smaller word rank higher.
	fn successor_heap<'a>(
		&'a self,
	) -> BinaryMaxHeap<&'a str, impl Fn(&&'a str, &&'a str) -> Ordering + 'a> {
		let words: Vec<&'a str> = self.successors.keys().map(String::as_str).collect();
		BinaryMaxHeap::from_vec_with_comparator(words, move |a: &&'a str, b: &&'a str| {
			self.successors[*a]
				.cmp(&self.successors[*b])
				.then_with(|| b.cmp(a))
		})
	}
}
