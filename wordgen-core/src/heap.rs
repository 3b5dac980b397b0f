use std::cmp::Ordering;

use crate::error::{Error, Result};

/// Comparison strategy used when no explicit comparator is supplied.
pub type NaturalOrder<E> = fn(&E, &E) -> Ordering;

/// An array-backed binary max-heap with a pluggable comparison strategy.
///
/// Only the maximum element can be observed or removed. The ordering is
/// supplied at construction, either the natural `Ord` of the element type
/// (`new`, `from_vec`) or an explicit comparator (`with_comparator`,
/// `from_vec_with_comparator`). `Ordering::Greater` means the first
/// argument ranks higher.
///
/// # Responsibilities
/// - Maintain the max-heap property over the backing array
/// - Offer O(log n) insertion and extraction, O(1) peek
/// - Build from an existing vector in O(n) via a bottom-up sift-down pass
///
/// # Invariants
/// - Every element compares greater than or equal to its two children
///   (children of index `i` live at `2i + 1` and `2i + 2`)
/// - The backing storage grows geometrically and never shrinks
pub struct BinaryMaxHeap<E, C> {
	items: Vec<E>,
	compare: C,
}

impl<E: Ord> BinaryMaxHeap<E, NaturalOrder<E>> {
	/// Creates an empty heap ordered by the element type's natural order.
	pub fn new() -> Self {
		Self::with_comparator(Ord::cmp)
	}

	/// Builds a heap from `items` using the natural order.
	pub fn from_vec(items: Vec<E>) -> Self {
		Self::from_vec_with_comparator(items, Ord::cmp)
	}
}

impl<E: Ord> Default for BinaryMaxHeap<E, NaturalOrder<E>> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E, C> BinaryMaxHeap<E, C>
where
	C: Fn(&E, &E) -> Ordering,
{
	/// Creates an empty heap ordered by `compare`.
	pub fn with_comparator(compare: C) -> Self {
		Self { items: Vec::new(), compare }
	}

	/// Builds a heap from `items` using `compare`.
	///
	/// Establishes the heap invariant in O(n): sifts down every parent,
	/// from the last one up to the root.
	pub fn from_vec_with_comparator(items: Vec<E>, compare: C) -> Self {
		let mut heap = Self { items, compare };
		heap.build();
		heap
	}

	/// Adds `item` to the heap.
	///
	/// O(1) amortized, O(log n) worst case: the item is appended and
	/// sifted upward while it compares greater than its parent.
	pub fn insert(&mut self, item: E) {
		self.items.push(item);
		self.sift_up(self.items.len() - 1);
	}

	/// Returns, without removing, the maximum element.
	///
	/// # Errors
	/// [`Error::EmptyHeap`] if the heap contains no elements.
	pub fn peek(&self) -> Result<&E> {
		self.items.first().ok_or(Error::EmptyHeap)
	}

	/// Returns and removes the maximum element. O(log n).
	///
	/// The last element replaces the root and is sifted downward,
	/// swapping with the larger of its children until it settles.
	///
	/// # Errors
	/// [`Error::EmptyHeap`] if the heap contains no elements.
	pub fn extract_max(&mut self) -> Result<E> {
		if self.items.is_empty() {
			return Err(Error::EmptyHeap);
		}
		let max = self.items.swap_remove(0);
		if !self.items.is_empty() {
			self.sift_down(0);
		}
		Ok(max)
	}

	/// Returns the number of elements currently stored.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns `true` if the heap holds no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Removes every element. The backing storage is kept.
	pub fn clear(&mut self) {
		self.items.clear();
	}

	/// Returns a copy of the elements in backing-array order.
	///
	/// The maximum element is at index 0; no other position carries any
	/// ordering guarantee.
	pub fn to_vec(&self) -> Vec<E>
	where
		E: Clone,
	{
		self.items.clone()
	}

	fn build(&mut self) {
		// the last parent sits at (len - 2) / 2, everything past it is a leaf
		for index in (0..self.items.len() / 2).rev() {
			self.sift_down(index);
		}
	}

	fn sift_up(&mut self, index: usize) {
		let mut current = index;
		while current != 0 {
			let parent = (current - 1) / 2;
			if (self.compare)(&self.items[current], &self.items[parent]) != Ordering::Greater {
				break;
			}
			self.items.swap(current, parent);
			current = parent;
		}
	}

	fn sift_down(&mut self, index: usize) {
		let mut current = index;
		loop {
			let left = 2 * current + 1;
			let right = left + 1;
			if left >= self.items.len() {
				// leaf, nothing below to compare against
				break;
			}

			let mut largest = left;
			if right < self.items.len()
				&& (self.compare)(&self.items[right], &self.items[left]) != Ordering::Less
			{
				largest = right;
			}

			if (self.compare)(&self.items[current], &self.items[largest]) == Ordering::Less {
				self.items.swap(current, largest);
				current = largest;
			} else {
				break;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;

	fn drain<E, C>(mut heap: BinaryMaxHeap<E, C>) -> Vec<E>
	where
		C: Fn(&E, &E) -> Ordering,
	{
		let mut output = Vec::with_capacity(heap.len());
		while let Ok(item) = heap.extract_max() {
			output.push(item);
		}
		output
	}

	#[test]
	fn insert_then_extract_is_non_increasing() {
		let mut heap = BinaryMaxHeap::new();
		for value in [5, 1, 9, 3, 7, 7, 2, 8, 0, 6] {
			heap.insert(value);
		}
		assert_eq!(heap.len(), 10);
		assert_eq!(drain(heap), vec![9, 8, 7, 7, 6, 5, 3, 2, 1, 0]);
	}

	#[test]
	fn from_vec_builds_a_valid_heap() {
		let heap = BinaryMaxHeap::from_vec(vec![3, 11, 2, 8, 5, 13, 1]);
		assert_eq!(*heap.peek().unwrap(), 13);
		assert_eq!(drain(heap), vec![13, 11, 8, 5, 3, 2, 1]);
	}

	#[test]
	fn from_vec_handles_even_lengths() {
		// even lengths put the last parent right before the first leaf
		let heap = BinaryMaxHeap::from_vec(vec![2, 7, 1, 4]);
		assert_eq!(drain(heap), vec![7, 4, 2, 1]);

		let heap = BinaryMaxHeap::from_vec(vec![5, 9]);
		assert_eq!(drain(heap), vec![9, 5]);

		let heap = BinaryMaxHeap::from_vec(vec![3]);
		assert_eq!(drain(heap), vec![3]);
	}

	#[test]
	fn comparator_is_authoritative() {
		// reversed comparison turns the structure into a min-heap
		let heap = BinaryMaxHeap::from_vec_with_comparator(vec![4, 1, 3, 2], |a: &i32, b: &i32| {
			b.cmp(a)
		});
		assert_eq!(drain(heap), vec![1, 2, 3, 4]);
	}

	#[test]
	fn peek_does_not_remove() {
		let mut heap = BinaryMaxHeap::new();
		heap.insert("b");
		heap.insert("a");
		assert_eq!(*heap.peek().unwrap(), "b");
		assert_eq!(heap.len(), 2);
	}

	#[test]
	fn empty_heap_is_reported() {
		let mut heap: BinaryMaxHeap<i32, _> = BinaryMaxHeap::new();
		assert!(matches!(heap.peek(), Err(Error::EmptyHeap)));
		assert!(matches!(heap.extract_max(), Err(Error::EmptyHeap)));
	}

	#[test]
	fn snapshot_keeps_maximum_at_index_zero() {
		let mut heap = BinaryMaxHeap::new();
		for value in [2, 9, 4, 9, 1] {
			heap.insert(value);
		}
		let snapshot = heap.to_vec();
		assert_eq!(snapshot.len(), 5);
		assert_eq!(snapshot[0], 9);
	}

	#[test]
	fn clear_resets_size() {
		let mut heap = BinaryMaxHeap::from_vec(vec![1, 2, 3]);
		heap.clear();
		assert!(heap.is_empty());
		assert_eq!(heap.len(), 0);
		heap.insert(42);
		assert_eq!(*heap.peek().unwrap(), 42);
	}

	#[test]
	fn from_empty_vec_is_usable() {
		let mut heap: BinaryMaxHeap<i32, _> = BinaryMaxHeap::from_vec(Vec::new());
		assert!(heap.is_empty());
		heap.insert(1);
		assert_eq!(heap.extract_max().unwrap(), 1);
	}
}
