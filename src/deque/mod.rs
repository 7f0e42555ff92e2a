//! Bounded, array-backed double-ended queue.
//!
//! This module provides [`SimpleDeque`], a deque that stores its elements in
//! a single `Vec` ordered from front to back, together with an optional upper
//! bound on the number of elements.
//!
//! # Overview
//!
//! - O(1) `front`, `back`, `len` and `is_empty`
//! - amortized O(1) `push` and O(1) `pop_back`
//! - O(n) `push_front` and `pop`, since every element shifts by one slot
//!
//! Front operations are linear on purpose: the storage is a plain array, and
//! callers that need cheap front operations should reach for
//! [`std::collections::VecDeque`] instead.
//!
//! # Capacity
//!
//! A deque created with [`SimpleDeque::with_max_size`] refuses insertions
//! once it holds `max_size` elements. `push` and `push_front` then return a
//! [`PushError`] holding the rejected element and leave the deque untouched.
//! Without a bound the limit is `usize::MAX`.
//!
//! Bulk construction ([`SimpleDeque::from_iter_with_max_size`], the
//! `deque![max_size = n; ...]` literal) pushes elements one by one and stops
//! silently at the bound. Use [`SimpleDeque::extend_within_capacity`] to learn
//! how many elements were taken, or push individually for strict checking.
//!
//! # Examples
//!
//! ```rust
//! use simple_deque::deque::{DequeError, SimpleDeque};
//!
//! let mut deque = SimpleDeque::with_max_size(2);
//! deque.push(1).unwrap();
//! deque.push_front(0).unwrap();
//!
//! let rejected = deque.push(2).unwrap_err();
//! assert_eq!(rejected.error(), DequeError::OutOfSpace { max_size: 2 });
//!
//! assert_eq!(deque.pop(), Some(0));
//! assert_eq!(deque.pop_back(), Some(1));
//! assert_eq!(deque.pop(), None);
//! ```

mod drain;
mod error;
mod macros;

pub use drain::{Drain, IntoIter};
pub use error::{DequeError, PushError};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// A double-ended queue backed by a contiguous, resizable array.
///
/// Index 0 of the underlying storage is the front; the last index is the
/// back. The deque owns its elements.
///
/// # Time Complexity
///
/// | Operation    | Complexity     |
/// |--------------|----------------|
/// | `new`        | O(1)           |
/// | `push`       | amortized O(1) |
/// | `push_front` | O(n)           |
/// | `pop`        | O(n)           |
/// | `pop_back`   | O(1)           |
/// | `front`      | O(1)           |
/// | `back`       | O(1)           |
/// | `len`        | O(1)           |
/// | `clear`      | O(n)           |
///
/// # Examples
///
/// ```rust
/// use simple_deque::deque::SimpleDeque;
///
/// let deque: SimpleDeque<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(deque.front(), Some(&1));
/// assert_eq!(deque.back(), Some(&3));
/// assert_eq!(deque.len(), 3);
/// assert_eq!(format!("{deque}"), "[1, 2, 3]");
/// ```
#[derive(Clone)]
pub struct SimpleDeque<T> {
    items: Vec<T>,
    max_size: usize,
}

impl<T> SimpleDeque<T> {
    /// Creates a new empty deque without a capacity bound.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_size(usize::MAX)
    }

    /// Creates a new empty deque that holds at most `max_size` elements.
    ///
    /// A bound of 0 makes every insertion fail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_deque::deque::SimpleDeque;
    ///
    /// let mut deque = SimpleDeque::with_max_size(1);
    /// assert!(deque.push('a').is_ok());
    /// assert!(deque.push('b').is_err());
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_max_size(max_size: usize) -> Self {
        Self {
            items: Vec::new(),
            max_size,
        }
    }

    /// Creates a bounded deque by pushing each element of `iter` in order.
    ///
    /// Elements past the bound are dropped without an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_deque::deque::SimpleDeque;
    ///
    /// let deque = SimpleDeque::from_iter_with_max_size(2, [1, 2, 3]);
    /// assert_eq!(deque.as_slice(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn from_iter_with_max_size<I: IntoIterator<Item = T>>(max_size: usize, iter: I) -> Self {
        let mut deque = Self::with_max_size(max_size);
        deque.extend_within_capacity(iter);
        deque
    }

    /// Returns the number of elements in the deque.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the capacity bound; `usize::MAX` when unbounded.
    #[inline]
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns `true` if the next insertion would fail.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.items.len() >= self.max_size
    }

    /// Returns how many more elements fit before the bound is reached.
    #[inline]
    #[must_use]
    pub const fn remaining_capacity(&self) -> usize {
        self.max_size.saturating_sub(self.items.len())
    }

    /// Returns a reference to the front element, if any.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns a reference to the back element, if any.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the element at `index`, counted from the front.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Appends an element to the back of the deque.
    ///
    /// # Errors
    ///
    /// Returns a [`PushError`] carrying `element` back when the deque already
    /// holds `max_size` elements. The deque is left unchanged.
    pub fn push(&mut self, element: T) -> Result<(), PushError<T>> {
        self.ensure_space(element)
            .map(|element| self.items.push(element))
    }

    /// Inserts an element at the front of the deque, shifting every other
    /// element back by one position.
    ///
    /// # Errors
    ///
    /// Returns a [`PushError`] carrying `element` back when the deque already
    /// holds `max_size` elements. The deque is left unchanged.
    pub fn push_front(&mut self, element: T) -> Result<(), PushError<T>> {
        self.ensure_space(element)
            .map(|element| self.items.insert(0, element))
    }

    /// Removes and returns the front element, shifting the remaining
    /// elements forward. Returns `None` if the deque is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    /// Removes and returns the back element. Returns `None` if the deque is
    /// empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes every element. The capacity bound is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Pushes each element of `iter` to the back until the bound is reached,
    /// returning how many elements were inserted.
    ///
    /// Elements after the first rejected one are not consumed from `iter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simple_deque::deque::SimpleDeque;
    ///
    /// let mut deque = SimpleDeque::with_max_size(3);
    /// deque.push(0).unwrap();
    ///
    /// let mut source = 1..10;
    /// assert_eq!(deque.extend_within_capacity(&mut source), 2);
    /// assert_eq!(deque.as_slice(), &[0, 1, 2]);
    /// assert_eq!(source.next(), Some(4));
    /// ```
    pub fn extend_within_capacity<I: IntoIterator<Item = T>>(&mut self, iter: I) -> usize {
        let mut iterator = iter.into_iter();
        let mut inserted = 0;
        while let Some(element) = iterator.next() {
            if self.push(element).is_err() {
                let (dropped, _) = iterator.size_hint();
                log::debug!(
                    "bulk insertion stopped at max_size {}: dropped at least {} element(s)",
                    self.max_size,
                    dropped.saturating_add(1)
                );
                break;
            }
            inserted += 1;
        }
        inserted
    }

    /// Returns the elements, front to back, as a read-only slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns a snapshot of the elements, front to back.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Creates a non-destructive iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Creates a draining iterator that pops elements from the front.
    ///
    /// Consuming the iterator mutates the deque; see [`Drain`].
    #[inline]
    pub const fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    fn ensure_space(&self, element: T) -> Result<T, PushError<T>> {
        if self.is_full() {
            log::trace!("push rejected: deque is at max_size {}", self.max_size);
            return Err(PushError::out_of_space(element, self.max_size));
        }
        Ok(element)
    }
}

impl<T> Default for SimpleDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for SimpleDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for SimpleDeque<T> {}

impl<T: Hash> Hash for SimpleDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SimpleDeque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> AsRef<[T]> for SimpleDeque<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> FromIterator<T> for SimpleDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_max_size(usize::MAX, iter)
    }
}

impl<T> From<Vec<T>> for SimpleDeque<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            max_size: usize::MAX,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleDeque<T> {
    fn from(array: [T; N]) -> Self {
        Self::from(Vec::from(array))
    }
}

impl<T> IntoIterator for SimpleDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}

impl<'a, T> IntoIterator for &'a SimpleDeque<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleDeque<T> {
    type Item = T;
    type IntoIter = Drain<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.drain()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SimpleDeque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SimpleDequeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SimpleDequeVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SimpleDequeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = SimpleDeque<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SimpleDeque::from(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SimpleDeque<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SimpleDequeVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod construction {
        use super::*;

        #[rstest]
        fn test_new_is_empty_and_unbounded() {
            let deque: SimpleDeque<i32> = SimpleDeque::new();
            assert!(deque.is_empty());
            assert_eq!(deque.len(), 0);
            assert_eq!(deque.max_size(), usize::MAX);
            assert_eq!(deque.front(), None);
            assert_eq!(deque.back(), None);
        }

        #[rstest]
        fn test_default_matches_new() {
            let deque: SimpleDeque<i32> = SimpleDeque::default();
            assert_eq!(deque, SimpleDeque::new());
            assert_eq!(deque.max_size(), usize::MAX);
        }

        #[rstest]
        fn test_from_array_is_unbounded() {
            let deque = SimpleDeque::from([1, 2, 3]);
            assert_eq!(deque.front(), Some(&1));
            assert_eq!(deque.back(), Some(&3));
            assert_eq!(deque.len(), 3);
            assert_eq!(deque.max_size(), usize::MAX);
        }

        #[rstest]
        fn test_collect_preserves_order() {
            let deque: SimpleDeque<char> = "abc".chars().collect();
            assert_eq!(deque.as_slice(), &['a', 'b', 'c']);
        }

        #[rstest]
        #[case(0, vec![])]
        #[case(1, vec![1])]
        #[case(2, vec![1, 2])]
        #[case(3, vec![1, 2, 3])]
        #[case(5, vec![1, 2, 3])]
        fn test_from_iter_with_max_size_truncates(
            #[case] max_size: usize,
            #[case] expected: Vec<i32>,
        ) {
            let deque = SimpleDeque::from_iter_with_max_size(max_size, vec![1, 2, 3]);
            assert_eq!(deque.to_vec(), expected);
            assert_eq!(deque.max_size(), max_size);
        }
    }

    mod capacity {
        use super::*;

        #[rstest]
        fn test_zero_max_size_rejects_everything() {
            let mut deque = SimpleDeque::with_max_size(0);
            assert!(deque.is_full());
            assert_eq!(deque.push(1).map_err(PushError::into_inner), Err(1));
            assert_eq!(deque.push_front(2).map_err(PushError::into_inner), Err(2));
            assert!(deque.is_empty());
        }

        #[rstest]
        fn test_remaining_capacity_counts_down() {
            let mut deque = SimpleDeque::with_max_size(3);
            assert_eq!(deque.remaining_capacity(), 3);
            deque.push(1).unwrap();
            deque.push_front(0).unwrap();
            assert_eq!(deque.remaining_capacity(), 1);
            deque.push(2).unwrap();
            assert_eq!(deque.remaining_capacity(), 0);
            assert!(deque.is_full());
        }

        #[rstest]
        fn test_unbounded_remaining_capacity() {
            let deque = SimpleDeque::from(vec![1, 2]);
            assert_eq!(deque.remaining_capacity(), usize::MAX - 2);
            assert!(!deque.is_full());
        }

        #[rstest]
        fn test_full_push_leaves_deque_unchanged() {
            let mut deque = SimpleDeque::from_iter_with_max_size(2, [1, 2]);
            let error = deque.push(3).unwrap_err();
            assert_eq!(error.error(), DequeError::OutOfSpace { max_size: 2 });
            assert_eq!(error.into_inner(), 3);

            let error = deque.push_front(0).unwrap_err();
            assert_eq!(error.into_inner(), 0);
            assert_eq!(deque.as_slice(), &[1, 2]);
        }

        #[rstest]
        fn test_pop_frees_space() {
            let mut deque = SimpleDeque::from_iter_with_max_size(1, [1]);
            assert!(deque.push(2).is_err());
            assert_eq!(deque.pop(), Some(1));
            assert!(deque.push(2).is_ok());
        }

        #[rstest]
        fn test_clear_keeps_max_size() {
            let mut deque = SimpleDeque::from_iter_with_max_size(2, [1, 2]);
            deque.clear();
            assert!(deque.is_empty());
            assert_eq!(deque.max_size(), 2);
            assert!(deque.push(3).is_ok());
        }

        #[rstest]
        fn test_extend_within_capacity_reports_inserted() {
            let mut deque = SimpleDeque::with_max_size(4);
            assert_eq!(deque.extend_within_capacity([1, 2]), 2);
            assert_eq!(deque.extend_within_capacity([3, 4, 5, 6]), 2);
            assert_eq!(deque.extend_within_capacity([7]), 0);
            assert_eq!(deque.as_slice(), &[1, 2, 3, 4]);
        }
    }

    mod push_pop {
        use super::*;

        #[rstest]
        fn test_push_appends_to_back() {
            let mut deque = SimpleDeque::new();
            deque.push(1).unwrap();
            deque.push(2).unwrap();
            assert_eq!(deque.front(), Some(&1));
            assert_eq!(deque.back(), Some(&2));
        }

        #[rstest]
        fn test_push_front_becomes_front() {
            let mut deque = SimpleDeque::from([2, 3]);
            deque.push_front(1).unwrap();
            assert_eq!(deque.front(), Some(&1));
            assert_eq!(deque.as_slice(), &[1, 2, 3]);
        }

        #[rstest]
        fn test_pop_removes_front() {
            let mut deque = SimpleDeque::from([1, 2, 3]);
            assert_eq!(deque.pop(), Some(1));
            assert_eq!(deque.as_slice(), &[2, 3]);
        }

        #[rstest]
        fn test_pop_back_removes_back() {
            let mut deque = SimpleDeque::from([1, 2, 3]);
            assert_eq!(deque.pop_back(), Some(3));
            assert_eq!(deque.as_slice(), &[1, 2]);
        }

        #[rstest]
        fn test_pop_on_empty_returns_none() {
            let mut deque: SimpleDeque<i32> = SimpleDeque::new();
            assert_eq!(deque.pop(), None);
            assert_eq!(deque.pop_back(), None);
            assert_eq!(deque.len(), 0);
        }

        #[rstest]
        fn test_get_indexes_from_front() {
            let deque = SimpleDeque::from(["a", "b"]);
            assert_eq!(deque.get(0), Some(&"a"));
            assert_eq!(deque.get(1), Some(&"b"));
            assert_eq!(deque.get(2), None);
        }
    }

    mod iteration {
        use super::*;

        #[rstest]
        fn test_for_loop_over_mut_reference_drains() {
            let mut deque = SimpleDeque::from([1, 2, 3]);
            let mut seen = Vec::new();
            for element in &mut deque {
                seen.push(element);
            }
            assert_eq!(seen, vec![1, 2, 3]);
            assert!(deque.is_empty());
            assert_eq!((&mut deque).into_iter().next(), None);
        }

        #[rstest]
        fn test_drain_resumes_from_current_front() {
            let mut deque = SimpleDeque::from([1, 2, 3]);
            deque.pop();
            let rest: Vec<i32> = deque.drain().collect();
            assert_eq!(rest, vec![2, 3]);
        }

        #[rstest]
        fn test_borrowing_iteration_does_not_mutate() {
            let deque = SimpleDeque::from([1, 2, 3]);
            let sum: i32 = deque.iter().sum();
            let doubled: Vec<i32> = (&deque).into_iter().map(|value| value * 2).collect();
            assert_eq!(sum, 6);
            assert_eq!(doubled, vec![2, 4, 6]);
            assert_eq!(deque.len(), 3);
        }

        #[rstest]
        fn test_owned_into_iter_is_front_to_back() {
            let deque = SimpleDeque::from([1, 2, 3]);
            let collected: Vec<i32> = deque.into_iter().collect();
            assert_eq!(collected, vec![1, 2, 3]);
        }
    }

    mod formatting {
        use super::*;

        #[rstest]
        #[case(vec![], "[]")]
        #[case(vec![42], "[42]")]
        #[case(vec![1, 2, 3], "[1, 2, 3]")]
        fn test_display(#[case] items: Vec<i32>, #[case] expected: &str) {
            let deque = SimpleDeque::from(items);
            assert_eq!(format!("{deque}"), expected);
        }

        #[rstest]
        fn test_display_uses_element_display() {
            let deque = SimpleDeque::from(["a", "b"]);
            assert_eq!(deque.to_string(), "[a, b]");
        }

        #[rstest]
        fn test_debug_is_list() {
            let deque = SimpleDeque::from(["a", "b"]);
            assert_eq!(format!("{deque:?}"), r#"["a", "b"]"#);
        }
    }

    mod equality {
        use super::*;
        use std::hash::DefaultHasher;

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        #[rstest]
        fn test_equality_ignores_max_size() {
            let bounded = SimpleDeque::from_iter_with_max_size(5, [1, 2]);
            let unbounded = SimpleDeque::from([1, 2]);
            assert_eq!(bounded, unbounded);
            assert_eq!(hash_of(&bounded), hash_of(&unbounded));
        }

        #[rstest]
        fn test_equality_respects_order() {
            assert_ne!(SimpleDeque::from([1, 2]), SimpleDeque::from([2, 1]));
        }

        #[rstest]
        fn test_clone_is_independent() {
            let original = SimpleDeque::from_iter_with_max_size(3, [1, 2]);
            let mut cloned = original.clone();
            cloned.push(3).unwrap();
            assert_eq!(original.len(), 2);
            assert_eq!(cloned.len(), 3);
            assert_eq!(cloned.max_size(), 3);
        }
    }
}
