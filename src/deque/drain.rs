//! Consuming iterators over a [`SimpleDeque`].
//!
//! [`Drain`] borrows the deque mutably and removes one element per step, so
//! the deque shrinks as the iterator advances. [`IntoIter`] takes the deque
//! by value.

use std::fmt;
use std::iter::FusedIterator;

use super::SimpleDeque;

/// A draining iterator over the elements of a [`SimpleDeque`].
///
/// Created by [`SimpleDeque::drain`] or by iterating over `&mut SimpleDeque`.
/// Every call to [`next`](Iterator::next) performs a [`SimpleDeque::pop`],
/// and every call to [`next_back`](DoubleEndedIterator::next_back) performs a
/// [`SimpleDeque::pop_back`].
///
/// Elements not yet yielded when the iterator is dropped stay in the deque,
/// so draining again resumes from the current front. A deque drained to
/// completion is empty and further drains yield nothing.
///
/// # Examples
///
/// ```rust
/// use simple_deque::deque;
///
/// let mut deque = deque![1, 2, 3];
///
/// let mut drain = deque.drain();
/// assert_eq!(drain.next(), Some(1));
/// drop(drain);
///
/// assert_eq!(deque.front(), Some(&2));
/// let rest: Vec<i32> = deque.drain().collect();
/// assert_eq!(rest, vec![2, 3]);
/// assert!(deque.is_empty());
/// ```
pub struct Drain<'a, T> {
    deque: &'a mut SimpleDeque<T>,
}

impl<'a, T> Drain<'a, T> {
    pub(super) const fn new(deque: &'a mut SimpleDeque<T>) -> Self {
        Self { deque }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Drain")
            .field(&self.deque.as_slice())
            .finish()
    }
}

/// An owning iterator over the elements of a [`SimpleDeque`], front to back.
///
/// Created by the [`IntoIterator`] implementation on `SimpleDeque<T>`.
pub struct IntoIter<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("IntoIter")
            .field(&self.elements.as_slice())
            .finish()
    }
}
