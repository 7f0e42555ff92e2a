//! Error types for bounded deque insertion.
//!
//! The only failure a [`SimpleDeque`](super::SimpleDeque) can report is
//! running out of space: an insertion was attempted while the deque already
//! held `max_size` elements. Removing from an empty deque is not an error and
//! is reported through `Option` instead.

use std::fmt;

/// Represents errors that can occur when inserting into a deque.
///
/// # Examples
///
/// ```rust
/// use simple_deque::deque::DequeError;
///
/// let error = DequeError::OutOfSpace { max_size: 2 };
/// assert_eq!(
///     format!("{error}"),
///     "deque is out of space: maximum size is 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DequeError {
    /// The deque already holds `max_size` elements.
    OutOfSpace {
        /// The capacity bound of the deque that rejected the element.
        max_size: usize,
    },
}

impl fmt::Display for DequeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfSpace { max_size } => {
                write!(formatter, "deque is out of space: maximum size is {max_size}")
            }
        }
    }
}

impl std::error::Error for DequeError {}

/// A rejected insertion, carrying the element that could not be stored.
///
/// Returned by [`SimpleDeque::push`](super::SimpleDeque::push) and
/// [`SimpleDeque::push_front`](super::SimpleDeque::push_front) so the caller
/// keeps ownership of the element when the deque is full.
///
/// # Examples
///
/// ```rust
/// use simple_deque::deque::{DequeError, SimpleDeque};
///
/// let mut deque = SimpleDeque::with_max_size(0);
/// let rejected = deque.push(String::from("kept")).unwrap_err();
///
/// assert_eq!(rejected.error(), DequeError::OutOfSpace { max_size: 0 });
/// assert_eq!(rejected.into_inner(), "kept");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushError<T> {
    element: T,
    error: DequeError,
}

impl<T> PushError<T> {
    pub(crate) const fn out_of_space(element: T, max_size: usize) -> Self {
        Self {
            element,
            error: DequeError::OutOfSpace { max_size },
        }
    }

    /// Returns the reason the insertion failed.
    #[inline]
    #[must_use]
    pub const fn error(&self) -> DequeError {
        self.error
    }

    /// Returns a reference to the rejected element.
    #[inline]
    #[must_use]
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Consumes the error, returning the rejected element.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> T {
        self.element
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.error)
    }
}

impl<T: fmt::Debug> std::error::Error for PushError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<PushError<T>> for DequeError {
    fn from(error: PushError<T>) -> Self {
        error.error
    }
}
