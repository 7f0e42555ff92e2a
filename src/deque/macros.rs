//! The `deque!` literal macro.

/// Creates a [`SimpleDeque`](crate::deque::SimpleDeque) from a list of
/// elements, front first.
///
/// # Syntax
///
/// ```text
/// deque![]                              // empty, unbounded
/// deque![a, b, c]                       // unbounded
/// deque![max_size = n; a, b, c]         // bounded by n
/// ```
///
/// Elements are pushed one at a time. With a bound, elements that no longer
/// fit are dropped without an error, exactly like
/// [`SimpleDeque::from_iter_with_max_size`](crate::deque::SimpleDeque::from_iter_with_max_size).
///
/// # Examples
///
/// ```rust
/// use simple_deque::deque;
///
/// let deque = deque![1, 2, 3];
/// assert_eq!(deque.front(), Some(&1));
/// assert_eq!(deque.back(), Some(&3));
/// assert_eq!(deque.len(), 3);
///
/// let bounded = deque![max_size = 2; 1, 2, 3];
/// assert_eq!(bounded.as_slice(), &[1, 2]);
/// assert!(bounded.is_full());
/// ```
#[macro_export]
macro_rules! deque {
    () => {
        $crate::deque::SimpleDeque::new()
    };

    (max_size = $max_size:expr $(; $($element:expr),* $(,)?)?) => {
        $crate::deque::SimpleDeque::from_iter_with_max_size(
            $max_size,
            [$($($element),*)?],
        )
    };

    ($($element:expr),+ $(,)?) => {
        $crate::deque::SimpleDeque::from([$($element),+])
    };
}
