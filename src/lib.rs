//! # simple-deque
//!
//! A double-ended queue backed by a contiguous, resizable array, with an
//! optional upper bound on the number of elements it may hold.
//!
//! ## Overview
//!
//! [`SimpleDeque`](deque::SimpleDeque) keeps its elements in a single `Vec`,
//! front first. Operations on the back are cheap, operations on the front
//! shift every element:
//!
//! | Operation    | Complexity      |
//! |--------------|-----------------|
//! | `push`       | amortized O(1)  |
//! | `pop_back`   | O(1)            |
//! | `push_front` | O(n)            |
//! | `pop`        | O(n)            |
//!
//! Pushing onto a full deque fails with
//! [`DequeError::OutOfSpace`](deque::DequeError::OutOfSpace); popping an
//! empty deque simply returns `None`.
//!
//! ## Feature Flags
//!
//! - `deque`: the deque, its iterators and the `deque!` macro (default)
//! - `serde`: `Serialize`/`Deserialize` implementations
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use simple_deque::prelude::*;
//!
//! let mut deque = deque![max_size = 3; 1, 2];
//! deque.push_front(0).unwrap();
//! assert_eq!(deque.to_string(), "[0, 1, 2]");
//! assert!(deque.push(3).is_err());
//!
//! let drained: Vec<i32> = deque.drain().collect();
//! assert_eq!(drained, vec![0, 1, 2]);
//! assert!(deque.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the deque, its error types and the `deque!` macro.
///
/// # Usage
///
/// ```rust
/// use simple_deque::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "deque")]
    pub use crate::deque::*;

    #[cfg(feature = "deque")]
    pub use crate::deque;
}

#[cfg(feature = "deque")]
pub mod deque;
