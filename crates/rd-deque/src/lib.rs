//! Fixed-capacity double-ended queue over a circular buffer.
//!
//! Every push and pop is O(1) and never reallocates. A push on a full deque
//! returns [`DequeError::Overflow`], a pop on an empty one returns
//! [`DequeError::Underflow`]; in both cases the deque is left untouched.

mod deque;
mod error;

pub use deque::{BoundedDeque, Iter};
pub use error::{DequeError, Result};
