use std::{error::Error, fmt::Display};

pub type Result<T> = std::result::Result<T, DequeError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// Requested capacity was not positive or could not be allocated, no
    /// deque was built.
    InvalidCapacity,
    /// Push on a full deque.
    Overflow,
    /// Pop on an empty deque.
    Underflow,
}

impl Error for DequeError {}

impl Display for DequeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DequeError::InvalidCapacity => write!(f, "capacity must be positive and fit in memory"),
            DequeError::Overflow => write!(f, "deque is full"),
            DequeError::Underflow => write!(f, "deque is empty"),
        }
    }
}
