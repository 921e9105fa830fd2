use std::{error::Error, fmt::Display, io};

use rd_deque::DequeError;

pub type Result<T> = std::result::Result<T, RunnerError>;

#[derive(Debug)]
pub enum RunnerError {
    Io(io::Error),
    Deque(DequeError),
    MissingHeader(&'static str),
    InvalidNumber { token: String, what: &'static str },
    UnknownCommand(String),
    MissingArgument(String),
    UnexpectedEof { expected: usize, read: usize },
}

impl Error for RunnerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunnerError::Io(e) => Some(e),
            RunnerError::Deque(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for RunnerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunnerError::Io(e) => write!(f, "io error, {}", e),
            RunnerError::Deque(e) => write!(f, "deque error, {}", e),
            RunnerError::MissingHeader(what) => write!(f, "input ended before the {}", what),
            RunnerError::InvalidNumber { token, what } => {
                write!(f, "`{}` is not a valid {}", token, what)
            }
            RunnerError::UnknownCommand(c) => write!(f, "unknown command `{}`", c),
            RunnerError::MissingArgument(c) => write!(f, "command `{}` needs a value", c),
            RunnerError::UnexpectedEof { expected, read } => write!(
                f,
                "input ended after {} of {} commands",
                read, expected
            ),
        }
    }
}
