use std::io::{Read, Write};

use rd_deque::{BoundedDeque, DequeError};
use tracing::{debug, info, trace, warn};

use crate::command::Command;
use crate::error::{Result, RunnerError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub printed: usize,
    pub errors: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Pushed,
    Popped(i64),
    Rejected(DequeError),
}

pub struct Driver {
    config: rd_config::Driver,
}

pub struct DriverBuilder {
    config: rd_config::Driver,
}

impl DriverBuilder {
    pub fn new(config: Option<rd_config::Driver>) -> Self {
        Self {
            config: config.unwrap_or_default(),
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn error_token(mut self, token: impl Into<String>) -> Self {
        self.config.error_token = token.into();
        self
    }

    pub fn build(self) -> std::result::Result<Driver, rd_config::ConfigError> {
        self.config.validate()?;
        Ok(Driver {
            config: self.config,
        })
    }
}

impl Driver {
    pub fn config(&self) -> &rd_config::Driver {
        &self.config
    }

    pub fn run(&self, mut input: impl Read, output: impl Write) -> Result<RunSummary> {
        let mut src = String::new();
        input.read_to_string(&mut src).map_err(RunnerError::Io)?;
        self.run_str(&src, output)
    }

    /// Runs a whole batch: `<n> <capacity>` followed by `n` commands, all
    /// whitespace separated. Popped values and error tokens are written to
    /// `output`, one per line.
    pub fn run_str(&self, src: &str, output: impl Write) -> Result<RunSummary> {
        let mut tokens = src.split_whitespace();
        let n: usize = header(&mut tokens, "command count")?;
        let capacity: i64 = header(&mut tokens, "capacity")?;
        let deque = BoundedDeque::try_with_capacity(capacity).map_err(RunnerError::Deque)?;
        info!(msg = "run start", commands = n, capacity = capacity);

        let mut session = Session {
            deque,
            out: output,
            error_token: self.config.error_token.as_str(),
            summary: RunSummary::default(),
        };

        for read in 0..n {
            let Some(word) = tokens.next() else {
                self.tolerate(RunnerError::UnexpectedEof { expected: n, read })?;
                break;
            };
            match Command::parse(word, &mut tokens) {
                Ok(cmd) => {
                    session.execute(cmd)?;
                }
                Err(RunnerError::UnknownCommand(c)) if !self.config.strict => {
                    warn!(msg = "unknown command skipped", command = %c);
                    session.summary.skipped += 1;
                }
                Err(e) => {
                    self.tolerate(e)?;
                    break;
                }
            }
        }

        if tokens.next().is_some() {
            debug!(msg = "trailing input ignored");
        }
        session.out.flush().map_err(RunnerError::Io)?;
        Ok(session.summary)
    }

    // malformed input stops the run; only strict mode reports it as a failure
    fn tolerate(&self, e: RunnerError) -> Result<()> {
        if self.config.strict {
            return Err(e);
        }
        warn!(msg = "input stopped early", reason = %e);
        Ok(())
    }
}

fn header<'a, T: std::str::FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<T> {
    let token = tokens.next().ok_or(RunnerError::MissingHeader(what))?;
    token.parse().map_err(|_| RunnerError::InvalidNumber {
        token: token.to_string(),
        what,
    })
}

struct Session<'a, W: Write> {
    deque: BoundedDeque<i64>,
    out: W,
    error_token: &'a str,
    summary: RunSummary,
}

impl<'a, W: Write> Session<'a, W> {
    fn execute(&mut self, cmd: Command) -> Result<()> {
        let outcome = match cmd {
            Command::PushBack(x) => self.deque.push_back(x).map(|_| Outcome::Pushed),
            Command::PushFront(x) => self.deque.push_front(x).map(|_| Outcome::Pushed),
            Command::PopBack => self.deque.pop_back().map(Outcome::Popped),
            Command::PopFront => self.deque.pop_front().map(Outcome::Popped),
        }
        .unwrap_or_else(Outcome::Rejected);
        trace!(command = %cmd, outcome = ?outcome, len = self.deque.len());

        match outcome {
            Outcome::Pushed => {}
            Outcome::Popped(x) => {
                writeln!(self.out, "{}", x).map_err(RunnerError::Io)?;
                self.summary.printed += 1;
            }
            Outcome::Rejected(e) => {
                debug!(msg = "command rejected", command = %cmd, reason = %e);
                writeln!(self.out, "{}", self.error_token).map_err(RunnerError::Io)?;
                self.summary.errors += 1;
            }
        }
        self.summary.executed += 1;
        Ok(())
    }
}
