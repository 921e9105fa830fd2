use std::fmt::Display;

use crate::error::{Result, RunnerError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PushBack(i64),
    PushFront(i64),
    PopBack,
    PopFront,
}

impl Command {
    /// Parses the command named by `word`, pulling its value from `rest`
    /// when it takes one.
    pub fn parse<'a>(word: &str, rest: &mut impl Iterator<Item = &'a str>) -> Result<Self> {
        match word {
            "push_back" => Ok(Command::PushBack(value(word, rest)?)),
            "push_front" => Ok(Command::PushFront(value(word, rest)?)),
            "pop_back" => Ok(Command::PopBack),
            "pop_front" => Ok(Command::PopFront),
            _ => Err(RunnerError::UnknownCommand(word.to_string())),
        }
    }
}

fn value<'a>(word: &str, rest: &mut impl Iterator<Item = &'a str>) -> Result<i64> {
    let token = rest
        .next()
        .ok_or_else(|| RunnerError::MissingArgument(word.to_string()))?;
    token.parse().map_err(|_| RunnerError::InvalidNumber {
        token: token.to_string(),
        what: "value",
    })
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::PushBack(x) => write!(f, "push_back {}", x),
            Command::PushFront(x) => write!(f, "push_front {}", x),
            Command::PopBack => write!(f, "pop_back"),
            Command::PopFront => write!(f, "pop_front"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse_all(src: &str) -> Vec<Result<Command>> {
        let mut tokens = src.split_whitespace();
        let mut res = Vec::new();
        while let Some(word) = tokens.next() {
            res.push(Command::parse(word, &mut tokens));
        }
        res
    }

    #[test]
    fn test_parse_commands() {
        let cmds: Vec<_> = parse_all("push_back 1\npush_front -7 pop_back\n\npop_front")
            .into_iter()
            .map(|c| c.unwrap())
            .collect();
        assert_eq!(
            cmds,
            vec![
                Command::PushBack(1),
                Command::PushFront(-7),
                Command::PopBack,
                Command::PopFront,
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        let res = parse_all("peek");
        assert!(matches!(&res[0], Err(RunnerError::UnknownCommand(c)) if c == "peek"));

        let res = parse_all("push_front");
        assert!(matches!(&res[0], Err(RunnerError::MissingArgument(c)) if c == "push_front"));

        let res = parse_all("push_back 1.5");
        assert!(
            matches!(&res[0], Err(RunnerError::InvalidNumber { token, .. }) if token == "1.5")
        );
    }
}
