//! Maps one raw input line to a [`Command`].
//!
//! Bare keywords (`bye`, `list`, `help`) are tried first, then keywords that
//! take arguments, matched on the first word. Argument checking belongs to
//! the matching `Command` constructor, so every failure comes back as an
//! [`EinsteinError`].

use crate::command::Command;
use crate::error::{EinsteinError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub enforce_event_order: bool,
}

fn bare(line: &str) -> Option<Command> {
    match line.to_ascii_lowercase().as_str() {
        "bye" => Some(Command::Exit),
        "list" => Some(Command::List),
        "help" => Some(Command::Help),
        _ => None,
    }
}

/// `<keyword> <args>` forms; `None` when the first word is not a keyword.
/// A keyword with nothing after it still reaches its constructor, which
/// reports what is missing.
fn prefixed(line: &str, options: &ParseOptions) -> Option<Result<Command>> {
    let (keyword, args) = line.split_once(' ').unwrap_or((line, ""));
    let command = match keyword {
        "list" => Command::list_by_date(args),
        "mark" => Command::mark(args),
        "unmark" => Command::unmark(args),
        "todo" => Command::todo(args),
        "deadline" => Command::deadline(args),
        "event" => Command::event(args, options),
        "delete" => Command::delete(args),
        "find" => Command::find(args),
        "tag" => Command::tag(args),
        "untag" => Command::untag(args),
        "priority" => Command::priority(args),
        _ => return None,
    };
    Some(command)
}

pub fn parse(line: &str) -> Result<Command> {
    parse_with(line, &ParseOptions::default())
}

pub fn parse_with(line: &str, options: &ParseOptions) -> Result<Command> {
    let line = line.trim();

    if let Some(command) = bare(line) {
        return Ok(command);
    }
    prefixed(line, options).unwrap_or(Err(EinsteinError::UnknownCommand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_keywords_ignore_case() {
        assert_eq!(parse("bye"), Ok(Command::Exit));
        assert_eq!(parse("LIST"), Ok(Command::List));
        assert_eq!(parse("  help "), Ok(Command::Help));
        assert!(parse("bye").unwrap().is_exit());
        assert!(!parse("list").unwrap().is_exit());
    }

    #[test]
    fn list_with_argument_is_a_date_query() {
        assert!(matches!(parse("list 2019-12-02"), Ok(Command::ListByDate(_))));
        assert_eq!(parse("list tomorrow"), Err(EinsteinError::InvalidDate));
    }

    #[test]
    fn prefixed_commands_dispatch() {
        assert!(matches!(parse("todo Read book"), Ok(Command::AddTodo(_))));
        assert!(matches!(
            parse("deadline Submit report /by 2/12/2023 1800"),
            Ok(Command::AddDeadline(_))
        ));
        assert!(matches!(
            parse("event Team sync /from 2/12/2019 1400 /to 2/12/2019 1600"),
            Ok(Command::AddEvent(_))
        ));
        assert_eq!(parse("mark 2"), Ok(Command::Mark(1)));
        assert_eq!(parse("unmark 2"), Ok(Command::Unmark(1)));
        assert_eq!(parse("delete 1"), Ok(Command::Delete(0)));
        assert_eq!(parse("find book"), Ok(Command::Find("book".into())));
        assert!(matches!(parse("tag 1 x"), Ok(Command::Tag { .. })));
        assert!(matches!(parse("untag 1 x"), Ok(Command::Untag { .. })));
        assert!(matches!(parse("priority 1 low"), Ok(Command::SetPriority { .. })));
    }

    #[test]
    fn unknown_input_never_guesses() {
        assert_eq!(parse("invalid command"), Err(EinsteinError::UnknownCommand));
        assert_eq!(parse("listing"), Err(EinsteinError::UnknownCommand));
        assert_eq!(parse("byebye"), Err(EinsteinError::UnknownCommand));
        assert_eq!(parse(""), Err(EinsteinError::UnknownCommand));
    }

    #[test]
    fn keyword_without_arguments_explains_what_is_missing() {
        assert_eq!(parse("find"), Err(EinsteinError::MissingKeyword));
        assert_eq!(parse("find   "), Err(EinsteinError::MissingKeyword));
        assert_eq!(parse("todo  "), Err(EinsteinError::EmptyDescription));
        assert_eq!(parse("mark"), Err(EinsteinError::InvalidIndex));
        assert!(matches!(parse("deadline"), Err(EinsteinError::InvalidFormat(_))));
        assert_eq!(parse("todos"), Err(EinsteinError::UnknownCommand));
    }

    #[test]
    fn options_reach_the_event_constructor() {
        let strict = ParseOptions {
            enforce_event_order: true,
        };
        let line = "event x /from 2/12/2019 1600 /to 2/12/2019 1400";
        assert!(parse(line).is_ok());
        assert_eq!(parse_with(line, &strict), Err(EinsteinError::EventOrder));
    }
}
