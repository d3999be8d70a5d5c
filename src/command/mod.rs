//! One variant per user operation. Constructors take the argument text that
//! follows the keyword and validate it; `execute` applies the command to the
//! task list and saves the whole list after any change.

pub mod reply;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EinsteinError, Result};
use crate::parser::ParseOptions;
use crate::persistence::Storage;
use crate::task::{parse_datetime, Priority, Task};
use crate::todolist::TaskList;

const LIST_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    List,
    ListByDate(NaiveDate),
    Find(String),
    AddTodo(Task),
    AddTodos(Vec<Task>),
    AddDeadline(Task),
    AddEvent(Task),
    /// Indices from here on are already 0-based.
    Mark(usize),
    Unmark(usize),
    Delete(usize),
    Tag { index: usize, tag: String },
    Untag { index: usize, tag: String },
    SetPriority { index: usize, priority: Priority },
}

/// Turns the 1-based number a user typed into a list index.
fn parse_index(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(EinsteinError::InvalidIndex),
    }
}

fn parse_date_arg(raw: &str) -> Result<chrono::NaiveDateTime> {
    parse_datetime(raw).ok_or(EinsteinError::InvalidDateTime)
}

/// Splits `<n> <word>` arguments; anything other than exactly two tokens
/// is a usage error.
fn index_and_word<'a>(args: &'a str, usage: &str) -> Result<(usize, &'a str)> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    match tokens.as_slice() {
        [index, word] => Ok((parse_index(index)?, *word)),
        _ => Err(EinsteinError::InvalidFormat(usage.to_string())),
    }
}

fn clean_tag(raw: &str) -> Result<String> {
    let tag = raw.strip_prefix('#').unwrap_or(raw);
    if tag.is_empty() || tag.contains(',') || tag.contains('|') {
        return Err(EinsteinError::InvalidFormat(
            "Tags must be a single word without ',' or '|'.".to_string(),
        ));
    }
    Ok(tag.to_string())
}

impl Command {
    /// `todo a, b, c` adds several tasks at once; every segment must be
    /// non-empty or nothing is added.
    pub fn todo(args: &str) -> Result<Self> {
        let mut tasks = args
            .split(',')
            .map(Task::todo)
            .collect::<Result<Vec<_>>>()?;
        if tasks.len() == 1 {
            Ok(Command::AddTodo(tasks.remove(0)))
        } else {
            Ok(Command::AddTodos(tasks))
        }
    }

    pub fn deadline(args: &str) -> Result<Self> {
        let usage = || {
            EinsteinError::InvalidFormat(
                "Invalid deadline format! Use: deadline <description> /by <date>".to_string(),
            )
        };
        let (description, by) = args.split_once("/by").ok_or_else(usage)?;
        if description.trim().is_empty() || by.trim().is_empty() {
            return Err(usage());
        }
        Ok(Command::AddDeadline(Task::deadline(
            description,
            parse_date_arg(by)?,
        )?))
    }

    pub fn event(args: &str, options: &ParseOptions) -> Result<Self> {
        let usage = || {
            EinsteinError::InvalidFormat(
                "Invalid event format! Use: event <description> /from <start> /to <end>"
                    .to_string(),
            )
        };
        let (description, rest) = args.split_once("/from").ok_or_else(usage)?;
        let (from, to) = rest.split_once("/to").ok_or_else(usage)?;
        if [description, from, to].iter().any(|s| s.trim().is_empty()) {
            return Err(usage());
        }

        let from = parse_date_arg(from)?;
        let to = parse_date_arg(to)?;
        if options.enforce_event_order && to < from {
            return Err(EinsteinError::EventOrder);
        }
        Ok(Command::AddEvent(Task::event(description, from, to)?))
    }

    pub fn list_by_date(args: &str) -> Result<Self> {
        NaiveDate::parse_from_str(args.trim(), LIST_DATE_FORMAT)
            .map(Command::ListByDate)
            .map_err(|_| EinsteinError::InvalidDate)
    }

    pub fn find(args: &str) -> Result<Self> {
        let keyword = args.trim();
        if keyword.is_empty() {
            return Err(EinsteinError::MissingKeyword);
        }
        Ok(Command::Find(keyword.to_string()))
    }

    pub fn mark(args: &str) -> Result<Self> {
        parse_index(args).map(Command::Mark)
    }

    pub fn unmark(args: &str) -> Result<Self> {
        parse_index(args).map(Command::Unmark)
    }

    pub fn delete(args: &str) -> Result<Self> {
        parse_index(args).map(Command::Delete)
    }

    pub fn tag(args: &str) -> Result<Self> {
        let (index, tag) = index_and_word(args, "Invalid tag command. Usage: tag <task number> <tag>")?;
        Ok(Command::Tag {
            index,
            tag: clean_tag(tag)?,
        })
    }

    pub fn untag(args: &str) -> Result<Self> {
        let (index, tag) =
            index_and_word(args, "Invalid untag command. Usage: untag <task number> <tag>")?;
        Ok(Command::Untag {
            index,
            tag: clean_tag(tag)?,
        })
    }

    pub fn priority(args: &str) -> Result<Self> {
        let (index, level) = index_and_word(
            args,
            "Invalid priority command. Usage: priority <task number> <uber_high|high|medium|low>",
        )?;
        Ok(Command::SetPriority {
            index,
            priority: level.parse()?,
        })
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Exit => "bye",
            Command::Help => "help",
            Command::List => "list",
            Command::ListByDate(_) => "list-by-date",
            Command::Find(_) => "find",
            Command::AddTodo(_) => "todo",
            Command::AddTodos(_) => "todo-bulk",
            Command::AddDeadline(_) => "deadline",
            Command::AddEvent(_) => "event",
            Command::Mark(_) => "mark",
            Command::Unmark(_) => "unmark",
            Command::Delete(_) => "delete",
            Command::Tag { .. } => "tag",
            Command::Untag { .. } => "untag",
            Command::SetPriority { .. } => "priority",
        }
    }

    /// Runs the command. Mutations stay in memory even when the save that
    /// follows them fails.
    pub fn execute(&self, tasks: &mut TaskList, storage: &Storage) -> Result<String> {
        debug!(command = self.name(), "executing");
        match self {
            Command::Exit => Ok(reply::FAREWELL.to_string()),
            Command::Help => Ok(reply::HELP.to_string()),
            Command::List => Ok(reply::task_list(tasks.all())),
            Command::ListByDate(date) => Ok(reply::tasks_on(
                *date,
                tasks.iter().enumerate().filter(|(_, t)| t.occurs_on(*date)),
            )),
            Command::Find(keyword) => Ok(reply::matches(
                tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.description().contains(keyword.as_str())),
            )),
            Command::AddTodo(task) | Command::AddDeadline(task) | Command::AddEvent(task) => {
                tasks.add(task.clone());
                storage.save(tasks)?;
                Ok(reply::added(task, tasks.len()))
            }
            Command::AddTodos(batch) => {
                let mut out = Vec::with_capacity(batch.len());
                for task in batch {
                    tasks.add(task.clone());
                    out.push(reply::added(task, tasks.len()));
                }
                storage.save(tasks)?;
                Ok(out.join("\n"))
            }
            Command::Mark(index) => {
                tasks.mark_done(*index)?;
                storage.save(tasks)?;
                Ok(reply::task_list(tasks.all()))
            }
            Command::Unmark(index) => {
                tasks.mark_not_done(*index)?;
                storage.save(tasks)?;
                Ok(reply::task_list(tasks.all()))
            }
            Command::Delete(index) => {
                let removed = tasks.delete(*index)?;
                storage.save(tasks)?;
                Ok(reply::removed(&removed, tasks.all()))
            }
            Command::Tag { index, tag } => {
                tasks.get_mut(*index)?.add_tag(tag);
                storage.save(tasks)?;
                Ok(reply::tag_added(tasks.get(*index)?, tag))
            }
            Command::Untag { index, tag } => {
                tasks.get_mut(*index)?.remove_tag(tag)?;
                storage.save(tasks)?;
                Ok(reply::tag_removed(tasks.get(*index)?, tag))
            }
            Command::SetPriority { index, priority } => {
                tasks.get_mut(*index)?.set_priority(Some(*priority));
                storage.save(tasks)?;
                Ok(reply::priority_set(tasks.get(*index)?, *priority))
            }
        }
    }
}
