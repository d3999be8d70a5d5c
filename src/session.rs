use std::path::PathBuf;

use tracing::info;

use crate::command::Command;
use crate::error::{EinsteinError, Result};
use crate::parser::{parse_with, ParseOptions};
use crate::persistence::Storage;
use crate::todolist::TaskList;

/// What a front end shows after one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub is_error: bool,
    pub exit: bool,
}

/// Owns the task list and its storage for the life of the process. Front
/// ends feed it one line at a time; nothing else holds a reference to the
/// list.
#[derive(Debug)]
pub struct Session {
    tasks: TaskList,
    storage: Storage,
    options: ParseOptions,
    load_problems: Vec<EinsteinError>,
}

impl Session {
    /// Loads the task file. Lines that fail to decode are skipped and kept
    /// in [`Session::load_problems`]; an unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>, options: ParseOptions) -> Self {
        let storage = Storage::new(path);
        let (tasks, load_problems) = match storage.load() {
            Ok(report) => (report.tasks, report.skipped),
            Err(err) => (TaskList::default(), vec![err]),
        };
        info!(
            tasks = tasks.len(),
            problems = load_problems.len(),
            "session opened"
        );
        Self {
            tasks,
            storage,
            options,
            load_problems,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn load_problems(&self) -> &[EinsteinError] {
        &self.load_problems
    }

    pub fn parse(&self, line: &str) -> Result<Command> {
        parse_with(line, &self.options)
    }

    pub fn execute(&mut self, command: &Command) -> Result<String> {
        command.execute(&mut self.tasks, &self.storage)
    }

    /// Parse and run one line, folding any error into its message.
    pub fn respond(&mut self, line: &str) -> Reply {
        let outcome = self.parse(line).and_then(|command| {
            let text = self.execute(&command)?;
            Ok((text, command.is_exit()))
        });
        match outcome {
            Ok((text, exit)) => Reply {
                text,
                is_error: false,
                exit,
            },
            Err(err) => Reply {
                text: err.to_string(),
                is_error: true,
                exit: false,
            },
        }
    }
}
