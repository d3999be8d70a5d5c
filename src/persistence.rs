//! Flat-file storage: one task per line, fields joined by ` | `.
//!
//! ```text
//! T | 0 | Buy milk
//! D | 1 | Submit report | 2/12/2019 1800
//! E | 0 | Team sync | 2/12/2019 1400 | 2/12/2019 1600 | tags=work | priority=HIGH
//! ```
//!
//! Tags and priority are optional trailing fields. Loading skips corrupt
//! lines and reports each one; every save rewrites the whole file in place,
//! so a crash in the middle of a write can leave a truncated file behind.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Result as AnyResult};
use tracing::{debug, info, warn};

use crate::config;
use crate::error::{EinsteinError, Result};
use crate::task::{format_stored, parse_datetime, Priority, Task, TaskKind};
use crate::todolist::TaskList;

pub const FIELD_SEPARATOR: &str = " | ";
const TAGS_PREFIX: &str = "tags=";
const PRIORITY_PREFIX: &str = "priority=";

pub fn default_path() -> AnyResult<PathBuf> {
    let proj = config::project_dirs().ok_or_else(|| anyhow!("Cannot determine data directory"))?;
    Ok(proj.data_dir().join("einstein.txt"))
}

/// Outcome of a load: everything that decoded, plus one error per skipped line.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub tasks: TaskList,
    pub skipped: Vec<EinsteinError>,
}

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty list, not an error.
    pub fn load(&self) -> Result<LoadReport> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no task file yet");
            return Ok(LoadReport::default());
        }
        let bytes = fs::read(&self.path).map_err(|e| {
            EinsteinError::Storage(format!("Error loading tasks from file: {e}"))
        })?;

        let mut report = LoadReport::default();
        for raw in bytes.split(|b| *b == b'\n') {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let decoded = match std::str::from_utf8(raw) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => decode_line(line),
                Err(_) => Err(EinsteinError::corrupted(
                    &String::from_utf8_lossy(raw),
                    "not valid UTF-8",
                )),
            };
            match decoded {
                Ok(task) => report.tasks.add(task),
                Err(err) => {
                    warn!(%err, "skipping stored line");
                    report.skipped.push(err);
                }
            }
        }
        info!(
            loaded = report.tasks.len(),
            skipped = report.skipped.len(),
            path = %self.path.display(),
            "tasks loaded"
        );
        Ok(report)
    }

    pub fn save(&self, list: &TaskList) -> Result<()> {
        let to_storage_err =
            |e: std::io::Error| EinsteinError::Storage(format!("Error saving tasks to file: {e}"));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_storage_err)?;
        }
        fs::write(&self.path, encode_list(list)).map_err(to_storage_err)?;
        debug!(count = list.len(), path = %self.path.display(), "tasks saved");
        Ok(())
    }
}

pub fn encode_list(list: &TaskList) -> String {
    list.iter()
        .map(|task| {
            let mut line = encode_task(task);
            line.push('\n');
            line
        })
        .collect()
}

pub fn encode_task(task: &Task) -> String {
    let mut fields = vec![
        task.kind().type_tag().to_string(),
        if task.is_done() { "1" } else { "0" }.to_string(),
        task.description().to_string(),
    ];
    match task.kind() {
        TaskKind::Todo => {}
        TaskKind::Deadline { by } => fields.push(format_stored(by)),
        TaskKind::Event { from, to } => {
            fields.push(format_stored(from));
            fields.push(format_stored(to));
        }
    }
    let tags: Vec<&str> = task.tags().collect();
    if !tags.is_empty() {
        fields.push(format!("{TAGS_PREFIX}{}", tags.join(",")));
    }
    if let Some(priority) = task.priority() {
        fields.push(format!("{PRIORITY_PREFIX}{priority}"));
    }
    fields.join(FIELD_SEPARATOR)
}

pub fn decode_line(line: &str) -> Result<Task> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < 3 {
        return Err(EinsteinError::corrupted(line, "too few fields"));
    }

    let done = match parts[1].trim() {
        "1" => true,
        "0" => false,
        _ => return Err(EinsteinError::corrupted(line, "bad status flag")),
    };

    let date_at = |i: usize| {
        parse_datetime(parts[i]).ok_or_else(|| EinsteinError::corrupted(line, "bad date"))
    };
    let (kind, consumed) = match parts[0].trim() {
        "T" => (TaskKind::Todo, 3),
        "D" if parts.len() < 4 => {
            return Err(EinsteinError::corrupted(line, "deadline without a date"))
        }
        "D" => (TaskKind::Deadline { by: date_at(3)? }, 4),
        "E" if parts.len() < 5 => {
            return Err(EinsteinError::corrupted(line, "event without both dates"))
        }
        "E" => (
            TaskKind::Event {
                from: date_at(3)?,
                to: date_at(4)?,
            },
            5,
        ),
        _ => return Err(EinsteinError::corrupted(line, "unknown task type")),
    };

    let mut task = Task::new(parts[2], kind)
        .map_err(|_| EinsteinError::corrupted(line, "bad description"))?;
    task.set_done(done);

    for extra in &parts[consumed..] {
        let extra = extra.trim();
        if let Some(tags) = extra.strip_prefix(TAGS_PREFIX) {
            tags.split(',')
                .filter(|t| !t.is_empty())
                .for_each(|t| task.add_tag(t));
        } else if let Some(level) = extra.strip_prefix(PRIORITY_PREFIX) {
            let priority = level
                .parse::<Priority>()
                .map_err(|_| EinsteinError::corrupted(line, "bad priority"))?;
            task.set_priority(Some(priority));
        } else {
            return Err(EinsteinError::corrupted(line, "unexpected field"));
        }
    }
    Ok(task)
}
