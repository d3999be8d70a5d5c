use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{EinsteinError, Result};
use crate::persistence::FIELD_SEPARATOR;

/// Pattern accepted on input and written to disk, e.g. `2/12/2019 1800`.
pub const INPUT_DATETIME_FORMAT: &str = "%d/%m/%Y %H%M";
/// Same as [`INPUT_DATETIME_FORMAT`] but without zero padding, for writing.
pub const STORED_DATETIME_FORMAT: &str = "%-d/%-m/%Y %H%M";
/// Human pattern used when rendering, e.g. `Dec 02 2019, 6:00 pm`.
pub const DISPLAY_DATETIME_FORMAT: &str = "%b %d %Y, %-I:%M %P";

pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), INPUT_DATETIME_FORMAT).ok()
}

pub fn format_stored(at: &NaiveDateTime) -> String {
    at.format(STORED_DATETIME_FORMAT).to_string()
}

pub fn format_display(at: &NaiveDateTime) -> String {
    at.format(DISPLAY_DATETIME_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
    UberHigh,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::UberHigh => "UBER_HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = EinsteinError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "uber_high" => Ok(Priority::UberHigh),
            _ => Err(EinsteinError::InvalidPriority),
        }
    }
}

/// The fixed set of task shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { by: NaiveDateTime },
    Event { from: NaiveDateTime, to: NaiveDateTime },
}

impl TaskKind {
    pub fn type_tag(&self) -> char {
        match self {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    tags: BTreeSet<String>,
    priority: Option<Priority>,
    kind: TaskKind,
}

impl Task {
    pub fn new(description: &str, kind: TaskKind) -> Result<Self> {
        let description = description.trim();
        if description.is_empty() {
            return Err(EinsteinError::EmptyDescription);
        }
        // A lone '|' at either end would fuse with a stored separator.
        if description.contains(FIELD_SEPARATOR.trim()) {
            return Err(EinsteinError::InvalidFormat(format!(
                "Descriptions cannot contain '{}'.",
                FIELD_SEPARATOR.trim()
            )));
        }
        Ok(Self {
            description: description.to_string(),
            done: false,
            tags: BTreeSet::new(),
            priority: None,
            kind,
        })
    }

    pub fn todo(description: &str) -> Result<Self> {
        Self::new(description, TaskKind::Todo)
    }

    pub fn deadline(description: &str, by: NaiveDateTime) -> Result<Self> {
        Self::new(description, TaskKind::Deadline { by })
    }

    pub fn event(description: &str, from: NaiveDateTime, to: NaiveDateTime) -> Result<Self> {
        Self::new(description, TaskKind::Event { from, to })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    pub fn status_icon(&self) -> char {
        if self.done {
            'X'
        } else {
            ' '
        }
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Adding a tag that is already present is a no-op.
    pub fn add_tag(&mut self, tag: &str) {
        self.tags.insert(tag.to_string());
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<()> {
        if self.tags.remove(tag) {
            Ok(())
        } else {
            Err(EinsteinError::TagNotFound(tag.to_string()))
        }
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.priority = priority;
    }

    /// Deadlines match on their due date, events on either end.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match &self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { by } => by.date() == date,
            TaskKind::Event { from, to } => from.date() == date || to.date() == date,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind.type_tag(),
            self.status_icon(),
            self.description
        )?;
        for tag in &self.tags {
            write!(f, " #{tag}")?;
        }
        if let Some(priority) = self.priority {
            write!(f, " [priority: {priority}]")?;
        }
        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", format_display(by)),
            TaskKind::Event { from, to } => write!(
                f,
                " (from: {} to: {})",
                format_display(from),
                format_display(to)
            ),
        }
    }
}
