//! Error type shared by the parser, the commands and storage.
//!
//! Every variant displays as the literal message shown to the user, so front
//! ends can simply print `err.to_string()`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EinsteinError {
    #[error("Invalid task number! Please give me something valid!")]
    InvalidIndex,

    /// Wrong shape of arguments; carries the usage hint.
    #[error("{0}")]
    InvalidFormat(String),

    #[error("Invalid date/time format! Use: d/M/yyyy HHmm (e.g., 2/12/2019 1800)")]
    InvalidDateTime,

    #[error("Invalid date format! Use: list yyyy-MM-dd")]
    InvalidDate,

    #[error("Nein! You have to give a description to your todo.")]
    EmptyDescription,

    #[error("Please provide a keyword to search!")]
    MissingKeyword,

    #[error("Tag '{0}' not found on this task.")]
    TagNotFound(String),

    #[error("Invalid priority. Please use 'uber_high', 'high', 'medium', or 'low'.")]
    InvalidPriority,

    #[error("An event cannot end before it starts!")]
    EventOrder,

    #[error(
        "ARGH! I do not understand you, which is weird, \nbecause I usually understand most things. Invalid command!"
    )]
    UnknownCommand,

    /// A stored line that could not be decoded.
    #[error("Corrupted data found in file ({reason}). Skipping line: {line}")]
    Corrupted { line: String, reason: String },

    #[error("{0}")]
    Storage(String),
}

impl EinsteinError {
    pub fn corrupted(line: &str, reason: impl Into<String>) -> Self {
        Self::Corrupted {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EinsteinError>;
