pub mod app;
pub mod command;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod parser;
pub mod persistence;
pub mod session;
pub mod task;
pub mod todolist;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use command::Command;
pub use error::{EinsteinError, Result};
pub use session::{Reply, Session};
pub use task::{Priority, Task, TaskKind};
pub use todolist::TaskList;

use config::Settings;

/// CLI shared between main and tests
#[derive(Parser, Debug)]
#[command(
    name = "einstein",
    version,
    about = "A personal task tracker driven by plain-text commands"
)]
pub struct Cli {
    /// Optional override for the data file
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Settings file (defaults to config.json in the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reject events that end before they start
    #[arg(long)]
    pub enforce_event_order: bool,

    /// Log filter used when EINSTEIN_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Cmd {
    /// Read commands from stdin, one per line (the default)
    Run,
    /// Run a single command and print the reply
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
    /// Launch the full-screen chat UI
    Tui,
}

impl Cli {
    /// Settings file values with command-line flags layered on top.
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let path = self.config.clone().or_else(config::default_config_path);
        let mut settings = match path {
            Some(path) => Settings::load(&path)?,
            None => Settings::default(),
        };
        if let Some(data_file) = &self.data_file {
            settings.data_file = Some(data_file.clone());
        }
        if self.enforce_event_order {
            settings.enforce_event_order = true;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
        Ok(settings)
    }
}

pub fn data_path(settings: &Settings) -> anyhow::Result<PathBuf> {
    match &settings.data_file {
        Some(path) => Ok(path.clone()),
        None => persistence::default_path(),
    }
}
