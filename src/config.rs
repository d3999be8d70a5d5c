//! User settings, read from `config.json` in the platform config directory.
//! Command-line flags override whatever the file says.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::parser::ParseOptions;

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "einstein", "einstein")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|p| p.config_dir().join("config.json"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Task file; the platform data directory is used when unset.
    pub data_file: Option<PathBuf>,
    /// Reject events whose end is before their start.
    pub enforce_event_order: bool,
    /// Fallback filter when `EINSTEIN_LOG` is not set.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            enforce_event_order: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Missing file means defaults; a file that does not parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            enforce_event_order: self.enforce_event_order,
        }
    }
}
