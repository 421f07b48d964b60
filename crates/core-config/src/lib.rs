//! Configuration loading and parsing.
//!
//! Parses `quill.toml`, or an override path supplied by the binary. Loading
//! is tolerant: a missing or malformed file falls back to defaults so the
//! editor always starts. Unknown fields are ignored to allow forward
//! evolution.
//!
//! Keys:
//! * `[editor] tab_width` — spaces inserted per tab press (default 4).
//! * `[editor] undo_limit` — cap on undo snapshots, oldest evicted first;
//!   absent means unbounded.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_width")]
    pub tab_width: usize,
    #[serde(default)]
    pub undo_limit: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
            undo_limit: None,
        }
    }
}

impl EditorConfig {
    const fn default_tab_width() -> usize {
        4
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: ConfigFile,
}

impl Config {
    /// Effective tab width; a configured 0 is lifted to 1 so a tab press is
    /// never a silent no-op.
    pub fn tab_width(&self) -> usize {
        self.file.editor.tab_width.max(1)
    }

    /// Undo snapshot cap; `None` means unbounded.
    pub fn undo_limit(&self) -> Option<usize> {
        self.file.editor.undo_limit
    }
}

/// Best-effort config path: a `quill.toml` in the working directory wins,
/// then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from("quill.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("quill").join("quill.toml");
    }
    PathBuf::from("quill.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str::<ConfigFile>(&content) {
            Ok(file) => {
                info!(target: "config", file = %path.display(), "config_loaded");
                Ok(Config { file })
            }
            Err(e) => {
                warn!(target: "config", file = %path.display(), error = %e, "config_parse_failed_using_defaults");
                Ok(Config::default())
            }
        },
        Err(_) => Ok(Config::default()),
    }
}
