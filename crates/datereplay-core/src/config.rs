//! Configuration management for datereplay.
//!
//! Configuration is loaded from multiple sources and merged:
//! 1. Global config: `~/.config/datereplay/config.json`
//! 2. Environment variable: `DATEREPLAY_CONFIG_CONTENT`
//! 3. Project config: `datereplay.json` or `datereplay.jsonc` in the working directory
//!
//! Command-line flags are applied on top by the binary. JSONC (JSON with
//! comments) is accepted everywhere.

use crate::error::ConfigError;
use crate::{EngineResult, PathRewrite, ReplayOptions};
use datereplay_util::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding inline config content.
pub const CONFIG_CONTENT_ENV: &str = "DATEREPLAY_CONFIG_CONTENT";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Process subfolders when collecting and replaying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recursive: Option<bool>,

    /// Regex applied to relative paths before lookup during replay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Replacement text for `pattern`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,

    /// Keep replaying after a file cannot be written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_error: Option<bool>,

    /// Log level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Returns the merged config and the files it was read from.
    pub fn load(project_dir: Option<&Path>) -> Result<(Self, Vec<PathBuf>), ConfigError> {
        let env_content = std::env::var(CONFIG_CONTENT_ENV).ok();
        Self::load_from(
            Self::global_config_dir().as_deref(),
            env_content.as_deref(),
            project_dir,
        )
    }

    /// Load configuration from explicit sources, in override order.
    pub fn load_from(
        global_dir: Option<&Path>,
        env_content: Option<&str>,
        project_dir: Option<&Path>,
    ) -> Result<(Self, Vec<PathBuf>), ConfigError> {
        let mut config = Config::default();
        let mut sources = Vec::new();

        if let Some(dir) = global_dir {
            if let Some(path) = first_existing(dir, &["config.json", "config.jsonc"]) {
                config = config.merge(Self::load_file(&path)?);
                sources.push(path);
            }
        }

        if let Some(content) = env_content {
            config = config.merge(Self::parse_jsonc(content, "<env>")?);
        }

        if let Some(dir) = project_dir {
            if let Some(path) = first_existing(dir, &["datereplay.jsonc", "datereplay.json"]) {
                config = config.merge(Self::load_file(&path)?);
                sources.push(path);
            }
        }

        Ok((config, sources))
    }

    /// Get the global config directory.
    pub fn global_config_dir() -> Option<PathBuf> {
        datereplay_util::path::config_dir()
    }

    /// Load configuration from a file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse_jsonc(&content, &path.display().to_string())
    }

    /// Parse JSONC content.
    fn parse_jsonc(content: &str, source: &str) -> Result<Self, ConfigError> {
        let stripped = Self::strip_comments(content);

        serde_json::from_str(&stripped).map_err(|e| ConfigError::InvalidJson {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Strip JSON comments.
    fn strip_comments(input: &str) -> String {
        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();
        let mut in_string = false;
        let mut escape_next = false;

        while let Some(c) = chars.next() {
            if escape_next {
                result.push(c);
                escape_next = false;
                continue;
            }

            if c == '\\' && in_string {
                result.push(c);
                escape_next = true;
                continue;
            }

            if c == '"' {
                in_string = !in_string;
                result.push(c);
                continue;
            }

            if in_string {
                result.push(c);
                continue;
            }

            if c == '/' {
                match chars.peek() {
                    Some('/') => {
                        for c in chars.by_ref() {
                            if c == '\n' {
                                result.push('\n');
                                break;
                            }
                        }
                        continue;
                    }
                    Some('*') => {
                        chars.next();
                        let mut prev = ' ';
                        for c in chars.by_ref() {
                            if prev == '*' && c == '/' {
                                break;
                            }
                            // Keep line numbers stable for error messages
                            if c == '\n' {
                                result.push('\n');
                            }
                            prev = c;
                        }
                        continue;
                    }
                    _ => {}
                }
            }

            result.push(c);
        }

        result
    }

    /// Merge another config on top of this one. Fields set in `other` win.
    pub fn merge(mut self, other: Self) -> Self {
        if other.recursive.is_some() {
            self.recursive = other.recursive;
        }
        if other.pattern.is_some() {
            self.pattern = other.pattern;
        }
        if other.replacement.is_some() {
            self.replacement = other.replacement;
        }
        if other.continue_on_error.is_some() {
            self.continue_on_error = other.continue_on_error;
        }
        if other.log_level.is_some() {
            self.log_level = other.log_level;
        }
        self
    }

    /// Compiled path rewrite, if both pattern and replacement are set.
    pub fn rewrite(&self) -> EngineResult<Option<PathRewrite>> {
        PathRewrite::new(
            self.pattern.as_deref().unwrap_or_default(),
            self.replacement.as_deref().unwrap_or_default(),
        )
    }

    /// Replay options derived from this config.
    pub fn replay_options(&self) -> ReplayOptions {
        ReplayOptions {
            recursive: self.recursive.unwrap_or(false),
            continue_on_error: self.continue_on_error.unwrap_or(false),
            dry_run: false,
        }
    }
}

fn first_existing(dir: &Path, names: &[&str]) -> Option<PathBuf> {
    names.iter().map(|name| dir.join(name)).find(|p| p.exists())
}
