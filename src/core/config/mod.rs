//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! gitb has two configuration scopes:
//! - **Global**: User-level settings (how URLs are opened)
//! - **Repo**: Repository-level settings (remote, default list filters)
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GITB_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitb/config.toml`
//! 3. `~/.gitb/config.toml`
//!
//! # Repo Config Location
//!
//! `.git/gitb/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use gitb::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/repo/.git"))).unwrap();
//! let config = result.config;
//!
//! println!("Remote: {}", config.remote());
//! println!("PR filter: {}", config.pr_status());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::status::{IssueStatus, PrStatus};

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply defaults; repo settings and global settings never
/// overlap, so no key needs merging.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if in a repo)
    pub repo: Option<RepoConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `git_dir` is provided, also loads repo-specific config from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(git_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (global, global_path) = Self::load_global(&mut warnings)?;

        let (repo, repo_path) = match git_dir {
            Some(dir) => Self::load_repo(dir)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        Ok(ConfigLoadResult {
            config: Config {
                global,
                repo,
                global_path,
                repo_path,
            },
            warnings,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global(
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. $GITB_CONFIG
        if let Ok(path) = std::env::var("GITB_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_global_config(&path)?;
                return Ok((config, Some(path)));
            }
            warnings.push(ConfigWarning {
                message: "GITB_CONFIG points to a missing file; ignoring it".to_string(),
                path,
            });
        }

        // 2. $XDG_CONFIG_HOME/gitb/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitb/config.toml");
            if path.exists() {
                let config = Self::read_global_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. ~/.gitb/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".gitb/config.toml");
            if path.exists() {
                let config = Self::read_global_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    /// Load repository configuration from `<git_dir>/gitb/config.toml`.
    fn load_repo(git_dir: &Path) -> Result<(Option<RepoConfig>, Option<PathBuf>), ConfigError> {
        let path = Self::repo_config_path(git_dir);
        if !path.exists() {
            return Ok((None, None));
        }
        let config = Self::read_repo_config(&path)?;
        Ok((Some(config), Some(path)))
    }

    /// Read and parse a global config file.
    pub fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        read_toml(path)
    }

    /// Read and parse a repo config file.
    pub fn read_repo_config(path: &Path) -> Result<RepoConfig, ConfigError> {
        read_toml(path)
    }

    /// Get the canonical path for repo config.
    pub fn repo_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("gitb/config.toml")
    }

    /// Path of the global config file that was loaded, if any.
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path of the repo config file that was loaded, if any.
    pub fn repo_path(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the remote name.
    ///
    /// Defaults to "origin" if not configured.
    pub fn remote(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.remote.as_deref())
            .unwrap_or("origin")
    }

    /// Default status filter for pull request lists.
    ///
    /// Defaults to [`PrStatus::Open`]. Values are validated at load time.
    pub fn pr_status(&self) -> PrStatus {
        self.repo
            .as_ref()
            .and_then(|r| r.pr_status.as_deref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Default status filter for issue lists.
    ///
    /// Defaults to [`IssueStatus::NotClosed`]. Values are validated at load time.
    pub fn issue_status(&self) -> IssueStatus {
        self.repo
            .as_ref()
            .and_then(|r| r.issue_status.as_deref())
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Program used to open URLs, if one is configured.
    pub fn browser(&self) -> Option<&str> {
        self.global.browser.as_deref()
    }

    /// Check if URLs should be printed instead of opened.
    ///
    /// Defaults to `false` if not configured.
    pub fn print_only(&self) -> bool {
        self.global.print_only.unwrap_or(false)
    }
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
