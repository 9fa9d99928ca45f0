//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$GITB_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitb/config.toml`
//! 3. `~/.gitb/config.toml`
//!
//! # Repo Config
//!
//! Located at `.git/gitb/config.toml`.
//!
//! # Validation
//!
//! Status filters are checked against the same names the CLI accepts.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::status::{IssueStatus, PrStatus};

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// browser = "firefox"
/// print_only = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Program used to open URLs instead of the system default
    pub browser: Option<String>,

    /// Print URLs instead of opening them
    pub print_only: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(browser) = &self.browser {
            if browser.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "browser cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// remote = "backlog"
/// pr_status = "all"
/// issue_status = "open"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Remote name (default: "origin")
    pub remote: Option<String>,

    /// Default status filter for `pr list`
    pub pr_status: Option<String>,

    /// Default status filter for `issue list`
    pub issue_status: Option<String>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            if remote.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "remote cannot be empty".to_string(),
                ));
            }
        }

        if let Some(status) = &self.pr_status {
            status
                .parse::<PrStatus>()
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }

        if let Some(status) = &self.issue_status {
            status
                .parse::<IssueStatus>()
                .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod global_config {
        use super::*;

        #[test]
        fn default_is_valid() {
            assert!(GlobalConfig::default().validate().is_ok());
        }

        #[test]
        fn parse_full() {
            let config: GlobalConfig =
                toml::from_str("browser = \"firefox\"\nprint_only = true\n").unwrap();
            assert_eq!(config.browser.as_deref(), Some("firefox"));
            assert_eq!(config.print_only, Some(true));
        }

        #[test]
        fn empty_browser_is_invalid() {
            let config = GlobalConfig {
                browser: Some("  ".to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn unknown_key_rejected() {
            let result: Result<GlobalConfig, _> = toml::from_str("editor = \"vim\"\n");
            assert!(result.is_err());
        }
    }

    mod repo_config {
        use super::*;

        #[test]
        fn parse_full() {
            let config: RepoConfig = toml::from_str(
                "remote = \"backlog\"\npr_status = \"merged\"\nissue_status = \"closed\"\n",
            )
            .unwrap();
            assert_eq!(config.remote.as_deref(), Some("backlog"));
            assert!(config.validate().is_ok());
        }

        #[test]
        fn invalid_pr_status() {
            let config = RepoConfig {
                pr_status: Some("draft".to_string()),
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("draft"));
        }

        #[test]
        fn invalid_issue_status() {
            let config = RepoConfig {
                issue_status: Some("merged".to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn empty_remote_is_invalid() {
            let config = RepoConfig {
                remote: Some(String::new()),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }
}
