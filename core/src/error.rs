//! Error types for configuration loading and session launch.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;


/// Where an option was encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Session,
    Pane,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Session => f.write_str("session"),
            Scope::Pane => f.write_str("pane"),
        }
    }
}


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized {scope} option: '{key}'")]
    UnknownOption { scope: Scope, key: String },

    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("malformed config {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unknown(scope: Scope, key: impl Into<String>) -> Self {
        Self::UnknownOption {
            scope,
            key: key.into(),
        }
    }
}


#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to execute '{executable}': {source}")]
    Exec {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("empty command line")]
    Empty,
}


#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error("cannot encode directives: {0}")]
    Encode(#[from] serde_json::Error),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_option_names_key_and_scope() {
        let err = ConfigError::unknown(Scope::Session, "foo");
        assert_eq!(err.to_string(), "unrecognized session option: 'foo'");
        let err = ConfigError::unknown(Scope::Pane, "colour");
        assert_eq!(err.to_string(), "unrecognized pane option: 'colour'");
    }

    #[test]
    fn wrapped_error_is_transparent() {
        let err: Error = ConfigError::invalid("rows", "must be at least 1").into();
        assert_eq!(err.to_string(), "invalid value for 'rows': must be at least 1");
    }

    #[test]
    fn exec_error_names_executable() {
        let err = LaunchError::Exec {
            executable: "tmux-missing".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("tmux-missing"));
    }
}
