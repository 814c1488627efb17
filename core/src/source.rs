//! Config source — a file path or an inline value from the command line.
//!
//! Files ending in `.yaml`/`.yml` are decoded as YAML, everything else as
//! JSON. Inline text that parses as a JSON object or array is used as is;
//! any other inline text is a single command.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::ConfigError;
use crate::types::session::Session;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Inline(String),
}


impl ConfigSource {
    /// Treat `arg` as a file when a file exists at that path.
    pub fn from_arg(arg: &str) -> ConfigSource {
        let path = Path::new(arg);
        if path.is_file() {
            ConfigSource::File(path.to_path_buf())
        } else {
            ConfigSource::Inline(arg.to_string())
        }
    }

    /// Decode into a config node.
    pub fn read(&self) -> Result<Value, ConfigError> {
        match self {
            ConfigSource::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), bytes = text.len(), "read config file");
                decode_file(path, &text)
            }
            ConfigSource::Inline(text) => Ok(decode_inline(text)),
        }
    }

    pub fn load_session(&self) -> Result<Session, ConfigError> {
        Session::from_value(&self.read()?)
    }
}


fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
}

fn decode_file(path: &Path, text: &str) -> Result<Value, ConfigError> {
    let malformed = |message: String| ConfigError::Malformed {
        path: path.to_path_buf(),
        message,
    };
    if is_yaml(path) {
        serde_yaml::from_str::<Value>(text).map_err(|e| malformed(e.to_string()))
    } else {
        serde_json::from_str::<Value>(text).map_err(|e| malformed(e.to_string()))
    }
}

fn decode_inline(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => value,
        _ => Value::String(text.to_string()),
    }
}
