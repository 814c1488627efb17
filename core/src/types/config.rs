use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LaunchSettings {
    /// Multiplexer executable. Default: `tmux`.
    #[serde(default = "default_executable")]
    pub executable: String,
    /// Directory every split is anchored to. Default: the process working directory.
    #[serde(default = "default_cwd")]
    pub cwd: String,
}

pub const DEFAULT_EXECUTABLE: &str = "tmux";

fn default_executable() -> String {
    DEFAULT_EXECUTABLE.to_string()
}

fn default_cwd() -> String {
    std::env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| ".".into())
}

impl Default for LaunchSettings {
    fn default() -> Self {
        LaunchSettings {
            executable: default_executable(),
            cwd: default_cwd(),
        }
    }
}

impl LaunchSettings {
    pub fn with_executable(executable: impl Into<String>) -> LaunchSettings {
        LaunchSettings {
            executable: executable.into(),
            ..LaunchSettings::default()
        }
    }
}
