//! Session launcher — hand the finished command line to tmux.
//!
//! On Unix the current process image is replaced, so a successful launch
//! never returns. Elsewhere tmux runs as a child and this process exits
//! with its status as soon as it finishes.

use std::convert::Infallible;
use std::process::Command;

use tracing::info;

use crate::command::DirectiveList;
use crate::error::LaunchError;
use crate::types::config::LaunchSettings;
use crate::types::session::Session;


pub struct Launcher {
    settings: LaunchSettings,
}


impl Launcher {
    pub fn new(settings: LaunchSettings) -> Launcher {
        Launcher { settings }
    }

    pub fn settings(&self) -> &LaunchSettings {
        &self.settings
    }

    /// Directives for `session`, anchored at the configured directory.
    pub fn plan(&self, session: &Session) -> DirectiveList {
        session.plan(&self.settings.cwd)
    }

    /// Full tmux argv for `session`, executable first.
    pub fn argv(&self, session: &Session) -> Vec<String> {
        self.plan(session).to_argv(&self.settings.executable)
    }

    /// Build the command line and transfer control to tmux.
    pub fn launch(&self, session: &Session) -> Result<Infallible, LaunchError> {
        exec(&self.argv(session))
    }
}


/// Replace the current process with `argv`. Returns only on failure.
#[cfg(unix)]
pub fn exec(argv: &[String]) -> Result<Infallible, LaunchError> {
    use std::os::unix::process::CommandExt;

    let (program, args) = argv.split_first().ok_or(LaunchError::Empty)?;
    info!(program = %program, args = args.len(), "exec multiplexer");
    let source = Command::new(program).args(args).exec();
    Err(LaunchError::Exec {
        executable: program.clone(),
        source,
    })
}

/// Run `argv` to completion and exit with its status.
#[cfg(not(unix))]
pub fn exec(argv: &[String]) -> Result<Infallible, LaunchError> {
    let (program, args) = argv.split_first().ok_or(LaunchError::Empty)?;
    info!(program = %program, args = args.len(), "spawn multiplexer");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| LaunchError::Exec {
            executable: program.clone(),
            source,
        })?;
    std::process::exit(status.code().unwrap_or(1));
}
