//! tmxgrid core — turn a declarative pane grid into one tmux invocation.
//!
//! Pipeline: a `ConfigSource` decodes into a `Session`; the session's panes
//! are placed on a `ResolvedGrid`; the grid is turned into a
//! `DirectiveList`; the `Launcher` renders it as argv and hands control to
//! tmux.

pub mod command;
pub mod error;
pub mod launch;
pub mod layout;
pub mod source;
pub mod types;

pub use command::{Directive, DirectiveList};
pub use error::{ConfigError, Error, LaunchError, Result};
pub use launch::Launcher;
pub use layout::grid::ResolvedGrid;
pub use source::ConfigSource;
pub use types::config::LaunchSettings;
pub use types::pane::Pane;
pub use types::session::Session;
