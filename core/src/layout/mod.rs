//! Layout — grid resolution and directive sequencing.
//!
//! The `grid` module sizes the grid and assigns panes to cells. The
//! `sequence` module turns a resolved grid into the ordered tmux directives
//! that rebuild it from a single pane and start each pane's commands.

pub mod grid;
pub mod sequence;
