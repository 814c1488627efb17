//! Session — the top-level layout request.

use serde_json::Value;

use crate::command::DirectiveList;
use crate::error::{ConfigError, Scope};
use crate::layout::grid::{self, ResolvedGrid};
use crate::layout::sequence;
use crate::types::pane::Pane;
use crate::types::{kind_name, parse_flag, parse_index};


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Fixed row count. Takes precedence over `cols` when both are set.
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    /// Insertion order is the placement tie-break.
    pub panes: Vec<Pane>,
    pub sync: bool,
    pub mouse: bool,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            rows: None,
            cols: None,
            panes: Vec::new(),
            sync: false,
            mouse: true,
        }
    }
}


impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    /// Build a session from a decoded config node.
    pub fn from_value(value: &Value) -> Result<Session, ConfigError> {
        let mut session = Session::new();
        session.load(value)?;
        Ok(session)
    }

    /// Append an empty pane and return it for population.
    pub fn new_pane(&mut self) -> &mut Pane {
        self.panes.push(Pane::new());
        let last = self.panes.len() - 1;
        &mut self.panes[last]
    }

    /// Apply a config node.
    ///
    /// - mapping: keys `rows`, `cols`, `pans`, `sync`, `mouse`; any other key
    ///   fails with `UnknownOption`
    /// - sequence: a list of pane configs
    /// - scalar: a single pane running that text
    pub fn load(&mut self, value: &Value) -> Result<(), ConfigError> {
        match value {
            Value::Object(map) => {
                for (key, v) in map {
                    match key.as_str() {
                        "rows" => self.rows = Some(parse_extent(key, v)?),
                        "cols" => self.cols = Some(parse_extent(key, v)?),
                        "pans" => {
                            let list = v.as_array().ok_or_else(|| {
                                ConfigError::invalid(
                                    "pans",
                                    format!("expected a sequence, got {}", kind_name(v)),
                                )
                            })?;
                            self.load_panes(list)?;
                        }
                        "sync" => self.sync = parse_flag(key, v)?,
                        "mouse" => self.mouse = parse_flag(key, v)?,
                        other => return Err(ConfigError::unknown(Scope::Session, other)),
                    }
                }
                Ok(())
            }
            Value::Array(list) => self.load_panes(list),
            scalar => self.new_pane().load(scalar),
        }
    }

    fn load_panes(&mut self, configs: &[Value]) -> Result<(), ConfigError> {
        for config in configs {
            self.new_pane().load(config)?;
        }
        Ok(())
    }

    /// Grid dimensions as `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        grid::dimensions(self.panes.len(), self.rows, self.cols)
    }

    /// Assign every pane to a cell.
    pub fn resolve(&self) -> ResolvedGrid {
        grid::resolve(self)
    }

    /// Resolve the grid and build the directives that reproduce it, with
    /// every split anchored at `cwd`.
    pub fn plan(&self, cwd: &str) -> DirectiveList {
        let grid = self.resolve();
        sequence::build(self, &grid, cwd)
    }
}

/// Upper bound on a fixed row or column count.
pub const MAX_EXTENT: usize = 1024;

fn parse_extent(key: &str, value: &Value) -> Result<usize, ConfigError> {
    let n = parse_index(key, value)?;
    if n == 0 {
        return Err(ConfigError::invalid(key, "must be at least 1"));
    }
    if n > MAX_EXTENT {
        return Err(ConfigError::invalid(
            key,
            format!("too large (at most {})", MAX_EXTENT),
        ));
    }
    Ok(n)
}
