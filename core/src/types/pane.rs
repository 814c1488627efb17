//! Pane — one grid cell occupant: optional row/col pins and its commands.

use serde_json::Value;

use crate::command::Directive;
use crate::error::{ConfigError, Scope};
use crate::types::{kind_name, parse_index, scalar_text};


#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pane {
    /// Zero-based row pin.
    pub row: Option<usize>,
    /// Zero-based column pin.
    pub col: Option<usize>,
    commands: Vec<Directive>,
}


impl Pane {
    pub fn new() -> Pane {
        Pane::default()
    }

    pub fn pinned(row: Option<usize>, col: Option<usize>) -> Pane {
        Pane {
            row,
            col,
            commands: Vec::new(),
        }
    }

    /// Directives injected into this pane once it is selected, in insertion order.
    pub fn commands(&self) -> &[Directive] {
        &self.commands
    }

    /// Populate pins and commands from a config node.
    ///
    /// - mapping: keys `row`, `col`, `cmd`, `cmds`; any other key is rejected
    /// - sequence: each entry is one command
    /// - scalar: a single free-text command
    pub fn load(&mut self, value: &Value) -> Result<(), ConfigError> {
        match value {
            Value::Object(map) => {
                for (key, v) in map {
                    match key.as_str() {
                        "row" => self.row = Some(parse_index(key, v)?),
                        "col" => self.col = Some(parse_index(key, v)?),
                        "cmd" => self.add_command(v)?,
                        "cmds" => {
                            let list = v.as_array().ok_or_else(|| {
                                ConfigError::invalid(
                                    "cmds",
                                    format!("expected a sequence, got {}", kind_name(v)),
                                )
                            })?;
                            for cmd in list {
                                self.add_command(cmd)?;
                            }
                        }
                        other => return Err(ConfigError::unknown(Scope::Pane, other)),
                    }
                }
                Ok(())
            }
            Value::Array(list) => {
                for cmd in list {
                    self.add_command(cmd)?;
                }
                Ok(())
            }
            scalar => self.add_command(scalar),
        }
    }

    /// Add one command. A sequence of scalars is a pre-tokenized tmux
    /// subcommand used verbatim; any other scalar is typed into the pane
    /// followed by Enter.
    pub fn add_command(&mut self, value: &Value) -> Result<(), ConfigError> {
        match value {
            Value::Array(items) => {
                let tokens = items
                    .iter()
                    .map(|item| {
                        scalar_text(item).ok_or_else(|| {
                            ConfigError::invalid(
                                "cmd",
                                format!("command tokens must be scalars, got {}", kind_name(item)),
                            )
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                self.commands.push(Directive::Raw { tokens });
                Ok(())
            }
            Value::Object(_) => Err(ConfigError::invalid(
                "cmd",
                "expected a string or a token sequence, got a mapping",
            )),
            scalar => {
                // scalar_text only fails for containers, handled above
                let text = scalar_text(scalar).unwrap_or_default();
                self.add_text(text);
                Ok(())
            }
        }
    }

    /// Type `text` into the pane and press Enter.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.commands.push(Directive::type_line(text));
    }

    /// Matches a cell at (`row`, `col`) when each pin is unset or equal.
    pub fn accepts(&self, row: usize, col: usize) -> bool {
        self.row.map_or(true, |r| r == row) && self.col.map_or(true, |c| c == col)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded(value: Value) -> Pane {
        let mut pane = Pane::new();
        pane.load(&value).unwrap();
        pane
    }

    #[test]
    fn scalar_is_one_typed_command() {
        let pane = loaded(json!("htop"));
        assert_eq!(pane.commands(), &[Directive::type_line("htop")]);
        assert_eq!((pane.row, pane.col), (None, None));
    }

    #[test]
    fn sequence_is_a_command_list() {
        let pane = loaded(json!(["cd /tmp", ["select-layout", "tiled"]]));
        assert_eq!(
            pane.commands(),
            &[
                Directive::type_line("cd /tmp"),
                Directive::Raw {
                    tokens: vec!["select-layout".into(), "tiled".into()],
                },
            ]
        );
    }

    #[test]
    fn mapping_sets_pins_and_commands_in_key_order() {
        let pane = loaded(json!({
            "row": 1,
            "col": "0",
            "cmds": ["make", "make test"],
            "cmd": "git status",
        }));
        assert_eq!(pane.row, Some(1));
        assert_eq!(pane.col, Some(0));
        let typed: Vec<_> = pane.commands().iter().map(|d| d.to_tokens()[1].clone()).collect();
        assert_eq!(typed, vec!["make", "make test", "git status"]);
    }

    #[test]
    fn unknown_pane_key_is_rejected() {
        let mut pane = Pane::new();
        let err = pane.load(&json!({"cmd": "ls", "title": "x"})).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownOption { scope: Scope::Pane, ref key } if key == "title"
        ));
    }

    #[test]
    fn cmds_must_be_a_sequence() {
        let mut pane = Pane::new();
        assert!(pane.load(&json!({"cmds": "ls"})).is_err());
    }

    #[test]
    fn nested_token_sequence_is_rejected() {
        let mut pane = Pane::new();
        assert!(pane.add_command(&json!(["send-keys", ["x"]])).is_err());
    }

    #[test]
    fn numbers_are_typed_as_text() {
        let pane = loaded(json!(42));
        assert_eq!(pane.commands(), &[Directive::type_line("42")]);
    }

    #[test]
    fn empty_sequence_gives_no_commands() {
        assert!(loaded(json!([])).commands().is_empty());
    }

    #[test]
    fn accepts_honours_each_pin() {
        let pane = Pane::pinned(Some(1), None);
        assert!(pane.accepts(1, 0));
        assert!(pane.accepts(1, 5));
        assert!(!pane.accepts(0, 0));
        assert!(Pane::new().accepts(3, 3));
    }
}
