//! Directive — the typed form of one tmux subcommand.
//!
//! A session launch is a single tmux invocation: `tmux -2 new-session`
//! followed by `;`-separated subcommands. Each `Directive` renders to the
//! tokens of one such subcommand; `DirectiveList` renders the whole argv.

use serde::{Deserialize, Serialize};

/// Separator between chained tmux subcommands.
pub const SEPARATOR: &str = ";";

/// Key name tmux sends for Enter.
pub const ENTER: &str = "C-m";


#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OptionScope {
    /// `-g`
    Global,
    /// `-w`
    Window,
}

impl OptionScope {
    fn flag(self) -> &'static str {
        match self {
            OptionScope::Global => "-g",
            OptionScope::Window => "-w",
        }
    }
}


/// Which way a split divides the current pane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// New pane below the current one (`-v`).
    Vertical,
    /// New pane to the right of the current one (`-h`).
    Horizontal,
}

impl Orientation {
    fn flag(self) -> &'static str {
        match self {
            Orientation::Vertical => "-v",
            Orientation::Horizontal => "-h",
        }
    }
}


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "directive")]
pub enum Directive {
    #[serde(rename = "set-option")]
    SetOption {
        scope: OptionScope,
        name: String,
        value: String,
    },

    #[serde(rename = "split-window")]
    SplitWindow {
        orientation: Orientation,
        percent: u32,
        cwd: String,
    },

    #[serde(rename = "select-pane")]
    SelectPane {
        index: usize,
    },

    #[serde(rename = "send-keys")]
    SendKeys {
        keys: Vec<String>,
    },

    /// Pre-tokenized subcommand passed through untouched.
    #[serde(rename = "raw")]
    Raw {
        tokens: Vec<String>,
    },
}

impl Directive {
    pub fn enable_mouse() -> Directive {
        Directive::SetOption {
            scope: OptionScope::Global,
            name: "mouse".into(),
            value: "on".into(),
        }
    }

    pub fn synchronize_panes() -> Directive {
        Directive::SetOption {
            scope: OptionScope::Window,
            name: "synchronize-panes".into(),
            value: "on".into(),
        }
    }

    /// Type `text` into the selected pane and press Enter.
    pub fn type_line(text: impl Into<String>) -> Directive {
        Directive::SendKeys {
            keys: vec![text.into(), ENTER.into()],
        }
    }

    /// Tokens of this subcommand, without the leading separator.
    pub fn to_tokens(&self) -> Vec<String> {
        match self {
            Directive::SetOption { scope, name, value } => vec![
                "set-option".into(),
                scope.flag().into(),
                name.clone(),
                value.clone(),
            ],
            Directive::SplitWindow { orientation, percent, cwd } => vec![
                "split-window".into(),
                orientation.flag().into(),
                "-l".into(),
                format!("{}%", percent),
                "-c".into(),
                cwd.clone(),
            ],
            Directive::SelectPane { index } => {
                vec!["select-pane".into(), "-t".into(), index.to_string()]
            }
            Directive::SendKeys { keys } => {
                let mut tokens = Vec::with_capacity(keys.len() + 1);
                tokens.push("send-keys".to_string());
                tokens.extend(keys.iter().cloned());
                tokens
            }
            Directive::Raw { tokens } => tokens.clone(),
        }
    }
}


/// The ordered directives of one launch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DirectiveList {
    directives: Vec<Directive>,
}

impl DirectiveList {
    pub fn new() -> DirectiveList {
        DirectiveList::default()
    }

    pub fn push(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    pub fn extend<I: IntoIterator<Item = Directive>>(&mut self, directives: I) {
        self.directives.extend(directives);
    }

    pub fn as_slice(&self) -> &[Directive] {
        &self.directives
    }

    /// Full command line: `<executable> -2 new-session ; <directive> ; ...`.
    pub fn to_argv(&self, executable: &str) -> Vec<String> {
        let mut argv = vec![executable.to_string(), "-2".into(), "new-session".into()];
        for directive in &self.directives {
            argv.push(SEPARATOR.into());
            argv.extend(directive.to_tokens());
        }
        argv
    }
}
