use serde::{Deserialize, Serialize};

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    /// `--force`
    #[default]
    Boolean,
    /// `--app=NAME`
    Valued,
}

/// A named option accepted by a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSpec {
    /// Canonical long name, without leading dashes
    #[serde(default)]
    pub name: String,

    /// Single-character short alias (`-f`)
    #[serde(default, rename = "char")]
    pub alias: Option<char>,

    #[serde(default, rename = "type")]
    pub kind: FlagKind,

    #[serde(default)]
    pub required: bool,

    /// Hidden flags are never rendered
    #[serde(default)]
    pub hidden: bool,

    /// Default value; only shown for valued flags
    #[serde(default)]
    pub default: Option<String>,

    /// Enumerated allowed values
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default, rename = "description")]
    pub help: Option<String>,

    /// Label for the value in `--name=VALUE`
    #[serde(default)]
    pub help_value: Option<String>,

    /// Boolean flag accepts a `--no-` negation
    #[serde(default)]
    pub allow_no: bool,
}

impl FlagSpec {
    fn new(name: impl Into<String>, kind: FlagKind) -> Self {
        Self {
            name: name.into(),
            alias: None,
            kind,
            required: false,
            hidden: false,
            default: None,
            options: Vec::new(),
            help: None,
            help_value: None,
            allow_no: false,
        }
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FlagKind::Boolean)
    }

    pub fn valued(name: impl Into<String>) -> Self {
        Self::new(name, FlagKind::Valued)
    }

    pub fn with_alias(mut self, alias: char) -> Self {
        self.alias = Some(alias);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_help_value(mut self, value: impl Into<String>) -> Self {
        self.help_value = Some(value.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn negatable(mut self) -> Self {
        self.allow_no = true;
        self
    }

    pub fn is_valued(&self) -> bool {
        self.kind == FlagKind::Valued
    }
}
