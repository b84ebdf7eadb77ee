use serde::{Deserialize, Serialize};

/// A positional argument. Position in the command's list is CLI order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSpec {
    pub name: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub default: Option<String>,

    /// Enumerated allowed values
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default, rename = "description")]
    pub help: Option<String>,

    #[serde(default)]
    pub hidden: bool,
}

impl ArgSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            default: None,
            options: Vec::new(),
            help: None,
            hidden: false,
        }
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

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Name as shown in usage lines and argument lists.
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }

    /// Usage token: `NAME` when required, `[NAME]` otherwise.
    pub fn usage_token(&self) -> String {
        if self.required {
            self.display_name()
        } else {
            format!("[{}]", self.display_name())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_token() {
        assert_eq!(ArgSpec::new("app_name").required().usage_token(), "APP_NAME");
        assert_eq!(ArgSpec::new("app_name").usage_token(), "[APP_NAME]");
    }
}
