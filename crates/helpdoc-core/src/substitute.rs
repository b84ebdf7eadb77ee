//! Placeholder substitution for help text.
//!
//! Descriptions may reference the configured program, e.g.
//! `display help for <%= config.bin %>`. The builders pass every piece of free
//! text through a [`Substitute`] before measuring or wrapping it.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<%=\s*config\.([A-Za-z_][A-Za-z0-9_]*)\s*%>")
        .expect("regex for config placeholders")
});

/// Resolves placeholders in help text.
///
/// Implementations must return text without placeholders unchanged.
pub trait Substitute {
    fn substitute(&self, text: &str) -> String;
}

impl<F> Substitute for F
where
    F: Fn(&str) -> String,
{
    fn substitute(&self, text: &str) -> String {
        self(text)
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl Substitute for Verbatim {
    fn substitute(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Resolves `<%= config.bin %>`, `<%= config.name %>` and `<%= config.version %>`.
#[derive(Debug, Clone, Default)]
pub struct ConfigTemplate {
    pub bin: String,
    pub name: Option<String>,
    pub version: Option<String>,
}

impl ConfigTemplate {
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            name: None,
            version: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "bin" => Some(self.bin.as_str()),
            "name" => Some(self.name.as_deref().unwrap_or(self.bin.as_str())),
            "version" => self.version.as_deref(),
            _ => None,
        }
    }
}

impl Substitute for ConfigTemplate {
    fn substitute(&self, text: &str) -> String {
        let replaced: Cow<'_, str> = PLACEHOLDER_RE.replace_all(text, |caps: &Captures<'_>| {
            match self.lookup(&caps[1]) {
                Some(value) => value.to_string(),
                None => caps[0].to_string(),
            }
        });
        replaced.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> ConfigTemplate {
        ConfigTemplate::new("mycli").with_version("1.2.3")
    }

    #[test]
    fn test_resolves_bin() {
        assert_eq!(
            template().substitute("display help for <%= config.bin %>"),
            "display help for mycli"
        );
    }

    #[test]
    fn test_tolerates_missing_whitespace() {
        assert_eq!(template().substitute("<%=config.bin%> v<%= config.version %>"), "mycli v1.2.3");
    }

    #[test]
    fn test_name_falls_back_to_bin() {
        assert_eq!(template().substitute("<%= config.name %>"), "mycli");
        let named = template().with_name("My CLI");
        assert_eq!(named.substitute("<%= config.name %>"), "My CLI");
    }

    #[test]
    fn test_unknown_placeholder_is_kept() {
        let text = "see <%= config.homepage %>";
        assert_eq!(template().substitute(text), text);
    }

    #[test]
    fn test_idempotent_without_placeholders() {
        let text = "plain text with <angle> brackets";
        let once = template().substitute(text);
        assert_eq!(once, text);
        assert_eq!(template().substitute(&once), once);
    }

    #[test]
    fn test_closure_substitute() {
        let upper = |text: &str| text.to_uppercase();
        assert_eq!(upper.substitute("abc"), "ABC");
        assert_eq!(Verbatim.substitute("abc"), "abc");
    }
}
