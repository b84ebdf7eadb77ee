//! Declarative command and topic descriptors.
//!
//! Descriptors are read-only snapshots of a CLI's shape. They are built once
//! per help invocation and never mutated afterwards; builders validate
//! uniqueness and identifier syntax up front so the renderers can assume a
//! well-formed model.

mod arg;
mod command;
mod flag;
mod topic;

pub use arg::ArgSpec;
pub use command::{CommandBuilder, CommandDescriptor};
pub use flag::{FlagKind, FlagSpec};
pub use topic::TopicDescriptor;

use crate::error::{HelpError, Result};

/// Separator between segments of a hierarchical identifier.
pub const ID_SEPARATOR: char = ':';

/// Check that `id` is a non-empty colon path without empty or blank segments.
pub fn validate_identifier(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(HelpError::invalid("identifier must not be empty"));
    }
    if id.chars().any(char::is_whitespace) {
        return Err(HelpError::invalid(format!(
            "identifier \"{}\" must not contain whitespace",
            id
        )));
    }
    if id.split(ID_SEPARATOR).any(str::is_empty) {
        return Err(HelpError::invalid(format!(
            "identifier \"{}\" has an empty segment",
            id
        )));
    }
    Ok(())
}

/// Number of segments in an identifier (`apps:create` has depth 2).
pub fn depth(id: &str) -> usize {
    id.split(ID_SEPARATOR).count()
}

/// Whether `id` sits somewhere below `parent` in the hierarchy.
pub fn is_descendant(id: &str, parent: &str) -> bool {
    id.len() > parent.len() + 1
        && id.starts_with(parent)
        && id[parent.len()..].starts_with(ID_SEPARATOR)
}

/// Whether `id` sits exactly one level below `parent`.
pub fn is_child(id: &str, parent: &str) -> bool {
    is_descendant(id, parent) && depth(id) == depth(parent) + 1
}

/// Split a description into its title (first line) and body (the rest).
///
/// Blank lines around the body are dropped; an all-blank body is `None`.
pub fn split_description(text: &str) -> (Option<String>, Option<String>) {
    let mut lines = text.splitn(2, '\n');
    let title = lines
        .next()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(String::from);
    let body = lines
        .next()
        .map(|rest| rest.trim_matches('\n').trim_end().to_string())
        .filter(|rest| !rest.trim().is_empty());
    (title, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("apps:create").is_ok());
        assert!(validate_identifier("plugins").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier(":apps").is_err());
        assert!(validate_identifier("apps::create").is_err());
        assert!(validate_identifier("apps:").is_err());
        assert!(validate_identifier("apps create").is_err());
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth("plugins"), 1);
        assert_eq!(depth("plugins:install"), 2);
    }

    #[test]
    fn test_is_descendant() {
        assert!(is_descendant("plugins:install", "plugins"));
        assert!(is_descendant("plugins:install:npm", "plugins"));
        assert!(!is_descendant("plugins", "plugins"));
        assert!(!is_descendant("pluginsx:install", "plugins"));
        assert!(!is_descendant("plugins2", "plugins"));
    }

    #[test]
    fn test_is_child() {
        assert!(is_child("plugins:install", "plugins"));
        assert!(!is_child("plugins:install:npm", "plugins"));
    }

    #[test]
    fn test_split_description() {
        assert_eq!(
            split_description("first line\nmultiline help"),
            (Some("first line".into()), Some("multiline help".into()))
        );
        assert_eq!(split_description("only a title"), (Some("only a title".into()), None));
        assert_eq!(split_description("title\n\n   \n"), (Some("title".into()), None));
        assert_eq!(
            split_description("some\n\n  multiline help\n  "),
            (Some("some".into()), Some("  multiline help".into()))
        );
    }
}
