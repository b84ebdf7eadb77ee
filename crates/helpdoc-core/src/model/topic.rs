use serde::{Deserialize, Serialize};

use super::split_description;

/// A namespace node in the command hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDescriptor {
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub hidden: bool,
}

impl TopicDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: None,
            hidden: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// First line of the description.
    pub fn title(&self) -> Option<String> {
        self.description
            .as_deref()
            .and_then(|text| split_description(text).0)
    }
}
