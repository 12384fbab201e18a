use serde::{Deserialize, Serialize};

/// Separator placed between the parts of composite batch and transaction ids.
pub const DEFAULT_ID_SEPARATOR: &str = ".";

/// Settings captured by a [`Document`](super::Document) when it is created.
///
/// The document keeps its own copy, so documents built with different
/// separators never interfere, and ids that were already assigned are not
/// rewritten when a config changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Joins `<message id>`, `<batch suffix>` and `<transaction index>`.
    pub id_separator: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            id_separator: DEFAULT_ID_SEPARATOR.to_string(),
        }
    }
}

impl DocumentConfig {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            id_separator: separator.into(),
        }
    }

    /// Join a parent id and a child suffix.
    pub(crate) fn compose(&self, parent: &str, suffix: &str) -> String {
        format!("{parent}{}{suffix}", self.id_separator)
    }
}
