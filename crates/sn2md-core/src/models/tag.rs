//! Tag model

use serde::Deserialize;

use super::Reference;

/// Body of a tag item
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TagContent {
    #[serde(default)]
    pub title: String,
    /// Note references, populated by `004` exports
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// A tag in the export
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagItem {
    pub uuid: String,
    pub content: TagContent,
}

impl TagItem {
    /// Identifiers of the notes this tag is applied to
    pub fn note_references(&self) -> impl Iterator<Item = &str> {
        self.content
            .references
            .iter()
            .filter(|reference| reference.content_type == "Note")
            .map(|reference| reference.uuid.as_str())
    }
}
