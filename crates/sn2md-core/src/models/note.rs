//! Note model

use serde::Deserialize;

use super::Reference;

/// Body of a note item
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    /// Tag references, populated by older exports only
    #[serde(default)]
    pub references: Vec<Reference>,
}

/// A note in the export
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteItem {
    pub uuid: String,
    pub content: NoteContent,
    /// Creation timestamp, `YYYY-MM-DDTHH:MM:SS.ffffffZ`
    pub created_at: String,
    /// Last update timestamp, same format as `created_at`
    pub updated_at: String,
}

impl NoteItem {
    /// Identifiers of the tags this note references
    pub fn tag_references(&self) -> impl Iterator<Item = &str> {
        self.content
            .references
            .iter()
            .filter(|reference| reference.content_type == "Tag")
            .map(|reference| reference.uuid.as_str())
    }
}
