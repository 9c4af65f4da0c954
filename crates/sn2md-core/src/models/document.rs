//! Export document model

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::{NoteItem, TagItem};
use crate::{Error, Result};

/// Export version in which tags carry the references to their notes.
pub const NEW_FORMAT_VERSION: &str = "004";

/// Which side of the tag/note relation owns the references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAssociation {
    /// Tags list the notes they are applied to (`version: "004"`)
    TagsReferenceNotes,
    /// Notes list their tags (older exports)
    NotesReferenceTags,
}

/// A reference from one item to another
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub uuid: String,
    pub content_type: String,
}

/// An entry of the export's `items` sequence, discriminated by `content_type`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "content_type")]
pub enum Item {
    Note(NoteItem),
    Tag(TagItem),
    /// Components, themes, settings and anything else the converter ignores
    #[serde(other)]
    Other,
}

/// A whole Standard Notes JSON export, loaded into memory at once
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportDocument {
    /// Any JSON value; only the string `"004"` selects the newer scheme
    #[serde(default)]
    pub version: Option<Value>,
    pub items: Vec<Item>,
}

impl ExportDocument {
    /// Read and parse an export file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Detect the tag association scheme once for the whole document.
    #[must_use]
    pub fn association(&self) -> TagAssociation {
        if self.version.as_ref().and_then(Value::as_str) == Some(NEW_FORMAT_VERSION) {
            TagAssociation::TagsReferenceNotes
        } else {
            TagAssociation::NotesReferenceTags
        }
    }

    /// Note items in document order
    pub fn notes(&self) -> impl Iterator<Item = &NoteItem> {
        self.items.iter().filter_map(|item| match item {
            Item::Note(note) => Some(note),
            _ => None,
        })
    }

    /// Tag items in document order
    pub fn tags(&self) -> impl Iterator<Item = &TagItem> {
        self.items.iter().filter_map(|item| match item {
            Item::Tag(tag) => Some(tag),
            _ => None,
        })
    }
}
