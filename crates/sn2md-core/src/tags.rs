//! Tag index built once per export.

use std::collections::HashMap;

use crate::models::{ExportDocument, NoteItem, TagAssociation};
use crate::{Error, Result};

/// Compact a tag title into `CamelCase` words with no separators.
///
/// Each whitespace-delimited word gets an upper-cased first character and a
/// lower-cased remainder. An empty or blank title yields an empty string.
///
/// ```
/// use sn2md_core::tags::normalize_tag_title;
///
/// assert_eq!(normalize_tag_title("work stuff"), "WorkStuff");
/// assert_eq!(normalize_tag_title("  TODO  list "), "TodoList");
/// ```
#[must_use]
pub fn normalize_tag_title(title: &str) -> String {
    title.split_whitespace().map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Tag identifier to normalized title, plus the note-to-tags reverse map for
/// exports where tags own the references.
#[derive(Debug, Clone)]
pub struct TagIndex {
    association: TagAssociation,
    names: HashMap<String, String>,
    note_tags: HashMap<String, Vec<String>>,
}

impl TagIndex {
    /// Scan every tag item of the document once.
    #[must_use]
    pub fn build(document: &ExportDocument) -> Self {
        let association = document.association();
        let mut names = HashMap::new();
        let mut note_tags: HashMap<String, Vec<String>> = HashMap::new();

        for tag in document.tags() {
            let name = normalize_tag_title(&tag.content.title);

            if association == TagAssociation::TagsReferenceNotes {
                for note_uuid in tag.note_references() {
                    note_tags
                        .entry(note_uuid.to_string())
                        .or_default()
                        .push(name.clone());
                }
            }

            names.insert(tag.uuid.clone(), name);
        }

        tracing::debug!(
            "Indexed {} tags ({:?}), {} notes tagged by reference",
            names.len(),
            association,
            note_tags.len()
        );

        Self {
            association,
            names,
            note_tags,
        }
    }

    #[must_use]
    pub const fn association(&self) -> TagAssociation {
        self.association
    }

    /// Normalized title for a tag identifier
    #[must_use]
    pub fn name(&self, tag_uuid: &str) -> Option<&str> {
        self.names.get(tag_uuid).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Tag names applied to a note, in encounter order.
    pub fn resolve(&self, note: &NoteItem) -> Result<Vec<String>> {
        match self.association {
            TagAssociation::TagsReferenceNotes => Ok(self.resolve_via_tag_references(note)),
            TagAssociation::NotesReferenceTags => self.resolve_via_note_references(note),
        }
    }

    fn resolve_via_tag_references(&self, note: &NoteItem) -> Vec<String> {
        self.note_tags.get(&note.uuid).cloned().unwrap_or_default()
    }

    /// An identifier missing from the index means the export is corrupt.
    fn resolve_via_note_references(&self, note: &NoteItem) -> Result<Vec<String>> {
        note.tag_references()
            .map(|tag_uuid| {
                self.name(tag_uuid)
                    .map(str::to_string)
                    .ok_or_else(|| Error::UnknownTag {
                        note: note.uuid.clone(),
                        tag: tag_uuid.to_string(),
                    })
            })
            .collect()
    }
}
