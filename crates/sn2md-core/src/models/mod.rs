//! Data models for Standard Notes exports

mod document;
mod note;
mod tag;

pub use document::{ExportDocument, Item, Reference, TagAssociation, NEW_FORMAT_VERSION};
pub use note::{NoteContent, NoteItem};
pub use tag::{TagContent, TagItem};
