//! Note export pass: one Markdown file per titled note.

use std::collections::HashSet;
use std::fs::FileTimes;
use std::io::Write as _;
use std::path::PathBuf;

use crate::filename::{markdown_filename, safe_title, FileNameRegistry};
use crate::models::{ExportDocument, NoteItem};
use crate::tags::TagIndex;
use crate::util::{compact_text, export_timestamp_to_system_time};
use crate::{Error, Result};

/// Where and how notes are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Directory receiving the Markdown files
    pub output_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

/// Progress notifications emitted while notes are processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportEvent<'a> {
    /// A file was written for a note
    Created { file_name: &'a str },
    /// A note had an empty title; `text` is its tagged body
    Skipped { text: &'a str },
}

/// Outcome of a completed export pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Identifiers of notes that produced a file
    pub exported: HashSet<String>,
    /// Created files, in document order
    pub created: Vec<PathBuf>,
}

/// `#Tag` tokens joined by spaces; leading `#` in a name is not doubled.
#[must_use]
pub fn render_tag_line(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("#{}", tag.trim_start_matches('#')))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prefix `text` with the tag line and a blank line, when there are tags.
#[must_use]
pub fn tagged_text(tags: &[String], text: &str) -> String {
    let tag_line = render_tag_line(tags);
    if tag_line.is_empty() {
        text.to_string()
    } else {
        format!("{tag_line}\n\n{text}")
    }
}

/// Walks the notes of one document and writes them into one directory.
#[derive(Debug)]
pub struct Exporter<'a> {
    document: &'a ExportDocument,
    index: &'a TagIndex,
    registry: FileNameRegistry,
}

impl<'a> Exporter<'a> {
    pub fn new(
        document: &'a ExportDocument,
        index: &'a TagIndex,
        options: &ExportOptions,
    ) -> Result<Self> {
        Ok(Self {
            document,
            index,
            registry: FileNameRegistry::from_dir(&options.output_dir)?,
        })
    }

    /// Export every note in document order, stopping at the first fatal error.
    pub fn run(mut self, mut on_event: impl FnMut(ExportEvent<'_>)) -> Result<ExportSummary> {
        let document = self.document;
        let mut summary = ExportSummary::default();

        for note in document.notes() {
            let title = safe_title(&note.content.title);
            let text = tagged_text(&self.index.resolve(note)?, &note.content.text);

            if title.is_empty() {
                tracing::debug!(
                    "Skipping note {} with empty title: {}",
                    note.uuid,
                    compact_text(&text)
                );
                on_event(ExportEvent::Skipped { text: &text });
                continue;
            }

            let (file_name, path) = self.write_note(note, &title, &text)?;
            on_event(ExportEvent::Created {
                file_name: &file_name,
            });

            summary.exported.insert(note.uuid.clone());
            summary.created.push(path);
        }

        tracing::info!(
            "Exported {} notes into {}",
            summary.exported.len(),
            self.registry.dir().display()
        );
        Ok(summary)
    }

    fn write_note(
        &mut self,
        note: &NoteItem,
        title: &str,
        text: &str,
    ) -> Result<(String, PathBuf)> {
        let accessed = export_timestamp_to_system_time(&note.created_at)?;
        let modified = export_timestamp_to_system_time(&note.updated_at)?;

        let (file_name, mut file) = self.registry.create(&markdown_filename(title))?;
        let path = self.registry.dir().join(&file_name);

        file.write_all(text.as_bytes())
            .map_err(|source| Error::io(&path, source))?;
        file.set_times(FileTimes::new().set_accessed(accessed).set_modified(modified))
            .map_err(|source| Error::io(&path, source))?;

        tracing::info!("Wrote note {} to {}", note.uuid, path.display());
        Ok((file_name, path))
    }
}
