//! Post-export comparison between the document and the output directory.

use std::collections::HashSet;
use std::path::Path;

use crate::filename::MARKDOWN_EXTENSION;
use crate::models::ExportDocument;
use crate::tags::TagIndex;
use crate::{Error, Result};

/// A note that did not produce a file, with enough content to recover it by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingNote {
    pub title: String,
    pub tags: Vec<String>,
    pub text: String,
}

/// Note count in the document against `.md` entries in the output directory.
///
/// The directory count includes Markdown files that were there before the
/// run, so it is only a reliable signal for an initially empty directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationReport {
    pub notes_in_document: usize,
    pub markdown_files: usize,
    /// Notes that produced a file during this run
    pub exported: usize,
    /// Filled only when the two counts differ
    pub missing: Vec<MissingNote>,
}

impl ReconciliationReport {
    #[must_use]
    pub const fn counts_match(&self) -> bool {
        self.notes_in_document == self.markdown_files
    }
}

/// Count directory entries whose name ends in `.md`.
pub fn count_markdown_files(dir: &Path) -> Result<usize> {
    let suffix = format!(".{MARKDOWN_EXTENSION}");
    let mut count = 0;
    for entry in std::fs::read_dir(dir).map_err(|source| Error::io(dir, source))? {
        let entry = entry.map_err(|source| Error::io(dir, source))?;
        if entry.file_name().to_string_lossy().ends_with(&suffix) {
            count += 1;
        }
    }
    Ok(count)
}

pub fn reconcile(
    document: &ExportDocument,
    index: &TagIndex,
    exported: &HashSet<String>,
    output_dir: &Path,
) -> Result<ReconciliationReport> {
    let mut report = ReconciliationReport {
        notes_in_document: document.notes().count(),
        markdown_files: count_markdown_files(output_dir)?,
        exported: exported.len(),
        missing: Vec::new(),
    };

    if !report.counts_match() {
        for note in document.notes().filter(|note| !exported.contains(&note.uuid)) {
            report.missing.push(MissingNote {
                title: note.content.title.clone(),
                tags: index.resolve(note)?,
                text: note.content.text.clone(),
            });
        }
        tracing::warn!(
            "{} notes in export, {} Markdown files in {}",
            report.notes_in_document,
            report.markdown_files,
            output_dir.display()
        );
    }

    Ok(report)
}
