//! sn2md-core - Core library for sn2md
//!
//! Turns a Standard Notes JSON export into one Markdown file per note, with
//! tags prepended as `#Tag` tokens and file times copied from the note.

pub mod error;
pub mod export;
pub mod filename;
pub mod models;
pub mod reconcile;
pub mod tags;
pub mod util;

use std::path::Path;

pub use error::{Error, Result};
pub use export::{ExportEvent, ExportOptions, ExportSummary, Exporter};
pub use models::{ExportDocument, NoteItem, TagAssociation};
pub use reconcile::{MissingNote, ReconciliationReport};
pub use tags::TagIndex;

/// Load `input`, export its notes into `options.output_dir`, then reconcile.
pub fn convert_file(
    input: &Path,
    options: &ExportOptions,
    on_event: impl FnMut(ExportEvent<'_>),
) -> Result<ReconciliationReport> {
    let document = ExportDocument::load(input)?;
    convert_document(&document, options, on_event)
}

pub fn convert_document(
    document: &ExportDocument,
    options: &ExportOptions,
    on_event: impl FnMut(ExportEvent<'_>),
) -> Result<ReconciliationReport> {
    let index = TagIndex::build(document);
    let summary = Exporter::new(document, &index, options)?.run(on_event)?;
    reconcile::reconcile(document, &index, &summary.exported, &options.output_dir)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn convert_document_reports_empty_titled_note_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let document = ExportDocument::from_json_str(
            r#"{"items":[
                {"content_type":"Tag","uuid":"t1","content":{"title":"later"}},
                {"content_type":"Note","uuid":"n1","content":{"title":"Kept","text":"a"},
                 "created_at":"2021-01-01T00:00:00.000000Z","updated_at":"2021-01-01T00:00:00.000000Z"},
                {"content_type":"Note","uuid":"n2","content":{"title":"","text":"b",
                 "references":[{"uuid":"t1","content_type":"Tag"}]},
                 "created_at":"2021-01-01T00:00:00.000000Z","updated_at":"2021-01-01T00:00:00.000000Z"}
            ]}"#,
        )
        .unwrap();
        let options = ExportOptions {
            output_dir: dir.path().to_path_buf(),
        };

        let mut skipped = 0;
        let report = convert_document(&document, &options, |event| {
            if matches!(event, ExportEvent::Skipped { .. }) {
                skipped += 1;
            }
        })
        .unwrap();

        assert_eq!(skipped, 1);
        assert_eq!(report.notes_in_document, 2);
        assert_eq!(report.markdown_files, 1);
        assert_eq!(report.exported, 1);
        assert_eq!(
            report.missing,
            vec![MissingNote {
                title: String::new(),
                tags: vec!["Later".to_string()],
                text: "b".to_string(),
            }]
        );
    }
}
