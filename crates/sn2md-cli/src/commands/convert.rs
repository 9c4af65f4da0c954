use std::path::Path;

use sn2md_core::{ExportEvent, ExportOptions, ReconciliationReport};

use crate::error::CliError;

pub fn run_convert(input: &Path, options: &ExportOptions) -> Result<(), CliError> {
    println!("Processing notes...");

    let report = sn2md_core::convert_file(input, options, |event| {
        for line in format_event_lines(&event) {
            println!("{line}");
        }
    })?;

    tracing::info!(
        "Exported {} of {} notes",
        report.exported,
        report.notes_in_document
    );
    for line in format_report_lines(&report) {
        println!("{line}");
    }
    Ok(())
}

pub fn format_event_lines(event: &ExportEvent<'_>) -> Vec<String> {
    match event {
        ExportEvent::Created { file_name } => vec![format!("Created: ./{file_name}")],
        ExportEvent::Skipped { text } => vec![
            format!("Note with error text: {text}"),
            "Skipping note with empty title.".to_string(),
        ],
    }
}

pub fn format_report_lines(report: &ReconciliationReport) -> Vec<String> {
    let mut lines = vec![
        format!("Total notes in JSON: {}", report.notes_in_document),
        format!("Total markdown files created: {}", report.markdown_files),
    ];

    if !report.counts_match() {
        lines.push("Some notes were not exported to files. Missing notes:".to_string());
        for note in &report.missing {
            lines.push(format!("Title: {}", note.title));
            lines.push(format!("Tags: {}", note.tags.join(", ")));
            lines.push(format!("Text: {}", note.text));
            lines.push("-----".to_string());
        }
    }

    lines
}
