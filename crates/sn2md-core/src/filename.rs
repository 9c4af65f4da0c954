//! Output file naming: title sanitation and collision-free name claims.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Extension of every file the converter writes.
pub const MARKDOWN_EXTENSION: &str = "md";

static ILLEGAL_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("Invalid regex"));

/// Replace path separators in a note title so it stays a single path segment.
#[must_use]
pub fn safe_title(title: &str) -> String {
    title.replace('/', "-")
}

/// Replace characters Windows refuses in file names with `_`.
#[must_use]
pub fn windows_compatible_filename(filename: &str) -> String {
    ILLEGAL_FILENAME_CHARS.replace_all(filename, "_").into_owned()
}

/// `<title>.md`, made safe for every common filesystem.
#[must_use]
pub fn markdown_filename(safe_title: &str) -> String {
    windows_compatible_filename(&format!("{safe_title}.{MARKDOWN_EXTENSION}"))
}

/// Split `name` into stem and extension (with its dot). Leading dots belong to
/// the stem, so `.md` has no extension.
fn split_extension(name: &str) -> (&str, &str) {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].rfind('.') {
        Some(position) => name.split_at(leading_dots + position),
        None => (name, ""),
    }
}

/// Names tried for `filename`: the name itself, then `stem_1.ext`, `stem_2.ext`, ...
fn candidates(filename: &str) -> impl Iterator<Item = String> + '_ {
    let (stem, extension) = split_extension(filename);
    std::iter::once(filename.to_string())
        .chain((1u64..).map(move |counter| format!("{stem}_{counter}{extension}")))
}

/// File names already present in, or claimed during this run for, one directory.
#[derive(Debug)]
pub struct FileNameRegistry {
    dir: PathBuf,
    claimed: HashSet<String>,
}

impl FileNameRegistry {
    /// Seed the registry from a single listing of `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let entries = std::fs::read_dir(&dir).map_err(|source| Error::io(&dir, source))?;

        let mut claimed = HashSet::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::io(&dir, source))?;
            claimed.insert(entry.file_name().to_string_lossy().into_owned());
        }

        tracing::debug!("{} existing entries in {}", claimed.len(), dir.display());
        Ok(Self { dir, claimed })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn is_claimed(&self, name: &str) -> bool {
        self.claimed.contains(name)
    }

    /// Claim the first free name derived from `filename` and create it.
    ///
    /// The file is opened with create-new semantics, so an entry that
    /// appeared after seeding is never overwritten; it is recorded and the
    /// next suffix is tried instead.
    pub fn create(&mut self, filename: &str) -> Result<(String, File)> {
        for candidate in candidates(filename) {
            if self.claimed.contains(&candidate) {
                continue;
            }

            let path = self.dir.join(&candidate);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    self.claimed.insert(candidate.clone());
                    return Ok((candidate, file));
                }
                Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::warn!("{} appeared during the run, trying next name", path.display());
                    self.claimed.insert(candidate);
                }
                Err(source) => return Err(Error::io(path, source)),
            }
        }

        unreachable!("candidate names are unbounded")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn safe_title_replaces_slashes() {
        assert_eq!(safe_title("A/B/C"), "A-B-C");
        assert_eq!(safe_title("plain"), "plain");
    }

    #[test]
    fn windows_compatible_filename_replaces_every_illegal_char() {
        assert_eq!(
            windows_compatible_filename(r#"a<b>c:d"e/f\g|h?i*j.md"#),
            "a_b_c_d_e_f_g_h_i_j.md"
        );
    }

    #[test]
    fn markdown_filename_sanitizes_after_slash_substitution() {
        assert_eq!(markdown_filename(&safe_title("Q&A: what/why?")), "Q&A_ what-why_.md");
    }

    #[test]
    fn split_extension_matches_stem_and_extension() {
        assert_eq!(split_extension("A-B.md"), ("A-B", ".md"));
        assert_eq!(split_extension("v1.2.md"), ("v1.2", ".md"));
        assert_eq!(split_extension(".hidden.md"), (".hidden", ".md"));
        assert_eq!(split_extension("..md"), ("..md", ""));
        assert_eq!(split_extension("noext"), ("noext", ""));
    }

    #[test]
    fn candidates_number_from_one_before_extension() {
        let names: Vec<String> = candidates("name.md").take(4).collect();
        assert_eq!(names, vec!["name.md", "name_1.md", "name_2.md", "name_3.md"]);
    }

    #[test]
    fn create_disambiguates_repeated_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = FileNameRegistry::from_dir(dir.path()).unwrap();

        let names: Vec<String> = (0..3)
            .map(|_| registry.create("name.md").unwrap().0)
            .collect();

        assert_eq!(names, vec!["name.md", "name_1.md", "name_2.md"]);
        assert!(dir.path().join("name_2.md").is_file());
    }

    #[test]
    fn create_skips_names_present_before_the_run() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("note.md"), "old").unwrap();
        let mut registry = FileNameRegistry::from_dir(dir.path()).unwrap();

        let (name, _) = registry.create("note.md").unwrap();

        assert_eq!(name, "note_1.md");
        assert_eq!(std::fs::read_to_string(dir.path().join("note.md")).unwrap(), "old");
    }

    #[test]
    fn create_never_overwrites_files_added_after_seeding() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = FileNameRegistry::from_dir(dir.path()).unwrap();
        std::fs::write(dir.path().join("late.md"), "keep").unwrap();

        let (name, _) = registry.create("late.md").unwrap();

        assert_eq!(name, "late_1.md");
        assert!(registry.is_claimed("late.md"));
        assert_eq!(std::fs::read_to_string(dir.path().join("late.md")).unwrap(), "keep");
    }

    #[test]
    fn from_dir_fails_for_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let error = FileNameRegistry::from_dir(dir.path().join("nope")).unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
    }
}
