// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Persistence of generated documents.
//!
//! Documents are written under fixed file names inside the output directory,
//! which is created on demand. Existing files are truncated, so repeated runs
//! never leave stale content behind.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf}
};

use tracing::debug;

use crate::{
    error::{self, Error},
    generator::{ContentKind, GeneratedContent}
};

/// Paths of the documents written by [`write_content`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenContent {
    /// Directory that received the documents.
    pub output_dir: PathBuf,
    /// Written documents in [`ContentKind::ALL`] order.
    pub files:      Vec<(ContentKind, PathBuf)>
}

impl WrittenContent {
    /// Returns the path written for `kind`.
    pub fn path(&self, kind: ContentKind) -> Option<&Path> {
        self.files
            .iter()
            .find(|(candidate, _)| *candidate == kind)
            .map(|(_, path)| path.as_path())
    }
}

/// Writes every generated document into `output_dir`.
///
/// The directory hierarchy is created when missing. Nothing is rolled back
/// when a write fails part-way through.
///
/// # Errors
///
/// Returns [`Error::Write`](Error::Write) when the directory or any document
/// cannot be written.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use git_to_viral::{RepositoryAnalyzer, SimulatedAnalyzer, generate, write_content};
///
/// # fn main() -> Result<(), git_to_viral::Error> {
/// let record = SimulatedAnalyzer::default().analyze("https://github.com/octocat/Hello-World")?;
/// let written = write_content(Path::new("output"), &generate(&record))?;
/// for (_, path) in &written.files {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn write_content(
    output_dir: &Path,
    content: &GeneratedContent
) -> Result<WrittenContent, Error> {
    fs::create_dir_all(output_dir).map_err(|source| error::write_error(output_dir, source))?;

    let mut files = Vec::with_capacity(ContentKind::ALL.len());
    for (kind, document) in content.documents() {
        let path = output_dir.join(kind.file_name());
        write_document(&path, document)?;
        debug!("wrote {} ({} bytes)", path.display(), document.len());
        files.push((kind, path));
    }

    Ok(WrittenContent {
        output_dir: output_dir.to_path_buf(),
        files
    })
}

fn write_document(path: &Path, document: &str) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| error::write_error(path, source))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(document.as_bytes())
        .map_err(|source| error::write_error(path, source))?;
    writer
        .flush()
        .map_err(|source| error::write_error(path, source))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::write_content;
    use crate::{
        analysis::{AnalysisRecord, Complexity, Stack},
        error::Error,
        generator::{ContentKind, GeneratedContent, generate}
    };

    fn sample_content() -> GeneratedContent {
        let record = AnalysisRecord::new("Hello-World", 42, Stack::default(), Complexity::Medium);
        generate(&record)
    }

    #[test]
    fn creates_nested_output_directory() {
        let temp = tempdir().expect("failed to create tempdir");
        let output = temp.path().join("deeply/nested/output");

        let written = write_content(&output, &sample_content()).expect("write failed");

        assert!(output.is_dir());
        assert_eq!(written.output_dir, output);
        assert_eq!(written.files.len(), 3);
        for kind in ContentKind::ALL {
            let path = written.path(kind).expect("missing written path");
            assert_eq!(path, output.join(kind.file_name()));
            let contents = fs::read_to_string(path).expect("failed to read document");
            assert!(!contents.is_empty());
            assert!(contents.contains("Hello-World"));
        }
    }

    #[test]
    fn overwrites_existing_documents_without_stale_content() {
        let temp = tempdir().expect("failed to create tempdir");
        let output = temp.path().to_path_buf();
        let stale = "stale ".repeat(1024);
        for kind in ContentKind::ALL {
            fs::write(output.join(kind.file_name()), &stale).expect("failed to seed file");
        }

        let content = sample_content();
        write_content(&output, &content).expect("write failed");

        for (kind, document) in content.documents() {
            let contents =
                fs::read_to_string(output.join(kind.file_name())).expect("failed to read");
            assert_eq!(contents, document);
        }
    }

    #[test]
    fn reports_directory_creation_failure() {
        let temp = tempdir().expect("failed to create tempdir");
        let blocker = temp.path().join("occupied");
        fs::write(&blocker, "not a directory").expect("failed to write blocker");
        let output = blocker.join("output");

        let error = write_content(&output, &sample_content()).expect_err("expected write error");
        match error {
            Error::Write {
                path, ..
            } => assert_eq!(path, output),
            other => panic!("unexpected error variant: {other:?}")
        }
    }
}
