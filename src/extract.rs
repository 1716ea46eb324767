//! Unpacks the downloaded dataset archive into the data directory.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{EdaError, Result};

/// Result of one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractReport {
    pub destination: PathBuf,
    /// Files written, in archive order.
    pub files: Vec<PathBuf>,
}

/// Expand every entry of `archive` into `dest`.
///
/// The archive must exist; otherwise nothing is created and
/// [`EdaError::MissingInput`] names the expected path. `dest` is created if
/// needed and existing files of the same name are overwritten, so repeated
/// runs converge on the same file set. Entries that would land outside
/// `dest` are skipped.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<ExtractReport> {
    if !archive.is_file() {
        return Err(EdaError::MissingInput {
            path: archive.to_path_buf(),
        });
    }

    let mut zip = zip::ZipArchive::new(File::open(archive)?)?;
    std::fs::create_dir_all(dest)?;

    let mut files = Vec::new();
    for index in 0..zip.len() {
        let mut entry = zip.by_index(index)?;
        let Some(relative) = entry.enclosed_name() else {
            log::warn!("Skipping archive entry with unsafe path: {}", entry.name());
            continue;
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut out = File::create(&out_path)?;
        let bytes = io::copy(&mut entry, &mut out)?;
        log::debug!("Extracted {} ({bytes} bytes)", out_path.display());
        files.push(out_path);
    }

    Ok(ExtractReport {
        destination: dest.to_path_buf(),
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_archive(path: &Path, entries: &[(&str, &str)]) {
        let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, body) in entries {
            writer.start_file(*name, options).unwrap();
            writer.write_all(body.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn missing_archive_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("data");
        let archive = dir.path().join("wine+quality.zip");

        let err = extract_archive(&archive, &dest).unwrap_err();
        match &err {
            EdaError::MissingInput { path } => assert_eq!(path, &archive),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("wine+quality.zip"));
        assert!(!dest.exists());
    }

    #[test]
    fn nested_entries_get_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("nested.zip");
        build_archive(&archive, &[("docs/winequality.names", "names")]);

        let dest = dir.path().join("data");
        let report = extract_archive(&archive, &dest).unwrap();
        assert_eq!(report.files, vec![dest.join("docs").join("winequality.names")]);
        assert!(dest.join("docs/winequality.names").is_file());
    }

    #[test]
    fn unsafe_entry_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("evil.zip");
        build_archive(&archive, &[("../escape.txt", "x"), ("ok.csv", "a;b\n")]);

        let dest = dir.path().join("data");
        let report = extract_archive(&archive, &dest).unwrap();
        assert_eq!(report.files, vec![dest.join("ok.csv")]);
        assert!(!dir.path().join("escape.txt").exists());
    }
}
