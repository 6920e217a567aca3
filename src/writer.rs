// src/writer.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::ReportResult;

/// A fully rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFile {
    pub name: String,
    pub contents: String,
}

impl OutputFile {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Overwrites every file in `dir`. All contents are staged in temp siblings
/// first and only renamed into place once every write succeeded, so a failed
/// write leaves the previous snapshot untouched.
pub fn write_all(dir: &Path, files: &[OutputFile]) -> ReportResult<usize> {
    fs::create_dir_all(dir)?;

    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(files.len());
    for file in files {
        let tmp = dir.join(format!(".{}.tmp", file.name));
        if let Err(e) = fs::write(&tmp, file.contents.as_bytes()) {
            tracing::warn!(path = %tmp.display(), "staging failed, discarding {} staged files", staged.len());
            for (tmp, _) in &staged {
                let _ = fs::remove_file(tmp);
            }
            return Err(e.into());
        }
        staged.push((tmp, dir.join(&file.name)));
    }

    for (tmp, target) in &staged {
        fs::rename(tmp, target)?;
        tracing::debug!(path = %target.display(), "wrote");
    }

    Ok(staged.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::temp_output_dir;

    #[test]
    fn overwrites_and_leaves_no_temp_files() {
        let dir = temp_output_dir("writer");
        write_all(&dir, &[OutputFile::new("a.html", "first")]).unwrap();
        write_all(&dir, &[OutputFile::new("a.html", "second")]).unwrap();

        assert_eq!(fs::read_to_string(dir.join("a.html")).unwrap(), "second");
        let leftovers: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn failed_write_keeps_previous_snapshot() {
        let dir = temp_output_dir("writer_staging");
        write_all(&dir, &[OutputFile::new("a.html", "old a"), OutputFile::new("b.html", "old b")])
            .unwrap();
        // a directory in the temp slot makes staging b.html fail
        fs::create_dir(dir.join(".b.html.tmp")).unwrap();

        let result = write_all(
            &dir,
            &[OutputFile::new("a.html", "new a"), OutputFile::new("b.html", "new b")],
        );

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(dir.join("a.html")).unwrap(), "old a");
        assert_eq!(fs::read_to_string(dir.join("b.html")).unwrap(), "old b");
        assert!(!dir.join(".a.html.tmp").exists());
    }
}
