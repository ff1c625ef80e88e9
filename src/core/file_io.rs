//! Plain-text file reading and writing

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Filter label offered by the file dialogs
pub const TEXT_FILTER_NAME: &str = "Text Files";
/// Extensions accepted by the file dialogs
pub const TEXT_EXTENSIONS: &[&str] = &["txt"];

/// Errors raised while moving text between a tab and the disk
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Could not read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error("Could not write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
}

/// Read a UTF-8 text file
pub fn read_text(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `text` to `path`, replacing any existing file
pub fn write_text(path: &Path, text: &str) -> Result<(), FileError> {
    fs::write(path, text).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Append `.txt` when the chosen file name has no extension
pub fn with_txt_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(TEXT_EXTENSIONS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let text = "first line\nsecond line\n\tünïcödé\n";

        write_text(&path, text).unwrap();
        assert_eq!(read_text(&path).unwrap(), text);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, FileError::Read { ref source, .. } if source.kind() == io::ErrorKind::NotFound));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_text(&path).unwrap_err();
        assert!(matches!(err, FileError::Read { ref source, .. } if source.kind() == io::ErrorKind::InvalidData));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("note.txt");

        assert!(matches!(write_text(&path, "x"), Err(FileError::Write { .. })));
    }

    #[test]
    fn test_with_txt_extension() {
        assert_eq!(with_txt_extension(PathBuf::from("/a/notes")), PathBuf::from("/a/notes.txt"));
        assert_eq!(with_txt_extension(PathBuf::from("/a/notes.md")), PathBuf::from("/a/notes.md"));
    }
}
