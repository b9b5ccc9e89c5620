//! Corpus loading
//!
//! Lists the entries directly under the input directory and reads each one as
//! UTF-8 text, producing a single ordered sequence of raw lines:
//! - Entries are visited in directory-listing order (no sorting, no recursion)
//! - Every entry is read, whatever its extension
//! - The first unreadable or non-UTF-8 entry aborts the load

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::error::WordCountError;

/// Raw lines gathered from every entry of the input directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedLines {
    /// Lines in directory-listing order, then file order, each keeping its `\n`
    pub lines: Vec<String>,

    /// Number of entries that were read
    pub files: usize,
}

/// List entries directly inside `dir`, in the order the filesystem returns them.
///
/// `dir` must be a directory; walkdir alone would yield a file root only at
/// depth 0 and list nothing.
pub fn list_entries(dir: &Path) -> Result<Vec<PathBuf>, WordCountError> {
    let metadata = fs::metadata(dir).map_err(|source| WordCountError::OpenDir {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(WordCountError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .map(|entry| {
            entry
                .map(|e| e.into_path())
                .map_err(|source| WordCountError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                })
        })
        .collect()
}

/// Split text into lines using universal-newline rules.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line and are reported as `\n`.
/// A final line without terminator is kept as-is.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            '\n' => {
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Read one entry as UTF-8 and split it into lines
pub fn read_lines(path: &Path) -> Result<Vec<String>, WordCountError> {
    let bytes = fs::read(path).map_err(|source| WordCountError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|e| WordCountError::Decode {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;

    Ok(split_lines(&content))
}

/// Read all lines from all entries of `dir`
pub fn read_all_lines(dir: &Path) -> Result<LoadedLines, WordCountError> {
    let mut loaded = LoadedLines::default();

    for path in list_entries(dir)? {
        let lines = read_lines(&path)?;
        debug!(path = %path.display(), lines = lines.len(), "read input file");
        loaded.lines.extend(lines);
        loaded.files += 1;
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_split_lines_keeps_terminators() {
        assert_eq!(
            split_lines("one\ntwo\nthree"),
            vec!["one\n", "two\n", "three"]
        );
    }

    #[test]
    fn test_split_lines_universal_newlines() {
        assert_eq!(split_lines("a\r\nb\rc\n"), vec!["a\n", "b\n", "c\n"]);
    }

    #[test]
    fn test_split_lines_blank_lines() {
        assert_eq!(split_lines("\n\nx"), vec!["\n", "\n", "x"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_read_lines_success() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("a.txt");
        fs::write(&file_path, "Hello, World!\nBye\n").unwrap();

        let lines = read_lines(&file_path).unwrap();
        assert_eq!(lines, vec!["Hello, World!\n", "Bye\n"]);
    }

    #[test]
    fn test_read_lines_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("bad.txt");

        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(&[0x48, 0x69, 0xFF, 0xFE]).unwrap();

        let err = read_lines(&file_path).unwrap_err();
        match err {
            WordCountError::Decode { path, valid_up_to } => {
                assert_eq!(path, file_path);
                assert_eq!(valid_up_to, 2);
            }
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_nonexistent_file() {
        let err = read_lines(Path::new("/nonexistent/file.txt")).unwrap_err();
        assert!(matches!(err, WordCountError::ReadFile { .. }));
    }

    #[test]
    fn test_list_entries_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/deep.txt"), "deep").unwrap();

        let mut names: Vec<_> = list_entries(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();

        assert_eq!(names, vec!["a.txt", "sub"]);
    }

    #[test]
    fn test_list_entries_missing_dir() {
        let err = list_entries(Path::new("/nonexistent/input")).unwrap_err();
        assert!(matches!(err, WordCountError::OpenDir { .. }));
    }

    #[test]
    fn test_read_all_lines_rejects_file_as_input() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("corpus.txt");
        fs::write(&file_path, "words in a file\n").unwrap();

        let err = read_all_lines(&file_path).unwrap_err();
        match err {
            WordCountError::NotADirectory { path } => assert_eq!(path, file_path),
            other => panic!("Expected NotADirectory error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_all_lines_concatenates_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "one\ntwo\n").unwrap();
        fs::write(dir.path().join("b.md"), "three").unwrap();

        let loaded = read_all_lines(dir.path()).unwrap();
        assert_eq!(loaded.files, 2);
        assert_eq!(loaded.lines.len(), 3);
        assert!(loaded.lines.contains(&"three".to_string()));
    }

    #[test]
    fn test_read_all_lines_empty_dir() {
        let dir = TempDir::new().unwrap();
        let loaded = read_all_lines(dir.path()).unwrap();
        assert_eq!(loaded, LoadedLines::default());
    }

    #[test]
    fn test_read_all_lines_subdirectory_aborts() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let err = read_all_lines(dir.path()).unwrap_err();
        assert!(matches!(err, WordCountError::ReadFile { .. }));
    }
}
