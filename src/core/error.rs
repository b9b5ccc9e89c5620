//! Error types shared by every pipeline stage

use std::path::PathBuf;
use thiserror::Error;

/// Usage line printed when the positional arguments are wrong.
///
/// Kept byte-for-byte so existing wrapper scripts keep matching on it.
pub const USAGE: &str = "Usage: python3 -m homework <input_folder> <output_folder>";

/// Errors produced while resolving arguments, reading the corpus or writing the report
#[derive(Debug, Error)]
pub enum WordCountError {
    /// Wrong number of positional arguments
    #[error("{}", USAGE)]
    Usage { given: usize },

    #[error("cannot list input directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Input path exists but is not a directory
    #[error("input path {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot list input directory {}", path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid UTF-8; `valid_up_to` is the byte offset of the first bad sequence
    #[error("{} is not valid UTF-8 (invalid byte sequence at offset {valid_up_to})", path.display())]
    Decode { path: PathBuf, valid_up_to: usize },

    #[error("cannot create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report {}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WordCountError {
    /// Whether this error should end the process with the usage line
    pub fn is_usage(&self) -> bool {
        matches!(self, WordCountError::Usage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_usage_display_is_usage_line() {
        let err = WordCountError::Usage { given: 3 };
        assert_eq!(err.to_string(), USAGE);
        assert!(err.is_usage());
    }

    #[test]
    fn test_decode_mentions_path_and_offset() {
        let err = WordCountError::Decode {
            path: PathBuf::from("in/bad.txt"),
            valid_up_to: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("in/bad.txt"));
        assert!(msg.contains("offset 7"));
        assert!(!err.is_usage());
    }

    #[test]
    fn test_not_a_directory_names_path() {
        let err = WordCountError::NotADirectory {
            path: PathBuf::from("corpus.txt"),
        };
        assert_eq!(err.to_string(), "input path corpus.txt is not a directory");
    }

    #[test]
    fn test_io_variants_expose_source() {
        let err = WordCountError::WriteReport {
            path: PathBuf::from("out/wordcount.tsv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("out/wordcount.tsv"));
    }
}
