//! Path utilities

use std::path::{Path, PathBuf};

/// File name of the report inside the output directory
pub const REPORT_FILE_NAME: &str = "wordcount.tsv";

/// Location of the report for a given output directory
pub fn report_path(output_dir: &Path) -> PathBuf {
    output_dir.join(REPORT_FILE_NAME)
}

/// Normalize a path to use '/' as separator, for logs and the summary
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
