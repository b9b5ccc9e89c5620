//! Report rendering
//!
//! Renders [`WordCounts`] as TSV (`word<TAB>count`, one row per word, no
//! header) and writes it to `wordcount.tsv` in the output directory.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::error::WordCountError;
use crate::core::model::{SortOrder, WordCounts};
use crate::core::paths::report_path;

/// Renderer for word count reports
pub struct Renderer {
    order: SortOrder,
}

impl Renderer {
    pub fn new(order: SortOrder) -> Self {
        Self { order }
    }

    /// Render the report to a string
    #[cfg(test)]
    pub fn render(&self, counts: &WordCounts) -> String {
        let mut output = String::new();
        for (word, count) in counts.ordered(self.order) {
            output.push_str(word);
            output.push('\t');
            output.push_str(&count.to_string());
            output.push('\n');
        }
        output
    }

    /// Render to a writer, row by row
    pub fn render_to<W: Write>(&self, counts: &WordCounts, mut writer: W) -> std::io::Result<()> {
        for (word, count) in counts.ordered(self.order) {
            writeln!(writer, "{}\t{}", word, count)?;
        }
        writer.flush()
    }

    /// Create `output_dir` if needed and write the report into it.
    ///
    /// Returns the path of the written report. An existing report is truncated.
    pub fn write_report(
        &self,
        output_dir: &Path,
        counts: &WordCounts,
    ) -> Result<PathBuf, WordCountError> {
        if !output_dir.exists() {
            fs::create_dir_all(output_dir).map_err(|source| WordCountError::CreateDir {
                path: output_dir.to_path_buf(),
                source,
            })?;
        }

        let path = report_path(output_dir);
        let write_err = |source| WordCountError::WriteReport {
            path: path.clone(),
            source,
        };

        let file = fs::File::create(&path).map_err(write_err)?;
        self.render_to(counts, BufWriter::new(file))
            .map_err(write_err)?;

        Ok(path)
    }
}
