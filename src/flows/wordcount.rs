//! Word count flow - read, normalize, tokenize, count, write
//!
//! Each stage takes the previous stage's full output and returns its own;
//! nothing is shared between stages except what is passed along.

use anyhow::{Context, Result};
use tracing::info;

use crate::core::error::WordCountError;
use crate::core::file_reader::read_all_lines;
use crate::core::model::{count_words, RunPaths, RunSummary, SortOrder};
use crate::core::paths::normalize_path;
use crate::core::render::Renderer;
use crate::core::tokenizer::{normalize_lines, split_into_words};

/// Run the whole pipeline over `paths.input` and write the report into `paths.output`
pub fn count_directory(paths: &RunPaths, order: SortOrder) -> Result<RunSummary, WordCountError> {
    let loaded = read_all_lines(&paths.input)?;
    info!(
        files = loaded.files,
        lines = loaded.lines.len(),
        "loaded input lines"
    );

    let normalized = normalize_lines(&loaded.lines);
    let words = split_into_words(&normalized);
    info!(tokens = words.len(), "tokenized lines");

    let counts = count_words(&words);
    if counts.is_empty() {
        info!(input = %paths.input.display(), "no words found, report will be empty");
    } else {
        info!(distinct = counts.len(), "counted words");
    }

    let report = Renderer::new(order).write_report(&paths.output, &counts)?;
    info!(report = %report.display(), %order, "wrote report");

    Ok(RunSummary {
        input: normalize_path(&paths.input),
        report: normalize_path(&report),
        files: loaded.files,
        lines: loaded.lines.len(),
        tokens: counts.total(),
        distinct_words: counts.len(),
        sort: order,
    })
}

/// Run the wordcount command, optionally printing the summary as JSON on stdout
pub fn run_wordcount(paths: &RunPaths, order: SortOrder, summary: bool) -> Result<()> {
    let result = count_directory(paths, order).with_context(|| {
        format!(
            "word count failed for {} -> {}",
            paths.input.display(),
            paths.output.display()
        )
    })?;

    if summary {
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}
