//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::core::error::WordCountError;
use crate::core::logging;
use crate::core::model::{RunPaths, SortOrder};

/// wordcount - count word frequencies across the files of a directory.
#[derive(Parser, Debug)]
#[command(name = "wordcount")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordcount reads every file directly inside INPUT_FOLDER as UTF-8 text,
lowercases and tokenizes it, and writes one `word<TAB>count` row per distinct
word to OUTPUT_FOLDER/wordcount.tsv.

Tokens are whitespace-separated pieces with , . ! ? stripped from both ends.
Subdirectories are not traversed; any unreadable entry aborts the run.

Examples:
    wordcount corpus/ out/
    wordcount corpus/ out/ --sort count
    wordcount corpus/ out/ --summary -v
"#
)]
pub struct Cli {
    /// Input folder, then output folder.
    #[arg(
        value_name = "FOLDER",
        long_help = "Exactly two positional arguments: the input folder to read and the output\n\
folder to write wordcount.tsv into (created if missing). Any other count prints the\n\
usage line and exits with status 1."
    )]
    pub paths: Vec<PathBuf>,

    /// Report row order (insertion/count/word).
    #[arg(
        long,
        env = "WORDCOUNT_SORT",
        default_value = "insertion",
        value_name = "ORDER",
        long_help = "Order of rows in wordcount.tsv.\n\n\
Supported values:\n\
- insertion (default): order in which each word was first seen\n\
- count: highest count first, ties in first-seen order\n\
- word: ascending by word"
    )]
    pub sort: SortOrder,

    /// Print a JSON run summary to stdout.
    #[arg(
        long,
        long_help = "After writing the report, print one JSON object to stdout with the number\n\
of files, lines, tokens and distinct words processed."
    )]
    pub summary: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug-level diagnostics on stderr, including one line per file read."
    )]
    pub verbose: bool,

    /// Quiet mode (errors only).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Explicit log filter, e.g. `info` or `wordcount=debug`.
    #[arg(
        long,
        env = "WORDCOUNT_LOG",
        value_name = "FILTER",
        long_help = "tracing filter directive for stderr diagnostics. Overrides --verbose/--quiet."
    )]
    pub log: Option<String>,
}

/// Extract the input and output folders from the positional arguments
pub fn resolve_paths(paths: &[PathBuf]) -> Result<RunPaths, WordCountError> {
    match paths {
        [input, output] => Ok(RunPaths {
            input: input.clone(),
            output: output.clone(),
        }),
        _ => Err(WordCountError::Usage { given: paths.len() }),
    }
}

/// Whether a parse error is really `--help` / `--version` output.
///
/// Every other parse failure is a malformed invocation and gets the usage line.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose, cli.quiet, cli.log.as_deref());

    let paths = resolve_paths(&cli.paths).inspect_err(|err| {
        if let WordCountError::Usage { given } = err {
            debug!(given, "expected exactly 2 positional arguments");
        }
    })?;
    debug!(input = %paths.input.display(), output = %paths.output.display(), "resolved paths");

    crate::flows::wordcount::run_wordcount(&paths, cli.sort, cli.summary)
}
