//! wordcount - Word frequency counts over a directory of text files
//!
//! wordcount provides:
//! - Non-recursive loading of every file in an input folder as UTF-8 text
//! - Lowercasing, whitespace tokenization and punctuation stripping
//! - A `word<TAB>count` report written to `<output_folder>/wordcount.tsv`

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod flows;

use crate::core::error::{WordCountError, USAGE};

fn main() -> Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if cli::is_informational(&err) => err.exit(),
        Err(_) => exit_with_usage(),
    };

    match cli::run(cli) {
        Err(err)
            if err
                .downcast_ref::<WordCountError>()
                .is_some_and(WordCountError::is_usage) =>
        {
            exit_with_usage()
        }
        other => other,
    }
}

fn exit_with_usage() -> ! {
    println!("{}", USAGE);
    std::process::exit(1);
}
