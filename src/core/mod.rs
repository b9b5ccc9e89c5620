//! Core module - The pipeline stages and their data types
//!
//! This module provides:
//! - Error types (WordCountError) and the usage line
//! - Corpus loading from the input directory
//! - Line normalization and tokenization
//! - The word frequency model (WordCounts)
//! - TSV report rendering
//! - Path and logging helpers

pub mod error;
pub mod file_reader;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
pub mod tokenizer;
