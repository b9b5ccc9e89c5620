//! Word frequency model
//!
//! [`WordCounts`] is the word → count table built by a single pass over the
//! token sequence. It iterates in first-insertion order; other report orders
//! are produced on demand through [`SortOrder`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Row order of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Order in which each word was first seen
    #[default]
    Insertion,
    /// Highest count first; ties keep insertion order
    Count,
    /// Ascending by word
    Word,
}

impl SortOrder {
    /// List all accepted names
    pub fn available() -> &'static [&'static str] {
        &["insertion", "count", "word"]
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOrder::Insertion => "insertion",
            SortOrder::Count => "count",
            SortOrder::Word => "word",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "insertion" | "first-seen" | "none" => Ok(SortOrder::Insertion),
            "count" | "frequency" => Ok(SortOrder::Count),
            "word" | "alpha" | "alphabetical" => Ok(SortOrder::Word),
            _ => Err(format!(
                "Unknown sort order: {}. Available: {}",
                s,
                SortOrder::available().join(", ")
            )),
        }
    }
}

/// Word → occurrence count, in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: IndexMap<String, usize>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
    }

    /// Occurrences of `word`, 0 if never seen
    #[cfg(test)]
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Rows in the requested order
    pub fn ordered(&self, order: SortOrder) -> Vec<(&str, usize)> {
        let mut rows: Vec<_> = self.iter().collect();
        match order {
            SortOrder::Insertion => {}
            // stable sort, so ties stay in insertion order
            SortOrder::Count => rows.sort_by(|a, b| b.1.cmp(&a.1)),
            SortOrder::Word => rows.sort_by(|a, b| a.0.cmp(b.0)),
        }
        rows
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordCounts {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut counts = WordCounts::new();
        for word in iter {
            counts.add(word.as_ref());
        }
        counts
    }
}

/// Count occurrences of each word in a single pass
pub fn count_words(words: &[String]) -> WordCounts {
    words.iter().collect()
}

/// Outcome of one run, printed with `--summary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Input directory as given
    pub input: String,

    /// Path of the written report
    pub report: String,

    /// Entries read from the input directory
    pub files: usize,

    /// Raw lines read
    pub lines: usize,

    /// Words counted, empty words included
    pub tokens: usize,

    /// Rows in the report
    pub distinct_words: usize,

    pub sort: SortOrder,
}

/// Paths resolved from the positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}
