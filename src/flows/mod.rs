//! Flows module - End-to-end pipelines built from the core stages
//!
//! Available flows:
//! - wordcount: count word frequencies across a directory and write a TSV report

pub mod wordcount;
