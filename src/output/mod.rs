// src/output/mod.rs

//! Builds the output document: the tree listing first, then one fenced block per file.

pub mod contents;
pub mod language;
pub mod tree;
pub mod writer; // Manages the output document on disk

pub use contents::append_file_contents;
pub use tree::describe_repo_contents;
