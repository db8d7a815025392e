//! Parser and document model for tabular Robot Framework test files
//!
//! The crate turns raw `.robot`, `.txt` and `.tsv` text into a queryable
//! [`Document`](robot::model::Document): a single forward chain of lines,
//! per-table indices into that chain, and semantic tags on every cell.
//!
//! See [`robot`] for the pipeline layout.

pub mod robot;
