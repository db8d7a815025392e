//! Testing utilities
//!
//!     Robot test files have a lot of whitespace that matters, and inline strings
//!     in tests get it subtly wrong (a single space where two were meant, a tab
//!     expanded by an editor). Tests that exercise a whole file should load one of
//!     the curated fixtures under `pyro-parser/tests/fixtures/` instead:
//!
//!         - `parser_test.robot`: every table kind, space-separated
//!         - `parser_test.tsv`: the same content, tab-separated
//!         - `pipes.robot`: pipe-separated rows
//!
//!     Short snippets exercising one row shape are fine inline.

use crate::robot::loader::DocumentLoader;
use std::path::{Path, PathBuf};

/// Path relative to the workspace root.
///
/// `CARGO_MANIFEST_DIR` is the crate directory (`pyro-parser/`), one level below
/// the workspace root.
pub fn workspace_path(relative_path: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .join(relative_path)
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a fixture, with the dialect its extension implies.
///
/// # Panics
///
/// If the fixture cannot be read.
pub fn load_fixture(name: &str) -> DocumentLoader {
    match DocumentLoader::from_path(fixture_path(name)) {
        Ok(loader) => loader,
        Err(err) => panic!("fixture {} unreadable: {}", name, err),
    }
}
