//! Tokenization stage
//!
//! Splits source text into rows of cells for one dialect.

use crate::robot::parsing::tokenize_guarded;
use crate::robot::tokenizing::{Dialect, Row};
use crate::robot::transforms::{Runnable, TransformError};

/// Source text → rows.
///
/// An unsupported dialect yields no rows. A tokenizer panic is reported as a
/// failed stage.
pub struct Tokenization {
    dialect: Dialect,
}

impl Tokenization {
    pub fn new(dialect: Dialect) -> Self {
        Tokenization { dialect }
    }

    fn tokenize(&self, input: &str) -> Result<Vec<Row>, TransformError> {
        match tokenize_guarded(input, self.dialect) {
            (rows, None) => Ok(rows),
            (_, Some(diagnostic)) => Err(TransformError::StageFailed {
                stage: diagnostic.stage,
                message: diagnostic.message,
            }),
        }
    }
}

impl Default for Tokenization {
    fn default() -> Self {
        Self::new(Dialect::SpaceSeparated)
    }
}

impl Runnable<String, Vec<Row>> for Tokenization {
    fn run(&self, input: String) -> Result<Vec<Row>, TransformError> {
        self.tokenize(&input)
    }
}

impl Runnable<&str, Vec<Row>> for Tokenization {
    fn run(&self, input: &str) -> Result<Vec<Row>, TransformError> {
        self.tokenize(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_rows() {
        let rows = Tokenization::new(Dialect::SpaceSeparated)
            .run("*** Settings ***\nLibrary    X\n")
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].values(), vec!["Library", "X"]);
    }

    #[test]
    fn test_tab_rows_from_string() {
        let rows = Tokenization::new(Dialect::TabSeparated)
            .run("a\tb\n\tc".to_string())
            .unwrap();
        assert_eq!(rows[0].values(), vec!["a", "b"]);
        assert_eq!(rows[1].values(), vec!["", "c"]);
    }

    #[test]
    fn test_unsupported_is_empty() {
        let rows = Tokenization::new(Dialect::Unsupported)
            .run("anything")
            .unwrap();
        assert!(rows.is_empty());
    }
}
