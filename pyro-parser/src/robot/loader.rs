//! Document loading utilities
//!
//! `DocumentLoader` holds source text and the dialect to read it with, and runs
//! transforms over it. The CLI, the store and the tests all load through it.
//!
//! ```rust,ignore
//! use pyro_parser::robot::loader::DocumentLoader;
//!
//! // From a file; the dialect follows the extension
//! let doc = DocumentLoader::from_path("suite.robot")?.parse()?;
//!
//! // From a string
//! let rows = DocumentLoader::from_string("a\tb\n")
//!     .with_dialect(Dialect::TabSeparated)
//!     .tokenize()?;
//! ```

use crate::robot::model::Document;
use crate::robot::tokenizing::{Dialect, Row};
use crate::robot::transforms::standard::{pipeline_for, tokenization_for};
use crate::robot::transforms::{Transform, TransformError};
use std::fs;
use std::path::Path;

/// Error that can occur when loading documents
#[derive(Debug, Clone, PartialEq)]
pub enum LoaderError {
    Io(String),
    Transform(TransformError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Transform(err) => write!(f, "Transform error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

impl From<TransformError> for LoaderError {
    fn from(err: TransformError) -> Self {
        LoaderError::Transform(err)
    }
}

/// Source text plus the dialect it is read with.
pub struct DocumentLoader {
    source: String,
    dialect: Dialect,
}

impl DocumentLoader {
    /// Read a file. The dialect comes from its extension (`.tsv` tab, `.txt` and
    /// `.robot` space); other files load as [`Dialect::Unsupported`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader {
            source,
            dialect: Dialect::from_path(path),
        })
    }

    /// Wrap a string, read as space-separated unless told otherwise.
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            dialect: Dialect::SpaceSeparated,
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Run any transform over a copy of the source.
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Tokenize, populate and post-process with the standard pipeline for the
    /// loader's dialect.
    pub fn parse(&self) -> Result<Document, LoaderError> {
        self.with(pipeline_for(self.dialect))
    }

    pub fn tokenize(&self) -> Result<Vec<Row>, LoaderError> {
        self.with(tokenization_for(self.dialect))
    }

    pub fn source(&self) -> String {
        self.source.clone()
    }

    pub fn source_ref(&self) -> &str {
        &self.source
    }
}
