//! Robot Framework tabular format
//!
//!     Processing runs strictly front to back:
//!
//!         text → rows/cells → line chain + table indices → retagged chain → cached views
//!
//!     - [`tokenizing`]: dialect-aware row and cell splitting.
//!     - [`populating`]: per-table-kind row classifiers.
//!     - [`parsing`]: the dispatcher that recognizes table headers and stitches the
//!       populators' output into the line chain.
//!     - [`postprocessing`]: ordered passes that rewrite segment tags using whole
//!       document context.
//!     - [`query`]: keyword-name normalization and the derived lookups editors use.
//!
//!     [`transforms`] exposes the same stages as composable pipelines, [`loader`] and
//!     [`store`] are the entry points used by applications.

pub mod formats;
pub mod loader;
pub mod model;
pub mod parsing;
pub mod populating;
pub mod postprocessing;
pub mod query;
pub mod store;
pub mod testing;
pub mod tokenizing;
pub mod transforms;
pub mod vocabulary;

pub use model::{
    Diagnostic, Document, ItemDefinition, ItemType, Line, LineId, LineKind, SegmentType, Step,
    StepSegment, StepType, Table, TableType,
};
pub use tokenizing::{tokenize, Cell, Dialect, DialectError, Row};
