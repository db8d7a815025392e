//! Document model
//!
//!     The model is an arena of [`Line`] nodes linked into one forward chain that
//!     spans the whole document in source order. Blank rows never make it into the
//!     chain; unrecognized rows do, as [`LineKind::Unknown`].
//!
//!     Tables and item definitions do not own lines. They hold ordered [`LineId`]
//!     handles into the arena, giving a second, table-scoped traversal order over
//!     the same nodes:
//!
//!         chain:  Table → Item → Step → Step → Item → Step → Table → Step ...
//!         table:  [Item, Item]
//!         item:   [Step, Step]
//!
//!     Structure is fixed once a parse finishes. Only [`SegmentType`] tags change
//!     afterwards, rewritten in place by the post-processing passes.

mod document;
mod line;
mod segment;
mod table;
pub mod views;

pub use document::{Diagnostic, Document, Lines, SegmentRef};
pub use line::{Line, LineId, LineKind};
pub use segment::{SegmentType, Step, StepSegment, StepType};
pub use table::{ItemDefinition, ItemType, Table, TableType};
pub use views::{ViewCache, ViewKey};
