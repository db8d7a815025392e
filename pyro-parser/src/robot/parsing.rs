//! Table dispatcher
//!
//!     Walks the tokenized rows and builds the line chain:
//!
//!         - blank rows are skipped (they still advanced the tokenizer offsets)
//!         - a row whose first cell starts with `*` is a table header; a recognized
//!           header opens a new Table and makes its populator active, an
//!           unrecognized one is dropped and the active populator stays in effect
//!         - every other row goes to the active populator (initially the unknown
//!           populator) and the resulting node(s) are appended to the chain with the
//!           row's offset and length
//!
//!     Once all rows are consumed the post-processing passes run over the finished
//!     chain. A panic while populating a row is caught: the row is kept as an
//!     opaque line, a diagnostic is recorded and parsing continues.

use crate::robot::model::{
    Diagnostic, Document, ItemDefinition, Line, LineId, LineKind, Step, Table, TableType,
};
use crate::robot::populating::{self, CarryOver, Populated, TablePopulator};
use crate::robot::postprocessing;
use crate::robot::tokenizing::{self, Dialect, Row};
use crate::robot::vocabulary;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, trace, warn};

/// Tokenize, populate and post-process `buffer`. Never fails.
pub fn parse(buffer: &str, dialect: Dialect) -> Document {
    let (rows, tokenizing_failure) = tokenize_guarded(buffer, dialect);
    let mut document = build(&rows, dialect);
    document.record_all(tokenizing_failure);
    postprocessing::run_standard(&mut document);
    debug!(
        dialect = %dialect,
        rows = rows.len(),
        tables = document.table_ids().len(),
        lines = document.len(),
        diagnostics = document.diagnostics().len(),
        "parsed document"
    );
    document
}

/// Tokenize, turning a panic into an empty row list plus a diagnostic.
pub fn tokenize_guarded(buffer: &str, dialect: Dialect) -> (Vec<Row>, Option<Diagnostic>) {
    match panic::catch_unwind(|| tokenizing::tokenize(buffer, dialect)) {
        Ok(rows) => (rows, None),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(stage = "tokenizing", %message, "tokenizer panicked, using no rows");
            (Vec::new(), Some(Diagnostic::new("tokenizing", message)))
        }
    }
}

/// Build the line chain and table indices from rows, without post-processing.
pub fn build(rows: &[Row], dialect: Dialect) -> Document {
    let mut builder = DocumentBuilder::new(dialect);
    for row in rows {
        builder.consume(row);
    }
    builder.finish()
}

/// Resolve a header row to a table type: the cells are concatenated with all
/// `*` removed, trimmed, and matched as a prefix against the known aliases.
pub fn resolve_table_header(row: &Row) -> Option<TableType> {
    let header: String = row
        .cells
        .iter()
        .map(|cell| cell.value.replace('*', ""))
        .collect();
    vocabulary::table_type_for_header(header.trim())
}

/// Incremental chain construction, one row at a time.
pub struct DocumentBuilder {
    document: Document,
    populator: &'static dyn TablePopulator,
    carry: CarryOver,
    tail: Option<LineId>,
    current_table: Option<LineId>,
    current_item: Option<LineId>,
}

impl DocumentBuilder {
    pub fn new(dialect: Dialect) -> Self {
        DocumentBuilder {
            document: Document::empty(dialect),
            populator: populating::unknown_populator(),
            carry: CarryOver::default(),
            tail: None,
            current_table: None,
            current_item: None,
        }
    }

    pub fn consume(&mut self, row: &Row) {
        if row.is_blank() {
            return;
        }
        let is_header = row
            .first_cell()
            .is_some_and(|cell| cell.value.starts_with('*'));
        if is_header {
            self.open_table(row);
            return;
        }

        let populator = self.populator;
        let carry = &mut self.carry;
        let populated = panic::catch_unwind(AssertUnwindSafe(|| populator.populate(row, carry)));
        match populated {
            Ok(populated) => self.attach(populated, row),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!(stage = "population", offset = row.offset, %message, "populator panicked, row kept as opaque line");
                self.document.record(Diagnostic::new(
                    "population",
                    format!("row at offset {}: {}", row.offset, message),
                ));
                self.push(row, LineKind::Unknown);
            }
        }
    }

    pub fn finish(self) -> Document {
        self.document
    }

    fn open_table(&mut self, row: &Row) {
        let name = row.first_cell().map(|c| c.value.clone()).unwrap_or_default();
        let Some(table_type) = resolve_table_header(row) else {
            warn!(header = %name, offset = row.offset, "unrecognized table header dropped");
            return;
        };
        trace!(table = %table_type, offset = row.offset, "opening table");
        let id = self.push(row, LineKind::Table(Table::new(table_type, name)));
        self.populator = populating::populator_for(table_type);
        self.carry.reset();
        self.current_table = Some(id);
        self.current_item = None;
    }

    fn attach(&mut self, populated: Populated, row: &Row) {
        match populated {
            Populated::Opaque => {
                self.push(row, LineKind::Unknown);
            }
            Populated::Step { step, indexed } => {
                let id = self.push(row, LineKind::Step(step));
                if indexed {
                    self.index_in_table(id);
                }
            }
            Populated::ItemStart { item, first_step } => self.start_item(row, item, first_step),
            Populated::ItemStep(step) => {
                let id = self.push(row, LineKind::Step(step));
                self.add_to_item(id);
            }
        }
    }

    fn start_item(&mut self, row: &Row, item: ItemDefinition, first_step: Option<Step>) {
        trace!(name = %item.name, offset = row.offset, "new item");
        let id = self.push(row, LineKind::ItemDefinition(item));
        self.index_in_table(id);
        self.current_item = Some(id);
        if let Some(step) = first_step {
            let step_id = self.push(row, LineKind::Step(step));
            self.add_to_item(step_id);
        }
    }

    fn push(&mut self, row: &Row, kind: LineKind) -> LineId {
        let id = self
            .document
            .append(self.tail, Line::new(row.offset, row.length, kind));
        self.tail = Some(id);
        id
    }

    fn index_in_table(&mut self, id: LineId) {
        if let Some(table) = self
            .current_table
            .and_then(|table| self.document.table_mut(table))
        {
            table.lines.push(id);
        }
    }

    fn add_to_item(&mut self, id: LineId) {
        if let Some(item) = self
            .current_item
            .and_then(|item| self.document.item_mut(item))
        {
            item.steps.push(id);
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
