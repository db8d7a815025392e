//! Tokenizer
//!
//!     Splits a text buffer into [`Row`]s and each row into [`Cell`]s.
//!
//!     Rows are cut at line feeds. A row's length includes its line feed, so the
//!     lengths of all rows always add up to the buffer length. Before cells are
//!     split the row is normalized: non-breaking spaces become regular spaces and
//!     trailing whitespace is dropped. In the space dialect tabs are additionally
//!     expanded to two spaces. Normalization never changes what a cell offset
//!     points at: offsets are mapped back to bytes of the original row.
//!
//!     Cell boundaries come from the per-dialect lexers in `cell_lexer`; values
//!     are trimmed and their offsets point at the first byte of the trimmed text.

mod cell_lexer;
pub mod dialect;
pub mod row;

pub use dialect::{Dialect, DialectError};
pub use row::{Cell, Row, ESCAPE_CELL};

use std::ops::Range;
use tracing::trace;

const NO_BREAK_SPACE: char = '\u{a0}';

/// Tokenize `buffer` into rows using the given dialect.
///
/// [`Dialect::Unsupported`] yields no rows at all.
pub fn tokenize(buffer: &str, dialect: Dialect) -> Vec<Row> {
    if !dialect.is_supported() {
        trace!(dialect = %dialect, "dialect has no reader, producing no rows");
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut offset = 0;
    for raw in buffer.split_inclusive('\n') {
        let content = raw.strip_suffix('\n').unwrap_or(raw);
        let cells = split_row(content, dialect);
        rows.push(Row::new(offset, raw.len(), cells));
        offset += raw.len();
    }
    trace!(rows = rows.len(), dialect = %dialect, "tokenized buffer");
    rows
}

/// Split one row (without its line feed) into cells.
pub fn split_row(content: &str, dialect: Dialect) -> Vec<Cell> {
    let normalized = NormalizedRow::new(content, dialect == Dialect::SpaceSeparated);
    let text = normalized.text.as_str();
    let spans = match dialect {
        Dialect::TabSeparated => cell_lexer::split_tabbed(text),
        Dialect::SpaceSeparated if cell_lexer::is_piped(text) => cell_lexer::split_piped(text),
        Dialect::SpaceSeparated => cell_lexer::split_spaced(text),
        Dialect::Unsupported => Vec::new(),
    };
    spans
        .into_iter()
        .map(|span| normalized.cell(span))
        .collect()
}

/// A row with normalized whitespace and a byte map back to the original.
struct NormalizedRow {
    text: String,
    /// `origins[i]` is the original byte offset of normalized byte `i`
    origins: Vec<usize>,
    original_len: usize,
}

impl NormalizedRow {
    fn new(content: &str, expand_tabs: bool) -> Self {
        let mut text = String::with_capacity(content.len());
        let mut origins = Vec::with_capacity(content.len());
        for (at, ch) in content.char_indices() {
            match ch {
                NO_BREAK_SPACE => {
                    text.push(' ');
                    origins.push(at);
                }
                '\t' if expand_tabs => {
                    text.push_str("  ");
                    origins.extend([at, at]);
                }
                _ => {
                    text.push(ch);
                    origins.extend((0..ch.len_utf8()).map(|k| at + k));
                }
            }
        }

        let kept = text.trim_end().len();
        text.truncate(kept);
        origins.truncate(kept);

        NormalizedRow {
            text,
            origins,
            original_len: content.len(),
        }
    }

    fn origin(&self, index: usize) -> usize {
        self.origins
            .get(index)
            .copied()
            .unwrap_or(self.original_len)
    }

    fn cell(&self, span: Range<usize>) -> Cell {
        let raw = &self.text[span.clone()];
        let value = raw.trim();
        let start = if value.is_empty() {
            span.start
        } else {
            span.start + (raw.len() - raw.trim_start().len())
        };
        Cell::new(self.origin(start), value)
    }
}
