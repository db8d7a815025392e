use super::line::{Line, LineId, LineKind};
use super::segment::{Step, StepSegment};
use super::table::{ItemDefinition, Table};
use super::views::ViewCache;
use crate::robot::parsing;
use crate::robot::tokenizing::Dialect;
use serde::Serialize;
use std::fmt;

/// Something that went wrong while building the model and was recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Pipeline stage or pass name
    pub stage: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.message)
    }
}

/// Address of one segment: the step line and the segment's index in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SegmentRef {
    pub line: LineId,
    pub index: usize,
}

/// A parsed Robot file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    dialect: Dialect,
    lines: Vec<Line>,
    first: Option<LineId>,
    tables: Vec<LineId>,
    diagnostics: Vec<Diagnostic>,
    #[serde(skip)]
    pub(crate) views: ViewCache,
}

impl Document {
    /// Parse `buffer` with the given dialect.
    ///
    /// Never fails: anomalies degrade to UNKNOWN tags, dropped headers or a
    /// partial model, and recovered panics are listed in [`Document::diagnostics`].
    pub fn parse(buffer: &str, dialect: Dialect) -> Document {
        parsing::parse(buffer, dialect)
    }

    /// Replace this document's chain, tables and cache with a parse of `buffer`.
    ///
    /// The new model is built completely before it is swapped in.
    pub fn reparse(&mut self, buffer: &str) {
        let fresh = Document::parse(buffer, self.dialect);
        *self = fresh;
    }

    pub(crate) fn empty(dialect: Dialect) -> Document {
        Document {
            dialect,
            ..Document::default()
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn first_line(&self) -> Option<LineId> {
        self.first
    }

    /// Number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// # Panics
    ///
    /// If `id` was not issued by this document.
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.0]
    }

    pub fn get_line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    /// Walk the chain in source order.
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            document: self,
            next: self.first,
        }
    }

    /// Tables in source order.
    pub fn tables(&self) -> impl Iterator<Item = (LineId, &Table)> + '_ {
        self.tables
            .iter()
            .filter_map(move |&id| self.table(id).map(|table| (id, table)))
    }

    pub fn table_ids(&self) -> &[LineId] {
        &self.tables
    }

    pub fn table(&self, id: LineId) -> Option<&Table> {
        self.get_line(id).and_then(Line::as_table)
    }

    pub fn item(&self, id: LineId) -> Option<&ItemDefinition> {
        self.get_line(id).and_then(Line::as_item)
    }

    pub fn step(&self, id: LineId) -> Option<&Step> {
        self.get_line(id).and_then(Line::as_step)
    }

    pub fn segment(&self, at: SegmentRef) -> Option<&StepSegment> {
        self.step(at.line).and_then(|step| step.segments.get(at.index))
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn views(&self) -> &ViewCache {
        &self.views
    }

    pub(crate) fn step_mut(&mut self, id: LineId) -> Option<&mut Step> {
        self.lines.get_mut(id.0).and_then(Line::as_step_mut)
    }

    pub(crate) fn segment_mut(&mut self, at: SegmentRef) -> Option<&mut StepSegment> {
        self.step_mut(at.line)
            .and_then(|step| step.segments.get_mut(at.index))
    }

    pub(crate) fn table_mut(&mut self, id: LineId) -> Option<&mut Table> {
        self.lines.get_mut(id.0).and_then(Line::as_table_mut)
    }

    pub(crate) fn item_mut(&mut self, id: LineId) -> Option<&mut ItemDefinition> {
        self.lines.get_mut(id.0).and_then(Line::as_item_mut)
    }

    /// Append a node to the arena and link it after `previous` (or as the head).
    pub(crate) fn append(&mut self, previous: Option<LineId>, line: Line) -> LineId {
        let id = LineId(self.lines.len());
        let is_table = matches!(line.kind, LineKind::Table(_));
        self.lines.push(line);
        match previous.and_then(|prev| self.lines.get_mut(prev.0)) {
            Some(prev) => prev.next = Some(id),
            None => self.first = Some(id),
        }
        if is_table {
            self.tables.push(id);
        }
        id
    }

    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn record_all(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }
}

/// Iterator over the line chain
pub struct Lines<'a> {
    document: &'a Document,
    next: Option<LineId>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = (LineId, &'a Line);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let line = self.document.get_line(id)?;
        self.next = line.next;
        Some((id, line))
    }
}
