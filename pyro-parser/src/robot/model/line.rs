use super::segment::Step;
use super::table::{ItemDefinition, Table};
use serde::Serialize;
use std::fmt;

/// Stable handle of a line inside its document's arena.
///
/// Handles are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LineId(pub(crate) usize);

impl LineId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineKind {
    /// Content outside any table semantics
    Unknown,
    Table(Table),
    ItemDefinition(ItemDefinition),
    Step(Step),
}

/// A node of the document's line chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub offset: usize,
    pub length: usize,
    pub next: Option<LineId>,
    pub kind: LineKind,
}

impl Line {
    pub fn new(offset: usize, length: usize, kind: LineKind) -> Self {
        Line {
            offset,
            length,
            next: None,
            kind,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            LineKind::Unknown => "unknown",
            LineKind::Table(_) => "table",
            LineKind::ItemDefinition(_) => "item",
            LineKind::Step(_) => "step",
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match &self.kind {
            LineKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_item(&self) -> Option<&ItemDefinition> {
        match &self.kind {
            LineKind::ItemDefinition(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_step(&self) -> Option<&Step> {
        match &self.kind {
            LineKind::Step(step) => Some(step),
            _ => None,
        }
    }

    pub(crate) fn as_step_mut(&mut self) -> Option<&mut Step> {
        match &mut self.kind {
            LineKind::Step(step) => Some(step),
            _ => None,
        }
    }

    pub(crate) fn as_table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.kind {
            LineKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub(crate) fn as_item_mut(&mut self) -> Option<&mut ItemDefinition> {
        match &mut self.kind {
            LineKind::ItemDefinition(item) => Some(item),
            _ => None,
        }
    }
}
