//! Chain navigation

use crate::robot::model::{Document, ItemType, LineId, LineKind, SegmentRef, SegmentType, TableType};
use serde::Serialize;

/// A table and the items declared in it, for navigation views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineTable {
    pub line: LineId,
    pub table_type: TableType,
    pub name: String,
    pub offset: usize,
    pub items: Vec<OutlineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineItem {
    pub line: LineId,
    pub name: String,
    pub offset: usize,
}

impl Document {
    /// A step's own segments followed by those of the `...` continuation rows
    /// directly after it.
    ///
    /// A continuation row contributes every segment except the `...` marker,
    /// up to its first comment. Collection stops at the first following line
    /// that is not a step or whose first non-empty segment is not `...`.
    pub fn collect_step_segments(&self, step: LineId) -> Vec<SegmentRef> {
        let Some(first) = self.step(step) else {
            return Vec::new();
        };
        let mut segments: Vec<SegmentRef> = (0..first.segments.len())
            .map(|index| SegmentRef { line: step, index })
            .collect();

        let mut next = self.line(step).next;
        while let Some(id) = next {
            let line = self.line(id);
            let LineKind::Step(continued) = &line.kind else {
                break;
            };
            match continued.segments.iter().find(|s| !s.value().is_empty()) {
                None => {}
                Some(lead) if lead.is(SegmentType::Continuation) => {
                    for (index, segment) in continued.segments.iter().enumerate() {
                        match segment.segment_type {
                            SegmentType::Comment => break,
                            SegmentType::Continuation => {}
                            _ => segments.push(SegmentRef { line: id, index }),
                        }
                    }
                }
                Some(_) => break,
            }
            next = line.next;
        }
        segments
    }

    /// The last table header at or before `offset`.
    pub fn containing_table(&self, offset: usize) -> Option<LineId> {
        self.lines()
            .take_while(|(_, line)| line.offset <= offset)
            .filter(|(_, line)| matches!(line.kind, LineKind::Table(_)))
            .map(|(id, _)| id)
            .last()
    }

    /// The last item of kind `item_type` at or before `offset`, provided no
    /// item of another kind was declared after it.
    pub fn containing_item(&self, offset: usize, item_type: ItemType) -> Option<LineId> {
        let mut current = None;
        for (id, line) in self.lines().take_while(|(_, line)| line.offset <= offset) {
            if let LineKind::ItemDefinition(item) = &line.kind {
                current = (item.item_type == item_type).then_some(id);
            }
        }
        current
    }

    /// Tables with their declared items, in source order.
    pub fn outline(&self) -> Vec<OutlineTable> {
        self.tables()
            .map(|(id, table)| OutlineTable {
                line: id,
                table_type: table.table_type,
                name: table.name.clone(),
                offset: self.line(id).offset,
                items: table
                    .lines
                    .iter()
                    .filter_map(|&item_id| {
                        self.item(item_id).map(|item| OutlineItem {
                            line: item_id,
                            name: item.name.clone(),
                            offset: self.line(item_id).offset,
                        })
                    })
                    .collect(),
            })
            .collect()
    }
}
