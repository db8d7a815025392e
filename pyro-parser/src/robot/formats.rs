//! Plain-text renderings
//!
//!     One line per node, for the CLI and for snapshot tests:
//!
//!         - rows: tokenizer output, `offset+length` then each cell as
//!           `offset:"value"` (offset relative to the row)
//!         - segments: the line chain, `offset kind` then, for steps, every
//!           segment as `TYPE:value`
//!         - outline: tables and their items, drawn as a tree
//!         - keywords: keyword definitions and the items calling them

use crate::robot::model::{Document, LineKind};
use crate::robot::tokenizing::Row;
use std::fmt::Write;

pub fn to_rows_str(rows: &[Row]) -> String {
    let mut output = String::new();
    for row in rows {
        let _ = write!(output, "{:04}+{}", row.offset, row.length);
        for cell in &row.cells {
            let _ = write!(output, " {}:{:?}", cell.offset, cell.value);
        }
        output.push('\n');
    }
    output
}

pub fn to_segments_str(document: &Document) -> String {
    let mut output = String::new();
    for (_, line) in document.lines() {
        let _ = write!(output, "{:04} {:<7}", line.offset, line.kind_name());
        match &line.kind {
            LineKind::Unknown => {}
            LineKind::Table(table) => {
                let _ = write!(output, " {} {}", table.table_type, table.name);
            }
            LineKind::ItemDefinition(item) => {
                let _ = write!(output, " {}", item.name);
            }
            LineKind::Step(step) => {
                for segment in &step.segments {
                    let _ = write!(output, " {}:{}", segment.segment_type, segment.value());
                }
            }
        }
        let trimmed = output.trim_end_matches(' ').len();
        output.truncate(trimmed);
        output.push('\n');
    }
    output
}

pub fn to_outline_str(document: &Document) -> String {
    let mut output = String::new();
    for table in document.outline() {
        let _ = writeln!(output, "{} [{}]", table.name, table.table_type);
        let count = table.items.len();
        for (index, item) in table.items.iter().enumerate() {
            let connector = if index + 1 == count { "└─" } else { "├─" };
            let _ = writeln!(output, "{} {}", connector, item.name);
        }
    }
    output
}

pub fn to_keywords_str(document: &Document) -> String {
    let mut output = String::new();
    for (_, keyword) in document.keyword_definitions() {
        let _ = writeln!(output, "{}", keyword.name);
        for (caller, steps) in document.keyword_callers(&keyword.name) {
            if let Some(item) = document.item(caller) {
                let _ = writeln!(output, "  <- {} ({})", item.name, steps.len());
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::tokenizing::{tokenize, Dialect};

    #[test]
    fn test_rows() {
        let rows = tokenize("a    b\n\tc", Dialect::SpaceSeparated);
        assert_eq!(
            to_rows_str(&rows),
            "0000+7 0:\"a\" 5:\"b\"\n0007+2 0:\"\" 1:\"c\"\n"
        );
    }

    #[test]
    fn test_outline_connectors() {
        let doc = Document::parse(
            "*** Test Cases ***\nOne\nTwo\n*** Settings ***\n",
            Dialect::SpaceSeparated,
        );
        assert_eq!(
            to_outline_str(&doc),
            "*** Test Cases *** [TESTCASE]\n├─ One\n└─ Two\n*** Settings *** [SETTING]\n"
        );
    }

    #[test]
    fn test_segments_lines() {
        let doc = Document::parse(
            "*** Keywords ***\nKw    Log    hi\n",
            Dialect::SpaceSeparated,
        );
        assert_eq!(
            to_segments_str(&doc),
            "0000 table   KEYWORD *** Keywords ***\n0017 item    Kw\n0017 step    KEYWORD_CALL:Log ARGUMENT:hi\n"
        );
    }
}
