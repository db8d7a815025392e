use super::line::LineId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableType {
    Setting,
    Variable,
    TestCase,
    Keyword,
}

impl TableType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableType::Setting => "SETTING",
            TableType::Variable => "VARIABLE",
            TableType::TestCase => "TESTCASE",
            TableType::Keyword => "KEYWORD",
        }
    }

    /// The item kind declared inside this table, if it holds items.
    pub fn item_type(&self) -> Option<ItemType> {
        match self {
            TableType::TestCase => Some(ItemType::TestCase),
            TableType::Keyword => Some(ItemType::Keyword),
            TableType::Setting | TableType::Variable => None,
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    TestCase,
    Keyword,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::TestCase => "TESTCASE",
            ItemType::Keyword => "KEYWORD",
        }
    }
}

/// A table header line and the ordered index of its member lines.
///
/// Setting and variable tables index steps, test case and keyword tables
/// index item definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub table_type: TableType,
    /// Header text as written, e.g. `*** Test Cases ***`
    pub name: String,
    pub lines: Vec<LineId>,
}

impl Table {
    pub fn new(table_type: TableType, name: impl Into<String>) -> Self {
        Table {
            table_type,
            name: name.into(),
            lines: Vec::new(),
        }
    }
}

/// The declaration line of a test case or user keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDefinition {
    pub item_type: ItemType,
    pub name: String,
    /// Length of the name in the source row, counted from the row start
    pub name_length: usize,
    pub steps: Vec<LineId>,
}

impl ItemDefinition {
    pub fn new(item_type: ItemType, name: impl Into<String>, name_length: usize) -> Self {
        ItemDefinition {
            item_type,
            name: name.into(),
            name_length,
            steps: Vec::new(),
        }
    }
}
