//! Table populators
//!
//!     A populator classifies one row at a time according to the kind of table it
//!     sits in. Populators are stateless: the only state that crosses rows (the
//!     segment type a `...` continuation row inherits) travels in [`CarryOver`],
//!     owned by the dispatcher in [`parsing`](crate::robot::parsing).
//!
//!     Each populator returns a [`Populated`] value describing the node(s) the row
//!     produces; the dispatcher turns them into arena lines and wires table and
//!     item indices.
//!
//!     Row-level rules shared by every populator:
//!
//!         - cells equal to `\` and empty cells are skipped
//!         - a cell starting with `#` ends the row: one COMMENT segment is emitted
//!           and the remaining cells are dropped

mod body;
mod setting;
mod unknown;
mod variable;

pub use body::ItemPopulator;
pub use setting::SettingPopulator;
pub use unknown::UnknownPopulator;
pub use variable::VariablePopulator;

use crate::robot::model::{ItemDefinition, ItemType, SegmentType, Step, TableType};
use crate::robot::tokenizing::Row;

/// State carried from one row to the next within a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarryOver {
    /// Type of the last non-comment segment of the previous body row
    pub last_segment_type: Option<SegmentType>,
}

impl CarryOver {
    pub fn reset(&mut self) {
        self.last_segment_type = None;
    }
}

/// What a row turned into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Populated {
    /// A row with no table semantics
    Opaque,
    /// A standalone step; `indexed` steps join the active table's index
    Step { step: Step, indexed: bool },
    /// A new test case or keyword, possibly sharing its row with a first step
    ItemStart {
        item: ItemDefinition,
        first_step: Option<Step>,
    },
    /// A step belonging to the currently open item
    ItemStep(Step),
}

pub trait TablePopulator {
    fn populate(&self, row: &Row, carry: &mut CarryOver) -> Populated;
}

static UNKNOWN: UnknownPopulator = UnknownPopulator;
static SETTING: SettingPopulator = SettingPopulator;
static VARIABLE: VariablePopulator = VariablePopulator;
static TESTCASE: ItemPopulator = ItemPopulator::new(ItemType::TestCase);
static KEYWORD: ItemPopulator = ItemPopulator::new(ItemType::Keyword);

/// The populator for rows outside any recognized table.
pub fn unknown_populator() -> &'static dyn TablePopulator {
    &UNKNOWN
}

/// The populator for rows of a table of the given type.
pub fn populator_for(table_type: TableType) -> &'static dyn TablePopulator {
    match table_type {
        TableType::Setting => &SETTING,
        TableType::Variable => &VARIABLE,
        TableType::TestCase => &TESTCASE,
        TableType::Keyword => &KEYWORD,
    }
}
