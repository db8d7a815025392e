use super::{CarryOver, Populated, TablePopulator};
use crate::robot::model::{ItemDefinition, ItemType, SegmentType, Step, StepType, TableType};
use crate::robot::tokenizing::{Cell, Row};
use crate::robot::vocabulary::{self, CONTINUATION, TEMPLATE_SETTING};
use tracing::trace;

/// Rows of `*** Test Cases ***` and `*** Keywords ***` tables.
///
/// A row with content in its first cell opens a new item named by that cell.
/// Any further cells on the same row form the item's first step. Rows with an
/// empty first cell are steps of the open item.
#[derive(Debug, Clone, Copy)]
pub struct ItemPopulator {
    item_type: ItemType,
}

impl ItemPopulator {
    pub const fn new(item_type: ItemType) -> Self {
        ItemPopulator { item_type }
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    fn table_type(&self) -> TableType {
        match self.item_type {
            ItemType::TestCase => TableType::TestCase,
            ItemType::Keyword => TableType::Keyword,
        }
    }

    /// Classify the cells of a body row. Cell 0 (name or indentation) is
    /// never classified unless it is a comment.
    fn classify(&self, cells: &[Cell], carry: &mut CarryOver) -> Step {
        let mut step = Step::new(StepType::Step);
        let mut seen_keyword = false;
        let mut is_setting = false;
        let mut continuation = false;

        for (index, cell) in cells.iter().enumerate() {
            if cell.is_comment() {
                step.push(cell.clone(), SegmentType::Comment);
                break;
            }
            if index == 0 || cell.is_skippable() {
                continue;
            }

            let segment_type = match carry.last_segment_type {
                Some(inherited) if continuation => inherited,
                _ if !seen_keyword => {
                    let value = cell.value.trim();
                    if value.starts_with('[') {
                        if !vocabulary::is_item_setting(value, self.table_type()) {
                            trace!(setting = value, "unrecognized item setting");
                        }
                        step.step_type = StepType::Setting;
                        seen_keyword = true;
                        is_setting = true;
                        SegmentType::SettingName
                    } else if value.starts_with(['$', '@', '%']) {
                        SegmentType::Variable
                    } else if value == CONTINUATION {
                        continuation = true;
                        SegmentType::Continuation
                    } else {
                        seen_keyword = true;
                        SegmentType::KeywordCall
                    }
                }
                _ if defines_template(&step) => SegmentType::KeywordCall,
                _ if is_setting => SegmentType::SettingValue,
                _ => SegmentType::Argument,
            };
            step.push(cell.clone(), segment_type);
        }

        if let Some(last) = step.segments.last() {
            if !last.is(SegmentType::Comment) {
                carry.last_segment_type = Some(last.segment_type);
            }
        }
        step
    }
}

/// `[Template]` names its keyword in the following cell.
fn defines_template(step: &Step) -> bool {
    step.is_setting()
        && step
            .segments
            .iter()
            .any(|s| s.is(SegmentType::SettingName) && s.value() == TEMPLATE_SETTING)
}

impl TablePopulator for ItemPopulator {
    fn populate(&self, row: &Row, carry: &mut CarryOver) -> Populated {
        let Some(first) = row.first_cell() else {
            return Populated::Opaque;
        };

        let name = first.value.trim();
        if !name.is_empty() && !first.is_comment() {
            let item = ItemDefinition::new(self.item_type, name, first.offset + first.value.len());
            carry.reset();
            let first_step = (row.cells.len() > 1).then(|| self.classify(&row.cells, carry));
            return Populated::ItemStart { item, first_step };
        }

        Populated::ItemStep(self.classify(&row.cells, carry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::populating::test_support::row;
    use SegmentType::*;

    const TESTCASE: ItemPopulator = ItemPopulator::new(ItemType::TestCase);

    fn step_types(populated: Populated) -> Vec<SegmentType> {
        match populated {
            Populated::ItemStep(step) => step.segment_types(),
            Populated::ItemStart {
                first_step: Some(step),
                ..
            } => step.segment_types(),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_item_start_without_step() {
        let mut carry = CarryOver::default();
        match TESTCASE.populate(&row(&["First Test"]), &mut carry) {
            Populated::ItemStart { item, first_step } => {
                assert_eq!(item.name, "First Test");
                assert_eq!(item.name_length, 10);
                assert_eq!(item.item_type, ItemType::TestCase);
                assert!(first_step.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_item_start_with_step() {
        let mut carry = CarryOver::default();
        let populated = TESTCASE.populate(&row(&["Templated", "[Template]", "Log Many"]), &mut carry);
        match &populated {
            Populated::ItemStart {
                item,
                first_step: Some(step),
            } => {
                assert_eq!(item.name, "Templated");
                assert!(step.is_setting());
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(step_types(populated), vec![SettingName, KeywordCall]);
    }

    #[test]
    fn test_keyword_call_and_arguments() {
        let mut carry = CarryOver::default();
        let types = step_types(TESTCASE.populate(&row(&["", "Log", "hello", "WARN"]), &mut carry));
        assert_eq!(types, vec![KeywordCall, Argument, Argument]);
        assert_eq!(carry.last_segment_type, Some(Argument));
    }

    #[test]
    fn test_assignment_variables_precede_keyword() {
        let mut carry = CarryOver::default();
        let types = step_types(TESTCASE.populate(&row(&["", "${a}", "${b}=", "Get Values"]), &mut carry));
        assert_eq!(types, vec![Variable, Variable, KeywordCall]);
    }

    #[test]
    fn test_setting_values() {
        let mut carry = CarryOver::default();
        let types = step_types(TESTCASE.populate(&row(&["", "[Documentation]", "Multi-line"]), &mut carry));
        assert_eq!(types, vec![SettingName, SettingValue]);
    }

    #[test]
    fn test_continuation_inherits_previous_type() {
        let mut carry = CarryOver::default();
        TESTCASE.populate(&row(&["", "[Documentation]", "first"]), &mut carry);
        let types = step_types(TESTCASE.populate(&row(&["", "...", "second", "third"]), &mut carry));
        assert_eq!(types, vec![Continuation, SettingValue, SettingValue]);
    }

    #[test]
    fn test_continuation_without_history() {
        let mut carry = CarryOver::default();
        let types = step_types(TESTCASE.populate(&row(&["", "...", "Log"]), &mut carry));
        assert_eq!(types, vec![Continuation, KeywordCall]);
    }

    #[test]
    fn test_comment_keeps_carry() {
        let mut carry = CarryOver::default();
        TESTCASE.populate(&row(&["", "Log", "x"]), &mut carry);
        let types = step_types(TESTCASE.populate(&row(&["", "# note"]), &mut carry));
        assert_eq!(types, vec![Comment]);
        assert_eq!(carry.last_segment_type, Some(Argument));
    }

    #[test]
    fn test_comment_in_first_cell_is_a_step() {
        let mut carry = CarryOver::default();
        let types = step_types(TESTCASE.populate(&row(&["# disabled", "Log"]), &mut carry));
        assert_eq!(types, vec![Comment]);
    }

    #[test]
    fn test_new_item_resets_carry() {
        let mut carry = CarryOver {
            last_segment_type: Some(SettingValue),
        };
        TESTCASE.populate(&row(&["Next Test"]), &mut carry);
        assert_eq!(carry.last_segment_type, None);
    }

    #[test]
    fn test_escaped_cells_only() {
        let mut carry = CarryOver {
            last_segment_type: Some(Argument),
        };
        let types = step_types(TESTCASE.populate(&row(&["", "\\"]), &mut carry));
        assert!(types.is_empty());
        assert_eq!(carry.last_segment_type, Some(Argument));
    }

    #[test]
    fn test_keyword_items() {
        let keyword = ItemPopulator::new(ItemType::Keyword);
        let mut carry = CarryOver::default();
        match keyword.populate(&row(&["Loop Keyword"]), &mut carry) {
            Populated::ItemStart { item, .. } => assert_eq!(item.item_type, ItemType::Keyword),
            other => panic!("unexpected {:?}", other),
        }
        let types = step_types(keyword.populate(&row(&["", "[Arguments]", "${a}"]), &mut carry));
        assert_eq!(types, vec![SettingName, SettingValue]);
    }
}
