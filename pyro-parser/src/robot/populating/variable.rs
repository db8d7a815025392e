use super::{CarryOver, Populated, TablePopulator};
use crate::robot::model::{SegmentType, Step, StepType};
use crate::robot::tokenizing::Row;
use crate::robot::vocabulary::CONTINUATION;

/// Rows of a `*** Variables ***` table: a `${scalar}` or `@{list}` name
/// followed by its values.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariablePopulator;

impl TablePopulator for VariablePopulator {
    fn populate(&self, row: &Row, _carry: &mut CarryOver) -> Populated {
        let mut step = Step::new(StepType::Step);
        let mut seen_name = false;

        for cell in &row.cells {
            if cell.is_comment() {
                step.push(cell.clone(), SegmentType::Comment);
                seen_name = true;
                break;
            }
            if cell.is_skippable() {
                continue;
            }
            let segment_type = if seen_name {
                SegmentType::Argument
            } else {
                seen_name = true;
                let value = cell.value.trim();
                if value.starts_with('$') || value.starts_with('@') {
                    SegmentType::Variable
                } else if value == CONTINUATION {
                    SegmentType::Continuation
                } else {
                    SegmentType::Unknown
                }
            };
            step.push(cell.clone(), segment_type);
        }

        Populated::Step {
            step,
            indexed: seen_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::populating::test_support::row;

    fn types(values: &[&str]) -> Vec<SegmentType> {
        match VariablePopulator.populate(&row(values), &mut CarryOver::default()) {
            Populated::Step { step, .. } => step.segment_types(),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_scalar_and_list() {
        assert_eq!(
            types(&["${HOST}", "localhost"]),
            vec![SegmentType::Variable, SegmentType::Argument]
        );
        assert_eq!(
            types(&["@{LIST}", "one", "two"]),
            vec![
                SegmentType::Variable,
                SegmentType::Argument,
                SegmentType::Argument
            ]
        );
    }

    #[test]
    fn test_continuation_and_unknown() {
        assert_eq!(
            types(&["...", "four"]),
            vec![SegmentType::Continuation, SegmentType::Argument]
        );
        assert_eq!(
            types(&["HOST", "x"]),
            vec![SegmentType::Unknown, SegmentType::Argument]
        );
    }

    #[test]
    fn test_environment_names_are_not_table_variables() {
        assert_eq!(types(&["%{HOME}"]), vec![SegmentType::Unknown]);
    }

    #[test]
    fn test_comment() {
        assert_eq!(
            types(&["${A}", "# note", "ignored"]),
            vec![SegmentType::Variable, SegmentType::Comment]
        );
    }
}
