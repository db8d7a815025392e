use super::{CarryOver, Populated, TablePopulator};
use crate::robot::model::{SegmentType, Step, StepType};
use crate::robot::tokenizing::Row;
use crate::robot::vocabulary::{self, CONTINUATION};

/// Rows of a `*** Settings ***` table.
///
/// The first content cell must name a known setting (a trailing `:` is
/// allowed) or be `...`; everything after it is a SETTING_VALUE. A row that
/// starts with anything else is tagged UNKNOWN throughout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingPopulator;

impl TablePopulator for SettingPopulator {
    fn populate(&self, row: &Row, _carry: &mut CarryOver) -> Populated {
        let mut step = Step::new(StepType::Setting);
        let mut seen_name = false;
        let mut unknown = false;

        for cell in &row.cells {
            if cell.is_comment() {
                step.push(cell.clone(), SegmentType::Comment);
                seen_name = true;
                break;
            }
            if cell.is_skippable() {
                continue;
            }
            let segment_type = if unknown {
                SegmentType::Unknown
            } else if seen_name {
                SegmentType::SettingValue
            } else {
                seen_name = true;
                if vocabulary::is_setting_table_setting(&cell.value) {
                    SegmentType::SettingName
                } else if cell.value.trim() == CONTINUATION {
                    SegmentType::Continuation
                } else {
                    unknown = true;
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

    fn populate(values: &[&str]) -> (Step, bool) {
        match SettingPopulator.populate(&row(values), &mut CarryOver::default()) {
            Populated::Step { step, indexed } => (step, indexed),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_known_setting() {
        let (step, indexed) = populate(&["Library", "mylib.py", "WITH NAME", "ML"]);
        assert!(indexed);
        assert!(step.is_setting());
        assert_eq!(
            step.segment_types(),
            vec![
                SegmentType::SettingName,
                SegmentType::SettingValue,
                SegmentType::SettingValue,
                SegmentType::SettingValue,
            ]
        );
    }

    #[test]
    fn test_trailing_colon() {
        let (step, _) = populate(&["Suite Setup:", "Open"]);
        assert_eq!(
            step.segment_types(),
            vec![SegmentType::SettingName, SegmentType::SettingValue]
        );
    }

    #[test]
    fn test_unknown_setting_taints_row() {
        let (step, indexed) = populate(&["Bad setting name", "Library", "x"]);
        assert!(indexed);
        assert_eq!(
            step.segment_types(),
            vec![SegmentType::Unknown; 3]
        );
    }

    #[test]
    fn test_continuation() {
        let (step, _) = populate(&["...", "more docs", "\\", "", "end"]);
        assert_eq!(
            step.segment_types(),
            vec![
                SegmentType::Continuation,
                SegmentType::SettingValue,
                SegmentType::SettingValue,
            ]
        );
    }

    #[test]
    fn test_comment_stops_row() {
        let (step, indexed) = populate(&["# a comment", "spanning", "cells"]);
        assert!(indexed);
        assert_eq!(step.segment_types(), vec![SegmentType::Comment]);
    }

    #[test]
    fn test_trailing_comment_after_value() {
        let (step, _) = populate(&["Resource", "common.robot", "# why"]);
        assert_eq!(
            step.segment_types(),
            vec![
                SegmentType::SettingName,
                SegmentType::SettingValue,
                SegmentType::Comment,
            ]
        );
    }

    #[test]
    fn test_case_sensitive_names() {
        let (step, _) = populate(&["library", "x"]);
        assert_eq!(step.segment_types(), vec![SegmentType::Unknown; 2]);
    }
}
