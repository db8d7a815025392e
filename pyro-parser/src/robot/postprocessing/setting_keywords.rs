//! Keyword-valued settings
//!
//! `Suite Setup`, `Test Teardown`, `[Setup]` and the like take a keyword call as
//! their value. Population tags those cells as plain setting values.

use super::ModelPass;
use crate::robot::model::{Document, LineId, SegmentType, TableType};
use crate::robot::vocabulary::{
    setting_name_matches, ITEM_KEYWORD_SETTINGS, SETTING_TABLE_KEYWORD_SETTINGS,
};
use tracing::trace;

/// Retag the values of keyword-valued settings as KEYWORD_CALL.
pub struct SettingKeywordCalls;

impl SettingKeywordCalls {
    pub fn new() -> Self {
        SettingKeywordCalls
    }
}

impl Default for SettingKeywordCalls {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelPass for SettingKeywordCalls {
    fn name(&self) -> &'static str {
        "setting-keyword-calls"
    }

    fn apply(&self, document: &mut Document) {
        let mut targets: Vec<(LineId, &'static [&'static str])> = Vec::new();
        for (_, table) in document.tables() {
            match table.table_type {
                TableType::Setting => targets.extend(
                    table
                        .lines
                        .iter()
                        .map(|&id| (id, SETTING_TABLE_KEYWORD_SETTINGS)),
                ),
                TableType::TestCase | TableType::Keyword => targets.extend(
                    table
                        .lines
                        .iter()
                        .filter_map(|&id| document.item(id))
                        .flat_map(|item| item.steps.iter())
                        .map(|&id| (id, ITEM_KEYWORD_SETTINGS)),
                ),
                TableType::Variable => {}
            }
        }

        for (id, settings) in targets {
            retag_setting_values(document, id, settings);
        }
    }
}

fn retag_setting_values(document: &mut Document, id: LineId, settings: &[&str]) {
    let Some(step) = document.step_mut(id) else {
        return;
    };
    if !step.is_setting() {
        return;
    }
    let mut found = false;
    for segment in &mut step.segments {
        if segment.is(SegmentType::SettingName) {
            found = settings
                .iter()
                .any(|setting| setting_name_matches(segment.value(), setting));
            continue;
        }
        if segment.is(SegmentType::Comment) {
            break;
        }
        if found && !segment.value().is_empty() {
            trace!(line = %id, value = segment.value(), "setting value is a keyword call");
            segment.segment_type = SegmentType::KeywordCall;
        }
    }
}
