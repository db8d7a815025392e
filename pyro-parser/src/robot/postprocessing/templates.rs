use super::ModelPass;
use crate::robot::model::{Document, ItemDefinition, LineId, SegmentType, TableType};
use crate::robot::vocabulary::TEMPLATE_SETTING;
use tracing::trace;

/// Data rows of templated test cases.
///
/// A test case with a `[Template]` setting runs the template keyword once per
/// data row, so a data row makes no calls of its own: every KEYWORD_CALL in it,
/// including those the built-in keyword pass derived, becomes an argument.
pub struct TemplateData;

impl TemplateData {
    pub fn new() -> Self {
        TemplateData
    }
}

impl Default for TemplateData {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelPass for TemplateData {
    fn name(&self) -> &'static str {
        "template-data"
    }

    fn apply(&self, document: &mut Document) {
        let data_rows: Vec<LineId> = document
            .tables()
            .filter(|(_, table)| table.table_type == TableType::TestCase)
            .flat_map(|(_, table)| table.lines.iter())
            .filter_map(|&id| document.item(id))
            .filter(|item| is_templated(document, item))
            .flat_map(|item| item.steps.iter().copied())
            .filter(|&id| document.step(id).is_some_and(|step| !step.is_setting()))
            .collect();

        for id in data_rows {
            let Some(step) = document.step_mut(id) else {
                continue;
            };
            for call in step
                .segments
                .iter_mut()
                .filter(|s| s.is(SegmentType::KeywordCall))
            {
                trace!(line = %id, value = call.value(), "template data cell");
                call.segment_type = SegmentType::Argument;
            }
        }
    }
}

fn is_templated(document: &Document, item: &ItemDefinition) -> bool {
    item.steps
        .iter()
        .filter_map(|&id| document.step(id))
        .filter(|step| step.is_setting())
        .any(|step| {
            step.segments
                .iter()
                .any(|s| s.is(SegmentType::SettingName) && s.value() == TEMPLATE_SETTING)
        })
}
