use super::ModelPass;
use crate::robot::model::{Document, LineId, SegmentType};
use crate::robot::vocabulary::{FOR_LOOP, LOOP_RANGES};
use tracing::trace;

/// Old-style `:FOR    ${i}    IN RANGE    10` loop headers.
pub struct ForLoops;

impl ForLoops {
    pub fn new() -> Self {
        ForLoops
    }
}

impl Default for ForLoops {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelPass for ForLoops {
    fn name(&self) -> &'static str {
        "for-loops"
    }

    fn apply(&self, document: &mut Document) {
        let steps: Vec<LineId> = document
            .lines()
            .filter(|(_, line)| line.as_step().is_some())
            .map(|(id, _)| id)
            .collect();
        for id in steps {
            let Some(step) = document.step_mut(id) else {
                continue;
            };
            let segments = &mut step.segments;
            for i in 0..segments.len() {
                if !segments[i].value().eq_ignore_ascii_case(FOR_LOOP) {
                    continue;
                }
                trace!(line = %id, "for loop header");
                segments[i].segment_type = SegmentType::LoopConstruct;
                if let Some(variable) = segments.get_mut(i + 1) {
                    variable.segment_type = SegmentType::Variable;
                }
                for later in segments.iter_mut().skip(i + 1) {
                    if LOOP_RANGES
                        .iter()
                        .any(|range| later.value().eq_ignore_ascii_case(range))
                    {
                        later.segment_type = SegmentType::LoopConstruct;
                    }
                }
            }
        }
    }
}
