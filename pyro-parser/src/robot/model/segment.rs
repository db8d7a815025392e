use crate::robot::tokenizing::Cell;
use serde::Serialize;
use std::fmt;

/// Semantic classification of a cell. Mutable after population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentType {
    Argument,
    Comment,
    KeywordCall,
    SettingName,
    SettingValue,
    Variable,
    LoopConstruct,
    ControlArgument,
    Continuation,
    Unknown,
}

impl SegmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentType::Argument => "ARGUMENT",
            SegmentType::Comment => "COMMENT",
            SegmentType::KeywordCall => "KEYWORD_CALL",
            SegmentType::SettingName => "SETTING_NAME",
            SegmentType::SettingValue => "SETTING_VALUE",
            SegmentType::Variable => "VARIABLE",
            SegmentType::LoopConstruct => "LOOP_CONSTRUCT",
            SegmentType::ControlArgument => "CONTROL_ARGUMENT",
            SegmentType::Continuation => "CONTINUATION",
            SegmentType::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSegment {
    pub cell: Cell,
    pub segment_type: SegmentType,
}

impl StepSegment {
    pub fn new(cell: Cell, segment_type: SegmentType) -> Self {
        StepSegment { cell, segment_type }
    }

    pub fn value(&self) -> &str {
        &self.cell.value
    }

    pub fn offset_in_line(&self) -> usize {
        self.cell.offset
    }

    pub fn is(&self, segment_type: SegmentType) -> bool {
        self.segment_type == segment_type
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepType {
    /// A body line or a plain data line
    Step,
    /// A setting declaration (`Library ...`, `[Setup] ...`)
    Setting,
}

/// A body, setting or comment line and its segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub step_type: StepType,
    pub segments: Vec<StepSegment>,
}

impl Step {
    pub fn new(step_type: StepType) -> Self {
        Step {
            step_type,
            segments: Vec::new(),
        }
    }

    /// A full-line comment: one COMMENT segment, the rest of the row ignored.
    pub fn comment(cell: Cell) -> Self {
        Step {
            step_type: StepType::Step,
            segments: vec![StepSegment::new(cell, SegmentType::Comment)],
        }
    }

    pub fn push(&mut self, cell: Cell, segment_type: SegmentType) {
        self.segments.push(StepSegment::new(cell, segment_type));
    }

    pub fn is_setting(&self) -> bool {
        self.step_type == StepType::Setting
    }

    pub fn is_comment(&self) -> bool {
        self.segments
            .first()
            .is_some_and(|segment| segment.is(SegmentType::Comment))
    }

    /// The SETTING_NAME segment value, when this line declares a setting.
    pub fn setting_name(&self) -> Option<&str> {
        self.segments
            .iter()
            .find(|segment| segment.is(SegmentType::SettingName))
            .map(StepSegment::value)
    }

    pub fn segment_types(&self) -> Vec<SegmentType> {
        self.segments.iter().map(|s| s.segment_type).collect()
    }
}
