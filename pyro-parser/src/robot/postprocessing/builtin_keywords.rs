//! Keyword names passed as arguments to built-in keywords
//!
//! `Run Keyword If    ${cond}    Log    x` calls `Log`, but population tags it
//! as a plain ARGUMENT. Segments are gathered across `...` continuation rows,
//! so an argument on a continuation row is found too. Newly tagged calls are
//! examined as the scan moves forward over them, so a `Run Keyword` nested
//! after another one is handled in the same pass.

use super::ModelPass;
use crate::robot::model::{Document, LineId, SegmentRef, SegmentType};
use crate::robot::query::{normalize_keyword_name, strip_bdd_prefixes};
use crate::robot::vocabulary::{KeywordArgument, BUILTIN_KEYWORD_ARGUMENTS, RUN_KEYWORDS_SEPARATOR};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::trace;

static BUILTINS: Lazy<HashMap<String, KeywordArgument>> = Lazy::new(|| {
    BUILTIN_KEYWORD_ARGUMENTS
        .iter()
        .map(|&(name, argument)| (normalize_keyword_name(name, false), argument))
        .collect()
});

fn builtin_argument(call: &str) -> Option<KeywordArgument> {
    BUILTINS
        .get(&normalize_keyword_name(&strip_bdd_prefixes(call), false))
        .copied()
}

/// Retag the keyword-name arguments of built-in keywords as KEYWORD_CALL.
pub struct BuiltInKeywordArguments;

impl BuiltInKeywordArguments {
    pub fn new() -> Self {
        BuiltInKeywordArguments
    }
}

impl Default for BuiltInKeywordArguments {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelPass for BuiltInKeywordArguments {
    fn name(&self) -> &'static str {
        "builtin-keyword-arguments"
    }

    fn apply(&self, document: &mut Document) {
        let steps: Vec<LineId> = document
            .lines()
            .filter(|(_, line)| line.as_step().is_some())
            .map(|(id, _)| id)
            .collect();
        for step in steps {
            let segments = document.collect_step_segments(step);
            retag_line(document, &segments);
        }
    }
}

fn retag_line(document: &mut Document, segments: &[SegmentRef]) {
    for i in 0..segments.len() {
        let Some(segment) = document.segment(segments[i]) else {
            continue;
        };
        if !segment.is(SegmentType::KeywordCall) {
            continue;
        }
        let Some(argument) = builtin_argument(segment.value()) else {
            continue;
        };
        trace!(keyword = segment.value(), ?argument, "built-in keyword with keyword argument");
        match argument {
            KeywordArgument::At(distance) => {
                if let Some(&at) = segments.get(i + distance) {
                    retag(document, at, SegmentType::KeywordCall);
                }
            }
            KeywordArgument::RunKeywords => run_keywords(document, &segments[i + 1..]),
        }
    }
}

/// `Run Keywords    A    arg    AND    B`: with `AND` present the cells are
/// partitioned into keyword/argument runs, otherwise every cell is a keyword.
fn run_keywords(document: &mut Document, following: &[SegmentRef]) {
    let until_comment: Vec<SegmentRef> = following
        .iter()
        .copied()
        .take_while(|&at| {
            document
                .segment(at)
                .is_some_and(|s| !s.is(SegmentType::Comment))
        })
        .collect();
    let has_separator = until_comment.iter().any(|&at| is_separator(document, at));

    if !has_separator {
        for at in until_comment {
            retag(document, at, SegmentType::KeywordCall);
        }
        return;
    }

    let mut expect_keyword = true;
    for at in until_comment {
        let segment_type = if expect_keyword {
            expect_keyword = false;
            SegmentType::KeywordCall
        } else if is_separator(document, at) {
            expect_keyword = true;
            SegmentType::ControlArgument
        } else {
            SegmentType::Argument
        };
        retag(document, at, segment_type);
    }
}

fn is_separator(document: &Document, at: SegmentRef) -> bool {
    document
        .segment(at)
        .is_some_and(|s| s.value().eq_ignore_ascii_case(RUN_KEYWORDS_SEPARATOR))
}

fn retag(document: &mut Document, at: SegmentRef, segment_type: SegmentType) {
    if let Some(segment) = document.segment_mut(at) {
        if !segment.is(SegmentType::Comment) {
            segment.segment_type = segment_type;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::parsing::build;
    use crate::robot::tokenizing::{tokenize, Dialect};
    use SegmentType::*;

    fn processed(body: &str) -> (Document, Vec<LineId>) {
        let source = format!("*** Test Cases ***\nT\n{}", body);
        let mut doc = build(
            &tokenize(&source, Dialect::SpaceSeparated),
            Dialect::SpaceSeparated,
        );
        BuiltInKeywordArguments::new().apply(&mut doc);
        let (_, table) = doc.tables().next().expect("table");
        let steps = doc.item(table.lines[0]).expect("item").steps.clone();
        (doc, steps)
    }

    fn types(doc: &Document, id: LineId) -> Vec<SegmentType> {
        doc.step(id).expect("step").segment_types()
    }

    #[test]
    fn test_fixed_offsets() {
        let (doc, steps) = processed(
            "    Run Keyword    Log    x\n    Run Keyword If    ${c}    Log    x\n    Wait Until Keyword Succeeds    3x    1s    Check    a\n",
        );
        assert_eq!(types(&doc, steps[0]), vec![KeywordCall, KeywordCall, Argument]);
        assert_eq!(
            types(&doc, steps[1]),
            vec![KeywordCall, Argument, KeywordCall, Argument]
        );
        assert_eq!(
            types(&doc, steps[2]),
            vec![KeywordCall, Argument, Argument, KeywordCall, Argument]
        );
    }

    #[test]
    fn test_name_normalization_and_bdd_prefix() {
        let (doc, steps) = processed("    Given run_keyword    Log\n    RUNKEYWORD    Log\n");
        assert_eq!(types(&doc, steps[0]), vec![KeywordCall, KeywordCall]);
        assert_eq!(types(&doc, steps[1]), vec![KeywordCall, KeywordCall]);
    }

    #[test]
    fn test_missing_argument_is_ignored() {
        let (doc, steps) = processed("    Run Keyword If    ${c}\n");
        assert_eq!(types(&doc, steps[0]), vec![KeywordCall, Argument]);
    }

    #[test]
    fn test_run_keywords_with_and() {
        let (doc, steps) = processed("    Run Keywords    Log    a    and    No Operation    # done\n");
        assert_eq!(
            types(&doc, steps[0]),
            vec![KeywordCall, KeywordCall, Argument, ControlArgument, KeywordCall, Comment]
        );
    }

    #[test]
    fn test_run_keywords_without_and() {
        let (doc, steps) = processed("    Run Keywords    Setup One    Setup Two\n");
        assert_eq!(types(&doc, steps[0]), vec![KeywordCall, KeywordCall, KeywordCall]);
    }

    #[test]
    fn test_and_after_comment_does_not_partition() {
        let (doc, steps) = processed("    Run Keywords    A    B    # AND\n");
        assert_eq!(types(&doc, steps[0]), vec![KeywordCall, KeywordCall, KeywordCall, Comment]);
    }

    #[test]
    fn test_run_keywords_across_continuation() {
        let (doc, steps) = processed("    Run Keywords    Log    a\n    ...    AND    Log    b\n");
        assert_eq!(types(&doc, steps[0]), vec![KeywordCall, KeywordCall, Argument]);
        assert_eq!(
            types(&doc, steps[1]),
            vec![Continuation, ControlArgument, KeywordCall, Argument]
        );
    }

    #[test]
    fn test_nested_run_keyword() {
        let (doc, steps) = processed("    Run Keyword    Run Keyword    Log    x\n");
        assert_eq!(
            types(&doc, steps[0]),
            vec![KeywordCall, KeywordCall, KeywordCall, Argument]
        );
    }
}
