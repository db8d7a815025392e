use super::{CarryOver, Populated, TablePopulator};
use crate::robot::model::Step;
use crate::robot::tokenizing::Row;

/// Rows before the first table header and after an unrecognized one.
///
/// Comment rows become a one-segment COMMENT step, everything else an opaque
/// line.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownPopulator;

impl TablePopulator for UnknownPopulator {
    fn populate(&self, row: &Row, _carry: &mut CarryOver) -> Populated {
        match row.cells.iter().find(|cell| !cell.is_empty()) {
            Some(cell) if cell.is_comment() => Populated::Step {
                step: Step::comment(cell.clone()),
                indexed: false,
            },
            _ => Populated::Opaque,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::model::SegmentType;
    use crate::robot::populating::test_support::row;

    #[test]
    fn test_comment_row() {
        let populated = UnknownPopulator.populate(&row(&["", "# hello", "x"]), &mut CarryOver::default());
        match populated {
            Populated::Step { step, indexed } => {
                assert!(!indexed);
                assert_eq!(step.segments.len(), 1);
                assert_eq!(step.segments[0].segment_type, SegmentType::Comment);
                assert_eq!(step.segments[0].value(), "# hello");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_other_rows_are_opaque() {
        let populated = UnknownPopulator.populate(&row(&["Something", "else"]), &mut CarryOver::default());
        assert_eq!(populated, Populated::Opaque);
    }
}
