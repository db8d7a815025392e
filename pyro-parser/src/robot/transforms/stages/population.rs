//! Population stage
//!
//! Builds the line chain and table indices from rows. Post-processing is a
//! separate stage.

use crate::robot::model::Document;
use crate::robot::parsing::build;
use crate::robot::tokenizing::{Dialect, Row};
use crate::robot::transforms::{Runnable, TransformError};

pub struct Population {
    dialect: Dialect,
}

impl Population {
    pub fn new(dialect: Dialect) -> Self {
        Population { dialect }
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::new(Dialect::SpaceSeparated)
    }
}

impl Runnable<Vec<Row>, Document> for Population {
    fn run(&self, input: Vec<Row>) -> Result<Document, TransformError> {
        Ok(build(&input, self.dialect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::model::{SegmentType, TableType};
    use crate::robot::tokenizing::tokenize;

    #[test]
    fn test_population_without_passes() {
        let rows = tokenize(
            "*** Settings ***\nLibrary    lib.py    WITH NAME    L\n",
            Dialect::SpaceSeparated,
        );
        let doc = Population::new(Dialect::SpaceSeparated).run(rows).unwrap();
        assert_eq!(doc.dialect(), Dialect::SpaceSeparated);
        let (_, table) = doc.tables().next().expect("table");
        assert_eq!(table.table_type, TableType::Setting);
        let step = doc.step(table.lines[0]).expect("step");
        // WITH NAME is only recognized by the library pass
        assert_eq!(step.segments[2].segment_type, SegmentType::SettingValue);
    }
}
