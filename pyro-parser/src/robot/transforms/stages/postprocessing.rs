//! Post-processing stage
//!
//! Runs the standard passes over a populated document.

use crate::robot::model::Document;
use crate::robot::postprocessing::run_standard;
use crate::robot::transforms::{Runnable, TransformError};

pub struct PostProcessing;

impl PostProcessing {
    pub fn new() -> Self {
        PostProcessing
    }
}

impl Default for PostProcessing {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Document, Document> for PostProcessing {
    fn run(&self, mut input: Document) -> Result<Document, TransformError> {
        run_standard(&mut input);
        Ok(input)
    }
}
