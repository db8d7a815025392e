//! Standard transform definitions
//!
//! Prebuilt pipelines for each dialect, as `once_cell::sync::Lazy` statics.

use crate::robot::model::Document;
use crate::robot::tokenizing::{Dialect, Row};
use crate::robot::transforms::stages::{Population, PostProcessing, Tokenization};
use crate::robot::transforms::Transform;
use once_cell::sync::Lazy;

pub type TokenizationTransform = Transform<String, Vec<Row>>;

pub type DocumentTransform = Transform<String, Document>;

/// String → rows, tab-separated
pub static TAB_TOKENIZATION: Lazy<TokenizationTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization::new(Dialect::TabSeparated)));

/// String → rows, space- or pipe-separated
pub static SPACE_TOKENIZATION: Lazy<TokenizationTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization::new(Dialect::SpaceSeparated)));

/// String → rows for a file type the parser does not read: always empty
pub static UNSUPPORTED_TOKENIZATION: Lazy<TokenizationTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization::new(Dialect::Unsupported)));

fn document_pipeline(dialect: Dialect, tokenization: &'static TokenizationTransform) -> DocumentTransform {
    Transform::from_fn(Ok)
        .then_transform(tokenization)
        .then(Population::new(dialect))
        .then(PostProcessing::new())
}

/// String → Document, tab-separated
///
/// 1. Tokenization
/// 2. Population of the line chain and table indices
/// 3. Post-processing passes
pub static TAB_PIPELINE: Lazy<DocumentTransform> =
    Lazy::new(|| document_pipeline(Dialect::TabSeparated, &TAB_TOKENIZATION));

/// String → Document, space- or pipe-separated
pub static SPACE_PIPELINE: Lazy<DocumentTransform> =
    Lazy::new(|| document_pipeline(Dialect::SpaceSeparated, &SPACE_TOKENIZATION));

/// String → empty Document
pub static UNSUPPORTED_PIPELINE: Lazy<DocumentTransform> =
    Lazy::new(|| document_pipeline(Dialect::Unsupported, &UNSUPPORTED_TOKENIZATION));

pub fn tokenization_for(dialect: Dialect) -> &'static TokenizationTransform {
    match dialect {
        Dialect::TabSeparated => &TAB_TOKENIZATION,
        Dialect::SpaceSeparated => &SPACE_TOKENIZATION,
        Dialect::Unsupported => &UNSUPPORTED_TOKENIZATION,
    }
}

pub fn pipeline_for(dialect: Dialect) -> &'static DocumentTransform {
    match dialect {
        Dialect::TabSeparated => &TAB_PIPELINE,
        Dialect::SpaceSeparated => &SPACE_PIPELINE,
        Dialect::Unsupported => &UNSUPPORTED_PIPELINE,
    }
}
