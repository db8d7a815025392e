//! Model query layer
//!
//!     Derived lookups over a finished [`Document`](crate::robot::model::Document),
//!     memoized in its [`ViewCache`](crate::robot::model::ViewCache) where the
//!     result is document-wide:
//!
//!         - keyword name → definition map, and BDD-aware call resolution
//!         - library imports (ordered, and alias → path)
//!         - `Resource` and `Variables` setting values, as written
//!         - names declared in variable tables
//!         - chain navigation: containing table/item, continuation-aware step
//!           segments, and an outline
//!
//!     Keyword names are compared in normalized form: lowercase with spaces and
//!     underscores removed. Definitions with embedded `${arg}` placeholders match
//!     any text in place of the placeholder.

pub mod keywords;
pub mod lookup;
pub mod settings;

pub use keywords::{
    candidate_keyword_strings, keyword_matches, normalize_keyword_name, strip_bdd_prefixes,
    KeywordPattern,
};
pub use lookup::{OutlineItem, OutlineTable};
pub use settings::LibraryImport;
