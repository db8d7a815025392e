//! Post-processing module
//!
//!     Passes run over the finished line chain and rewrite segment types in place.
//!     Population classifies each row on its own; some classifications only become
//!     clear with the rest of the file in view (which setting takes a keyword, which
//!     test case is templated, which argument of `Run Keyword If` is a call).
//!
//!     Passes run in a fixed order and later passes see the rewrites of earlier ones:
//!
//!         1. `SettingKeywordCalls`: values of setup/teardown/template settings
//!            become KEYWORD_CALL, at suite level and inside items.
//!         2. `LibraryImports`: `WITH NAME` becomes CONTROL_ARGUMENT, and the
//!            library views are stored in the document cache.
//!         3. `BuiltInKeywordArguments`: keyword-name arguments of `Run Keyword`
//!            and friends become KEYWORD_CALL.
//!         4. `ForLoops`: `:FOR`, its loop variable and `IN`/`IN RANGE`.
//!         5. `TemplateData`: in templated test cases, the first KEYWORD_CALL of
//!            each data row becomes ARGUMENT.
//!
//!     A pass skips lines whose shape it does not expect. A pass that panics is
//!     caught, logged and recorded as a diagnostic; the remaining passes still run.

mod builtin_keywords;
mod for_loops;
mod libraries;
mod setting_keywords;
mod templates;

pub use builtin_keywords::BuiltInKeywordArguments;
pub use for_loops::ForLoops;
pub use libraries::LibraryImports;
pub use setting_keywords::SettingKeywordCalls;
pub use templates::TemplateData;

use crate::robot::model::{Diagnostic, Document};
use crate::robot::parsing::panic_message;
use std::panic::{self, AssertUnwindSafe};
use tracing::{error, trace};

/// A rewrite over a finished document.
pub trait ModelPass: Send + Sync {
    /// Name used in logs and diagnostics
    fn name(&self) -> &'static str;

    fn apply(&self, document: &mut Document);
}

static SETTING_KEYWORD_CALLS: SettingKeywordCalls = SettingKeywordCalls;
static LIBRARY_IMPORTS: LibraryImports = LibraryImports;
static BUILTIN_KEYWORD_ARGUMENTS: BuiltInKeywordArguments = BuiltInKeywordArguments;
static FOR_LOOPS: ForLoops = ForLoops;
static TEMPLATE_DATA: TemplateData = TemplateData;

/// The passes every parse runs, in order.
pub static STANDARD_PASSES: [&dyn ModelPass; 5] = [
    &SETTING_KEYWORD_CALLS,
    &LIBRARY_IMPORTS,
    &BUILTIN_KEYWORD_ARGUMENTS,
    &FOR_LOOPS,
    &TEMPLATE_DATA,
];

pub fn run_standard(document: &mut Document) {
    run_passes(document, &STANDARD_PASSES);
}

/// Apply `passes` in order, isolating each one's panics.
pub fn run_passes(document: &mut Document, passes: &[&dyn ModelPass]) {
    for pass in passes {
        trace!(pass = pass.name(), "running pass");
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| pass.apply(document)));
        if let Err(payload) = outcome {
            let message = panic_message(payload.as_ref());
            error!(pass = pass.name(), %message, "post-processing pass panicked, skipped");
            document.record(Diagnostic::new(pass.name(), message));
        }
    }
}
