use super::ModelPass;
use crate::robot::model::{Document, SegmentRef, SegmentType};
use crate::robot::query::settings::scan_library;
use std::collections::BTreeMap;
use tracing::trace;

/// Tag `WITH NAME` in `Library` declarations and store the ordered library
/// paths and the name → path map in the document's view cache.
pub struct LibraryImports;

impl LibraryImports {
    pub fn new() -> Self {
        LibraryImports
    }
}

impl Default for LibraryImports {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelPass for LibraryImports {
    fn name(&self) -> &'static str {
        "library-imports"
    }

    fn apply(&self, document: &mut Document) {
        let mut ordered = Vec::new();
        let mut aliases = BTreeMap::new();
        let mut controls = Vec::new();

        for id in document.setting_table_steps() {
            let Some(step) = document.step(id) else {
                continue;
            };
            let scan = scan_library(step);
            controls.extend(
                scan.control_segments
                    .iter()
                    .map(|&index| SegmentRef { line: id, index }),
            );
            if let (Some(path), Some(name)) = (scan.path, scan.name) {
                trace!(path, name, "library import");
                ordered.push(path.to_string());
                aliases.insert(name.to_string(), path.to_string());
            }
        }

        for at in controls {
            if let Some(segment) = document.segment_mut(at) {
                segment.segment_type = SegmentType::ControlArgument;
            }
        }
        document.views.set_libraries(ordered, aliases);
    }
}
