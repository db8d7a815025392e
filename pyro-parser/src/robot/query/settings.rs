//! Imports and declarations read from setting and variable tables

use crate::robot::model::{Document, LineId, SegmentType, Step, TableType};
use crate::robot::vocabulary::{
    setting_name_matches, LIBRARY_SETTING, RESOURCE_SETTING, VARIABLES_SETTING, WITH_NAME,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static SCALAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\{[^{]*\}").unwrap());
static LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\{[^{]*\}").unwrap());
static ENVIRONMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"%\{[^{]*\}").unwrap());

/// One `Library` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryImport {
    pub path: String,
    /// The `WITH NAME` alias, or the path itself
    pub name: String,
    /// Indices of `WITH NAME` segments within the step
    pub control_segments: Vec<usize>,
}

impl LibraryImport {
    /// Read a `Library` setting step. The first value is the path and the
    /// default name; a value after `WITH NAME` replaces the name.
    pub fn from_step(step: &Step) -> Option<LibraryImport> {
        let scan = scan_library(step);
        match (scan.path, scan.name) {
            (Some(path), Some(name)) => Some(LibraryImport {
                path: path.to_string(),
                name: name.to_string(),
                control_segments: scan.control_segments,
            }),
            _ => None,
        }
    }
}

pub(crate) struct LibraryScan<'a> {
    pub path: Option<&'a str>,
    pub name: Option<&'a str>,
    pub control_segments: Vec<usize>,
}

/// Walk a `Library` declaration. `WITH NAME` cells are reported even when the
/// declaration is incomplete.
pub(crate) fn scan_library(step: &Step) -> LibraryScan<'_> {
    let mut scan = LibraryScan {
        path: None,
        name: None,
        control_segments: Vec::new(),
    };
    if !step.is_setting() {
        return scan;
    }
    let mut found = false;
    for (index, segment) in step.segments.iter().enumerate() {
        if segment.is(SegmentType::SettingName)
            && setting_name_matches(segment.value(), LIBRARY_SETTING)
        {
            found = true;
            continue;
        }
        if segment.is(SegmentType::Comment) {
            break;
        }
        if !found || segment.value().is_empty() {
            continue;
        }
        if segment.value().eq_ignore_ascii_case(WITH_NAME) {
            scan.control_segments.push(index);
            scan.name = None;
        } else if scan.path.is_none() {
            scan.path = Some(segment.value());
            scan.name = Some(segment.value());
        } else if scan.name.is_none() {
            scan.name = Some(segment.value());
            break;
        }
    }
    scan
}

impl Document {
    /// Setting steps of all setting tables, in source order.
    pub fn setting_table_steps(&self) -> Vec<LineId> {
        self.tables()
            .filter(|(_, table)| table.table_type == TableType::Setting)
            .flat_map(|(_, table)| table.lines.iter().copied())
            .filter(|&id| self.step(id).is_some_and(Step::is_setting))
            .collect()
    }

    /// Library imports in declaration order.
    pub fn library_imports(&self) -> Vec<LibraryImport> {
        self.setting_table_steps()
            .into_iter()
            .filter_map(|id| self.step(id).and_then(LibraryImport::from_step))
            .collect()
    }

    /// Library paths in import order, the order keyword resolution searches them.
    pub fn libraries(&self) -> &[String] {
        self.views
            .ordered_libraries
            .get_or_init(|| self.library_imports().into_iter().map(|i| i.path).collect())
    }

    /// Library name (alias, or path when unaliased) → path.
    pub fn library_aliases(&self) -> &BTreeMap<String, String> {
        self.views.library_aliases.get_or_init(|| {
            self.library_imports()
                .into_iter()
                .map(|i| (i.name, i.path))
                .collect()
        })
    }

    /// The name a library path is referenced by; the path itself if no alias exists.
    pub fn library_alias<'a>(&'a self, path: &'a str) -> &'a str {
        self.library_aliases()
            .iter()
            .find(|(_, target)| target.as_str() == path)
            .map(|(name, _)| name.as_str())
            .unwrap_or(path)
    }

    /// Values of `Resource` settings, unresolved.
    pub fn resource_paths(&self) -> &[String] {
        self.views
            .resource_paths
            .get_or_init(|| self.setting_values(RESOURCE_SETTING))
    }

    /// Values of `Variables` settings, unresolved.
    pub fn variable_paths(&self) -> &[String] {
        self.views
            .variable_paths
            .get_or_init(|| self.setting_values(VARIABLES_SETTING))
    }

    /// Names declared in variable tables: `${scalar}`, `@{list}` or `%{env}`,
    /// without any trailing `=`.
    pub fn variable_table_vars(&self) -> &[String] {
        self.views.variable_table_vars.get_or_init(|| {
            self.tables()
                .filter(|(_, table)| table.table_type == TableType::Variable)
                .flat_map(|(_, table)| table.lines.iter())
                .filter_map(|&id| self.step(id))
                .filter_map(|step| {
                    step.segments
                        .iter()
                        .find(|s| s.is(SegmentType::Variable))
                        .and_then(|s| variable_name(s.value()))
                })
                .collect()
        })
    }

    /// First non-empty value after the named setting, for each declaration.
    fn setting_values(&self, setting: &str) -> Vec<String> {
        self.setting_table_steps()
            .into_iter()
            .filter_map(|id| self.step(id))
            .filter_map(|step| {
                step.segments
                    .iter()
                    .skip_while(|s| {
                        !(s.is(SegmentType::SettingName) && setting_name_matches(s.value(), setting))
                    })
                    .skip(1)
                    .find(|s| !s.value().is_empty())
                    .map(|s| s.value().to_string())
            })
            .collect()
    }
}

fn variable_name(value: &str) -> Option<String> {
    [&*SCALAR, &*LIST, &*ENVIRONMENT]
        .iter()
        .find_map(|pattern| pattern.find(value))
        .map(|found| found.as_str().to_string())
}
