//! Fixed names the parser and the passes recognize

use crate::robot::model::TableType;

/// Settings accepted in a setting table (matched case-sensitively).
pub const SETTING_TABLE_SETTINGS: &[&str] = &[
    "Library",
    "Resource",
    "Variables",
    "Documentation",
    "Metadata",
    "Suite Setup",
    "Suite Teardown",
    "Suite Precondition",
    "Suite Postcondition",
    "Force Tags",
    "Default Tags",
    "Test Setup",
    "Test Teardown",
    "Test Precondition",
    "Test Postcondition",
    "Test Template",
    "Test Timeout",
];

/// Settings allowed inside a test case body.
pub const TESTCASE_SETTINGS: &[&str] = &[
    "[Documentation]",
    "[Tags]",
    "[Setup]",
    "[Teardown]",
    "[Precondition]",
    "[Postcondition]",
    "[Timeout]",
    "[Template]",
];

/// Settings allowed inside a user keyword body.
pub const KEYWORD_SETTINGS: &[&str] = &[
    "[Documentation]",
    "[Tags]",
    "[Arguments]",
    "[Return]",
    "[Teardown]",
    "[Timeout]",
];

/// Table header aliases, matched as prefixes of the starless header text.
pub const TABLE_ALIASES: &[(&str, TableType)] = &[
    ("Test Case", TableType::TestCase),
    ("Test Cases", TableType::TestCase),
    ("Keyword", TableType::Keyword),
    ("Keywords", TableType::Keyword),
    ("User Keyword", TableType::Keyword),
    ("User Keywords", TableType::Keyword),
    ("Setting", TableType::Setting),
    ("Settings", TableType::Setting),
    ("Metadata", TableType::Setting),
    ("Variable", TableType::Variable),
    ("Variables", TableType::Variable),
];

pub const BDD_PREFIXES: &[&str] = &["given", "when", "then", "and"];

/// Setting-table settings whose values are keyword calls.
pub const SETTING_TABLE_KEYWORD_SETTINGS: &[&str] = &[
    "Suite Setup",
    "Suite Teardown",
    "Test Setup",
    "Test Teardown",
    "Test Template",
];

/// Item-level settings whose values are keyword calls.
pub const ITEM_KEYWORD_SETTINGS: &[&str] =
    &["[Setup]", "[Teardown]", "[Precondition]", "[Postcondition]"];

pub const TEMPLATE_SETTING: &str = "[Template]";
pub const LIBRARY_SETTING: &str = "Library";
pub const RESOURCE_SETTING: &str = "Resource";
pub const VARIABLES_SETTING: &str = "Variables";
pub const WITH_NAME: &str = "WITH NAME";
pub const CONTINUATION: &str = "...";

pub const FOR_LOOP: &str = ":FOR";
pub const LOOP_RANGES: &[&str] = &["IN", "IN RANGE"];

/// Separator of the keyword groups given to `Run Keywords`.
pub const RUN_KEYWORDS_SEPARATOR: &str = "AND";

/// Where a built-in keyword expects its keyword-name argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordArgument {
    /// The cell this many positions after the call names a keyword
    At(usize),
    /// `Run Keywords`: the following cells name keywords, optionally split by `AND`
    RunKeywords,
}

/// Built-in keywords that take other keyword names as arguments.
pub const BUILTIN_KEYWORD_ARGUMENTS: &[(&str, KeywordArgument)] = &[
    ("Keyword Should Exist", KeywordArgument::At(1)),
    ("Run Keyword", KeywordArgument::At(1)),
    ("Run Keyword And Continue On Failure", KeywordArgument::At(1)),
    ("Run Keyword And Ignore Error", KeywordArgument::At(1)),
    ("Run Keyword And Return", KeywordArgument::At(1)),
    ("Run Keyword And Return Status", KeywordArgument::At(1)),
    ("Run Keyword If All Critical Tests Passed", KeywordArgument::At(1)),
    ("Run Keyword If All Tests Passed", KeywordArgument::At(1)),
    ("Run Keyword If Any Critical Tests Failed", KeywordArgument::At(1)),
    ("Run Keyword If Any Tests Failed", KeywordArgument::At(1)),
    ("Run Keyword If Test Failed", KeywordArgument::At(1)),
    ("Run Keyword If Test Passed", KeywordArgument::At(1)),
    ("Run Keyword If Timeout Occurred", KeywordArgument::At(1)),
    ("Repeat Keyword", KeywordArgument::At(2)),
    ("Run Keyword And Expect Error", KeywordArgument::At(2)),
    ("Run Keyword And Return If", KeywordArgument::At(2)),
    ("Run Keyword If", KeywordArgument::At(2)),
    ("Run Keyword Unless", KeywordArgument::At(2)),
    ("Wait Until Keyword Succeeds", KeywordArgument::At(3)),
    ("Run Keywords", KeywordArgument::RunKeywords),
];

/// Resolve a table header row's text (all cells concatenated, `*` removed)
/// to a table type.
pub fn table_type_for_header(header: &str) -> Option<TableType> {
    TABLE_ALIASES
        .iter()
        .find(|(alias, _)| header.starts_with(alias))
        .map(|&(_, table_type)| table_type)
}

/// Case-sensitive setting-table name check, tolerating a trailing `:`.
pub fn is_setting_table_setting(name: &str) -> bool {
    let name = name.trim();
    let name = name.strip_suffix(':').unwrap_or(name);
    SETTING_TABLE_SETTINGS.contains(&name)
}

/// Compare a SETTING_NAME value against a known setting, ignoring case and a
/// trailing `:`.
pub fn setting_name_matches(value: &str, setting: &str) -> bool {
    let value = value.trim();
    let value = value.strip_suffix(':').unwrap_or(value);
    value.eq_ignore_ascii_case(setting)
}

pub fn is_item_setting(name: &str, table_type: TableType) -> bool {
    match table_type {
        TableType::TestCase => TESTCASE_SETTINGS.contains(&name),
        TableType::Keyword => KEYWORD_SETTINGS.contains(&name),
        TableType::Setting | TableType::Variable => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Test Cases", Some(TableType::TestCase))]
    #[case("Test Case", Some(TableType::TestCase))]
    #[case("Keywords", Some(TableType::Keyword))]
    #[case("User Keyword", Some(TableType::Keyword))]
    #[case("SettingValue", Some(TableType::Setting))]
    #[case("Metadata", Some(TableType::Setting))]
    #[case("Variables", Some(TableType::Variable))]
    #[case("settings", None)]
    #[case("Not A Table", None)]
    #[case("", None)]
    fn test_table_type_for_header(#[case] header: &str, #[case] expected: Option<TableType>) {
        assert_eq!(table_type_for_header(header), expected);
    }

    #[test]
    fn test_setting_table_setting_names() {
        assert!(is_setting_table_setting("Library"));
        assert!(is_setting_table_setting("Suite Setup:"));
        assert!(!is_setting_table_setting("library"));
        assert!(!is_setting_table_setting("Bad setting name"));
    }

    #[test]
    fn test_setting_name_matches() {
        assert!(setting_name_matches("library", "Library"));
        assert!(setting_name_matches("Test Setup:", "Test Setup"));
        assert!(!setting_name_matches("Test Setups", "Test Setup"));
    }

    #[test]
    fn test_item_settings() {
        assert!(is_item_setting("[Template]", TableType::TestCase));
        assert!(!is_item_setting("[Template]", TableType::Keyword));
        assert!(is_item_setting("[Arguments]", TableType::Keyword));
    }
}
