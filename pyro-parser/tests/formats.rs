//! Snapshots of the plain-text renderings

use pyro_parser::robot::formats::{to_keywords_str, to_outline_str, to_rows_str, to_segments_str};
use pyro_parser::robot::model::Document;
use pyro_parser::robot::testing::load_fixture;
use pyro_parser::robot::tokenizing::{tokenize, Dialect};

#[test]
fn test_fixture_outline() {
    let doc = load_fixture("parser_test.robot").parse().unwrap();
    insta::assert_snapshot!(to_outline_str(&doc), @r"
    *** Settings *** [SETTING]
    *** Variables *** [VARIABLE]
    *** Test Cases *** [TESTCASE]
    ├─ First Test
    └─ Templated Test
    *** Keywords *** [KEYWORD]
    ├─ Loop Keyword
    └─ Second Keyword
    ");
}

#[test]
fn test_tsv_outline_matches_robot() {
    let robot = load_fixture("parser_test.robot").parse().unwrap();
    let tsv = load_fixture("parser_test.tsv").parse().unwrap();
    assert_eq!(to_outline_str(&robot), to_outline_str(&tsv));
}

#[test]
fn test_pipe_segments() {
    let doc = load_fixture("pipes.robot").parse().unwrap();
    insta::assert_snapshot!(to_segments_str(&doc), @r"
    0000 table   SETTING *** Settings ***
    0021 step    SETTING_NAME:Library SETTING_VALUE:Collections
    0047 table   TESTCASE *** Test Cases ***
    0070 item    Piped Test
    0070 step    KEYWORD_CALL:Log ARGUMENT:hello
    0099 step    KEYWORD_CALL:No Operation
    ");
}

#[test]
fn test_tab_rows() {
    let rows = tokenize("A\tB\n\tC", Dialect::TabSeparated);
    insta::assert_snapshot!(to_rows_str(&rows), @r#"
    0000+4 0:"A" 2:"B"
    0004+2 0:"" 1:"C"
    "#);
}

#[test]
fn test_keyword_callers() {
    let doc = Document::parse(
        "*** Test Cases ***\nT\n    Helper\n*** Keywords ***\nHelper\n    Log    x\nOther\n    Helper\n    Helper\n",
        Dialect::SpaceSeparated,
    );
    insta::assert_snapshot!(to_keywords_str(&doc), @r"
    Helper
      <- T (1)
      <- Other (2)
    Other
    ");
}
