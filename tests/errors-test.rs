use restconf_fields::{ErrorTag, ErrorType, FieldsError, FieldsParser};

mod common;
use common::{JUKEBOX, JUKEBOX_CONTEXT};

fn parse_err(input: &str) -> FieldsError {
    FieldsParser::new(&*JUKEBOX_CONTEXT)
        .parse(&*JUKEBOX, input)
        .unwrap_err()
}

/// Every parser failure carries the same externally visible triple.
fn assert_invalid_value(err: &FieldsError) {
    assert_eq!(err.error_type, ErrorType::Protocol);
    assert_eq!(err.tag, ErrorTag::InvalidValue);
    assert_eq!(err.status_code(), 400);
}

#[test]
fn unexpected_character() {
    let err = parse_err("*");
    assert_invalid_value(&err);
    assert!(err.message.contains("'*'"), "message was: {}", err.message);
}

#[test]
fn unmatched_opening_parenthesis() {
    let err = parse_err("library(");
    assert_invalid_value(&err);
}

#[test]
fn unclosed_group_with_content() {
    let err = parse_err("library(album");
    assert_invalid_value(&err);
    assert_eq!(err.message, "unclosed parenthesized selection");
    assert_eq!(err.offset, 7);
}

#[test]
fn missing_child_node() {
    let err = parse_err("library(not-existing)");
    assert_invalid_value(&err);
    assert!(
        err.message.contains("not-existing"),
        "message was: {}",
        err.message
    );
}

#[test]
fn trailing_separator_after_group() {
    let err = parse_err("library(album);");
    assert_invalid_value(&err);
}

#[test]
fn missing_separator_after_group() {
    let err = parse_err("library(album)player");
    assert_invalid_value(&err);
}

#[test]
fn group_glued_to_closed_group() {
    let err = parse_err("library(album)(album)");
    assert_invalid_value(&err);
    assert!(err.message.contains("after ')'"), "message was: {}", err.message);
}

#[test]
fn slash_after_closed_group() {
    let err = parse_err("library(album)/player");
    assert_invalid_value(&err);
}

#[test]
fn embedded_nul_character() {
    // a NUL byte must not be mistaken for end of input, which would silently
    // drop everything after it
    let err = parse_err("library\u{0};player");
    assert_invalid_value(&err);
    assert!(
        err.message.contains("unexpected character"),
        "message was: {}",
        err.message
    );
    assert_eq!(err.offset, 7);
}

#[test]
fn resolution_error_wins_over_later_scan_error() {
    // the unresolvable child sits before the bad character, so it is the
    // violation reported
    let err = parse_err("library(not-existing)*");
    assert_invalid_value(&err);
    assert!(
        err.message.contains("not-existing"),
        "message was: {}",
        err.message
    );
    assert_eq!(err.offset, 8);
}

#[test]
fn empty_expression() {
    let err = parse_err("");
    assert_invalid_value(&err);
}

#[test]
fn empty_identifier_between_slashes() {
    let err = parse_err("library//name");
    assert_invalid_value(&err);
}

#[test]
fn empty_group() {
    let err = parse_err("library()");
    assert_invalid_value(&err);
}

#[test]
fn unknown_module_prefix() {
    let err = parse_err("unknown-module:augmented-library");
    assert_invalid_value(&err);
    assert!(
        err.message.contains("unknown-module"),
        "message was: {}",
        err.message
    );
}

#[test]
fn prefix_moves_lookup_to_wrong_namespace() {
    // the local name exists, but not under the module the prefix names
    let err = parse_err("augmented-jukebox:library");
    assert_invalid_value(&err);
    assert!(
        err.message.contains("is not a child of"),
        "message was: {}",
        err.message
    );
}

mod panics {
    use super::*;

    #[test]
    #[should_panic(expected = "unexpected character ' '")]
    fn whitespace_in_expression() {
        FieldsParser::new(&*JUKEBOX_CONTEXT)
            .parse(&*JUKEBOX, "library ;player")
            .unwrap();
    }

    #[test]
    #[should_panic(expected = "expected a node identifier, found end of input")]
    fn lone_slash_chain() {
        FieldsParser::new(&*JUKEBOX_CONTEXT)
            .parse(&*JUKEBOX, "library/")
            .unwrap();
    }
}
