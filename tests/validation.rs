//! Integration tests for pattern validation
//!
//! Every hard error and warning the validator can produce is exercised here
//! against the report shape: validity, issue counts, messages, and positions.

use skillplan::{validate, Severity};

#[test]
fn test_valid_pattern_produces_clean_report() {
    let report = validate("01[12]2(3)-1");
    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_empty_pattern() {
    let report = validate("");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "pattern is empty");
    assert_eq!(report.errors[0].severity, Severity::Error);
}

#[test]
fn test_whitespace_only_pattern_counts_as_empty() {
    let report = validate("   \t ");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "pattern is empty");
}

#[test]
fn test_invalid_characters_are_aggregated() {
    let report = validate("1a2b4a");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    // distinct offenders, first-appearance order
    assert_eq!(
        report.errors[0].message,
        "pattern contains invalid characters: 'a', 'b', '4'"
    );
}

#[test]
fn test_interior_whitespace_is_an_invalid_character() {
    let report = validate("1 2");
    assert!(!report.is_valid);
    assert!(report.errors[0].message.contains("invalid characters"));
}

#[test]
fn test_unmatched_closing_bracket_is_position_tagged() {
    let report = validate("01]2");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "unmatched closing bracket ']'");
    assert_eq!(report.errors[0].position, Some(2));
}

#[test]
fn test_unmatched_closing_parenthesis_is_position_tagged() {
    let report = validate("0)12");
    assert!(!report.is_valid);
    assert_eq!(report.errors[0].message, "unmatched closing parenthesis ')'");
    assert_eq!(report.errors[0].position, Some(1));
}

#[test]
fn test_unclosed_bracket() {
    let report = validate("[012");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].message.contains("unclosed bracket"));
}

#[test]
fn test_unclosed_parenthesis() {
    let report = validate("(1(2");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].message.contains("unclosed parenthesis"));
    assert!(report.errors[0].message.contains("2 '('"));
}

#[test]
fn test_each_unmatched_closer_is_its_own_error() {
    let report = validate("1]2]");
    assert_eq!(report.errors.len(), 2);
    assert_eq!(report.errors[0].position, Some(1));
    assert_eq!(report.errors[1].position, Some(3));
}

#[test]
fn test_empty_bracket_group() {
    let report = validate("1[]2");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].message, "bracket group 1 is empty");
    assert_eq!(report.errors[0].position, Some(1));
}

#[test]
fn test_odd_length_bracket_group() {
    let report = validate("[1]");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].message.contains("bracket group 1"));
    assert!(report.errors[0].message.contains("odd-length"));
}

#[test]
fn test_bracket_group_with_non_slot_characters() {
    let report = validate("[1-21]");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].message,
        "bracket group 1 contains non-slot characters: '-'"
    );
}

#[test]
fn test_bracket_group_errors_are_numbered_by_appearance() {
    let report = validate("[12][1][333]");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors[0].message.contains("bracket group 2"));
    assert!(report.errors[1].message.contains("bracket group 3"));
}

#[test]
fn test_multi_character_parenthesis_group() {
    let report = validate("(12)");
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(
        report.errors[0].message,
        "parenthesis group 1 must contain exactly one slot digit"
    );
}

#[test]
fn test_empty_parenthesis_group() {
    let report = validate("1()2");
    assert!(!report.is_valid);
    assert_eq!(
        report.errors[0].message,
        "parenthesis group 1 must contain exactly one slot digit"
    );
}

#[test]
fn test_parenthesis_group_with_non_digit_content() {
    let report = validate("(-)");
    assert!(!report.is_valid);
    assert_eq!(
        report.errors[0].message,
        "parenthesis group 1 contains invalid slot digit '-'"
    );
}

#[test]
fn test_consecutive_dash_warning() {
    let report = validate("1--2");
    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].severity, Severity::Warning);
    assert_eq!(report.warnings[0].message, "consecutive negative markers '--'");
    assert_eq!(report.warnings[0].position, Some(1));
}

#[test]
fn test_long_pattern_warning() {
    // 21 characters, otherwise fine
    let report = validate("121212121212121212121");
    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].message.contains("unusually long"));
}

#[test]
fn test_twenty_character_pattern_gets_no_length_warning() {
    let report = validate("12121212121212121212");
    assert!(report.is_valid);
    assert!(report.warnings.is_empty());
}

#[test]
fn test_warnings_never_block_errors_do() {
    let garbage = validate("--[1]");
    assert!(!garbage.is_valid);
    assert_eq!(garbage.warnings.len(), 1);
    assert_eq!(garbage.errors.len(), 1);
}

#[test]
fn test_check_order_characters_before_groups() {
    let report = validate("x[1]");
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors[0].message.contains("invalid characters"));
    assert!(report.errors[1].message.contains("bracket group 1"));
}

#[test]
fn test_validate_is_pure() {
    for pattern in ["", "0123", "[1]", "x(12)--", "  "] {
        assert_eq!(validate(pattern), validate(pattern));
    }
}
