//! Validation of raw skill allocation patterns
//!
//! This module performs a full syntactic pass over a contributor-authored
//! pattern string and produces structured error and warning information that
//! the editing UI can show next to the input field.
//!
//! ## Checks
//!
//! 1. **Empty input**: an empty or whitespace-only pattern is a single error
//!    and short-circuits everything else.
//! 2. **Character classes**: any character outside `{0,1,2,3,-,(,),[,]}` is
//!    reported, listing the offending characters.
//! 3. **Balance**: brackets and parentheses must each be well-nested and
//!    closed; unmatched closers are position-tagged.
//! 4. **Bracket groups**: `[...]` content must be non-empty, of even length,
//!    and slot digits only.
//! 5. **Parenthesis groups**: `(...)` content must be exactly one slot digit.
//! 6. **Heuristics** (warnings only): consecutive `-` markers and unusually
//!    long patterns.
//!
//! Validation never fails: `validate` always returns a report, and a report
//! is valid iff it contains no errors. Warnings never affect validity.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Lazy-compiled regex extracting bracket-group content (up to the first `]`)
static BRACKET_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());

/// Lazy-compiled regex extracting parenthesis-group content (up to the first `)`)
static PAREN_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());

/// Patterns longer than this trigger a length warning
const LONG_PATTERN_THRESHOLD: usize = 20;

/// Severity of a single validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation finding, optionally tagged with a byte offset into
/// the pattern string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub message: String,
    pub position: Option<usize>,
    pub severity: Severity,
}

impl ValidationIssue {
    pub fn error(message: impl Into<String>) -> ValidationIssue {
        ValidationIssue {
            message: message.into(),
            position: None,
            severity: Severity::Error,
        }
    }

    pub fn error_at(message: impl Into<String>, position: usize) -> ValidationIssue {
        ValidationIssue {
            message: message.into(),
            position: Some(position),
            severity: Severity::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> ValidationIssue {
        ValidationIssue {
            message: message.into(),
            position: None,
            severity: Severity::Warning,
        }
    }

    pub fn warning_at(message: impl Into<String>, position: usize) -> ValidationIssue {
        ValidationIssue {
            message: message.into(),
            position: Some(position),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(position) => {
                write!(f, "{}: {} at offset {}", self.severity, self.message, position)
            }
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// The aggregated result of validating one pattern string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    fn new(errors: Vec<ValidationIssue>, warnings: Vec<ValidationIssue>) -> ValidationReport {
        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Check whether a character is one of the four slot digits
pub fn is_slot_digit(c: char) -> bool {
    matches!(c, '0'..='3')
}

/// Check whether a character belongs to the notation alphabet
pub fn is_allowed_char(c: char) -> bool {
    matches!(c, '0'..='3' | '-' | '(' | ')' | '[' | ']')
}

/// Validate a raw pattern string.
///
/// Never panics; always returns a report, even for empty or garbage input.
pub fn validate(pattern: &str) -> ValidationReport {
    if pattern.trim().is_empty() {
        let errors = vec![ValidationIssue::error("pattern is empty")];
        return ValidationReport::new(errors, Vec::new());
    }

    let mut errors = Vec::new();
    errors.extend(check_character_classes(pattern));
    errors.extend(check_balance(pattern));
    errors.extend(check_bracket_groups(pattern));
    errors.extend(check_paren_groups(pattern));

    ValidationReport::new(errors, collect_warnings(pattern))
}

/// Report characters outside the notation alphabet, aggregated into one
/// error listing the distinct offenders in first-appearance order
fn check_character_classes(pattern: &str) -> Vec<ValidationIssue> {
    let mut offenders: Vec<char> = Vec::new();
    for c in pattern.chars() {
        if !is_allowed_char(c) && !offenders.contains(&c) {
            offenders.push(c);
        }
    }

    if offenders.is_empty() {
        return Vec::new();
    }

    let listed = offenders
        .iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(", ");
    vec![ValidationIssue::error(format!(
        "pattern contains invalid characters: {}",
        listed
    ))]
}

/// Walk the pattern tracking independent depth counters for `[...]` and
/// `(...)`. Closers at depth zero are position-tagged errors and do not
/// push the counter below zero; residual depth after the scan means an
/// opener was never closed.
fn check_balance(pattern: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut bracket_depth: usize = 0;
    let mut paren_depth: usize = 0;

    for (index, c) in pattern.char_indices() {
        match c {
            '[' => bracket_depth += 1,
            ']' => {
                if bracket_depth == 0 {
                    issues.push(ValidationIssue::error_at("unmatched closing bracket ']'", index));
                } else {
                    bracket_depth -= 1;
                }
            }
            '(' => paren_depth += 1,
            ')' => {
                if paren_depth == 0 {
                    issues.push(ValidationIssue::error_at(
                        "unmatched closing parenthesis ')'",
                        index,
                    ));
                } else {
                    paren_depth -= 1;
                }
            }
            _ => {}
        }
    }

    if bracket_depth > 0 {
        issues.push(ValidationIssue::error(format!(
            "unclosed bracket: {} '[' without matching ']'",
            bracket_depth
        )));
    }
    if paren_depth > 0 {
        issues.push(ValidationIssue::error(format!(
            "unclosed parenthesis: {} '(' without matching ')'",
            paren_depth
        )));
    }

    issues
}

/// Check every `[...]` group: non-empty, even length, slot digits only.
/// Groups are numbered by order of appearance for the messages.
fn check_bracket_groups(pattern: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (index, captures) in BRACKET_GROUP_RE.captures_iter(pattern).enumerate() {
        let group_number = index + 1;
        let content = &captures[1];
        let position = captures.get(0).map(|m| m.start());

        if content.is_empty() {
            issues.push(ValidationIssue {
                message: format!("bracket group {} is empty", group_number),
                position,
                severity: Severity::Error,
            });
            continue;
        }

        if content.chars().count() % 2 != 0 {
            issues.push(ValidationIssue {
                message: format!(
                    "bracket group {} has odd-length content '{}'; slots must come in pairs",
                    group_number, content
                ),
                position,
                severity: Severity::Error,
            });
        }

        let foreign: Vec<char> = content.chars().filter(|c| !is_slot_digit(*c)).collect();
        if !foreign.is_empty() {
            let listed = foreign
                .iter()
                .map(|c| format!("'{}'", c))
                .collect::<Vec<_>>()
                .join(", ");
            issues.push(ValidationIssue {
                message: format!(
                    "bracket group {} contains non-slot characters: {}",
                    group_number, listed
                ),
                position,
                severity: Severity::Error,
            });
        }
    }

    issues
}

/// Check every `(...)` group: content must be exactly one slot digit
fn check_paren_groups(pattern: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (index, captures) in PAREN_GROUP_RE.captures_iter(pattern).enumerate() {
        let group_number = index + 1;
        let content = &captures[1];
        let position = captures.get(0).map(|m| m.start());

        let mut chars = content.chars();
        match (chars.next(), chars.next()) {
            (Some(only), None) if is_slot_digit(only) => {}
            (Some(only), None) => {
                issues.push(ValidationIssue {
                    message: format!(
                        "parenthesis group {} contains invalid slot digit '{}'",
                        group_number, only
                    ),
                    position,
                    severity: Severity::Error,
                });
            }
            _ => {
                issues.push(ValidationIssue {
                    message: format!(
                        "parenthesis group {} must contain exactly one slot digit",
                        group_number
                    ),
                    position,
                    severity: Severity::Error,
                });
            }
        }
    }

    issues
}

/// Non-blocking heuristics: suspicious but not invalid
fn collect_warnings(pattern: &str) -> Vec<ValidationIssue> {
    let mut warnings = Vec::new();

    if let Some(position) = pattern.find("--") {
        warnings.push(ValidationIssue::warning_at(
            "consecutive negative markers '--'",
            position,
        ));
    }

    if pattern.chars().count() > LONG_PATTERN_THRESHOLD {
        warnings.push(ValidationIssue::warning(format!(
            "pattern is unusually long ({} characters), please confirm",
            pattern.chars().count()
        )));
    }

    warnings
}
