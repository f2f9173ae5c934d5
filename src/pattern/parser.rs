//! Parser for skill allocation patterns
//!
//! `parse` turns a raw pattern string into the ordered sequence of
//! [`ParsedLevel`] records described in [`crate::pattern::ast`]. It first
//! runs the validator and refuses to scan an invalid pattern, so the scan
//! itself can assume well-formed groups throughout.
//!
//! The scan carries two pieces of state:
//!
//! - `pending_negative`: set by a `-` marker, consumed by the next produced
//!   entry (for a bracket group, by its first entry only).
//! - `next_group_id`: a per-call counter handing out identifiers to bracket
//!   groups; ids are unique within one parsed sequence only.
//!
//! A bracket group of content length 2N produces N entries. Entry `j` pairs
//! the j-th slot of the first half with the j-th slot of the second half and
//! defaults to the first of the two; the in-game order within each pair is
//! interchangeable.

use crate::pattern::ast::{ParsedLevel, SkillSlot};
use crate::pattern::lexer::{tokenize, Token};
use crate::pattern::validation::validate;
use log::error;
use std::fmt;

/// Errors that can occur when parsing a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The pattern did not pass validation; carries every validator error
    /// message in reporting order
    InvalidPattern { messages: Vec<String> },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidPattern { messages } => {
                write!(f, "invalid skill pattern: {}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a pattern string into its leveling sequence.
///
/// Returns an error aggregating all validator diagnostics when the pattern
/// is invalid; once validation has passed, parsing cannot fail.
pub fn parse(pattern: &str) -> Result<Vec<ParsedLevel>, ParseError> {
    let report = validate(pattern);
    if !report.is_valid {
        return Err(ParseError::InvalidPattern {
            messages: report.errors.into_iter().map(|issue| issue.message).collect(),
        });
    }

    let mut levels = Vec::new();
    let mut pending_negative = false;
    let mut next_group_id: u32 = 0;

    let mut tokens = tokenize(pattern).into_iter();
    while let Some(token) = tokens.next() {
        match token {
            Token::Dash => {
                pending_negative = true;
            }
            Token::Slot(index) => {
                if let Some(slot) = SkillSlot::from_index(index) {
                    levels.push(ParsedLevel::ordinary(slot, pending_negative));
                    pending_negative = false;
                }
            }
            Token::OpenParen => {
                for inner in tokens.by_ref() {
                    match inner {
                        Token::CloseParen => break,
                        Token::Slot(index) => {
                            if let Some(slot) = SkillSlot::from_index(index) {
                                levels.push(ParsedLevel::delayed(slot, pending_negative));
                                pending_negative = false;
                            }
                        }
                        _ => {}
                    }
                }
            }
            Token::OpenBracket => {
                let mut content = Vec::new();
                for inner in tokens.by_ref() {
                    match inner {
                        Token::CloseBracket => break,
                        Token::Slot(index) => {
                            if let Some(slot) = SkillSlot::from_index(index) {
                                content.push(slot);
                            }
                        }
                        _ => {}
                    }
                }

                let half = content.len() / 2;
                let group_id = next_group_id;
                next_group_id += 1;
                for j in 0..half {
                    let negative = pending_negative && j == 0;
                    levels.push(ParsedLevel::paired(
                        (content[j], content[half + j]),
                        group_id,
                        negative,
                    ));
                }
                pending_negative = false;
            }
            // stray closers do not survive validation
            Token::CloseBracket | Token::CloseParen => {}
        }
    }

    Ok(levels)
}

/// Parse a pattern, swallowing failures into `None`.
///
/// The error is still reported through the logging side channel; this is
/// the only place in the crate where a parse failure becomes an absent
/// value instead of a `Result`.
pub fn try_parse(pattern: &str) -> Option<Vec<ParsedLevel>> {
    match parse(pattern) {
        Ok(levels) => Some(levels),
        Err(err) => {
            error!("failed to parse skill pattern {:?}: {}", pattern, err);
            None
        }
    }
}
