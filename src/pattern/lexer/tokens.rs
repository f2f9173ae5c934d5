//! Token definitions for the skill allocation pattern notation
//!
//! This module defines all the tokens that can appear in a pattern string.
//! The tokens are defined using the logos derive macro for efficient
//! tokenization. The full alphabet of the notation is the four slot digits
//! `0`-`3`, the negative-effect marker `-`, and the two group delimiter
//! pairs `[...]` and `(...)`. Any other character is a lexing error; the
//! validator is responsible for reporting those to the contributor.
use logos::Logos;

/// All possible tokens in a skill allocation pattern
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    // Slot digits, carrying the slot index
    #[regex(r"[0-3]", |lex| lex.slice().as_bytes()[0] - b'0')]
    Slot(u8),

    // Negative-effect marker, binds to the next produced entry
    #[token("-")]
    Dash,

    // Paired-group delimiters
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,

    // Delayed-entry delimiters
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
}

impl Token {
    /// Check if this token is a slot digit
    pub fn is_slot(&self) -> bool {
        matches!(self, Token::Slot(_))
    }

    /// Check if this token opens or closes a group
    pub fn is_group_delimiter(&self) -> bool {
        matches!(
            self,
            Token::OpenBracket | Token::CloseBracket | Token::OpenParen | Token::CloseParen
        )
    }

    /// The slot index carried by a slot token
    pub fn slot_index(&self) -> Option<u8> {
        match self {
            Token::Slot(index) => Some(*index),
            _ => None,
        }
    }
}
