//! # skillplan
//!
//! A validator and parser for the skill allocation pattern notation used in
//! character build articles.
//!
//! A pattern is a compact string such as `12[1221]-1(2)` describing the order
//! in which a character's four skill slots receive points over a match. The
//! [`pattern::validation`] module checks a raw string and reports structured
//! errors and warnings; the [`pattern::parser`] module turns a valid string
//! into an ordered sequence of [`ParsedLevel`] records for presentation code
//! to render.

pub mod pattern;

pub use pattern::ast::{ParsedLevel, SkillSlot};
pub use pattern::parser::{parse, try_parse, ParseError};
pub use pattern::validation::{validate, Severity, ValidationIssue, ValidationReport};
