//! Output data model for parsed skill allocation patterns
//!
//! The parser produces a flat sequence of [`ParsedLevel`] records, one per
//! leveling point in scan order. These are plain immutable values: the
//! subsystem exposes slots as indices/digits so that presentation code can
//! map them to localized display names and icon URLs on its own. Nothing in
//! this crate knows about images or localized strings.

use serde::Serialize;
use std::fmt;

/// One of the four skill slots a leveling point can be invested in.
///
/// Serialized in the notation as the digits `0`-`3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkillSlot {
    /// Digit `0`: the passive skill
    Passive,
    /// Digit `1`: the active skill
    Active,
    /// Digit `2`: the first weapon skill
    Weapon1,
    /// Digit `3`: the second weapon skill
    Weapon2,
}

impl SkillSlot {
    /// Build a slot from its notation digit
    pub fn from_digit(digit: char) -> Option<SkillSlot> {
        match digit {
            '0' => Some(SkillSlot::Passive),
            '1' => Some(SkillSlot::Active),
            '2' => Some(SkillSlot::Weapon1),
            '3' => Some(SkillSlot::Weapon2),
            _ => None,
        }
    }

    /// Build a slot from its numeric index
    pub fn from_index(index: u8) -> Option<SkillSlot> {
        match index {
            0 => Some(SkillSlot::Passive),
            1 => Some(SkillSlot::Active),
            2 => Some(SkillSlot::Weapon1),
            3 => Some(SkillSlot::Weapon2),
            _ => None,
        }
    }

    /// The notation digit for this slot
    pub fn digit(&self) -> char {
        match self {
            SkillSlot::Passive => '0',
            SkillSlot::Active => '1',
            SkillSlot::Weapon1 => '2',
            SkillSlot::Weapon2 => '3',
        }
    }

    /// The numeric index for this slot, for display-layer lookup tables
    pub fn index(&self) -> u8 {
        match self {
            SkillSlot::Passive => 0,
            SkillSlot::Active => 1,
            SkillSlot::Weapon1 => 2,
            SkillSlot::Weapon2 => 3,
        }
    }
}

impl fmt::Display for SkillSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// One entry in the parsed leveling sequence.
///
/// For ordinary and delayed entries `slot` is the actual slot; for a paired
/// entry it is the default choice of the two `paired_options`. All entries
/// produced from the same bracket group share one `group_id` so a consumer
/// can render them as one linked unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLevel {
    pub slot: SkillSlot,
    /// The point was written in parentheses: the contributor intentionally
    /// defers it to a later level than its position implies.
    pub is_delayed: bool,
    /// The entry was prefixed with `-`: investing this point carries a
    /// known downside.
    pub has_negative_effect: bool,
    /// The entry came from a bracket group.
    pub is_paired: bool,
    /// The two slots whose in-game order is interchangeable; present only
    /// when `is_paired`.
    pub paired_options: Option<(SkillSlot, SkillSlot)>,
    /// Shared identifier of the originating bracket group; present only
    /// when `is_paired`.
    pub group_id: Option<u32>,
}

impl ParsedLevel {
    /// An ordinary entry: one bare slot digit
    pub fn ordinary(slot: SkillSlot, has_negative_effect: bool) -> ParsedLevel {
        ParsedLevel {
            slot,
            is_delayed: false,
            has_negative_effect,
            is_paired: false,
            paired_options: None,
            group_id: None,
        }
    }

    /// A delayed entry: one slot digit in parentheses
    pub fn delayed(slot: SkillSlot, has_negative_effect: bool) -> ParsedLevel {
        ParsedLevel {
            slot,
            is_delayed: true,
            has_negative_effect,
            is_paired: false,
            paired_options: None,
            group_id: None,
        }
    }

    /// A paired entry from a bracket group, defaulting to the first option
    pub fn paired(
        options: (SkillSlot, SkillSlot),
        group_id: u32,
        has_negative_effect: bool,
    ) -> ParsedLevel {
        ParsedLevel {
            slot: options.0,
            is_delayed: false,
            has_negative_effect,
            is_paired: true,
            paired_options: Some(options),
            group_id: Some(group_id),
        }
    }
}
