//! Reaction catalogue
//!
//! The ordered set of options offered by the wheel. Order decides angular
//! placement: option `i` owns the i-th sector clockwise from 12 o'clock.

use serde::{Deserialize, Serialize};

/// A selectable reaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionOption {
    /// Stable identifier reported on commit (e.g. "heart")
    pub id: String,
    /// Glyph drawn on the wheel
    pub glyph: String,
    /// Human-readable label
    pub label: String,
}

impl ReactionOption {
    pub fn new(id: &str, glyph: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            glyph: glyph.to_string(),
            label: label.to_string(),
        }
    }
}

const DEFAULT_REACTIONS: [(&str, &str, &str); 9] = [
    ("heart", "❤️", "Love"),
    ("lol", "😂", "Funny"),
    ("shocking", "😱", "Shocking"),
    ("confusing", "🤨", "Confusing"),
    ("gross", "🤢", "Gross"),
    ("pensive", "😔", "Sad"),
    ("cool", "😎", "Cool"),
    ("dead", "💀", "Dead"),
    ("anxious", "😰", "Anxious"),
];

/// The nine reference reactions in wheel order
pub fn default_reactions() -> Vec<ReactionOption> {
    DEFAULT_REACTIONS
        .iter()
        .map(|&(id, glyph, label)| ReactionOption::new(id, glyph, label))
        .collect()
}

/// Find an option by id
pub fn find_reaction<'a>(options: &'a [ReactionOption], id: &str) -> Option<&'a ReactionOption> {
    options.iter().find(|o| o.id == id)
}
