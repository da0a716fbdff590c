//! Mood value object

use std::fmt;

/// All selectable moods, in menu order
pub const ALL_MOODS: &[Mood] = &[
    Mood::Happy,
    Mood::Sad,
    Mood::Excited,
    Mood::Hopeful,
    Mood::Pessimistic,
    Mood::Angry,
    Mood::Exhausted,
];

/// The user's self-reported emotional state for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Hopeful,
    Pessimistic,
    Angry,
    Exhausted,
}

impl Mood {
    /// Label used in menus and embedded into prompts
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Excited => "Excited",
            Self::Hopeful => "Hopeful",
            Self::Pessimistic => "Pessimistic",
            Self::Angry => "Angry",
            Self::Exhausted => "Exhausted",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_label() {
        assert_eq!(Mood::Hopeful.to_string(), "Hopeful");
        assert_eq!(Mood::Exhausted.to_string(), "Exhausted");
    }

    #[test]
    fn all_moods_constant() {
        assert_eq!(ALL_MOODS.len(), 7);
        for mood in ALL_MOODS {
            assert!(!mood.label().is_empty());
        }
    }
}
