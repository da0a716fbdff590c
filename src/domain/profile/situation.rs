//! Occupational situation and its branch-specific details

use std::fmt;

use super::roadmap::RoadmapDuration;

/// All situations, in menu order
pub const ALL_SITUATIONS: &[Situation] = &[
    Situation::Student,
    Situation::NotWorking,
    Situation::Working,
    Situation::JobSeeking,
    Situation::InformationSeeking,
];

/// The user's occupational or life-stage category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Situation {
    Student,
    NotWorking,
    Working,
    JobSeeking,
    InformationSeeking,
}

impl Situation {
    /// Menu label, phrased as the user's own answer
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Student => "I'm a student.",
            Self::NotWorking => "I'm not working at the moment.",
            Self::Working => "I'm actively working.",
            Self::JobSeeking => "I'm not working, but I'm looking for a job.",
            Self::InformationSeeking => {
                "I have no particular goal, I'm just here for information."
            }
        }
    }

    /// Stable identifier used in logs
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::NotWorking => "not-working",
            Self::Working => "working",
            Self::JobSeeking => "job-seeking",
            Self::InformationSeeking => "information-seeking",
        }
    }
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where the user wants to be and over which horizon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub future_goal: String,
    pub roadmap_duration: RoadmapDuration,
}

/// Validated, branch-specific details.
///
/// Each variant carries exactly the fields its situation requires, so a
/// prompt can never be built from the wrong subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SituationDetails {
    Student {
        field_of_study: String,
        goal: Goal,
    },
    NotWorking {
        goal: Goal,
    },
    Working {
        industry: String,
        years_experience: u32,
        goal: Goal,
    },
    JobSeeking {
        industry: String,
        years_experience: u32,
        goal: Goal,
    },
    InformationSeeking {
        information_topic: String,
    },
}

impl SituationDetails {
    /// The situation this variant belongs to
    pub const fn situation(&self) -> Situation {
        match self {
            Self::Student { .. } => Situation::Student,
            Self::NotWorking { .. } => Situation::NotWorking,
            Self::Working { .. } => Situation::Working,
            Self::JobSeeking { .. } => Situation::JobSeeking,
            Self::InformationSeeking { .. } => Situation::InformationSeeking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        for (i, a) in ALL_SITUATIONS.iter().enumerate() {
            for b in &ALL_SITUATIONS[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn details_map_back_to_situation() {
        let goal = Goal {
            future_goal: "travel".to_string(),
            roadmap_duration: RoadmapDuration::OneYear,
        };
        let details = SituationDetails::JobSeeking {
            industry: "retail".to_string(),
            years_experience: 2,
            goal,
        };
        assert_eq!(details.situation(), Situation::JobSeeking);

        let info = SituationDetails::InformationSeeking {
            information_topic: "sleep".to_string(),
        };
        assert_eq!(info.situation(), Situation::InformationSeeking);
    }
}
