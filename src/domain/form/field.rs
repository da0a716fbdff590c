//! Form field identifiers and per-situation requirements

use std::fmt;

use crate::domain::profile::Situation;

/// Identifier of one user-supplied form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Situation,
    Mood,
    FieldOfStudy,
    Industry,
    YearsExperience,
    InformationTopic,
    FutureGoal,
    RoadmapDuration,
}

impl FieldId {
    /// Human-readable name used in validation messages
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Situation => "situation",
            Self::Mood => "mood",
            Self::FieldOfStudy => "field of study",
            Self::Industry => "industry",
            Self::YearsExperience => "years of experience",
            Self::InformationTopic => "information topic",
            Self::FutureGoal => "future goal",
            Self::RoadmapDuration => "roadmap duration",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

const WORKING_FIELDS: &[FieldId] = &[
    FieldId::Industry,
    FieldId::YearsExperience,
    FieldId::FutureGoal,
    FieldId::RoadmapDuration,
    FieldId::Mood,
];

const STUDENT_FIELDS: &[FieldId] = &[
    FieldId::FieldOfStudy,
    FieldId::FutureGoal,
    FieldId::RoadmapDuration,
    FieldId::Mood,
];

const NOT_WORKING_FIELDS: &[FieldId] = &[
    FieldId::FutureGoal,
    FieldId::RoadmapDuration,
    FieldId::Mood,
];

// Goal and roadmap are not enforced for information requests.
const INFORMATION_FIELDS: &[FieldId] = &[FieldId::InformationTopic, FieldId::Mood];

/// Fields that must be present before a dispatch for the given situation
pub const fn required_fields(situation: Situation) -> &'static [FieldId] {
    match situation {
        Situation::Working | Situation::JobSeeking => WORKING_FIELDS,
        Situation::Student => STUDENT_FIELDS,
        Situation::NotWorking => NOT_WORKING_FIELDS,
        Situation::InformationSeeking => INFORMATION_FIELDS,
    }
}
