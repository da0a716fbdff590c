//! In-progress form state and the immutable snapshot taken at dispatch

use crate::domain::error::IncompleteForm;
use crate::domain::profile::{Goal, Mood, RoadmapDuration, Situation, SituationDetails};

use super::field::{required_fields, FieldId};

/// Snapshot of the form at the moment of dispatch.
///
/// Raw values are kept as entered; blank text counts as absent.
/// Use [`RequestState::validate`] to obtain a [`ValidatedRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestState {
    mood: Option<Mood>,
    situation: Option<Situation>,
    field_of_study: Option<String>,
    industry: Option<String>,
    years_experience: Option<u32>,
    information_topic: Option<String>,
    future_goal: Option<String>,
    roadmap_duration: Option<RoadmapDuration>,
}

impl RequestState {
    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn situation(&self) -> Option<Situation> {
        self.situation
    }

    /// Whether a value is present for `field`
    pub fn has(&self, field: FieldId) -> bool {
        match field {
            FieldId::Situation => self.situation.is_some(),
            FieldId::Mood => self.mood.is_some(),
            FieldId::FieldOfStudy => present(&self.field_of_study).is_some(),
            FieldId::Industry => present(&self.industry).is_some(),
            FieldId::YearsExperience => self.years_experience.is_some(),
            FieldId::InformationTopic => present(&self.information_topic).is_some(),
            FieldId::FutureGoal => present(&self.future_goal).is_some(),
            FieldId::RoadmapDuration => self.roadmap_duration.is_some(),
        }
    }

    /// Required fields that are still absent, in requirement order.
    ///
    /// An unset situation is reported before anything branch-specific.
    pub fn missing_fields(&self) -> Vec<FieldId> {
        match self.situation {
            None => {
                let mut missing = vec![FieldId::Situation];
                if self.mood.is_none() {
                    missing.push(FieldId::Mood);
                }
                missing
            }
            Some(situation) => required_fields(situation)
                .iter()
                .copied()
                .filter(|field| !self.has(*field))
                .collect(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check completeness and build the branch-specific details
    pub fn validate(&self) -> Result<ValidatedRequest, IncompleteForm> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(IncompleteForm::new(missing));
        }

        let situation = self.situation.ok_or_else(|| missing_one(FieldId::Situation))?;
        let mood = self.mood.ok_or_else(|| missing_one(FieldId::Mood))?;

        let details = match situation {
            Situation::Student => SituationDetails::Student {
                field_of_study: text(FieldId::FieldOfStudy, &self.field_of_study)?,
                goal: self.goal()?,
            },
            Situation::NotWorking => SituationDetails::NotWorking { goal: self.goal()? },
            Situation::Working => SituationDetails::Working {
                industry: text(FieldId::Industry, &self.industry)?,
                years_experience: self.years_experience()?,
                goal: self.goal()?,
            },
            Situation::JobSeeking => SituationDetails::JobSeeking {
                industry: text(FieldId::Industry, &self.industry)?,
                years_experience: self.years_experience()?,
                goal: self.goal()?,
            },
            Situation::InformationSeeking => SituationDetails::InformationSeeking {
                information_topic: text(FieldId::InformationTopic, &self.information_topic)?,
            },
        };

        Ok(ValidatedRequest { mood, details })
    }

    fn goal(&self) -> Result<Goal, IncompleteForm> {
        Ok(Goal {
            future_goal: text(FieldId::FutureGoal, &self.future_goal)?,
            roadmap_duration: self
                .roadmap_duration
                .ok_or_else(|| missing_one(FieldId::RoadmapDuration))?,
        })
    }

    fn years_experience(&self) -> Result<u32, IncompleteForm> {
        self.years_experience
            .ok_or_else(|| missing_one(FieldId::YearsExperience))
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn text(field: FieldId, value: &Option<String>) -> Result<String, IncompleteForm> {
    present(value)
        .map(str::to_string)
        .ok_or_else(|| missing_one(field))
}

fn missing_one(field: FieldId) -> IncompleteForm {
    IncompleteForm::new(vec![field])
}

/// A complete request, ready for prompt building
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub mood: Mood,
    pub details: SituationDetails,
}

impl ValidatedRequest {
    pub fn situation(&self) -> Situation {
        self.details.situation()
    }
}

/// Mutable form fed by the view layer.
///
/// Changing the situation keeps previously entered values; only the fields
/// required by the active situation are consulted on dispatch.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    current: RequestState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mood(&mut self, mood: Mood) -> &mut Self {
        self.current.mood = Some(mood);
        self
    }

    pub fn set_situation(&mut self, situation: Situation) -> &mut Self {
        self.current.situation = Some(situation);
        self
    }

    pub fn set_field_of_study(&mut self, value: impl Into<String>) -> &mut Self {
        self.current.field_of_study = Some(value.into());
        self
    }

    pub fn set_industry(&mut self, value: impl Into<String>) -> &mut Self {
        self.current.industry = Some(value.into());
        self
    }

    pub fn set_years_experience(&mut self, years: u32) -> &mut Self {
        self.current.years_experience = Some(years);
        self
    }

    pub fn set_information_topic(&mut self, value: impl Into<String>) -> &mut Self {
        self.current.information_topic = Some(value.into());
        self
    }

    pub fn set_future_goal(&mut self, value: impl Into<String>) -> &mut Self {
        self.current.future_goal = Some(value.into());
        self
    }

    pub fn set_roadmap_duration(&mut self, duration: RoadmapDuration) -> &mut Self {
        self.current.roadmap_duration = Some(duration);
        self
    }

    pub fn mood(&self) -> Option<Mood> {
        self.current.mood
    }

    pub fn situation(&self) -> Option<Situation> {
        self.current.situation
    }

    /// Fields the active situation requires; empty until a situation is chosen
    pub fn required_fields(&self) -> &'static [FieldId] {
        self.current.situation.map(required_fields).unwrap_or(&[])
    }

    pub fn missing_fields(&self) -> Vec<FieldId> {
        self.current.missing_fields()
    }

    pub fn is_complete(&self) -> bool {
        self.current.is_complete()
    }

    /// Freeze the current values for one dispatch
    pub fn snapshot(&self) -> RequestState {
        self.current.clone()
    }
}
