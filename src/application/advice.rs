//! Life coach advice use case

use thiserror::Error;
use tracing::debug;

use crate::domain::error::IncompleteForm;
use crate::domain::form::RequestState;
use crate::domain::prompt::AdvicePrompt;

use super::ports::{GenerationError, TextGenerator};

/// Errors from the advice use case
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error(transparent)]
    MissingFields(#[from] IncompleteForm),

    #[error("Something went wrong while preparing your advice: {0}")]
    GenerationFailed(#[from] GenerationError),
}

/// Validates a form snapshot, builds its prompt and asks the model for advice
pub struct AdviceUseCase<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> AdviceUseCase<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Dispatch one advice request.
    ///
    /// Validation always runs first; an incomplete request never reaches the
    /// generator. The generated text is returned unmodified.
    pub async fn dispatch_advice(&self, request: &RequestState) -> Result<String, AdviceError> {
        let validated = request.validate()?;
        let prompt = AdvicePrompt::build(&validated);

        debug!(
            situation = %validated.situation(),
            mood = %validated.mood,
            prompt_len = prompt.content().len(),
            "dispatching advice prompt"
        );

        let text = self.generator.generate(&prompt).await?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{FieldId, FormState};
    use crate::domain::profile::{Mood, RoadmapDuration, Situation};
    use crate::domain::prompt::Prompt;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    // Records every prompt it receives
    #[derive(Clone, Default)]
    struct RecordingGenerator {
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingGenerator {
        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.content().to_string());
            Ok("  **Your plan**\n1. Breathe  ".to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &Prompt) -> Result<String, GenerationError> {
            Err(GenerationError::RateLimited)
        }
    }

    fn working_request() -> RequestState {
        FormState::new()
            .set_situation(Situation::Working)
            .set_mood(Mood::Hopeful)
            .set_industry("finance")
            .set_years_experience(3)
            .set_future_goal("start a business")
            .set_roadmap_duration(RoadmapDuration::OneYear)
            .snapshot()
    }

    #[tokio::test]
    async fn complete_request_reaches_generator() {
        let generator = RecordingGenerator::default();
        let use_case = AdviceUseCase::new(generator.clone());

        let text = use_case.dispatch_advice(&working_request()).await.unwrap();

        assert_eq!(text, "  **Your plan**\n1. Breathe  ");
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        for expected in ["finance", "3", "start a business", "1 year", "Hopeful"] {
            assert!(prompts[0].contains(expected), "prompt missing {:?}", expected);
        }
    }

    #[tokio::test]
    async fn incomplete_request_skips_generator() {
        let generator = RecordingGenerator::default();
        let use_case = AdviceUseCase::new(generator.clone());

        let request = FormState::new()
            .set_situation(Situation::Student)
            .set_mood(Mood::Sad)
            .set_future_goal("graduate")
            .set_roadmap_duration(RoadmapDuration::SixMonths)
            .snapshot();

        let err = use_case.dispatch_advice(&request).await.unwrap_err();

        match err {
            AdviceError::MissingFields(missing) => {
                assert_eq!(missing.missing, vec![FieldId::FieldOfStudy]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn unset_situation_is_missing_fields() {
        let generator = RecordingGenerator::default();
        let use_case = AdviceUseCase::new(generator.clone());

        let request = FormState::new().set_mood(Mood::Happy).snapshot();
        let err = use_case.dispatch_advice(&request).await.unwrap_err();

        assert!(matches!(err, AdviceError::MissingFields(_)));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn generator_failure_is_generation_failed() {
        let use_case = AdviceUseCase::new(FailingGenerator);

        let err = use_case.dispatch_advice(&working_request()).await.unwrap_err();

        assert!(matches!(
            err,
            AdviceError::GenerationFailed(GenerationError::RateLimited)
        ));
    }

    #[tokio::test]
    async fn missing_fields_message_is_user_facing() {
        let use_case = AdviceUseCase::new(FailingGenerator);
        let err = use_case
            .dispatch_advice(&RequestState::default())
            .await
            .unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Please complete all required fields"));
    }
}
