//! Interactive session: page loop, remembered mood and result rendering

use std::process::ExitCode;
use std::sync::Arc;

use tracing::debug;

use crate::application::ports::{Clock, TextGenerator};
use crate::application::{
    AdviceError, AdviceUseCase, MusicRecommendationUseCase, RecommendationCache,
};
use crate::domain::config::AppConfig;
use crate::domain::form::FormState;
use crate::domain::profile::Mood;
use crate::infrastructure::SystemClock;

use super::app::{configured_generator, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
use super::presenter::Presenter;
use super::wizard::{self, Page};

pub(super) const ADVICE_SPINNER: &str = "Preparing your personal recommendations...";
pub(super) const MUSIC_SPINNER: &str = "Loading music recommendations...";

/// Result of visiting the music page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MusicOutcome {
    /// No mood has been chosen yet in this session
    MoodNotSet,
    Recommendations { mood: Mood, text: String },
    /// The model gave no usable result; try again later
    Unavailable { mood: Mood },
}

/// One user's session.
///
/// The mood chosen on the advice page is remembered for the music page.
pub struct Session<G: TextGenerator + Clone, C: Clock> {
    advice: AdviceUseCase<G>,
    music: MusicRecommendationUseCase<G, C>,
    mood: Option<Mood>,
}

impl<G: TextGenerator + Clone, C: Clock> Session<G, C> {
    pub fn new(generator: G, cache: Arc<RecommendationCache<C>>) -> Self {
        Self {
            advice: AdviceUseCase::new(generator.clone()),
            music: MusicRecommendationUseCase::new(generator, cache),
            mood: None,
        }
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// Snapshot the form and dispatch it. The form's mood is remembered
    /// even when the dispatch fails.
    pub async fn dispatch_advice(&mut self, form: &FormState) -> Result<String, AdviceError> {
        if let Some(mood) = form.mood() {
            self.mood = Some(mood);
        }
        self.advice.dispatch_advice(&form.snapshot()).await
    }

    /// Recommendations for the remembered mood
    pub async fn music(&self) -> MusicOutcome {
        let Some(mood) = self.mood else {
            return MusicOutcome::MoodNotSet;
        };
        match self.music.get_recommendations(mood).await {
            Some(text) => MusicOutcome::Recommendations { mood, text },
            None => MusicOutcome::Unavailable { mood },
        }
    }
}

/// Run the interactive session until the user quits
pub async fn run_session(config: &AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let generator = match configured_generator(config) {
        Ok(generator) => generator,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let ttl = config.cache_ttl_or_default();
    debug!(%ttl, "starting interactive session");
    let cache = Arc::new(RecommendationCache::new(SystemClock, ttl.as_std()));
    let mut session = Session::new(generator, cache);

    presenter.heading("Welcome to Life Coach");

    loop {
        let page = match wizard::select_page() {
            Ok(page) => page,
            Err(e) => {
                presenter.error(&format!("Failed to read selection: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        };

        match page {
            Page::Advice => {
                let form = match wizard::fill_form(session.mood()) {
                    Ok(form) => form,
                    Err(e) => {
                        presenter.error(&format!("Failed to read input: {}", e));
                        return ExitCode::from(EXIT_ERROR);
                    }
                };

                presenter.start_spinner(ADVICE_SPINNER);
                let result = session.dispatch_advice(&form).await;
                presenter.stop_spinner();
                show_advice(&presenter, result);
            }
            Page::Music => {
                if session.mood().is_some() {
                    presenter.start_spinner(MUSIC_SPINNER);
                }
                let outcome = session.music().await;
                presenter.stop_spinner();
                show_music(&presenter, &outcome);
            }
            Page::Quit => break,
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Render an advice result; returns the matching exit code
pub fn show_advice(presenter: &Presenter, result: Result<String, AdviceError>) -> u8 {
    match result {
        Ok(text) => {
            presenter.heading("Here are your personal recommendations:");
            presenter.output(&text);
            EXIT_SUCCESS
        }
        Err(e @ AdviceError::MissingFields(_)) => {
            presenter.error(&e.to_string());
            EXIT_USAGE_ERROR
        }
        Err(e @ AdviceError::GenerationFailed(_)) => {
            presenter.error(&e.to_string());
            EXIT_ERROR
        }
    }
}

/// Render a music outcome; returns the matching exit code
pub fn show_music(presenter: &Presenter, outcome: &MusicOutcome) -> u8 {
    match outcome {
        MusicOutcome::MoodNotSet => {
            presenter.warn("Please choose your mood on the life coach page first.");
            EXIT_USAGE_ERROR
        }
        MusicOutcome::Recommendations { mood, text } => {
            presenter.heading(&format!("Music for your {} mood", mood));
            presenter.output(text);
            EXIT_SUCCESS
        }
        MusicOutcome::Unavailable { .. } => {
            presenter.warn(
                "Could not fetch music recommendations right now. Please try again later.",
            );
            EXIT_ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::GenerationError;
    use crate::domain::profile::{RoadmapDuration, Situation};
    use crate::domain::prompt::Prompt;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Default)]
    struct EchoGenerator {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("echo: {}", prompt.content().len()))
        }
    }

    fn session(generator: EchoGenerator) -> Session<EchoGenerator, SystemClock> {
        let cache = Arc::new(RecommendationCache::with_default_ttl(SystemClock));
        Session::new(generator, cache)
    }

    #[tokio::test]
    async fn music_requires_mood() {
        let generator = EchoGenerator::default();
        let session = session(generator.clone());

        assert_eq!(session.music().await, MusicOutcome::MoodNotSet);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn advice_page_mood_carries_to_music_page() {
        let generator = EchoGenerator::default();
        let mut session = session(generator.clone());

        // Incomplete form: dispatch fails but the mood is remembered
        let mut form = FormState::new();
        form.set_mood(Mood::Excited).set_situation(Situation::Student);
        assert!(session.dispatch_advice(&form).await.is_err());
        assert_eq!(session.mood(), Some(Mood::Excited));

        match session.music().await {
            MusicOutcome::Recommendations { mood, .. } => assert_eq!(mood, Mood::Excited),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repeated_music_visits_hit_cache() {
        let generator = EchoGenerator::default();
        let mut session = session(generator.clone());

        let mut form = FormState::new();
        form.set_mood(Mood::Sad)
            .set_situation(Situation::NotWorking)
            .set_future_goal("rest")
            .set_roadmap_duration(RoadmapDuration::SixMonths);
        session.dispatch_advice(&form).await.unwrap();

        let first = session.music().await;
        let second = session.music().await;

        assert_eq!(first, second);
        // one advice call plus one music call
        assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn exit_codes_follow_outcome() {
        let presenter = Presenter::new();
        assert_eq!(show_music(&presenter, &MusicOutcome::MoodNotSet), EXIT_USAGE_ERROR);
        assert_eq!(
            show_music(&presenter, &MusicOutcome::Unavailable { mood: Mood::Sad }),
            EXIT_ERROR
        );
        assert_eq!(
            show_advice(&presenter, Err(AdviceError::GenerationFailed(GenerationError::RateLimited))),
            EXIT_ERROR
        );
        assert_eq!(show_advice(&presenter, Ok("plan".to_string())), EXIT_SUCCESS);
    }
}
