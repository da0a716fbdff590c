//! Mood-based music recommendation use case

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::profile::Mood;
use crate::domain::prompt::MusicPrompt;

use super::cache::RecommendationCache;
use super::ports::{Clock, TextGenerator};

/// Recommends songs for a mood, serving repeated requests from the cache.
///
/// This feature is best-effort: failures produce no result rather than an
/// error, and are never cached.
pub struct MusicRecommendationUseCase<G: TextGenerator, C: Clock> {
    generator: G,
    cache: Arc<RecommendationCache<C>>,
}

impl<G: TextGenerator, C: Clock> MusicRecommendationUseCase<G, C> {
    pub fn new(generator: G, cache: Arc<RecommendationCache<C>>) -> Self {
        Self { generator, cache }
    }

    /// Get recommendations for `mood`.
    ///
    /// The mood's cache slot stays locked while the model is called, so
    /// concurrent requests for the same mood make a single call.
    pub async fn get_recommendations(&self, mood: Mood) -> Option<String> {
        let mut slot = self.cache.lock(mood).await;

        if let Some(text) = slot.fresh() {
            debug!(%mood, "music recommendation cache hit");
            return Some(text.to_string());
        }

        debug!(%mood, "music recommendation cache miss");
        let prompt = MusicPrompt::build(mood);

        match self.generator.generate(&prompt).await {
            Ok(text) => {
                slot.store(text.clone());
                Some(text)
            }
            Err(e) => {
                warn!(%mood, error = %e, "music recommendation failed");
                None
            }
        }
    }
}
