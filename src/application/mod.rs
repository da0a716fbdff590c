//! Application layer - Use cases and port interfaces
//!
//! Contains the advice and music orchestration, the recommendation cache,
//! and trait definitions for external system interactions.

pub mod advice;
pub mod cache;
pub mod music;
pub mod ports;

// Re-export use cases
pub use advice::{AdviceError, AdviceUseCase};
pub use cache::{CacheSlot, RecommendationCache, DEFAULT_TTL};
pub use music::MusicRecommendationUseCase;
