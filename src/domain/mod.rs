//! Domain layer - Core business logic
//!
//! Contains value objects, the form state tracker, prompt templates and
//! domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod form;
pub mod profile;
pub mod prompt;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use form::{FieldId, FormState, RequestState, ValidatedRequest};
pub use profile::{Goal, Mood, RoadmapDuration, Situation, SituationDetails};
pub use prompt::{AdvicePrompt, MusicPrompt, Prompt};
