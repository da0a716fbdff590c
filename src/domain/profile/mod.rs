//! User profile module

mod mood;
mod roadmap;
mod situation;

pub use mood::{Mood, ALL_MOODS};
pub use roadmap::{RoadmapDuration, ALL_ROADMAP_DURATIONS};
pub use situation::{Goal, Situation, SituationDetails, ALL_SITUATIONS};
