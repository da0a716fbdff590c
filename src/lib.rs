//! Life Coach - mood-aware advice and music recommendations
//!
//! This crate collects a user's mood and life situation through a form,
//! turns it into a coaching prompt and asks Google Gemini for advice. The
//! chosen mood also drives cached song recommendations.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Form state, profile value objects, prompt templates and errors
//! - **Application**: Use cases, the recommendation cache and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, system clock, config file)
//! - **CLI**: Command-line interface, interactive session and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
