//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Gemini API and the filesystem.

pub mod clock;
pub mod config;
pub mod generation;

// Re-export adapters
pub use clock::SystemClock;
pub use config::XdgConfigStore;
pub use generation::GeminiGenerator;
