//! Prompt building module

mod advice_prompt;
mod music_prompt;
mod text;

pub use advice_prompt::AdvicePrompt;
pub use music_prompt::{MusicPrompt, SONG_COUNT};
pub use text::Prompt;
