//! Mood-based music recommendation prompt

use crate::domain::profile::Mood;

use super::text::Prompt;

/// Number of songs requested per recommendation
pub const SONG_COUNT: usize = 5;

/// Builds the music recommendation prompt for a mood
pub struct MusicPrompt;

impl MusicPrompt {
    pub fn build(mood: Mood) -> Prompt {
        let content = format!(
            "You are a music and psychology expert. The user wants a recommendation for the following mood:\n\
             Mood: {mood}\n\
             \n\
             Suggest {count} songs that suit this mood. In your suggestions, pay attention to the following:\n\
             - Choose songs that understand the user's emotional state.\n\
             - Explain the psychological effect of each song.\n\
             - Describe emotionally why the song was chosen and how it contributes to the {mood} mood.\n\
             \n\
             Suggest the songs in this format:\n\
             Song Title - Artist\n\
             Explanation: Why was this song chosen and how does it contribute to the {mood} mood?",
            mood = mood,
            count = SONG_COUNT,
        );
        Prompt::new(content)
    }
}
