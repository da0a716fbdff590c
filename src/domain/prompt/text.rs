//! Prompt value object

use std::fmt;

/// A finished prompt, ready to be sent to the generative model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    pub(crate) fn new(content: String) -> Self {
        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
