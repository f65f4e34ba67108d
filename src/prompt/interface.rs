//! Pure interfaces for prompting without external dependencies
//!
//! The answer collector only talks to these traits, so it can be driven by a
//! terminal implementation or by scripted answers in tests.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
    pub allow_empty: bool,
}

impl TextPromptConfig {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), default: None, allow_empty: false }
    }

    pub fn with_default(mut self, default: Option<&str>) -> Self {
        self.default = default.map(str::to_owned);
        self
    }

    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Output channel for headings and explanatory text between questions
pub trait Narrator {
    fn say(&self, message: &str);
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + ConfirmationPrompter + Narrator {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where T: TextPrompter + ConfirmationPrompter + Narrator {}
