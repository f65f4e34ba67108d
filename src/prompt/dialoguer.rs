//! Dialoguer-based implementations of prompt interfaces

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, Narrator, TextPromptConfig, TextPrompter,
};
use crate::error::Result;
use dialoguer::{Confirm, Input};

/// Terminal prompter built on dialoguer
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(&config.prompt)
            .allow_empty(config.allow_empty);

        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }

        Ok(input.interact_text()?)
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        Ok(Confirm::new().with_prompt(&config.prompt).default(config.default).interact()?)
    }
}

impl Narrator for DialoguerPrompter {
    fn say(&self, message: &str) {
        println!("{message}");
    }
}
