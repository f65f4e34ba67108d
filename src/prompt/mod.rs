//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library

use crate::error::{Error, Result};

pub mod dialoguer;
pub mod interface;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

/// Asks until `validate` accepts the answer.
///
/// Rejected answers (`Error::InvalidInput`) are reported and asked again;
/// any other error, including a failing prompt, ends the loop.
pub fn ask_validated<T>(
    prompter: &dyn PromptProvider,
    config: &TextPromptConfig,
    validate: impl Fn(&str) -> Result<T>,
) -> Result<T> {
    loop {
        let answer = prompter.prompt_text(config)?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(Error::InvalidInput(msg)) => {
                log::debug!("Rejected answer {answer:?} to {:?}", config.prompt);
                prompter.say(&format!("Invalid answer: {msg}."));
            }
            Err(e) => return Err(e),
        }
    }
}

/// Asks a yes/no question unless `skip` is set, in which case the answer is yes.
pub fn confirm(prompter: &dyn PromptProvider, skip: bool, prompt: &str) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    prompter.prompt_confirmation(&ConfirmationConfig { prompt: prompt.to_string(), default: true })
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned answers and records everything said.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        pub texts: RefCell<VecDeque<String>>,
        pub confirmations: RefCell<VecDeque<bool>>,
        pub said: RefCell<Vec<String>>,
        pub asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn new(texts: &[&str], confirmations: &[bool]) -> Self {
            Self {
                texts: RefCell::new(texts.iter().map(|t| t.to_string()).collect()),
                confirmations: RefCell::new(confirmations.iter().copied().collect()),
                ..Default::default()
            }
        }
    }

    fn exhausted() -> Error {
        Error::Other(anyhow::anyhow!("no scripted answer left"))
    }

    impl TextPrompter for ScriptedPrompter {
        fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
            self.asked.borrow_mut().push(config.prompt.clone());
            let answer = self.texts.borrow_mut().pop_front().ok_or_else(exhausted)?;
            // An empty answer picks the default, as at the terminal.
            match (answer.is_empty(), &config.default) {
                (true, Some(default)) => Ok(default.clone()),
                _ => Ok(answer),
            }
        }
    }

    impl ConfirmationPrompter for ScriptedPrompter {
        fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
            self.asked.borrow_mut().push(config.prompt.clone());
            self.confirmations.borrow_mut().pop_front().ok_or_else(exhausted)
        }
    }

    impl Narrator for ScriptedPrompter {
        fn say(&self, message: &str) {
            self.said.borrow_mut().push(message.to_string());
        }
    }
}
