//! Terminal-backed elicitation adapter.

use dialoguer::Input;

use mesh_genesis::{AskOptions, GenesisError, Prompt};

/// A [`Prompt`] backed by dialoguer line input on the controlling terminal.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str, options: &AskOptions) -> Result<String, GenesisError> {
        let mut input = Input::<String>::new()
            .with_prompt(question)
            .allow_empty(!options.required);
        if let Some(default) = &options.default {
            input = input.default(default.clone());
        }
        input
            .interact_text()
            .map_err(|e| GenesisError::Prompt(e.to_string()))
    }
}
