//! # Elicitation Port
//!
//! The pipeline never talks to a terminal directly: it asks questions
//! through the [`Prompt`] trait and consumes already-normalized answers.
//! The CLI provides an interactive implementation; tests use
//! [`ScriptedPrompt`].
//!
//! Answer normalization: a carriage-return-only or empty answer means "use
//! the default", and stray `\r` characters are stripped before any parsing.

use std::collections::VecDeque;

use crate::errors::GenesisError;

/// Options governing one question.
#[derive(Debug, Clone, Default)]
pub struct AskOptions {
    /// Answer substituted for an empty reply.
    pub default: Option<String>,
    /// Whether an answer must ultimately be non-empty.
    pub required: bool,
}

impl AskOptions {
    /// A required question with a default answer.
    pub fn with_default(default: &str) -> Self {
        Self {
            default: Some(default.to_string()),
            required: true,
        }
    }

    /// An optional question with no default (empty answers pass through).
    pub fn optional() -> Self {
        Self {
            default: None,
            required: false,
        }
    }
}

/// Source of interactive answers.
pub trait Prompt {
    /// Ask `question`, returning the raw answer string.
    fn ask(&mut self, question: &str, options: &AskOptions) -> Result<String, GenesisError>;
}

/// Ask a question and normalize the answer: strip stray `\r`, substitute the
/// default for blank replies.
pub fn ask_normalized(
    prompt: &mut dyn Prompt,
    question: &str,
    options: &AskOptions,
) -> Result<String, GenesisError> {
    let raw = prompt.ask(question, options)?;
    let cleaned = raw.replace('\r', "");
    if cleaned.is_empty() {
        if let Some(default) = &options.default {
            return Ok(default.clone());
        }
    }
    Ok(cleaned)
}

/// A prompt fed from a fixed list of answers, for tests.
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
}

impl ScriptedPrompt {
    /// Script the given answers, consumed in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, question: &str, _options: &AskOptions) -> Result<String, GenesisError> {
        self.answers
            .pop_front()
            .ok_or_else(|| GenesisError::Prompt(format!("no scripted answer for {question:?}")))
    }
}
