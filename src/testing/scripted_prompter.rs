use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter replaying canned answers and recording the prompts it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
    cancel_when_exhausted: bool,
}

impl ScriptedPrompter {
    /// Answers are consumed in order; once exhausted every prompt gets `""`.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { answers: answers.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Like `new`, but the first prompt past the script is cancelled.
    pub fn cancelling_after<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { cancel_when_exhausted: true, ..Self::new(answers) }
    }

    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        self.asked.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None if self.cancel_when_exhausted => Err(AppError::PromptCancelled),
            None => Ok(String::new()),
        }
    }
}
