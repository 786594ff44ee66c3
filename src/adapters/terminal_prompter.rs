//! Prompter reading answers from the process's standard streams.

use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::console::Term;
use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Interactive prompter.
///
/// Uses `dialoguer` when attached to a terminal, otherwise prints the prompt
/// to stdout and reads a line from stdin so piped input works.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn is_interactive() -> bool {
        io::stdin().is_terminal() && io::stdout().is_terminal()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, AppError> {
        if Self::is_interactive() {
            let answer = Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text_on(&Term::stdout());
            return interactive_answer(answer);
        }

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{prompt}")?;
        stdout.flush()?;
        drop(stdout);

        Ok(read_answer(&mut io::stdin().lock()))
    }
}

/// Map a dialoguer result to an answer. Only an interrupt aborts the run.
pub(crate) fn interactive_answer(
    answer: Result<String, DialoguerError>,
) -> Result<String, AppError> {
    match answer {
        Ok(value) => Ok(value),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(AppError::PromptCancelled)
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to read answer, using an empty value");
            Ok(String::new())
        }
    }
}

/// Read one answer line. Input anomalies degrade to an empty answer.
pub(crate) fn read_answer<R: BufRead>(reader: &mut R) -> String {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => {
            tracing::debug!("end of input before an answer was given");
            String::new()
        }
        Ok(_) => strip_line_terminator(line),
        Err(err) => {
            tracing::warn!(error = %err, "failed to read answer, using an empty value");
            String::new()
        }
    }
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
