use crate::domain::AppError;

/// Port for asking the user a single question.
pub trait Prompter {
    /// Show `prompt` and return one line of input without its line terminator.
    ///
    /// End of input yields an empty string.
    fn ask(&mut self, prompt: &str) -> Result<String, AppError>;
}
