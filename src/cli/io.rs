use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::output;
use crate::cli::CliError;

/// Source of user answers for the menu handlers.
pub trait Prompter {
    /// Reads one line of free-form text; an empty answer is allowed.
    fn text(&mut self, prompt: &str) -> Result<String, CliError>;

    /// Asks a yes/no question; anything but `y`/`yes` counts as no.
    fn confirm(&mut self, prompt: &str) -> Result<bool, CliError>;
}

/// Terminal prompts rendered through `dialoguer`.
pub struct InteractivePrompter {
    theme: ColorfulTheme,
}

impl InteractivePrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for InteractivePrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for InteractivePrompter {
    fn text(&mut self, prompt: &str) -> Result<String, CliError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(CliError::from)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CliError::from)
    }
}

/// Reads answers line by line, echoing each prompt. Used for piped input.
pub struct ScriptPrompter<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn text(&mut self, prompt: &str) -> Result<String, CliError> {
        output::prompt(prompt);
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, CliError> {
        let answer = self.text(&format!("{prompt} (y/n)"))?;
        Ok(is_yes(&answer))
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
