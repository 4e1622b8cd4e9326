//! User input abstraction layer
//!
//! Interactive flows ask their questions through [`Prompter`], so they can
//! run against a real terminal or against scripted answers in tests.

use crate::{Result, TagcatError};

/// Trait for interactive questions
///
/// # Examples
///
/// ```no_run
/// use tagcat::ui::{DialoguerPrompter, Prompter};
///
/// let prompter = DialoguerPrompter::new();
/// if prompter.prompt_confirm("Rename files?", false).unwrap() {
///     println!("Renaming...");
/// }
/// ```
pub trait Prompter {
    /// Ask a yes/no question
    ///
    /// # Errors
    /// Returns `TagcatError::Prompt` if the terminal interaction fails.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Ask for a line of text, offering `default` when given
    ///
    /// # Errors
    /// Returns `TagcatError::Prompt` if the terminal interaction fails.
    fn prompt_text(&self, prompt: &str, default: Option<&str>) -> Result<String>;
}

/// Terminal prompts using dialoguer
pub struct DialoguerPrompter {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| TagcatError::Prompt(e.to_string()))
    }

    fn prompt_text(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);

        if let Some(def) = default {
            input = input.default(def.to_string());
        }

        input
            .interact_text()
            .map_err(|e| TagcatError::Prompt(e.to_string()))
    }
}
