//! Scripted prompter for testing

use std::cell::RefCell;
use std::collections::VecDeque;

use super::input::Prompter;
use crate::{Result, TagcatError};

/// One canned answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Confirm(bool),
    Text(String),
    /// Accept whatever default the prompt offers
    Default,
}

/// Prompter that replays predetermined answers in order
///
/// Useful for testing interactive flows without a terminal. Asking more
/// questions than were scripted, or a question of the wrong kind, is an
/// error.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::default(),
        }
    }

    /// Prompts shown so far
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// True once every scripted answer was consumed
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.answers.borrow().is_empty()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| TagcatError::Prompt(format!("no scripted answer for '{prompt}'")))
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(yes),
            Answer::Default => Ok(default),
            Answer::Text(text) => Err(TagcatError::Prompt(format!(
                "expected a yes/no answer for '{prompt}', got '{text}'"
            ))),
        }
    }

    fn prompt_text(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text),
            Answer::Default => Ok(default.unwrap_or_default().to_string()),
            Answer::Confirm(yes) => Err(TagcatError::Prompt(format!(
                "expected text for '{prompt}', got {yes}"
            ))),
        }
    }
}
