//! Interactive prompt service.

#[cfg(test)]
use std::collections::VecDeque;

use cardmaker::{CardError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Check applied to free-text answers; `Err` carries the message shown to the user.
pub type Validator<'v> = &'v dyn Fn(&str) -> std::result::Result<(), String>;

/// Source of answers for the startup questions.
pub trait Prompter {
    /// Ask for free text, re-asking until `validate` accepts the answer.
    fn text(&mut self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String>;

    /// Ask the user to pick one of `items`; returns the chosen index.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;
}

/// Prompts on the controlling terminal.
#[derive(Default)]
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(|input: &String| validate(input))
            .interact_text()
            .map_err(|err| aborted(prompt, err))
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|err| aborted(prompt, err))
    }
}

fn aborted(prompt: &str, err: dialoguer::Error) -> CardError {
    CardError::PromptAborted {
        label: prompt.to_string(),
        reason: err.to_string(),
    }
}

/// Replays canned answers; an empty answer takes the default.
///
/// A rejected text answer is skipped and the next one is tried, the way a
/// user would retype after a validation error.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| CardError::PromptAborted {
            label: prompt.to_string(),
            reason: "no more answers".to_string(),
        })
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn text(&mut self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String> {
        loop {
            let answer = self.next(prompt)?;
            let answer = if answer.is_empty() {
                default.to_string()
            } else {
                answer
            };
            if validate(&answer).is_ok() {
                return Ok(answer);
            }
        }
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let answer = self.next(prompt)?;
        if answer.is_empty() {
            return Ok(default);
        }
        items
            .iter()
            .position(|item| *item == answer)
            .ok_or_else(|| CardError::PromptAborted {
                label: prompt.to_string(),
                reason: format!("'{answer}' is not one of the options"),
            })
    }
}
