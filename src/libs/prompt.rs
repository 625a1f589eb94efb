//! Interactive input for the menu loop.
//!
//! Handlers never talk to the terminal directly; they ask a [`Prompter`] for
//! text. The console implementation is backed by dialoguer, and tests supply
//! their own scripted implementation.

use crate::libs::error::{EmsError, EmsResult};
use dialoguer::{theme::ColorfulTheme, Input};

/// Source of user input for menu handlers.
pub trait Prompter {
    /// Reads a required, non-empty line.
    fn text(&mut self, prompt: &str) -> EmsResult<String>;

    /// Reads a line that may be left empty. Empty input yields `None`.
    fn optional_text(&mut self, prompt: &str) -> EmsResult<Option<String>>;
}

/// Console prompter using dialoguer's themed `Input`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        DialoguerPrompter {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str) -> EmsResult<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| EmsError::Prompt(e.to_string()))?;
        Ok(value.trim().to_string())
    }

    fn optional_text(&mut self, prompt: &str) -> EmsResult<Option<String>> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| EmsError::Prompt(e.to_string()))?;
        let value = value.trim();
        Ok(if value.is_empty() { None } else { Some(value.to_string()) })
    }
}

/// Parses a salary: any finite, non-negative number.
pub fn parse_salary(input: &str) -> EmsResult<f64> {
    let salary = parse_amount("salary", input)?;
    if salary < 0.0 {
        return Err(EmsError::validation("salary", input, "must not be negative"));
    }
    Ok(salary)
}

/// Parses a finite number for the named field.
pub fn parse_amount(field: &'static str, input: &str) -> EmsResult<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(EmsError::validation(field, input, "expected a numeric value")),
    }
}

/// Parses an employee id.
pub fn parse_id(input: &str) -> EmsResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| EmsError::validation("employee ID", input, "expected a whole number"))
}
