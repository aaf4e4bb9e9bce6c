//! Interactive input behind an injectable [`Prompter`].
//!
//! Commands only prompt for values that were not supplied as flags; the
//! answers feed request validation before anything touches the filesystem.
use anyhow::{Context as _, Result, bail};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Ask for one line of text. The answer is trimmed of surrounding
    /// whitespace (including a stray `\r`).
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be read (e.g. no terminal).
    fn input(&self, prompt: &str, allow_empty: bool) -> Result<String>;

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be read (e.g. no terminal).
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// [`Prompter`] that reads from the terminal with [`dialoguer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str, allow_empty: bool) -> Result<String> {
        let answer: String = dialoguer::Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()
            .with_context(|| format!("reading answer to '{prompt}'"))?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .with_context(|| format!("reading answer to '{prompt}'"))
    }
}

/// [`Prompter`] that replays pre-recorded answers in order.
///
/// Confirmations accept `y`/`Y` as yes and anything else as no. Every
/// question asked is kept so callers can check what was prompted.
///
/// # Examples
///
/// ```
/// use yangine_scaffold::prompt::{Prompter, ScriptedPrompter};
///
/// let prompter = ScriptedPrompter::new(["Pong", "n"]);
/// assert_eq!(prompter.input("Project name", false).unwrap(), "Pong");
/// assert!(!prompter.confirm("Custom title?").unwrap());
/// assert_eq!(prompter.asked(), vec!["Project name", "Custom title?"]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    /// Create a prompter that answers with `answers`, first to last.
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked so far, in order.
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked
            .lock()
            .map_or_else(|_| Vec::new(), |guard| guard.clone())
    }

    /// Number of answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.lock().map_or(0, |guard| guard.len())
    }

    fn next_answer(&self, prompt: &str) -> Result<String> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(prompt.to_string());
        }
        let answer = self
            .answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front());
        match answer {
            Some(answer) => Ok(answer.trim().to_string()),
            None => bail!("no scripted answer for '{prompt}'"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, allow_empty: bool) -> Result<String> {
        let answer = self.next_answer(prompt)?;
        if answer.is_empty() && !allow_empty {
            bail!("empty answer for '{prompt}'");
        }
        Ok(answer)
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(self.next_answer(prompt)?.eq_ignore_ascii_case("y"))
    }
}

/// Use `value` when present, otherwise ask for it.
///
/// # Errors
///
/// Returns an error if the prompter cannot produce an answer.
pub fn value_or_ask(
    prompter: &dyn Prompter,
    value: Option<&str>,
    prompt: &str,
    allow_empty: bool,
) -> Result<String> {
    match value {
        Some(v) => Ok(v.trim().to_string()),
        None => prompter.input(prompt, allow_empty),
    }
}

/// Resolve an optional custom name: use `value` when present, otherwise ask
/// `question` and, on yes, ask for the name; fall back to `default`.
///
/// # Errors
///
/// Returns an error if the prompter cannot produce an answer.
pub fn custom_or_default(
    prompter: &dyn Prompter,
    value: Option<&str>,
    question: &str,
    default: String,
) -> Result<String> {
    if let Some(v) = value {
        return Ok(v.trim().to_string());
    }
    if prompter.confirm(question)? {
        prompter.input("What name would you like?", false)
    } else {
        Ok(default)
    }
}
