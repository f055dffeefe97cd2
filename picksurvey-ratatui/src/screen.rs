//! Key handling, kept apart from drawing so it can be tested without a terminal.

use crossterm::event::KeyCode;
use picksurvey::{AnswerPolicy, SessionError, SurveyEngine};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave the TUI with the current answers.
    Finish,
    /// Leave the TUI without finishing the survey.
    Cancel,
}

/// Per-screen UI state that is not part of the session: the option cursor
/// and, while typing a free-text answer, the text so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    selected: usize,
    entry: Option<String>,
}

/// Rows of the option list: the options, plus "Other..." under free text.
pub(crate) fn option_rows(engine: &SurveyEngine) -> usize {
    let listed = engine
        .current_question()
        .map(|q| q.options().len())
        .unwrap_or_default();
    match engine.policy() {
        AnswerPolicy::FreeText => listed + 1,
        AnswerPolicy::Listed => listed,
    }
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Text typed so far, if a free-text answer is being entered.
    pub fn entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }

    /// Apply a key press to the cursor or the engine.
    pub fn handle_key(
        &mut self,
        engine: &mut SurveyEngine,
        key: KeyCode,
    ) -> Result<Flow, SessionError> {
        if engine.is_complete() {
            return Ok(match key {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    engine.reset();
                    *self = Self::new();
                    Flow::Continue
                }
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => Flow::Finish,
                _ => Flow::Continue,
            });
        }
        if self.entry.is_some() {
            return self.handle_entry_key(engine, key);
        }

        let listed = engine.current_question()?.options().len();
        let rows = option_rows(engine);
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(Flow::Cancel),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < rows {
                    self.selected += 1;
                }
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = rows.saturating_sub(1),
            KeyCode::Char(c) => {
                // Digits are one-based shortcuts
                if let Some(n) = c.to_digit(10)
                    && n >= 1
                    && (n as usize) <= rows
                {
                    self.selected = n as usize - 1;
                }
            }
            KeyCode::Enter if self.selected >= listed => {
                self.entry = Some(String::new());
            }
            KeyCode::Enter => {
                engine.select_option(self.selected)?;
                self.selected = 0;
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_entry_key(
        &mut self,
        engine: &mut SurveyEngine,
        key: KeyCode,
    ) -> Result<Flow, SessionError> {
        let Some(text) = self.entry.as_mut() else {
            return Ok(Flow::Continue);
        };
        match key {
            // Back to the option list
            KeyCode::Esc => self.entry = None,
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => text.push(c),
            KeyCode::Enter => {
                let answer = text.trim().to_string();
                if !answer.is_empty() {
                    engine.submit_answer(answer)?;
                    *self = Self::new();
                }
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }
}
