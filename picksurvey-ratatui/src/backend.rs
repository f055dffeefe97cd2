//! `SurveyBackend` for the full-screen TUI.

use crossterm::event::{self, Event, KeyEventKind};
use picksurvey::{AnswerMap, SessionError, SurveyBackend, SurveyEngine};
use ratatui::style::Color;
use thiserror::Error;

use crate::{
    Flow, ScreenState,
    terminal::{TerminalSession, Tui},
    ui,
};

#[derive(Debug, Error)]
pub enum RatatuiError {
    /// Esc or `q` while a question was on screen.
    #[error("Survey cancelled by user")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine rejected a choice.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Colors used by the survey screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Title, prompt frame and the filled part of the progress line.
    pub accent: Color,
    /// Prompt and option text.
    pub text: Color,
    /// Frames, help lines and the empty part of the progress line.
    pub muted: Color,
    /// The highlighted option.
    pub cursor: Color,
    /// Image reference and progress label.
    pub info: Color,
    /// Results screen.
    pub done: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            cursor: Color::Yellow,
            info: Color::Blue,
            done: Color::Green,
        }
    }
}

impl Theme {
    /// The terminal's own colors everywhere.
    pub const fn plain() -> Self {
        Self {
            accent: Color::Reset,
            text: Color::Reset,
            muted: Color::Reset,
            cursor: Color::Reset,
            info: Color::Reset,
            done: Color::Reset,
        }
    }
}

/// Full-screen survey backend.
///
/// Questions are shown one at a time with their progress. The results
/// screen lists every answer and lets the user start over with `r`.
#[derive(Debug, Clone)]
pub struct RatatuiBackend {
    /// Used when the question set has no title.
    title: String,
    theme: Theme,
}

impl Default for RatatuiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiBackend {
    pub fn new() -> Self {
        Self {
            title: "Survey".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown when the question set has none.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn event_loop(&self, terminal: &mut Tui, engine: &mut SurveyEngine) -> Result<Flow, RatatuiError> {
        let mut screen = ScreenState::new();

        loop {
            terminal.draw(|frame| ui::draw(frame, &*engine, &screen, &self.theme, &self.title))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match screen.handle_key(engine, key.code)? {
                Flow::Continue => {}
                flow => return Ok(flow),
            }
        }
    }
}

/// Result of a run once the loop has stopped with `flow`.
///
/// A cancel is an error even if an earlier session was completed and then
/// restarted: only the session the user leaves from the results screen counts.
fn finish(flow: Flow, engine: &SurveyEngine) -> Result<AnswerMap, RatatuiError> {
    match flow {
        Flow::Cancel => {
            tracing::debug!(answered = engine.answers().len(), "survey cancelled");
            Err(RatatuiError::Cancelled)
        }
        Flow::Finish | Flow::Continue => Ok(engine.answers().clone()),
    }
}

impl SurveyBackend for RatatuiBackend {
    type Error = RatatuiError;

    fn run(&self, engine: &mut SurveyEngine) -> Result<AnswerMap, Self::Error> {
        let mut session = TerminalSession::enter()?;
        let flow = self.event_loop(session.terminal(), engine);
        let restored = session.leave();

        let flow = flow?;
        restored?;
        finish(flow, engine)
    }
}
