//! Ratatui backend for picksurvey.
//!
//! Presents one question per screen in an alternate-screen TUI with a
//! progress bar, an option list and a results screen with a restart key.
//!
//! Keys:
//! - `Up`/`k`, `Down`/`j` or a digit move the selection
//! - `Enter` answers with the selected option; under free text the last
//!   row, "Other...", opens a text field (Enter submits, Esc goes back)
//! - `r` on the results screen takes the survey again
//! - `Esc`/`q` cancels (on the results screen: finishes)
//!
//! # Example
//!
//! ```ignore
//! use picksurvey::{SurveyBackend, SurveyEngine};
//! use picksurvey_ratatui::RatatuiBackend;
//!
//! let mut engine = SurveyEngine::new(sample_surveys::preferences());
//! let answers = RatatuiBackend::new().with_title("Preferences").run(&mut engine)?;
//! ```

mod backend;
mod screen;
mod terminal;
mod ui;

pub use backend::{RatatuiBackend, RatatuiError, Theme};
pub use screen::{Flow, ScreenState};
pub use ui::{OTHER_ROW, draw};
