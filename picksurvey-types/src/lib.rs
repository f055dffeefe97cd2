//! Core types for the picksurvey crate.
//!
//! This crate provides the foundational types for running a survey:
//! - `QuestionSet` and `Question` - The fixed, ordered list of multiple-choice questions
//! - `SurveyEngine` - The progression state machine that owns a session
//! - `SessionState`, `AnswerMap` and `Progress` - The state a session accumulates
//! - `SurveyView` - A read-only projection of the state for renderers
//! - `SurveyBackend` trait - For implementing renderers that drive an engine

mod question_id;
pub use question_id::QuestionId;

mod question;
pub use question::Question;

mod question_set;
pub use question_set::QuestionSet;

mod answers;
pub use answers::AnswerMap;

mod state;
pub use state::{Phase, Progress, SessionState};

mod engine;
pub use engine::{AnswerPolicy, SurveyEngine, Transition};

mod view;
pub use view::{Summary, SummaryEntry, SurveyView};

mod error;
pub use error::{ConfigError, SessionError, SurveyError};

mod traits;
pub use traits::SurveyBackend;
