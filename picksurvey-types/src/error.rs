use crate::QuestionId;

/// Error type for building a question set.
///
/// These are fatal: a survey cannot start from an invalid set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Question set has no questions")]
    EmptyQuestionSet,

    #[error("Question {id} has no options")]
    NoOptions { id: QuestionId },

    #[error("Question id {id} is used more than once")]
    DuplicateId { id: QuestionId },
}

/// Error type for operations that are invalid in the current session state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The survey is complete; only `reset` is accepted.
    #[error("Survey is already complete")]
    AlreadyComplete,

    #[error("'{option}' is not an option of question {id}")]
    UnknownOption { id: QuestionId, option: String },

    #[error("Option {index} is out of range for question {id} ({len} options)")]
    OptionOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },
}

/// Error type for running a survey end to end.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    #[error("Invalid question set: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid session state: {0}")]
    Session(#[from] SessionError),

    /// User cancelled the survey (Ctrl+C, Esc, etc.)
    #[error("Survey cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal setup, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
