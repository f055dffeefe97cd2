//! Test backend for running surveys without user interaction.
//!
//! `TestBackend` answers questions from a script instead of asking a user.
//! This is useful for testing code that drives a `SurveyEngine`.
//!
//! # Example
//!
//! ```rust
//! use picksurvey::{Question, QuestionSet, SurveyBackend, SurveyEngine, TestBackend};
//!
//! let questions = QuestionSet::new(vec![
//!     Question::new(1, "Host OS?", ["Linux", "macOS"]),
//!     Question::new(2, "Editor?", ["vim", "emacs"]),
//! ])
//! .unwrap();
//!
//! let answers = TestBackend::new()
//!     .with_answer(2, "emacs")
//!     .with_option(1, 0)
//!     .run(&mut SurveyEngine::new(questions))
//!     .unwrap();
//!
//! assert_eq!(answers.get(1), Some("Linux"));
//! assert_eq!(answers.get(2), Some("emacs"));
//! ```

use std::collections::HashMap;

use crate::{AnswerMap, Question, QuestionId, SessionError, SurveyBackend, SurveyEngine};

/// A scripted reply to one question.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Scripted {
    Text(String),
    Option(usize),
}

/// A test backend that answers from pre-configured replies.
///
/// Replies keyed by question id take precedence over replies given in order.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    by_id: HashMap<QuestionId, Scripted>,
    in_order: Vec<Scripted>,
    restarts: usize,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Missing answer for question {0}")]
    MissingAnswer(QuestionId),

    #[error("Answer rejected for question {id}: {source}")]
    Rejected {
        id: QuestionId,
        #[source]
        source: SessionError,
    },
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            in_order: Vec::new(),
            restarts: 0,
        }
    }

    /// Answer the question with the given id with `answer`.
    pub fn with_answer(mut self, id: impl Into<QuestionId>, answer: impl Into<String>) -> Self {
        self.by_id.insert(id.into(), Scripted::Text(answer.into()));
        self
    }

    /// Answer the question with the given id with its option at `index`.
    pub fn with_option(mut self, id: impl Into<QuestionId>, index: usize) -> Self {
        self.by_id.insert(id.into(), Scripted::Option(index));
        self
    }

    /// Answer questions in order, one reply per question position.
    pub fn with_answers<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.in_order = answers
            .into_iter()
            .map(|a| Scripted::Text(a.into()))
            .collect();
        self
    }

    /// Pick options in order, one option index per question position.
    pub fn with_options(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.in_order = indices.into_iter().map(Scripted::Option).collect();
        self
    }

    /// Take the survey again `restarts` times after completing it.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    fn reply_for(&self, id: QuestionId, index: usize) -> Option<&Scripted> {
        self.by_id.get(&id).or_else(|| self.in_order.get(index))
    }
}

impl SurveyBackend for TestBackend {
    type Error = TestBackendError;

    fn run(&self, engine: &mut SurveyEngine) -> Result<AnswerMap, Self::Error> {
        let mut restarts_left = self.restarts;

        loop {
            // `current_question` fails only once the survey is complete
            while let Some(id) = engine.current_question().ok().map(Question::id) {
                let index = engine.current_index();

                let reply = self
                    .reply_for(id, index)
                    .ok_or(TestBackendError::MissingAnswer(id))?;

                let result = match reply {
                    Scripted::Text(text) => engine.submit_answer(text.clone()),
                    Scripted::Option(option) => engine.select_option(*option),
                };
                result.map_err(|source| TestBackendError::Rejected { id, source })?;
            }

            if restarts_left == 0 {
                return Ok(engine.answers().clone());
            }
            restarts_left -= 1;
            engine.reset();
        }
    }
}
