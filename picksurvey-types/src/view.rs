//! Read-only projections of a session for renderers.
//!
//! Renderers are pure functions of a `SurveyView`: they never touch the
//! engine's state, they only hand user choices back to it.

use crate::{AnswerMap, Progress, Question, QuestionSet};

/// What a renderer should show after the latest transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SurveyView<'a> {
    /// A question waiting for an answer.
    Question {
        title: Option<&'a str>,
        question: &'a Question,
        progress: Progress,
    },

    /// The survey is complete; show the answers.
    Results {
        summary: Summary<'a>,
        progress: Progress,
    },
}

impl SurveyView<'_> {
    pub fn progress(&self) -> Progress {
        match self {
            Self::Question { progress, .. } | Self::Results { progress, .. } => *progress,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Results { .. })
    }
}

/// One line of the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry<'a> {
    pub question: &'a Question,
    /// `None` if the question was never answered.
    pub answer: Option<&'a str>,
}

/// Answers paired with their questions, in question-set order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary<'a> {
    title: Option<&'a str>,
    epilogue: Option<&'a str>,
    entries: Vec<SummaryEntry<'a>>,
}

impl<'a> Summary<'a> {
    pub fn new(questions: &'a QuestionSet, answers: &'a AnswerMap) -> Self {
        let entries = questions
            .iter()
            .map(|question| SummaryEntry {
                question,
                answer: answers.get(question.id()),
            })
            .collect();

        Self {
            title: questions.title(),
            epilogue: questions.epilogue(),
            entries,
        }
    }

    pub fn title(&self) -> Option<&'a str> {
        self.title
    }

    pub fn epilogue(&self) -> Option<&'a str> {
        self.epilogue
    }

    pub fn entries(&self) -> &[SummaryEntry<'a>] {
        &self.entries
    }

    /// Check that every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.answer.is_some())
    }
}
