//! The survey progression state machine.
//!
//! A session moves forward one question per submitted answer:
//!
//! ```text
//! Answering(0) -> Answering(1) -> ... -> Answering(N-1) -> Complete
//! ```
//!
//! `reset` returns any state to `Answering(0)`. There is no skipping,
//! going back, or branching.

use crate::{
    AnswerMap, Phase, Progress, Question, QuestionSet, SessionError, SessionState, Summary,
    SurveyView,
};

/// Which answers `submit_answer` accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnswerPolicy {
    /// Only the text of one of the current question's options.
    #[default]
    Listed,

    /// Any text, for free-form answers.
    FreeText,
}

/// What a successful submission did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved on to the question at `index`.
    Advanced { index: usize },

    /// The last question was answered.
    Completed,
}

/// Owns a question set and the state of one session over it.
#[derive(Debug, Clone)]
pub struct SurveyEngine {
    questions: QuestionSet,
    state: SessionState,
    policy: AnswerPolicy,
}

impl SurveyEngine {
    /// Start a session at the first question.
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            state: SessionState::initial(),
            policy: AnswerPolicy::default(),
        }
    }

    /// Set the answer policy.
    pub fn with_policy(mut self, policy: AnswerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn answers(&self) -> &AnswerMap {
        self.state.answers()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Number of questions in the set.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Index of the question being answered, or `total()` once complete.
    pub fn current_index(&self) -> usize {
        self.state.current_index(self.total())
    }

    /// The question waiting for an answer.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        match self.state.phase() {
            Phase::Answering(index) => self
                .questions
                .get(index)
                .ok_or(SessionError::AlreadyComplete),
            Phase::Complete => Err(SessionError::AlreadyComplete),
        }
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.current_index(), self.total())
    }

    /// Record an answer for the current question and move on.
    ///
    /// Overwrites any earlier answer for the same question. Fails without
    /// touching the state if the survey is complete or, under
    /// `AnswerPolicy::Listed`, if `option` is not offered.
    pub fn submit_answer(&mut self, option: impl Into<String>) -> Result<Transition, SessionError> {
        let option = option.into();
        let Phase::Answering(index) = self.state.phase() else {
            tracing::warn!("answer submitted after completion");
            return Err(SessionError::AlreadyComplete);
        };
        let question = self.current_question()?;
        let id = question.id();

        if self.policy == AnswerPolicy::Listed && !question.offers(&option) {
            return Err(SessionError::UnknownOption { id, option });
        }

        tracing::debug!(question = %id, index, answer = %option, "answer recorded");
        self.state.answers_mut().insert(id, option);

        let next = index + 1;
        if next < self.total() {
            self.state.set_phase(Phase::Answering(next));
            Ok(Transition::Advanced { index: next })
        } else {
            self.state.set_phase(Phase::Complete);
            tracing::info!(answers = self.state.answers().len(), "survey complete");
            Ok(Transition::Completed)
        }
    }

    /// Answer the current question with the option at `index`.
    pub fn select_option(&mut self, index: usize) -> Result<Transition, SessionError> {
        let question = self.current_question()?;
        let option = question
            .option(index)
            .ok_or(SessionError::OptionOutOfRange {
                id: question.id(),
                index,
                len: question.options().len(),
            })?
            .to_string();
        self.submit_answer(option)
    }

    /// Discard all answers and go back to the first question.
    pub fn reset(&mut self) {
        tracing::info!(
            answered = self.state.answers().len(),
            complete = self.state.is_complete(),
            "survey reset"
        );
        self.state = SessionState::initial();
    }

    /// Answers in question order, once the survey is complete.
    pub fn summary(&self) -> Option<Summary<'_>> {
        self.is_complete()
            .then(|| Summary::new(&self.questions, self.state.answers()))
    }

    /// Read-only projection of the current state for renderers.
    pub fn view(&self) -> SurveyView<'_> {
        match self.current_question() {
            Ok(question) => SurveyView::Question {
                title: self.questions.title(),
                question,
                progress: self.progress(),
            },
            Err(_) => SurveyView::Results {
                summary: Summary::new(&self.questions, self.state.answers()),
                progress: self.progress(),
            },
        }
    }

    /// Consume the engine, returning the collected answers.
    pub fn into_answers(self) -> AnswerMap {
        self.state.into_answers()
    }
}
