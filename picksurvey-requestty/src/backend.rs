//! Requestty backend implementation for SurveyBackend trait.

use picksurvey::{
    AnswerMap, AnswerPolicy, Question, SessionError, SurveyBackend, SurveyEngine, SurveyView,
    Transition,
};
use thiserror::Error;

use crate::render;

/// Error type for the Requestty backend.
#[derive(Debug, Error)]
pub enum RequesttyError {
    /// User cancelled the survey (e.g., pressed Ctrl+C).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An error occurred during prompting.
    #[error("Prompt error: {0}")]
    PromptError(String),

    /// Unexpected answer type received.
    #[error("Unexpected answer type: expected {expected}, got {got}")]
    UnexpectedAnswerType { expected: String, got: String },

    /// The engine rejected a choice.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<requestty::ErrorKind> for RequesttyError {
    fn from(err: requestty::ErrorKind) -> Self {
        match err {
            requestty::ErrorKind::Interrupted => Self::Cancelled,
            _ => Self::PromptError(err.to_string()),
        }
    }
}

/// What the user gave for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reply {
    /// Index into the question's options.
    Option(usize),
    /// Typed text, only offered under `AnswerPolicy::FreeText`.
    Text(String),
}

/// Entries of the select prompt. Free-text sessions get a trailing
/// [`render::OTHER_CHOICE`] entry that leads to a text prompt.
pub(crate) fn choice_labels(question: &Question, policy: AnswerPolicy) -> Vec<String> {
    let mut labels = question.options().to_vec();
    if policy == AnswerPolicy::FreeText {
        labels.push(render::OTHER_CHOICE.to_string());
    }
    labels
}

/// Whether the select prompt index points past the listed options.
pub(crate) fn is_other(question: &Question, index: usize) -> bool {
    index >= question.options().len()
}

pub(crate) fn apply_reply(
    engine: &mut SurveyEngine,
    reply: Reply,
) -> Result<Transition, SessionError> {
    match reply {
        Reply::Option(index) => engine.select_option(index),
        Reply::Text(text) => engine.submit_answer(text),
    }
}

/// Requestty backend for interactive CLI prompts.
///
/// Each question is shown with its progress and image reference, then
/// answered with a select prompt. After the last question the answers are
/// printed and the user may take the survey again.
#[derive(Debug, Clone)]
pub struct RequesttyBackend {
    bar_width: usize,
    offer_restart: bool,
    show_summary: bool,
}

impl Default for RequesttyBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RequesttyBackend {
    /// Create a new Requestty backend.
    pub const fn new() -> Self {
        Self {
            bar_width: render::DEFAULT_BAR_WIDTH,
            offer_restart: true,
            show_summary: true,
        }
    }

    /// Set the width of the progress bar.
    pub const fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }

    /// Finish after the first completed survey instead of asking to restart.
    pub const fn without_restart(mut self) -> Self {
        self.offer_restart = false;
        self
    }

    /// Do not print the results summary; the caller reports the answers.
    pub const fn without_summary(mut self) -> Self {
        self.show_summary = false;
        self
    }

    pub const fn prints_summary(&self) -> bool {
        self.show_summary
    }

    /// Ask a single question.
    fn ask_question(
        &self,
        question: &Question,
        policy: AnswerPolicy,
    ) -> Result<Reply, RequesttyError> {
        let q = requestty::Question::select(format!("q{}", question.id()))
            .message(question.prompt())
            .choices(choice_labels(question, policy))
            .build();

        let index = match requestty::prompt_one(q)? {
            requestty::Answer::ListItem(item) => item.index,
            other => {
                return Err(RequesttyError::UnexpectedAnswerType {
                    expected: "ListItem".to_string(),
                    got: format!("{other:?}"),
                });
            }
        };

        if is_other(question, index) {
            self.ask_text(question).map(Reply::Text)
        } else {
            Ok(Reply::Option(index))
        }
    }

    fn ask_text(&self, question: &Question) -> Result<String, RequesttyError> {
        let q = requestty::Question::input(format!("q{}-other", question.id()))
            .message("Your answer")
            .validate(|value: &str, _: &requestty::Answers| -> Result<(), String> {
                if value.trim().is_empty() {
                    Err("Please enter an answer".to_string())
                } else {
                    Ok(())
                }
            })
            .build();

        match requestty::prompt_one(q)? {
            requestty::Answer::String(s) => Ok(s.trim().to_string()),
            other => Err(RequesttyError::UnexpectedAnswerType {
                expected: "String".to_string(),
                got: format!("{other:?}"),
            }),
        }
    }

    fn ask_restart(&self) -> Result<bool, RequesttyError> {
        let q = requestty::Question::confirm("restart")
            .message("Take another survey?")
            .default(false)
            .build();

        match requestty::prompt_one(q)? {
            requestty::Answer::Bool(b) => Ok(b),
            other => Err(RequesttyError::UnexpectedAnswerType {
                expected: "Bool".to_string(),
                got: format!("{other:?}"),
            }),
        }
    }
}

impl SurveyBackend for RequesttyBackend {
    type Error = RequesttyError;

    fn run(&self, engine: &mut SurveyEngine) -> Result<AnswerMap, Self::Error> {
        // Show prelude if present
        if let Some(prelude) = engine.questions().prelude() {
            println!("{prelude}");
            println!();
        }

        loop {
            loop {
                let reply = match engine.view() {
                    SurveyView::Question {
                        title,
                        question,
                        progress,
                    } => {
                        println!(
                            "{}",
                            render::question_block(title, question, progress, self.bar_width)
                        );
                        self.ask_question(question, engine.policy())?
                    }
                    SurveyView::Results { .. } => break,
                };
                apply_reply(engine, reply)?;
                println!();
            }

            if self.show_summary
                && let Some(summary) = engine.summary()
            {
                print!("{}", render::summary(&summary));
                println!();
            }

            if !self.offer_restart || !self.ask_restart()? {
                return Ok(engine.answers().clone());
            }
            tracing::debug!("restarting survey");
            engine.reset();
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picksurvey::QuestionSet;

    fn poll(policy: AnswerPolicy) -> SurveyEngine {
        SurveyEngine::new(
            QuestionSet::new(vec![
                Question::new(1, "Coffee or tea?", ["Coffee", "Tea"]),
                Question::new(2, "Morning or night?", ["Morning", "Night"]),
            ])
            .unwrap(),
        )
        .with_policy(policy)
    }

    #[test]
    fn test_backend_creation() {
        let backend = RequesttyBackend::new();
        assert!(backend.prints_summary());
        let backend = RequesttyBackend::new()
            .with_bar_width(10)
            .without_restart()
            .without_summary();
        assert_eq!(backend.bar_width, 10);
        assert!(!backend.offer_restart);
        assert!(!backend.prints_summary());
    }

    #[test]
    fn test_error_types() {
        let err = RequesttyError::Cancelled;
        assert_eq!(err.to_string(), "Survey cancelled by user");

        let err = RequesttyError::PromptError("test error".to_string());
        assert_eq!(err.to_string(), "Prompt error: test error");

        let err = RequesttyError::UnexpectedAnswerType {
            expected: "ListItem".to_string(),
            got: "Bool".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected answer type: expected ListItem, got Bool"
        );

        let err = RequesttyError::from(SessionError::AlreadyComplete);
        assert_eq!(err.to_string(), "Survey is already complete");
    }

    #[test]
    fn test_interrupt_is_cancel() {
        let err = RequesttyError::from(requestty::ErrorKind::Interrupted);
        assert!(matches!(err, RequesttyError::Cancelled));
    }

    #[test]
    fn test_other_choice_only_for_free_text() {
        let engine = poll(AnswerPolicy::Listed);
        let question = engine.current_question().unwrap();
        assert_eq!(
            choice_labels(question, AnswerPolicy::Listed),
            vec!["Coffee", "Tea"]
        );
        assert_eq!(
            choice_labels(question, AnswerPolicy::FreeText),
            vec!["Coffee", "Tea", render::OTHER_CHOICE]
        );
        assert!(!is_other(question, 1));
        assert!(is_other(question, 2));
    }

    #[test]
    fn test_typed_reply_is_recorded() {
        let mut engine = poll(AnswerPolicy::FreeText);
        apply_reply(&mut engine, Reply::Text("Mate".to_string())).unwrap();
        apply_reply(&mut engine, Reply::Option(1)).unwrap();

        assert!(engine.is_complete());
        assert_eq!(engine.answers().get(1), Some("Mate"));
        assert_eq!(engine.answers().get(2), Some("Night"));
    }

    #[test]
    fn test_typed_reply_rejected_when_listed() {
        let mut engine = poll(AnswerPolicy::Listed);
        let err = apply_reply(&mut engine, Reply::Text("Mate".to_string())).unwrap_err();
        assert!(matches!(err, SessionError::UnknownOption { .. }));
        assert_eq!(engine.current_index(), 0);
    }
}
