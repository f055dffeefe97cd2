use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Question, QuestionId};

/// The fixed, ordered list of questions and metadata for a survey.
///
/// A question set is validated on construction and read-only afterwards:
/// it is never empty, every question offers at least one option, and
/// question ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestionSet")]
pub struct QuestionSet {
    /// Optional title shown above every screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    /// Optional message shown before the first question.
    #[serde(skip_serializing_if = "Option::is_none")]
    prelude: Option<String>,

    /// Optional message shown with the results.
    #[serde(skip_serializing_if = "Option::is_none")]
    epilogue: Option<String>,

    questions: Vec<Question>,
}

/// Unvalidated form used for deserialization.
#[derive(Deserialize)]
struct RawQuestionSet {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    prelude: Option<String>,
    #[serde(default)]
    epilogue: Option<String>,
    #[serde(default)]
    questions: Vec<Question>,
}

impl TryFrom<RawQuestionSet> for QuestionSet {
    type Error = ConfigError;

    fn try_from(raw: RawQuestionSet) -> Result<Self, Self::Error> {
        let mut set = Self::new(raw.questions)?;
        set.title = raw.title;
        set.prelude = raw.prelude;
        set.epilogue = raw.epilogue;
        Ok(set)
    }
}

impl QuestionSet {
    /// Create a question set, rejecting empty lists, questions without
    /// options and duplicate ids.
    pub fn new(questions: Vec<Question>) -> Result<Self, ConfigError> {
        if questions.is_empty() {
            return Err(ConfigError::EmptyQuestionSet);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if question.options().is_empty() {
                return Err(ConfigError::NoOptions { id: question.id() });
            }
            if !seen.insert(question.id()) {
                return Err(ConfigError::DuplicateId { id: question.id() });
            }
        }

        Ok(Self {
            title: None,
            prelude: None,
            epilogue: None,
            questions,
        })
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn prelude(&self) -> Option<&str> {
        self.prelude.as_deref()
    }

    pub fn epilogue(&self) -> Option<&str> {
        self.epilogue.as_deref()
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at `index`.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Find a question by id.
    pub fn find(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Get the number of questions. Always at least one.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false`; kept for parity with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
