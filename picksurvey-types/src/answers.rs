use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// Answers collected during a session.
///
/// Maps each answered question's id to the option text that was chosen.
/// Insertion order is irrelevant; serializes as a JSON object keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    values: HashMap<QuestionId, String>,
}

impl AnswerMap {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record an answer, returning the previous one for the same question.
    pub fn insert(&mut self, id: impl Into<QuestionId>, answer: impl Into<String>) -> Option<String> {
        self.values.insert(id.into(), answer.into())
    }

    /// Get the answer for a question.
    pub fn get(&self, id: impl Into<QuestionId>) -> Option<&str> {
        self.values.get(&id.into()).map(String::as_str)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, id: impl Into<QuestionId>) -> bool {
        self.values.contains_key(&id.into())
    }

    /// Remove every answer.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Get an iterator over all id-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.values.iter().map(|(id, answer)| (*id, answer.as_str()))
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for AnswerMap {
    type Item = (QuestionId, String);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerMap
where
    K: Into<QuestionId>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(id, answer)| (id.into(), answer.into()))
                .collect(),
        }
    }
}
