use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a question, e.g. `QuestionId(3)`.
///
/// Used as keys in `AnswerMap`. Ids are unique within a `QuestionSet`
/// and stable for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Create a new id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<QuestionId> for u32 {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}
