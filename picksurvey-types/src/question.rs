use serde::{Deserialize, Serialize};

use crate::QuestionId;

/// A single multiple-choice question in a survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identity of this question's answer in the `AnswerMap`.
    id: QuestionId,

    /// The prompt text shown to the user.
    prompt: String,

    /// Opaque image URI for renderers that can show one. Never fetched.
    #[serde(default, rename = "image", skip_serializing_if = "Option::is_none")]
    image_ref: Option<String>,

    /// The choices offered, in display order.
    options: Vec<String>,
}

impl Question {
    /// Create a new question without an image.
    pub fn new<I, S>(id: impl Into<QuestionId>, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            image_ref: None,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach an image reference.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// Get the question id.
    pub fn id(&self) -> QuestionId {
        self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the image reference, if any.
    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    /// Get the offered options.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Get the option at `index`.
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Check whether `answer` is one of the offered options.
    pub fn offers(&self, answer: &str) -> bool {
        self.options.iter().any(|o| o == answer)
    }

    /// Position of `answer` in the option list.
    pub fn position_of(&self, answer: &str) -> Option<usize> {
        self.options.iter().position(|o| o == answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekend() -> Question {
        Question::new(
            2,
            "What's your ideal way to spend a weekend?",
            ["Reading a book at home", "Exploring a new city"],
        )
    }

    #[test]
    fn accessors() {
        let q = weekend().with_image("https://example.com/book.png");
        assert_eq!(q.id(), QuestionId::new(2));
        assert_eq!(q.prompt(), "What's your ideal way to spend a weekend?");
        assert_eq!(q.image_ref(), Some("https://example.com/book.png"));
        assert_eq!(q.options().len(), 2);
        assert_eq!(q.option(1), Some("Exploring a new city"));
        assert_eq!(q.option(2), None);
    }

    #[test]
    fn offers_matches_exact_text() {
        let q = weekend();
        assert!(q.offers("Reading a book at home"));
        assert!(!q.offers("reading a book at home"));
        assert_eq!(q.position_of("Exploring a new city"), Some(1));
    }

    #[test]
    fn image_uses_short_field_name() {
        let q: Question = serde_json::from_str(
            r#"{"id": 1, "prompt": "Pick one", "image": "img://x", "options": ["a"]}"#,
        )
        .unwrap();
        assert_eq!(q.image_ref(), Some("img://x"));

        let without: Question =
            serde_json::from_str(r#"{"id": 1, "prompt": "Pick one", "options": ["a"]}"#).unwrap();
        assert_eq!(without.image_ref(), None);
    }
}
