//! # picksurvey
//!
//! Run multiple-choice surveys one question at a time. Backend-agnostic.
//!
//! A survey is a fixed `QuestionSet`. A `SurveyEngine` walks through it,
//! recording one answer per question, until it reaches the results. Backends
//! (CLI prompts, TUI) render the engine's `SurveyView` and feed choices back.
//!
//! ## Usage
//!
//! ```rust
//! use picksurvey::{Question, QuestionSet, SurveyBackend, SurveyEngine, TestBackend};
//!
//! let questions = QuestionSet::new(vec![
//!     Question::new(1, "Favorite season?", ["Spring", "Autumn"]),
//!     Question::new(2, "Coffee or tea?", ["Coffee", "Tea"]),
//! ])
//! .unwrap();
//!
//! let mut engine = SurveyEngine::new(questions);
//! let answers = TestBackend::new()
//!     .with_answers(["Autumn", "Tea"])
//!     .run(&mut engine)
//!     .unwrap();
//!
//! assert_eq!(answers.get(1), Some("Autumn"));
//! assert_eq!(answers.get(2), Some("Tea"));
//! ```
//!
//! ## Question sets from files
//!
//! `load::from_path` reads a question set from a `.toml` or `.json` file:
//!
//! ```toml
//! title = "Preferences Survey"
//!
//! [[questions]]
//! id = 1
//! prompt = "Which of these landscapes do you find most relaxing?"
//! image = "https://placehold.co/600x400?text=Lush+Valley"
//! options = ["A sunny beach", "A quiet forest"]
//! ```
//!
//! ## Backends
//!
//! Backends are separate crates that implement `SurveyBackend`:
//! - `picksurvey-requestty` - CLI prompts via requestty
//! - `picksurvey-ratatui` - full-screen TUI

// Re-export all types from picksurvey-types
pub use picksurvey_types::*;

pub mod load;

// Test backend for running surveys without user interaction
mod test_backend;
pub use test_backend::{TestBackend, TestBackendError};
