//! Requestty backend for picksurvey.
//!
//! This crate provides a command-line interface for taking a survey
//! using the `requestty` library: one select prompt per question, a text
//! progress bar, a results summary and a restart prompt.
//!
//! # Example
//!
//! ```ignore
//! use picksurvey::{SurveyBackend, SurveyEngine};
//! use picksurvey_requestty::RequesttyBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut engine = SurveyEngine::new(sample_surveys::preferences());
//!     let answers = RequesttyBackend::new().run(&mut engine)?;
//!     println!("{} answers collected", answers.len());
//!     Ok(())
//! }
//! ```

mod backend;
pub mod render;

pub use backend::RequesttyBackend;
pub use backend::RequesttyError;
