use crate::{AnswerMap, SurveyEngine};

/// Trait for backend implementations that present a survey to a user.
///
/// A backend renders `SurveyEngine::view()` after every transition and feeds
/// the user's choices back through `select_option` or `submit_answer`.
/// It never mutates session state any other way. On the results view it
/// offers the restart action, which maps to `SurveyEngine::reset`.
pub trait SurveyBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Drive `engine` until the user is done.
    ///
    /// # Returns
    /// * `Ok(answers)` of the session the user finishes on the results view
    /// * `Err` on cancellation or backend failure. A cancel after a restart
    ///   is still an error; answers of the session before the restart are
    ///   not kept.
    ///
    /// The engine may be left in any state on error.
    fn run(&self, engine: &mut SurveyEngine) -> Result<AnswerMap, Self::Error>;
}
