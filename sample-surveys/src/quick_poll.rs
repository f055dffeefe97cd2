use picksurvey::{Question, QuestionSet};

/// A single-question poll. Completes after one answer.
pub fn quick_poll() -> QuestionSet {
    QuestionSet::new(vec![Question::new(
        1,
        "Coffee or tea?",
        ["Coffee", "Tea", "Neither"],
    )])
    .expect("quick poll is a valid question set")
    .with_title("Quick Poll")
}
