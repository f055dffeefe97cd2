//! Plain-text rendering of survey views.
//!
//! Everything here is a pure function of a `SurveyView` part, so the output
//! can be tested without a terminal.

use picksurvey::{Progress, Question, Summary};

/// Default width of the progress bar, in characters.
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// Extra choice offered when answers may be typed freely.
pub const OTHER_CHOICE: &str = "Other...";

/// "Question 2 of 5", optionally prefixed with the survey title.
pub fn question_header(title: Option<&str>, progress: Progress) -> String {
    let counter = format!("Question {} of {}", progress.position(), progress.total);
    match title {
        Some(title) => format!("{title} - {counter}"),
        None => counter,
    }
}

/// A fixed-width bar such as `[=========.....................]  30%`.
pub fn progress_bar(progress: Progress, width: usize) -> String {
    let filled = ((progress.ratio() * width as f64) as usize).min(width);
    format!(
        "[{}{}] {:>3}%",
        "=".repeat(filled),
        ".".repeat(width - filled),
        progress.percent()
    )
}

/// Everything printed above the options of a question.
pub fn question_block(
    title: Option<&str>,
    question: &Question,
    progress: Progress,
    bar_width: usize,
) -> String {
    let mut lines = vec![
        question_header(title, progress),
        progress_bar(progress, bar_width),
    ];
    if let Some(image) = question.image_ref() {
        lines.push(format!("(image: {image})"));
    }
    lines.join("\n")
}

/// The results screen: heading, epilogue and one entry per question.
pub fn summary(summary: &Summary<'_>) -> String {
    let mut out = String::new();
    match summary.title() {
        Some(title) => out.push_str(&format!("{title}: Survey Completed!\n")),
        None => out.push_str("Survey Completed!\n"),
    }
    if let Some(epilogue) = summary.epilogue() {
        out.push_str(epilogue);
        out.push('\n');
    }
    out.push_str("\nYour Answers:\n");
    for entry in summary.entries() {
        out.push_str(entry.question.prompt());
        out.push('\n');
        out.push_str(&format!("  - {}\n", entry.answer.unwrap_or("(no answer)")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use picksurvey::{AnswerMap, QuestionSet};

    #[test]
    fn header_counts_from_one() {
        assert_eq!(question_header(None, Progress::new(0, 5)), "Question 1 of 5");
        assert_eq!(
            question_header(Some("Preferences"), Progress::new(4, 5)),
            "Preferences - Question 5 of 5"
        );
    }

    #[test]
    fn bar_fill() {
        assert_eq!(progress_bar(Progress::new(0, 4), 8), "[........]   0%");
        assert_eq!(progress_bar(Progress::new(1, 4), 8), "[==......]  25%");
        assert_eq!(progress_bar(Progress::new(4, 4), 8), "[========] 100%");
    }

    #[test]
    fn block_mentions_image() {
        let question = Question::new(1, "Pick", ["a"]).with_image("https://example.com/x.png");
        let block = question_block(None, &question, Progress::new(0, 1), 4);
        assert_eq!(
            block,
            "Question 1 of 1\n[....]   0%\n(image: https://example.com/x.png)"
        );
    }

    #[test]
    fn summary_lists_answers_in_order() {
        let questions = QuestionSet::new(vec![
            Question::new(2, "Second?", ["b"]),
            Question::new(1, "First?", ["a"]),
        ])
        .unwrap()
        .with_epilogue("Thank you for your responses.");
        let answers: AnswerMap = [(1, "a")].into_iter().collect();

        let text = summary(&Summary::new(&questions, &answers));
        assert_eq!(
            text,
            "Survey Completed!\nThank you for your responses.\n\nYour Answers:\n\
             Second?\n  - (no answer)\nFirst?\n  - a\n"
        );
    }
}
