//! Integration tests for picksurvey

use std::io::Write;

use picksurvey::{
    AnswerPolicy, Phase, Progress, Question, QuestionSet, SessionState, SurveyBackend,
    SurveyEngine, SurveyView, TestBackend, load,
};

fn landscapes() -> QuestionSet {
    QuestionSet::new(vec![
        Question::new(
            1,
            "Which of these landscapes do you find most relaxing?",
            ["A sunny beach", "A quiet forest", "A snowy mountain peak"],
        ),
        Question::new(
            2,
            "What's your ideal way to spend a weekend?",
            ["Reading a book at home", "Exploring a new city"],
        ),
        Question::new(
            3,
            "What is your favorite time of day?",
            ["Golden Hour Sunset", "Starry Night"],
        ),
    ])
    .unwrap()
    .with_title("Preferences")
    .with_epilogue("Thank you for your responses.")
}

#[test]
fn test_full_session_with_test_backend() {
    let mut engine = SurveyEngine::new(landscapes());
    let answers = TestBackend::new()
        .with_options([1, 0, 1])
        .run(&mut engine)
        .unwrap();

    assert!(engine.is_complete());
    assert_eq!(answers.len(), 3);
    assert_eq!(answers.get(1), Some("A quiet forest"));
    assert_eq!(answers.get(2), Some("Reading a book at home"));
    assert_eq!(answers.get(3), Some("Starry Night"));
}

#[test]
fn test_views_follow_transitions() {
    let mut engine = SurveyEngine::new(landscapes());
    let mut seen = Vec::new();

    loop {
        let progress = match engine.view() {
            SurveyView::Question { progress, .. } => progress,
            SurveyView::Results { .. } => break,
        };
        seen.push(progress);
        engine.select_option(0).unwrap();
    }

    assert_eq!(
        seen,
        vec![
            Progress::new(0, 3),
            Progress::new(1, 3),
            Progress::new(2, 3)
        ]
    );

    let SurveyView::Results { summary, progress } = engine.view() else {
        panic!("Expected results view");
    };
    assert_eq!(progress, Progress::new(3, 3));
    assert_eq!(summary.epilogue(), Some("Thank you for your responses."));
    assert_eq!(summary.entries().len(), 3);
    assert!(summary.is_complete());
}

#[test]
fn test_restart_from_results() {
    let mut engine = SurveyEngine::new(landscapes());
    TestBackend::new()
        .with_options([0, 0, 0])
        .run(&mut engine)
        .unwrap();
    assert_eq!(engine.state().phase(), Phase::Complete);

    engine.reset();
    assert_eq!(engine.state(), &SessionState::initial());
    assert!(engine.answers().is_empty());

    let answers = TestBackend::new()
        .with_options([2, 1, 1])
        .run(&mut engine)
        .unwrap();
    assert_eq!(answers.get(1), Some("A snowy mountain peak"));
}

#[test]
fn test_free_text_backend_run() {
    let mut engine = SurveyEngine::new(landscapes()).with_policy(AnswerPolicy::FreeText);
    let answers = TestBackend::new()
        .with_answers(["Somewhere else", "Sleeping", "Noon"])
        .run(&mut engine)
        .unwrap();
    assert_eq!(answers.get(2), Some("Sleeping"));
}

#[test]
fn test_load_from_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
title = "Art"

[[questions]]
id = 4
prompt = "Which type of art are you most drawn to?"
options = ["Classic Paintings", "Modern Sculptures", "Street Art & Graffiti", "Digital Art"]
"#
    )
    .unwrap();

    let set = load::from_path(file.path()).unwrap();
    assert_eq!(set.title(), Some("Art"));

    let mut engine = SurveyEngine::new(set);
    let answers = TestBackend::new()
        .with_answer(4, "Digital Art")
        .run(&mut engine)
        .unwrap();
    assert_eq!(answers.get(4), Some("Digital Art"));
}

#[test]
fn test_load_missing_file() {
    let err = load::from_path("/nonexistent/survey.json").unwrap_err();
    assert!(matches!(err, load::LoadError::Io { .. }));
}
