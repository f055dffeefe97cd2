use picksurvey::{Question, QuestionSet};

/// The five-question personal preferences survey.
///
/// Each question carries a placeholder image and four options.
pub fn preferences() -> QuestionSet {
    QuestionSet::new(vec![
        Question::new(
            1,
            "Which of these landscapes do you find most relaxing?",
            [
                "A sunny beach",
                "A quiet forest",
                "A snowy mountain peak",
                "A rolling countryside",
            ],
        )
        .with_image("https://placehold.co/600x400/81C784/FFFFFF?text=Lush+Valley"),
        Question::new(
            2,
            "What's your ideal way to spend a weekend?",
            [
                "Reading a book at home",
                "Exploring a new city",
                "Hiking a scenic trail",
                "Trying new restaurants",
            ],
        )
        .with_image("https://placehold.co/600x400/64B5F6/FFFFFF?text=Cozy+Book"),
        Question::new(
            3,
            "Pick a color palette that appeals to you the most.",
            [
                "Warm Earth Tones (Browns, Oranges)",
                "Cool Ocean Blues (Blues, Greens)",
                "Vibrant Sunset Hues (Pinks, Purples)",
                "Monochromatic (Black, White, Gray)",
            ],
        )
        .with_image("https://placehold.co/600x400/9575CD/FFFFFF?text=Color+Swatches"),
        Question::new(
            4,
            "Which type of art are you most drawn to?",
            [
                "Classic Paintings",
                "Modern Sculptures",
                "Street Art & Graffiti",
                "Digital Art",
            ],
        )
        .with_image("https://placehold.co/600x400/FFB74D/FFFFFF?text=Art+Museum"),
        Question::new(
            5,
            "What is your favorite time of day?",
            [
                "Early Morning Sunrise",
                "Bright Midday Sun",
                "Golden Hour Sunset",
                "Starry Night",
            ],
        )
        .with_image("https://placehold.co/600x400/4DD0E1/FFFFFF?text=Sunrise"),
    ])
    .expect("preferences survey is a valid question set")
    .with_title("Preferences Survey")
    .with_epilogue("Thank you for your responses.")
}
