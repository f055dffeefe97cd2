pub mod preferences;
pub mod quick_poll;

pub use preferences::preferences;
pub use quick_poll::quick_poll;

use picksurvey::QuestionSet;

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &["preferences", "quick-poll"];

/// Look up a built-in question set by name.
pub fn by_name(name: &str) -> Option<QuestionSet> {
    match name {
        "preferences" => Some(preferences()),
        "quick-poll" => Some(quick_poll()),
        _ => None,
    }
}

/// Path of the bundled TOML example, for trying out file loading.
pub fn weekend_toml_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/weekend.toml")
}
