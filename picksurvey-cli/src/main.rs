use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use picksurvey::{AnswerMap, AnswerPolicy, QuestionSet, Summary, SurveyBackend, SurveyEngine};
use picksurvey_ratatui::RatatuiBackend;
use picksurvey_requestty::{RequesttyBackend, render};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendKind {
    /// Line-by-line select prompts
    Requestty,
    /// Full-screen terminal UI
    Ratatui,
}

#[derive(Debug, Parser)]
#[command(name = "picksurvey")]
#[command(about = "Take a multiple-choice survey in the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// Question set file (.toml or .json)
    #[arg(long, value_name = "PATH")]
    questions: Option<PathBuf>,

    /// Built-in question set, used when --questions is not given
    #[arg(long, default_value = "preferences", conflicts_with = "questions")]
    builtin: String,

    /// Frontend used to present the survey
    #[arg(long, value_enum, default_value_t = BackendKind::Requestty)]
    backend: BackendKind,

    /// Accept answers that are not among the listed options
    #[arg(long)]
    free_text: bool,

    /// Print the final answers as JSON instead of the text summary
    #[arg(long)]
    json: bool,

    /// Override the question set's title
    #[arg(long)]
    title: Option<String>,
}

impl Args {
    fn policy(&self) -> AnswerPolicy {
        if self.free_text {
            AnswerPolicy::FreeText
        } else {
            AnswerPolicy::Listed
        }
    }

    fn question_set(&self) -> Result<QuestionSet> {
        let set = match &self.questions {
            Some(path) => picksurvey::load::from_path(path)
                .with_context(|| format!("loading questions from {}", path.display()))?,
            None => sample_surveys::by_name(&self.builtin).ok_or_else(|| {
                anyhow!(
                    "unknown built-in survey '{}' (available: {})",
                    self.builtin,
                    sample_surveys::NAMES.join(", ")
                )
            })?,
        };
        Ok(match &self.title {
            Some(title) => set.with_title(title),
            None => set,
        })
    }

    fn engine(&self) -> Result<SurveyEngine> {
        Ok(SurveyEngine::new(self.question_set()?).with_policy(self.policy()))
    }

    /// With `--json` the answers are printed by `main` instead.
    fn requestty_backend(&self) -> RequesttyBackend {
        if self.json {
            RequesttyBackend::new().without_summary()
        } else {
            RequesttyBackend::new()
        }
    }
}

fn run_backend<B: SurveyBackend>(backend: &B, engine: &mut SurveyEngine) -> Result<AnswerMap> {
    backend.run(engine).map_err(Into::into)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut engine = args.engine()?;
    tracing::info!(
        questions = engine.total(),
        backend = ?args.backend,
        policy = ?engine.policy(),
        "starting survey"
    );

    let answers = match args.backend {
        BackendKind::Requestty => run_backend(&args.requestty_backend(), &mut engine)?,
        BackendKind::Ratatui => run_backend(&RatatuiBackend::new(), &mut engine)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&answers)?);
    } else if args.backend == BackendKind::Ratatui {
        // The TUI's results screen is gone once the alternate screen closes
        print!(
            "{}",
            render::summary(&Summary::new(engine.questions(), &answers))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use picksurvey::TestBackend;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("picksurvey").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);
        assert_eq!(args.backend, BackendKind::Requestty);
        assert_eq!(args.builtin, "preferences");
        assert_eq!(args.policy(), AnswerPolicy::Listed);
        assert!(!args.json);

        let set = args.question_set().unwrap();
        assert_eq!(set.title(), Some("Preferences Survey"));
    }

    #[test]
    fn flags() {
        let args = parse(&[
            "--backend",
            "ratatui",
            "--free-text",
            "--json",
            "--builtin",
            "quick-poll",
            "--title",
            "Morning",
        ]);
        assert_eq!(args.backend, BackendKind::Ratatui);
        assert_eq!(args.policy(), AnswerPolicy::FreeText);
        assert!(args.json);

        let set = args.question_set().unwrap();
        assert_eq!(set.title(), Some("Morning"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn json_replaces_requestty_summary() {
        assert!(parse(&[]).requestty_backend().prints_summary());
        assert!(!parse(&["--json"]).requestty_backend().prints_summary());
    }

    #[test]
    fn free_text_engine_accepts_unlisted_answer() {
        let mut engine = parse(&["--builtin", "quick-poll", "--free-text"])
            .engine()
            .unwrap();
        let answers = TestBackend::new()
            .with_answers(["Water"])
            .run(&mut engine)
            .unwrap();
        assert_eq!(answers.get(1), Some("Water"));

        let mut strict = parse(&["--builtin", "quick-poll"]).engine().unwrap();
        assert!(TestBackend::new().with_answers(["Water"]).run(&mut strict).is_err());
    }

    #[test]
    fn questions_file() {
        let path = sample_surveys::weekend_toml_path();
        let args = parse(&["--questions", path.to_str().unwrap()]);
        assert_eq!(args.question_set().unwrap().title(), Some("Weekend Plans"));
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(Args::try_parse_from(["picksurvey", "--backend", "gtk"]).is_err());
        assert!(
            Args::try_parse_from(["picksurvey", "--questions", "a.toml", "--builtin", "x"])
                .is_err()
        );

        let err = parse(&["--builtin", "nope"]).question_set().unwrap_err();
        assert!(err.to_string().contains("quick-poll"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = parse(&["--questions", "/nonexistent/survey.toml"])
            .question_set()
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/survey.toml"));
    }
}
