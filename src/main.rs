use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use quiz_questions::{
    default_fixture_path, logging, write_error, write_questions, QuestionProvider, Source,
};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    /// Built-in question bank
    Embedded,
    /// Question bank read from a JSON fixture
    Fixture,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Topic tags (accepted, currently unused)
    #[arg(long)]
    tags: String,

    /// Maximum number of questions to return
    #[arg(long = "questionCount", allow_negative_numbers = true)]
    question_count: i64,

    /// Where the question bank comes from
    #[arg(long, value_enum, default_value_t = SourceKind::Embedded)]
    source: SourceKind,

    /// Fixture file for `--source fixture` [default: questions.json next to the executable]
    #[arg(long, env = "QUIZ_QUESTIONS_FIXTURE")]
    fixture: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn source(&self) -> Source {
        match self.source {
            SourceKind::Embedded => Source::Embedded,
            SourceKind::Fixture => {
                Source::Fixture(self.fixture.clone().unwrap_or_else(default_fixture_path))
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let provider = QuestionProvider::new(args.source());
    let stdout = io::stdout().lock();

    let result = match provider.questions(&args.tags, args.question_count) {
        Ok(questions) => write_questions(stdout, &questions).map(|()| ExitCode::SUCCESS),
        Err(e) => {
            error!("{}", e);
            write_error(stdout, &e).map(|()| ExitCode::FAILURE)
        }
    };

    result.unwrap_or_else(|e| {
        error!("Failed to write to stdout: {}", e);
        ExitCode::FAILURE
    })
}
