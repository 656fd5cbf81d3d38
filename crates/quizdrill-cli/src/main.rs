//! quizdrill CLI — the user-facing interactive quiz trainer.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use quizdrill_core::storage::JsonFileStorage;
use quizdrill_core::store::QuizStore;

mod commands;
mod completer;
mod repl;
mod terminal;

#[derive(Parser)]
#[command(name = "quizdrill", version, about = "Interactive command-line quiz trainer")]
struct Cli {
    /// Path to the quiz database file
    #[arg(long, default_value = "quizzes.json")]
    db: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizdrill_core=info".parse().unwrap())
                .add_directive("quizdrill_cli=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let backend = Box::new(JsonFileStorage::new(&cli.db));
    let store = match QuizStore::open(backend) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    tracing::debug!(db = %cli.db.display(), quizzes = store.count(), "store opened");

    let console: Box<dyn terminal::Console> = if std::io::stdin().is_terminal() {
        match terminal::LineEditor::new() {
            Ok(editor) => Box::new(editor),
            Err(e) => {
                eprintln!("Error: {e:#}");
                process::exit(1);
            }
        }
    } else {
        Box::new(terminal::PipedInput::new())
    };

    let mut repl = repl::Repl::new(store, console);
    if let Err(e) = repl.run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
