//! The read-eval-print loop.
//!
//! Reads one line at a time, dispatches on the first whitespace-separated
//! token (lowercased), and hands the rest to the command handlers. Every
//! user-level failure becomes exactly one formatted line, after which the
//! prompt comes back; nothing here ever aborts the loop except `quit` and
//! the end of input.

use console::style;
use quizdrill_core::store::QuizStore;

use crate::commands;
use crate::terminal::{self, Console};

const PROMPT: &str = "quiz> ";

pub struct Repl {
    store: QuizStore,
    console: Box<dyn Console>,
}

impl Repl {
    pub fn new(store: QuizStore, console: Box<dyn Console>) -> Self {
        Self { store, console }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        terminal::banner();

        loop {
            let Some(line) = self.console.read_line(PROMPT) else {
                terminal::log("Goodbye!");
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let command = tokens.next().unwrap_or_default().to_lowercase();
            let argument = tokens.next();

            let outcome = match command.as_str() {
                "h" | "help" => commands::help::execute(),
                "list" => commands::list::execute(&self.store),
                "show" => commands::list::show(&self.store, argument),
                "add" => commands::add::execute(&mut self.store, self.console.as_mut()),
                "edit" => commands::edit::execute(&mut self.store, self.console.as_mut(), argument),
                "delete" => commands::delete::execute(&mut self.store, argument),
                "test" => commands::play::test(&self.store, self.console.as_mut(), argument),
                "p" | "play" => commands::play::execute(&self.store, self.console.as_mut()),
                "credits" => commands::help::credits(),
                "q" | "quit" => {
                    terminal::log("Goodbye!");
                    break;
                }
                unknown => {
                    terminal::log(format!(
                        "Unknown command: '{}'. Use '{}' to see the available commands.",
                        style(unknown).red(),
                        style("help").green()
                    ));
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                if e.is_persistence() {
                    // The in-memory change stands; only durability is at risk.
                    terminal::warn_log(format!("{e} — the change may not survive a restart"));
                } else {
                    terminal::error_log(&e);
                }
            }
        }

        Ok(())
    }
}
