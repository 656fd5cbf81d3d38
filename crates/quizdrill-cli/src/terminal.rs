//! Terminal input and output.
//!
//! The REPL reads lines through the `Console` trait: interactive runs get a
//! reedline editor with history and tab completion, while piped input gets
//! a plain buffered reader with identical semantics. Either way there is
//! exactly one outstanding prompt at a time; reads block until a line (or
//! the end of input) arrives.

use std::borrow::Cow;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use console::style;
use reedline::{
    Emacs, FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, Signal,
};

use crate::completer::CommandCompleter;

/// Blocking line source for the REPL.
pub trait Console {
    /// Displays `prompt` and reads one line. `None` means the input ended.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Asks one styled question and returns the trimmed reply.
///
/// `None` means the input ended before a reply arrived; callers abandon
/// whatever they were doing and fall back to the main prompt.
pub fn ask(console: &mut dyn Console, text: &str) -> Option<String> {
    let prompt = format!("{} ", style(text).red().bold());
    console
        .read_line(&prompt)
        .map(|line| line.trim().to_string())
}

/// Writes one line to the display sink.
pub fn log(message: impl Display) {
    println!("{message}");
}

/// Writes one formatted error line.
pub fn error_log(message: impl Display) {
    println!("{} {}", style("Error:").red().bold(), style(message).red());
}

/// Writes one formatted warning line.
pub fn warn_log(message: impl Display) {
    println!(
        "{} {}",
        style("Warning:").yellow().bold(),
        style(message).yellow()
    );
}

/// The startup banner.
pub fn banner() {
    println!();
    println!("{}", style("╭──────────────────────────────────────────────╮").cyan());
    println!("{}", style("│  quizdrill — interactive quiz trainer        │").cyan());
    println!("{}", style("│  Type 'help' for commands, 'quit' to exit    │").cyan());
    println!("{}", style("╰──────────────────────────────────────────────╯").cyan());
    println!();
}

/// Interactive console backed by a reedline editor.
pub struct LineEditor {
    editor: Reedline,
}

impl LineEditor {
    pub fn new() -> anyhow::Result<Self> {
        let history_file = history_file_path();
        if let Some(parent) = history_file.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let history = Box::new(
            FileBackedHistory::with_file(1000, history_file)
                .map_err(|e| anyhow::anyhow!("failed to open history: {e}"))?,
        );

        let editor = Reedline::create()
            .with_history(history)
            .with_completer(Box::new(CommandCompleter))
            .with_edit_mode(Box::new(Emacs::default()));

        Ok(Self { editor })
    }
}

fn history_file_path() -> PathBuf {
    directories::ProjectDirs::from("io", "quizdrill", "quizdrill")
        .map(|dirs| dirs.data_dir().join("history.txt"))
        .unwrap_or_else(|| PathBuf::from(".quizdrill_history"))
}

impl Console for LineEditor {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        loop {
            let prompt = TextPrompt::new(prompt);
            match self.editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => return Some(line),
                Ok(Signal::CtrlC) => {
                    println!("{}", style("Ctrl-C: use 'quit' or Ctrl-D to exit").dim());
                }
                Ok(Signal::CtrlD) => return None,
                Err(e) => {
                    error_log(e);
                    return None;
                }
            }
        }
    }
}

/// Console over piped standard input. Prompts still go to stdout so a
/// scripted session reads like an interactive one.
pub struct PipedInput {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl PipedInput {
    pub fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }
}

impl Default for PipedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for PipedInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        match self.lines.next() {
            Some(Ok(line)) => Some(line),
            Some(Err(e)) => {
                error_log(e);
                None
            }
            None => None,
        }
    }
}

/// Fixed-text prompt for the reedline editor.
struct TextPrompt {
    text: String,
}

impl TextPrompt {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Prompt for TextPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}
