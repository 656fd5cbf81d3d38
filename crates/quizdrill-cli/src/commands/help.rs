//! The `help` and `credits` commands.

use quizdrill_core::error::QuizError;

use crate::terminal::log;

pub fn execute() -> Result<(), QuizError> {
    log("Commands:");
    log("  h|help - Show this help.");
    log("  list - List the existing quizzes.");
    log("  show <id> - Show the question and the answer of the given quiz.");
    log("  add - Add a new quiz interactively.");
    log("  edit <id> - Edit the given quiz.");
    log("  delete <id> - Delete the given quiz.");
    log("  test <id> - Answer the given quiz once, outside of a game.");
    log("  p|play - Answer every quiz in random order; one miss ends the game.");
    log("  credits - Show program information.");
    log("  q|quit - Exit the program.");
    Ok(())
}

pub fn credits() -> Result<(), QuizError> {
    log(format!("quizdrill v{}", env!("CARGO_PKG_VERSION")));
    log(env!("CARGO_PKG_DESCRIPTION"));
    Ok(())
}
