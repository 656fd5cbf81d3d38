//! REPL command handlers.
//!
//! One module per command family; each handler reports user-level failures
//! by returning `QuizError`, which the REPL renders as a single line.

pub mod add;
pub mod delete;
pub mod edit;
pub mod help;
pub mod list;
pub mod play;

/// Every command the REPL understands, for help and tab completion.
pub const COMMAND_NAMES: &[&str] = &[
    "help", "list", "show", "add", "edit", "delete", "test", "play", "credits", "quit",
];
