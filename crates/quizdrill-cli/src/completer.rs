//! Tab completion over REPL command names.

use reedline::{Completer, Span, Suggestion};

use crate::commands::COMMAND_NAMES;

/// Completes the first word of a line against the command list.
pub struct CommandCompleter;

impl Completer for CommandCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_cursor = &line[..pos];

        // Only the first word is a command name; arguments are ids and
        // free-form text, nothing to complete there.
        if line_to_cursor.contains(' ') {
            return Vec::new();
        }

        let span = Span::new(0, pos);
        COMMAND_NAMES
            .iter()
            .filter(|name| name.starts_with(line_to_cursor))
            .map(|name| Suggestion {
                value: (*name).to_string(),
                description: None,
                style: None,
                extra: None,
                span,
                append_whitespace: true,
            })
            .collect()
    }
}
