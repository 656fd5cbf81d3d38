//! The `list` and `show` commands.

use console::style;
use quizdrill_core::error::QuizError;
use quizdrill_core::store::{validate_id, QuizStore};

use crate::terminal::log;

/// Prints a table of every stored quiz: id and question, answers hidden.
pub fn execute(store: &QuizStore) -> Result<(), QuizError> {
    use comfy_table::{Cell, Table};

    if store.count() == 0 {
        log("No quizzes yet. Use 'add' to create one.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Id", "Question"]);
    for record in store.get_all() {
        table.add_row(vec![
            Cell::new(record.id),
            Cell::new(&record.question),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Prints one quiz in full: question and answer.
pub fn show(store: &QuizStore, raw_id: Option<&str>) -> Result<(), QuizError> {
    let id = validate_id(raw_id)?;
    let record = store.get(id)?;
    log(format!(
        "[{}]: {} {} {}",
        style(record.id).magenta(),
        record.question,
        style("=>").magenta(),
        record.answer
    ));
    Ok(())
}
