//! The `add` command: interactively creates a new quiz.

use console::style;
use quizdrill_core::error::QuizError;
use quizdrill_core::store::QuizStore;

use crate::terminal::{ask, log, Console};

pub fn execute(store: &mut QuizStore, console: &mut dyn Console) -> Result<(), QuizError> {
    let Some(question) = ask(console, "Enter a question:") else {
        return Ok(());
    };
    let Some(answer) = ask(console, "Enter the answer:") else {
        return Ok(());
    };

    let record = store.add(&question, &answer)?;
    log(format!(
        "{} [{}]: {} {} {}",
        style("Added").green(),
        record.id,
        record.question,
        style("=>").green(),
        record.answer
    ));
    Ok(())
}
