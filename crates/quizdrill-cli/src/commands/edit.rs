//! The `edit` command: replaces a quiz's question and answer in place.

use console::style;
use quizdrill_core::error::QuizError;
use quizdrill_core::store::{validate_id, QuizStore};

use crate::terminal::{ask, log, Console};

pub fn execute(
    store: &mut QuizStore,
    console: &mut dyn Console,
    raw_id: Option<&str>,
) -> Result<(), QuizError> {
    let id = validate_id(raw_id)?;
    let current = store.get(id)?;

    log(format!(
        "Editing [{}]: {} {} {}",
        current.id,
        current.question,
        style("=>").magenta(),
        current.answer
    ));

    let Some(question) = ask(console, "Enter the question (empty keeps the current one):") else {
        return Ok(());
    };
    let Some(answer) = ask(console, "Enter the answer (empty keeps the current one):") else {
        return Ok(());
    };

    let question = if question.is_empty() {
        current.question.clone()
    } else {
        question
    };
    let answer = if answer.is_empty() {
        current.answer.clone()
    } else {
        answer
    };

    let updated = store.update(id, &question, &answer)?;
    log(format!(
        "{} [{}]: {} {} {}",
        style("Changed").green(),
        updated.id,
        updated.question,
        style("=>").green(),
        updated.answer
    ));
    Ok(())
}
