//! The `delete` command.

use quizdrill_core::error::QuizError;
use quizdrill_core::store::{validate_id, QuizStore};

use crate::terminal::log;

pub fn execute(store: &mut QuizStore, raw_id: Option<&str>) -> Result<(), QuizError> {
    let id = validate_id(raw_id)?;
    store.delete(id)?;
    log(format!("Removed quiz {id}."));
    Ok(())
}
