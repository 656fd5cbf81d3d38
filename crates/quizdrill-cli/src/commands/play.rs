//! The `play` and `test` commands: quiz the user.

use console::style;
use quizdrill_core::error::QuizError;
use quizdrill_core::model::answers_match;
use quizdrill_core::session::{Session, Step};
use quizdrill_core::store::{validate_id, QuizStore};

use crate::terminal::{ask, log, Console};

/// Plays every stored quiz in random order, each at most once. The first
/// wrong answer ends the game; answering all of them wins it.
pub fn execute(store: &QuizStore, console: &mut dyn Console) -> Result<(), QuizError> {
    let Some(mut session) = Session::start(store.get_all(), rand::thread_rng()) else {
        log("There are no quizzes to play.");
        return Ok(());
    };

    loop {
        log(format!("{} question(s) remaining.", session.remaining()));
        let Some(answer) = ask(console, session.question()) else {
            // Input ended mid-game; the session is simply dropped.
            return Ok(());
        };

        match session.submit_answer(&answer) {
            Step::Next(next) => {
                log(format!(
                    "{} {} correct so far.",
                    style("Correct!").green(),
                    next.score()
                ));
                session = next;
            }
            Step::Won { score } => {
                log(format!(
                    "{} You answered all {score} question(s).",
                    style("You win!").green().bold()
                ));
                break;
            }
            Step::Lost { score } => {
                log(format!(
                    "{} Game over. You answered {score} question(s) correctly.",
                    style("Wrong.").red().bold()
                ));
                break;
            }
        }
    }
    Ok(())
}

/// Asks a single quiz by id, independent of any game.
pub fn test(
    store: &QuizStore,
    console: &mut dyn Console,
    raw_id: Option<&str>,
) -> Result<(), QuizError> {
    let id = validate_id(raw_id)?;
    let record = store.get(id)?;

    let Some(answer) = ask(console, &record.question) else {
        return Ok(());
    };

    if answers_match(&answer, &record.answer) {
        log(style("Your answer is correct.").green());
    } else {
        log(style("Your answer is incorrect.").red());
    }
    Ok(())
}
