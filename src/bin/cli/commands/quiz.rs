use std::io::{self, BufRead};
use std::thread;

use anyhow::{Context, Result};
use rand::Rng;

use vocab_lib::quiz::build_question;
use vocab_lib::review::ReviewSession;

use super::{is_quit, prompt};
use crate::app::App;
use crate::render::terminal::{self, Color};

pub fn run(app: &App, use_color: bool) -> Result<()> {
    let stdin = io::stdin();
    run_with(app, &mut stdin.lock(), &mut rand::thread_rng(), true, use_color)?;
    Ok(())
}

/// Multiple-choice pass over today's due words; returns how many were answered
///
/// A wrong choice is recorded as "forgot".
pub fn run_with<B: BufRead, R: Rng>(
    app: &App,
    input: &mut B,
    rng: &mut R,
    pause: bool,
    use_color: bool,
) -> Result<usize> {
    let mut session = ReviewSession::start(&app.scheduler, &app.catalog)
        .context("Failed to load today's words")?;

    if session.total() == 0 {
        println!("No words to review today.");
        return Ok(0);
    }

    while let Some(current) = session.current() {
        let question = build_question(&current.word, &app.catalog, app.config.distractor_count, rng);

        println!();
        println!(
            "{} / {}  {}",
            session.completed() + 1,
            session.total(),
            terminal::progress_bar(session.progress_percent(), 20)
        );
        println!("{}", terminal::render_word(&question.word, use_color));
        for line in terminal::render_options(&question) {
            println!("{}", line);
        }

        let message = format!("Choose 1-{} ([q] quit):", question.options.len());
        let answer = loop {
            let Some(reply) = prompt(input, &message)? else {
                break None;
            };
            if is_quit(&reply) {
                break None;
            }
            let selected = reply
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| question.answer(i));
            if selected.is_some() {
                break selected;
            }
        };
        let Some(answer) = answer else {
            break;
        };

        println!("{}", terminal::render_feedback(&answer, use_color));
        session
            .answer(&app.scheduler, answer.is_correct)
            .with_context(|| format!("Failed to record quiz answer for '{}'", question.word.word))?;

        if pause {
            thread::sleep(answer.feedback_delay());
        }
    }

    println!();
    if session.is_finished() {
        println!("{}", terminal::paint("Quiz complete for today!", Color::GREEN, use_color));
    } else {
        println!("Stopped after {} of {} words.", session.completed(), session.total());
    }

    Ok(session.completed())
}
