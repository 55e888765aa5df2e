use std::io::{self, BufRead};

use anyhow::{Context, Result};

use vocab_lib::review::ReviewSession;

use super::{is_quit, prompt};
use crate::app::App;
use crate::render::terminal::{self, Color};

pub fn run(app: &App, use_color: bool) -> Result<()> {
    let stdin = io::stdin();
    run_with(app, &mut stdin.lock(), use_color)?;
    Ok(())
}

/// Self-graded review over today's due words; returns how many were answered
pub fn run_with<R: BufRead>(app: &App, input: &mut R, use_color: bool) -> Result<usize> {
    let mut session = ReviewSession::start(&app.scheduler, &app.catalog)
        .context("Failed to load today's words")?;

    if session.total() == 0 {
        println!("No words to review today.");
        return Ok(0);
    }

    while let Some(current) = session.current() {
        let word = current.word.clone();

        println!();
        println!(
            "{} / {}  {}",
            session.completed() + 1,
            session.total(),
            terminal::progress_bar(session.progress_percent(), 20)
        );
        println!("{}", terminal::render_word(&word, use_color));

        match prompt(input, "[Enter] show meaning, [q] quit:")? {
            Some(answer) if !is_quit(&answer) => {}
            _ => break,
        }
        println!("{}", terminal::paint(&word.meaning_zh, Color::CYAN, use_color));

        let remembered = loop {
            match prompt(input, "Remembered it? [y/n]:")?.as_deref().map(str::to_lowercase) {
                Some(a) if a == "y" || a == "yes" => break Some(true),
                Some(a) if a == "n" || a == "no" => break Some(false),
                Some(a) if is_quit(&a) => break None,
                Some(_) => continue,
                None => break None,
            }
        };
        let Some(remembered) = remembered else {
            break;
        };

        session
            .answer(&app.scheduler, remembered)
            .with_context(|| format!("Failed to record review of '{}'", word.word))?;
    }

    println!();
    if session.is_finished() {
        println!("{}", terminal::paint("All done for today!", Color::GREEN, use_color));
    } else {
        println!("Stopped after {} of {} words.", session.completed(), session.total());
    }
    println!("{}", terminal::progress_bar(session.progress_percent(), 20));

    Ok(session.completed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn test_app(temp: &TempDir) -> App {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10);
        App::new(Some(temp.path()), None, today).unwrap()
    }

    #[test]
    fn test_answers_are_recorded() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);
        let total = app.catalog.len();

        // First word remembered, second forgotten (after one invalid answer), then quit
        let mut input = Cursor::new("\ny\n\nmaybe\nn\nq\n");
        let answered = run_with(&app, &mut input, false).unwrap();
        assert_eq!(answered, 2);

        let due = app.scheduler.due_words(&app.catalog).unwrap();
        assert_eq!(due.len(), total - 1);
        assert_eq!(due[0].word.id, "2");
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let temp = TempDir::new().unwrap();
        let app = test_app(&temp);

        let answered = run_with(&app, &mut Cursor::new(""), false).unwrap();
        assert_eq!(answered, 0);
    }
}
