use anyhow::{Context, Result};

use vocab_lib::review::algorithm::format_date;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let due = app
        .scheduler
        .due_words(&app.catalog)
        .context("Failed to load today's words")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&due)?);
        }
        OutputFormat::Plain => {
            if due.is_empty() {
                println!("No words to review today.");
                return Ok(());
            }

            let max_word_len = due.iter().map(|d| d.word.word.chars().count()).max().unwrap_or(4).max(4);

            println!("{:<width$} Stage  Due", "Word", width = max_word_len + 1);
            println!("{} {} {}", "\u{2500}".repeat(max_word_len + 1), "\u{2500}".repeat(6), "\u{2500}".repeat(10));

            for item in &due {
                let overdue = item.progress.next_review_date < app.today();
                let date = format_date(item.progress.next_review_date);
                let date = if overdue {
                    terminal::paint(&date, Color::YELLOW, use_color)
                } else {
                    date
                };
                println!(
                    "{:<width$} {:<6} {}",
                    item.word.word,
                    item.progress.stage_index,
                    date,
                    width = max_word_len + 1
                );
            }

            println!("\n{} words due on {}", due.len(), format_date(app.today()));
        }
    }

    Ok(())
}
