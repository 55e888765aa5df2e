use anyhow::{Context, Result};

use vocab_lib::review::algorithm::{format_interval, INTERVALS};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let stats = app
        .scheduler
        .stats(&app.catalog)
        .context("Failed to compute review statistics")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::paint("Review statistics", Color::BOLD, use_color));
            println!("  Words:     {}", stats.total_words);
            println!("  Due today: {}", stats.due_today);
            println!("  Mastered:  {}", stats.mastered);
            println!();
            println!("Stage  Interval  Words");
            for (stage, count) in stats.stage_counts.iter().enumerate() {
                println!("{:<6} {:<9} {}", stage, format_interval(INTERVALS[stage]), count);
            }
        }
    }

    Ok(())
}
