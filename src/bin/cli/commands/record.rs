use anyhow::{Context, Result};

use vocab_lib::review::algorithm::{format_date, format_interval, interval_for_stage};

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::{Outcome, OutputFormat};

pub fn run(
    app: &App,
    query: &str,
    outcome: Outcome,
    allow_unknown: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let word_id = match app.find_word(query) {
        Ok(word) => word.id.clone(),
        Err(e) if allow_unknown => {
            log::warn!("{}; recording under id '{}'", e, query);
            query.to_string()
        }
        Err(e) => return Err(e),
    };

    let remembered = matches!(outcome, Outcome::Remembered);
    let record = app
        .scheduler
        .record_outcome(&word_id, remembered)
        .with_context(|| format!("Failed to record review of '{}'", word_id))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        OutputFormat::Plain => {
            let label = app.catalog.get(&word_id).map_or(word_id.as_str(), |w| w.word.as_str());
            println!(
                "{} -> stage {} (next review {}, in {})",
                terminal::paint(label, Color::BOLD, use_color),
                record.stage_index,
                format_date(record.next_review_date),
                format_interval(interval_for_stage(record.stage_index))
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn app_in(temp: &TempDir) -> App {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10);
        let app = App::new(Some(temp.path()), None, today).unwrap();
        app.scheduler.ensure_initialized(&app.catalog).unwrap();
        app
    }

    #[test]
    fn test_records_by_spelling() {
        let temp = TempDir::new().unwrap();
        let app = app_in(&temp);

        run(&app, "aband", Outcome::Remembered, false, &OutputFormat::Plain, false).unwrap();

        let stats = app.scheduler.stats(&app.catalog).unwrap();
        assert_eq!(stats.stage_counts[1], 1);
    }

    #[test]
    fn test_typo_leaves_progress_untouched() {
        let temp = TempDir::new().unwrap();
        let app = app_in(&temp);
        for _ in 0..4 {
            run(&app, "abandon", Outcome::Remembered, false, &OutputFormat::Plain, false).unwrap();
        }

        assert!(run(&app, "abandn", Outcome::Remembered, false, &OutputFormat::Plain, false).is_err());

        let stats = app.scheduler.stats(&app.catalog).unwrap();
        assert_eq!(stats.stage_counts[4], 1);
        assert_eq!(stats.stage_counts[0], app.catalog.len() - 1);
    }

    #[test]
    fn test_allow_unknown_records_raw_id() {
        let temp = TempDir::new().unwrap();
        let app = app_in(&temp);

        run(&app, "zzz", Outcome::Forgot, true, &OutputFormat::Json, false).unwrap();

        // The extra record no longer matches the catalog size and is reset away
        let progress = app.scheduler.ensure_initialized(&app.catalog).unwrap();
        assert!(!progress.contains("zzz"));
        assert_eq!(progress.len(), app.catalog.len());
    }
}
