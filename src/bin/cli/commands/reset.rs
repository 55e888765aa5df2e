use anyhow::{bail, Context, Result};

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, confirmed: bool, format: &OutputFormat) -> Result<()> {
    if !confirmed {
        bail!("This discards all review progress. Re-run with --yes to confirm.");
    }

    let progress = app
        .scheduler
        .reinitialize(&app.catalog)
        .context("Failed to reset progress")?;
    log::info!("Reset progress for {} words", progress.len());

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "reset": progress.len(),
                "dataDir": app.data_dir.to_string_lossy(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Reset {} words to stage 0, all due today.", progress.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_requires_confirmation() {
        let temp = TempDir::new().unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 10);
        let app = App::new(Some(temp.path()), None, today).unwrap();
        app.scheduler.ensure_initialized(&app.catalog).unwrap();
        app.scheduler.record_outcome("1", true).unwrap();

        assert!(run(&app, false, &OutputFormat::Plain).is_err());
        assert!(app.scheduler.due_words(&app.catalog).unwrap().len() < app.catalog.len());

        run(&app, true, &OutputFormat::Plain).unwrap();
        assert_eq!(app.scheduler.due_words(&app.catalog).unwrap().len(), app.catalog.len());
    }
}
