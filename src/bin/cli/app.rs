use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use vocab_lib::catalog::{Catalog, WordEntry};
use vocab_lib::config::AppConfig;
use vocab_lib::review::{
    Clock, FileKeyValueStore, FixedClock, ProgressStorage, ReviewScheduler, SystemClock,
};

/// Shared application state for CLI commands
pub struct App {
    pub config: AppConfig,
    pub data_dir: PathBuf,
    pub catalog: Catalog,
    pub scheduler: ReviewScheduler<FileKeyValueStore, FixedClock>,
}

impl App {
    /// Initialize from the data directory, config file and word list
    ///
    /// "Today" is fixed when the app starts so a session never straddles
    /// midnight.
    pub fn new(
        data_dir: Option<&Path>,
        catalog_path: Option<&Path>,
        today: Option<NaiveDate>,
    ) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => AppConfig::default_data_dir().context("Failed to get data directory")?,
        };

        let config = AppConfig::load(&data_dir).context("Failed to load config")?;

        let catalog_path = catalog_path
            .map(Path::to_path_buf)
            .or_else(|| config.catalog_path.clone());
        let catalog = match catalog_path {
            Some(path) => Catalog::load(&path)
                .with_context(|| format!("Failed to load word list {}", path.display()))?,
            None => Catalog::builtin().context("Failed to load bundled word list")?,
        };

        let store = FileKeyValueStore::new(data_dir.clone())
            .context("Failed to initialize progress storage")?;
        let storage = ProgressStorage::with_key(store, config.storage_key.clone());
        let clock = FixedClock(today.unwrap_or_else(|| SystemClock.today()));
        let scheduler = ReviewScheduler::with_clock(storage, clock).reconcile_mode(config.reconcile);

        Ok(Self {
            config,
            data_dir,
            catalog,
            scheduler,
        })
    }

    /// Find a word by id or spelling (case-insensitive prefix match)
    pub fn find_word(&self, query: &str) -> Result<&WordEntry> {
        if let Some(word) = self.catalog.get(query) {
            return Ok(word);
        }

        let query_lower = query.to_lowercase();

        // Exact match first
        if let Some(word) = self.catalog.iter().find(|w| w.word.to_lowercase() == query_lower) {
            return Ok(word);
        }

        // Prefix match
        let matches: Vec<&WordEntry> = self.catalog.iter()
            .filter(|w| w.word.to_lowercase().starts_with(&query_lower))
            .collect();

        match matches.len() {
            0 => bail!("No word matching '{}'", query),
            1 => Ok(matches[0]),
            _ => bail!("Ambiguous word '{}'. Matches:\n{}", query,
                matches.iter().map(|w| format!("  - {} ({})", w.word, w.id)).collect::<Vec<_>>().join("\n")),
        }
    }

    /// The review date, fixed when the app started
    pub fn today(&self) -> NaiveDate {
        self.scheduler.current_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_in(temp: &TempDir) -> App {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10);
        App::new(Some(temp.path()), None, today).unwrap()
    }

    #[test]
    fn test_find_word() {
        let temp = TempDir::new().unwrap();
        let app = app_in(&temp);

        assert_eq!(app.find_word("1").unwrap().word, "abandon");
        assert_eq!(app.find_word("Benefit").unwrap().id, "2");
        assert_eq!(app.find_word("cand").unwrap().word, "candidate");
        assert!(app.find_word("zzz").is_err());
    }

    #[test]
    fn test_ambiguous_prefix() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("words.json");
        std::fs::write(
            &path,
            r#"[{"id":1,"word":"cat","meaningZh":"猫"},{"id":2,"word":"catch","meaningZh":"抓"}]"#,
        )
        .unwrap();
        let app = App::new(Some(temp.path()), Some(path.as_path()), None).unwrap();

        assert_eq!(app.find_word("cat").unwrap().id, "1");
        assert!(app.find_word("ca").is_err());
    }
}
