//! Review scheduler: due-word selection and outcome recording

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::algorithm::{calculate_next_review, ReviewResult};
use super::clock::{Clock, SystemClock};
use super::models::{DueWord, ProgressRecord, ProgressStore, ReviewStats};
use super::storage::{KeyValueStore, ProgressStorage, Result};
use crate::catalog::Catalog;

/// How stored progress is reconciled with a changed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileMode {
    /// Any count mismatch resets every word to stage 0
    #[default]
    Reset,
    /// Add records for new words and keep existing progress
    Additive,
}

/// The calls a review front end makes into the scheduler
pub trait ReviewService {
    /// Words due today with their progress, in catalog order
    fn today_review_words(&self, catalog: &Catalog) -> Result<Vec<DueWord>>;

    /// Record whether the learner remembered a word
    fn update_progress_after_review(&self, word_id: &str, remembered: bool) -> Result<()>;
}

/// Owns progress state and advances words along the interval ladder
pub struct ReviewScheduler<S, C = SystemClock> {
    storage: ProgressStorage<S>,
    clock: C,
    reconcile: ReconcileMode,
}

impl<S: KeyValueStore> ReviewScheduler<S, SystemClock> {
    pub fn new(storage: ProgressStorage<S>) -> Self {
        Self::with_clock(storage, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ReviewScheduler<S, C> {
    pub fn with_clock(storage: ProgressStorage<S>, clock: C) -> Self {
        Self {
            storage,
            clock,
            reconcile: ReconcileMode::default(),
        }
    }

    pub fn reconcile_mode(mut self, mode: ReconcileMode) -> Self {
        self.reconcile = mode;
        self
    }

    /// Today's date at day resolution
    pub fn current_date(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Load progress, rebuilding it when it no longer matches the catalog
    pub fn ensure_initialized(&self, catalog: &Catalog) -> Result<ProgressStore> {
        let progress = self.storage.load()?;

        match self.reconcile {
            ReconcileMode::Reset => {
                if progress.len() != catalog.len() {
                    log::info!(
                        "Progress has {} records for {} words, reinitializing",
                        progress.len(),
                        catalog.len()
                    );
                    return self.reinitialize(catalog);
                }
                Ok(progress)
            }
            ReconcileMode::Additive => {
                let today = self.current_date();
                let mut progress = progress;
                let mut added = 0;
                for word in catalog {
                    if !progress.contains(&word.id) {
                        progress.insert(ProgressRecord::new(word.id.clone(), today));
                        added += 1;
                    }
                }
                if added > 0 {
                    log::info!("Added progress for {} new words", added);
                    self.storage.save(&progress)?;
                }
                Ok(progress)
            }
        }
    }

    /// Discard all progress and start every word at stage 0, due today
    pub fn reinitialize(&self, catalog: &Catalog) -> Result<ProgressStore> {
        let progress = ProgressStore::fresh(catalog, self.current_date());
        self.storage.save(&progress)?;
        Ok(progress)
    }

    /// Catalog entries whose next review date is on or before today
    pub fn due_words(&self, catalog: &Catalog) -> Result<Vec<DueWord>> {
        let today = self.current_date();
        let progress = self.ensure_initialized(catalog)?;

        Ok(catalog
            .iter()
            .filter_map(|word| {
                let record = progress.get(&word.id)?;
                record.is_due(today).then(|| DueWord {
                    word: word.clone(),
                    progress: record.clone(),
                })
            })
            .collect())
    }

    /// Apply one review outcome and persist the whole store
    ///
    /// Re-reads persisted progress first. Unknown ids start from a default
    /// record.
    pub fn record_outcome(&self, word_id: &str, remembered: bool) -> Result<ProgressRecord> {
        let today = self.current_date();
        let mut progress = self.storage.load()?;

        let stage_index = progress.get(word_id).map_or(0, |p| p.stage_index);
        let ReviewResult {
            stage_index,
            next_review_date,
        } = calculate_next_review(stage_index, remembered, today);

        let record = ProgressRecord {
            id: word_id.to_string(),
            stage_index,
            next_review_date,
        };
        progress.insert(record.clone());
        self.storage.save(&progress)?;

        log::debug!(
            "Word {} {} -> stage {}, next review {}",
            word_id,
            if remembered { "remembered" } else { "forgotten" },
            stage_index,
            next_review_date
        );

        Ok(record)
    }

    /// Review statistics for the catalog
    pub fn stats(&self, catalog: &Catalog) -> Result<ReviewStats> {
        let today = self.current_date();
        let progress = self.ensure_initialized(catalog)?;

        let mut stats = ReviewStats {
            total_words: catalog.len(),
            ..Default::default()
        };

        for record in catalog.iter().filter_map(|w| progress.get(&w.id)) {
            let stage = record.stage_index.min(stats.stage_counts.len() - 1);
            stats.stage_counts[stage] += 1;
            if record.is_mastered() {
                stats.mastered += 1;
            }
            if record.is_due(today) {
                stats.due_today += 1;
            }
        }

        Ok(stats)
    }
}

impl<S: KeyValueStore, C: Clock> ReviewService for ReviewScheduler<S, C> {
    fn today_review_words(&self, catalog: &Catalog) -> Result<Vec<DueWord>> {
        self.due_words(catalog)
    }

    fn update_progress_after_review(&self, word_id: &str, remembered: bool) -> Result<()> {
        self.record_outcome(word_id, remembered).map(|_| ())
    }
}
