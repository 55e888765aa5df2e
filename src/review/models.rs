//! Data models for review progress

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::algorithm::{LAST_STAGE, STAGE_COUNT};
use crate::catalog::{Catalog, WordEntry, WordId};

/// Spaced repetition progress for one word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(deserialize_with = "crate::catalog::models::deserialize_word_id")]
    pub id: WordId,
    /// Current rung on the interval ladder
    pub stage_index: usize,
    /// First day the word is due again (`YYYY-MM-DD` on disk)
    pub next_review_date: NaiveDate,
}

impl ProgressRecord {
    /// A never-reviewed word: stage 0, due immediately
    pub fn new(id: impl Into<WordId>, today: NaiveDate) -> Self {
        Self {
            id: id.into(),
            stage_index: 0,
            next_review_date: today,
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_review_date <= today
    }

    pub fn is_mastered(&self) -> bool {
        self.stage_index >= LAST_STAGE
    }
}

/// All progress records, keyed by word id
///
/// Persisted as a single JSON object and always rewritten whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressStore {
    records: BTreeMap<WordId, ProgressRecord>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh records for every catalog entry, all due today
    pub fn fresh(catalog: &Catalog, today: NaiveDate) -> Self {
        let records = catalog
            .iter()
            .map(|w| (w.id.clone(), ProgressRecord::new(w.id.clone(), today)))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ProgressRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Insert or replace the record stored under `record.id`
    pub fn insert(&mut self, record: ProgressRecord) -> Option<ProgressRecord> {
        self.records.insert(record.id.clone(), record)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProgressRecord> {
        self.records.values()
    }
}

impl FromIterator<ProgressRecord> for ProgressStore {
    fn from_iter<I: IntoIterator<Item = ProgressRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

/// A due word with its current progress, used for review sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueWord {
    pub word: WordEntry,
    pub progress: ProgressRecord,
}

/// Progress statistics over a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total_words: usize,
    pub due_today: usize,
    /// Number of words at each ladder stage
    pub stage_counts: [usize; STAGE_COUNT],
    pub mastered: usize,
}
