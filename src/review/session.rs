//! A single day's pass over the due words
//!
//! The due list is captured once when the session starts and is not
//! recomputed while the learner works through it.

use super::models::DueWord;
use super::scheduler::ReviewService;
use super::storage::Result;
use crate::catalog::Catalog;

pub struct ReviewSession {
    words: Vec<DueWord>,
    index: usize,
}

impl ReviewSession {
    /// Start a session from the words due today
    pub fn start<R: ReviewService + ?Sized>(service: &R, catalog: &Catalog) -> Result<Self> {
        Ok(Self::from_words(service.today_review_words(catalog)?))
    }

    pub fn from_words(words: Vec<DueWord>) -> Self {
        Self { words, index: 0 }
    }

    pub fn current(&self) -> Option<&DueWord> {
        self.words.get(self.index)
    }

    /// Report the outcome for the current word and move to the next one
    ///
    /// Does nothing once the session is finished.
    pub fn answer<R: ReviewService + ?Sized>(&mut self, service: &R, remembered: bool) -> Result<()> {
        let Some(current) = self.words.get(self.index) else {
            return Ok(());
        };
        service.update_progress_after_review(&current.word.id, remembered)?;
        self.index += 1;
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.words.len()
    }

    /// Number of words already answered
    pub fn completed(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    /// Completion as a rounded whole percentage; 0 for an empty session
    pub fn progress_percent(&self) -> u32 {
        if self.words.is_empty() {
            return 0;
        }
        ((self.index as f64 / self.words.len() as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WordEntry;
    use crate::review::clock::FixedClock;
    use crate::review::scheduler::ReviewScheduler;
    use crate::review::storage::{MemoryKeyValueStore, ProgressStorage};
    use chrono::NaiveDate;

    fn setup() -> (MemoryKeyValueStore, Catalog) {
        let catalog = Catalog::new(vec![
            WordEntry::new("1", "one", "一"),
            WordEntry::new("2", "two", "二"),
            WordEntry::new("3", "three", "三"),
        ])
        .unwrap();
        (MemoryKeyValueStore::new(), catalog)
    }

    #[test]
    fn test_walks_through_due_words() {
        let (kv, catalog) = setup();
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let sched = ReviewScheduler::with_clock(ProgressStorage::new(&kv), FixedClock(today));

        let mut session = ReviewSession::start(&sched, &catalog).unwrap();
        assert_eq!(session.total(), 3);
        assert_eq!(session.progress_percent(), 0);
        assert_eq!(session.current().unwrap().word.id, "1");

        session.answer(&sched, true).unwrap();
        assert_eq!(session.completed(), 1);
        assert_eq!(session.progress_percent(), 33);

        session.answer(&sched, false).unwrap();
        assert_eq!(session.progress_percent(), 67);
        session.answer(&sched, true).unwrap();

        assert!(session.is_finished());
        assert!(session.current().is_none());
        assert_eq!(session.progress_percent(), 100);

        // Extra answers after the end are ignored
        session.answer(&sched, true).unwrap();
        assert_eq!(session.completed(), 3);

        let remaining = ReviewSession::start(&sched, &catalog).unwrap();
        assert_eq!(remaining.total(), 1);
        assert_eq!(remaining.current().unwrap().word.id, "2");
    }

    #[test]
    fn test_empty_session() {
        let session = ReviewSession::from_words(Vec::new());
        assert!(session.is_finished());
        assert_eq!(session.total(), 0);
        assert_eq!(session.progress_percent(), 0);
    }
}
