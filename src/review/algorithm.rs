//! Ebbinghaus interval ladder
//!
//! A word sits on one rung of a fixed ladder of review intervals. Each review
//! moves it exactly one rung: up when the learner remembered the word, down
//! when they forgot it. The ladder is clamped at both ends, so a word at the
//! top rung stays reviewable every 30 days forever.
//!
//! Ladder (days until next review):
//! - stage 0: 0 (same day)
//! - stage 1: 1
//! - stage 2: 2
//! - stage 3: 4
//! - stage 4: 7
//! - stage 5: 15
//! - stage 6: 30

use chrono::{Duration, NaiveDate};

/// Days until the next review, indexed by stage
pub const INTERVALS: [u32; 7] = [0, 1, 2, 4, 7, 15, 30];

/// Number of stages on the ladder
pub const STAGE_COUNT: usize = INTERVALS.len();

/// Highest stage; a word here is considered mastered
pub const LAST_STAGE: usize = STAGE_COUNT - 1;

/// On-disk and display format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of applying one review outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewResult {
    pub stage_index: usize,
    pub next_review_date: NaiveDate,
}

/// Move a stage one rung up or down, clamped to the ladder
///
/// Out-of-range stored stages are first clamped to the top rung.
pub fn next_stage(stage_index: usize, remembered: bool) -> usize {
    let stage = stage_index.min(LAST_STAGE);
    if remembered {
        (stage + 1).min(LAST_STAGE)
    } else {
        stage.saturating_sub(1)
    }
}

/// Interval in days for a stage
pub fn interval_for_stage(stage_index: usize) -> u32 {
    INTERVALS[stage_index.min(LAST_STAGE)]
}

/// Calculate the new stage and due date after a review on `today`
pub fn calculate_next_review(stage_index: usize, remembered: bool, today: NaiveDate) -> ReviewResult {
    let stage_index = next_stage(stage_index, remembered);
    let next_review_date = add_days(today, i64::from(interval_for_stage(stage_index)));

    ReviewResult {
        stage_index,
        next_review_date,
    }
}

/// Calendar-correct date addition
///
/// Saturates at the bounds of the representable date range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    Duration::try_days(days)
        .and_then(|d| date.checked_add_signed(d))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Parse a zero-padded `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

/// Format a date as zero-padded `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Date addition on the textual `YYYY-MM-DD` form
pub fn add_days_str(date: &str, days: i64) -> Result<String, chrono::ParseError> {
    Ok(format_date(add_days(parse_date(date)?, days)))
}

/// Format an interval in days to a short human-readable string
pub fn format_interval(days: u32) -> String {
    match days {
        0 => "today".to_string(),
        1..=6 => format!("{}d", days),
        7..=29 => format!("{}w", days / 7),
        _ => format!("{}mo", days / 30),
    }
}
