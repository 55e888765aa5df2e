//! Data models for multiple-choice quizzes

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::catalog::WordEntry;

/// One answer choice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub text: String,
    pub is_correct: bool,
}

/// A word with shuffled meaning choices, exactly one of them correct
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub word: WordEntry,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    /// Index of the correct option in display order
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|o| o.is_correct)
            .unwrap_or_default()
    }

    /// Grade a selection; `None` if the index is out of range
    pub fn answer(&self, index: usize) -> Option<QuizAnswer> {
        let selected = self.options.get(index)?;
        Some(QuizAnswer {
            selected_index: index,
            correct_index: self.correct_index(),
            is_correct: selected.is_correct,
            correct_text: self.word.meaning_zh.clone(),
        })
    }
}

/// The graded result of one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    pub selected_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
    pub correct_text: String,
}

impl QuizAnswer {
    /// How long to show feedback before moving on; wrong answers linger
    pub fn feedback_delay(&self) -> Duration {
        if self.is_correct {
            Duration::from_millis(800)
        } else {
            Duration::from_millis(1500)
        }
    }
}
