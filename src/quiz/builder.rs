//! Distractor selection for multiple-choice questions

use rand::seq::SliceRandom;
use rand::Rng;

use super::models::{QuizOption, QuizQuestion};
use crate::catalog::{Catalog, WordEntry};

/// Wrong options shown alongside the correct meaning
pub const DISTRACTOR_COUNT: usize = 3;

/// Build a question for `word` using other catalog meanings as distractors
///
/// Takes up to `distractor_count` other entries at random. With a
/// single-entry catalog the question has only the correct option.
pub fn build_question<R: Rng + ?Sized>(
    word: &WordEntry,
    catalog: &Catalog,
    distractor_count: usize,
    rng: &mut R,
) -> QuizQuestion {
    let mut others: Vec<&WordEntry> = catalog.iter().filter(|w| w.id != word.id).collect();
    others.shuffle(rng);

    let mut options = vec![QuizOption {
        text: word.meaning_zh.clone(),
        is_correct: true,
    }];
    options.extend(others.into_iter().take(distractor_count).map(|w| QuizOption {
        text: w.meaning_zh.clone(),
        is_correct: false,
    }));
    options.shuffle(rng);

    QuizQuestion {
        word: word.clone(),
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog(n: usize) -> Catalog {
        Catalog::new(
            (1..=n)
                .map(|i| WordEntry::new(i.to_string(), format!("w{}", i), format!("m{}", i)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_four_options_one_correct() {
        let words = catalog(10);
        let mut rng = StdRng::seed_from_u64(7);
        let word = words.get("4").unwrap();

        for _ in 0..20 {
            let q = build_question(word, &words, DISTRACTOR_COUNT, &mut rng);
            assert_eq!(q.options.len(), 4);
            assert_eq!(q.options.iter().filter(|o| o.is_correct).count(), 1);
            assert_eq!(q.options[q.correct_index()].text, "m4");
            assert!(q.options.iter().filter(|o| !o.is_correct).all(|o| o.text != "m4"));
        }
    }

    #[test]
    fn test_small_catalog_has_fewer_distractors() {
        let words = catalog(3);
        let mut rng = StdRng::seed_from_u64(1);
        let q = build_question(words.get("1").unwrap(), &words, DISTRACTOR_COUNT, &mut rng);
        assert_eq!(q.options.len(), 3);
    }

    #[test]
    fn test_single_entry_catalog() {
        let words = catalog(1);
        let mut rng = StdRng::seed_from_u64(1);
        let q = build_question(words.get("1").unwrap(), &words, DISTRACTOR_COUNT, &mut rng);

        assert_eq!(q.options.len(), 1);
        assert_eq!(q.correct_index(), 0);
        assert!(q.answer(0).unwrap().is_correct);
    }

    #[test]
    fn test_correct_position_varies() {
        let words = catalog(8);
        let mut rng = StdRng::seed_from_u64(42);
        let word = words.get("2").unwrap();

        let positions: std::collections::HashSet<usize> = (0..50)
            .map(|_| build_question(word, &words, DISTRACTOR_COUNT, &mut rng).correct_index())
            .collect();
        assert!(positions.len() > 1);
    }

    #[test]
    fn test_answer_grading() {
        let words = catalog(5);
        let mut rng = StdRng::seed_from_u64(3);
        let q = build_question(words.get("5").unwrap(), &words, DISTRACTOR_COUNT, &mut rng);
        let correct = q.correct_index();
        let wrong = (correct + 1) % q.options.len();

        let right = q.answer(correct).unwrap();
        assert!(right.is_correct);
        assert!(right.feedback_delay() < std::time::Duration::from_secs(1));

        let miss = q.answer(wrong).unwrap();
        assert!(!miss.is_correct);
        assert_eq!(miss.correct_text, "m5");
        assert_eq!(miss.correct_index, correct);

        assert!(q.answer(99).is_none());
    }
}
