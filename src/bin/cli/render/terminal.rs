use vocab_lib::catalog::WordEntry;
use vocab_lib::quiz::{QuizAnswer, QuizQuestion};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap text in a color when color output is enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Word headline: spelling, phonetic and part of speech
pub fn render_word(word: &WordEntry, use_color: bool) -> String {
    let mut line = paint(&word.word, Color::BOLD, use_color);
    if let Some(ref phonetic) = word.phonetic {
        line.push_str("  ");
        line.push_str(&paint(phonetic, Color::GRAY, use_color));
    }
    if let Some(ref pos) = word.pos {
        line.push_str("  ");
        line.push_str(&paint(pos, Color::DIM, use_color));
    }
    line
}

/// Text progress bar, e.g. `[#####-----] 50%`
pub fn progress_bar(percent: u32, width: usize) -> String {
    let percent = percent.min(100);
    let filled = (width * percent as usize + 50) / 100;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}

/// Numbered option list for a quiz question
pub fn render_options(question: &QuizQuestion) -> Vec<String> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(i, o)| format!("  {}. {}", i + 1, o.text))
        .collect()
}

/// Feedback line after a quiz selection
pub fn render_feedback(answer: &QuizAnswer, use_color: bool) -> String {
    if answer.is_correct {
        paint("Correct!", Color::GREEN, use_color)
    } else {
        let msg = format!(
            "Wrong. The answer is: {}. Counted as forgotten.",
            answer.correct_text
        );
        paint(&msg, Color::RED, use_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[----------] 0%");
        assert_eq!(progress_bar(50, 10), "[#####-----] 50%");
        assert_eq!(progress_bar(100, 4), "[####] 100%");
        assert_eq!(progress_bar(250, 4), "[####] 100%");
    }

    #[test]
    fn test_render_word_plain() {
        let word = WordEntry::new("1", "run", "跑").with_pos("v.");
        assert_eq!(render_word(&word, false), "run  v.");
    }
}
