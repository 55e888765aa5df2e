pub mod due;
pub mod quiz;
pub mod record;
pub mod reset;
pub mod review;
pub mod stats;

use std::io::{self, BufRead, Write};

use anyhow::Result;

/// Print a prompt and read one trimmed line; `None` at end of input
pub fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<Option<String>> {
    print!("{} ", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "q" | "quit")
}
