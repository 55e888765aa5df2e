mod app;
mod commands;
mod render;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vocab-cli", about = "Ebbinghaus vocabulary review", version)]
struct Cli {
    /// Directory holding config.toml and review progress
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Word list JSON file (default: config catalog_path, then the bundled list)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Outcome {
    Remembered,
    Forgot,
}

#[derive(Subcommand)]
enum Command {
    /// List words due today
    Due,

    /// Review today's words: reveal the meaning, then say whether you remembered
    Review,

    /// Multiple-choice quiz over today's words
    Quiz,

    /// Record a single review outcome
    Record {
        /// Word id or spelling (case-insensitive prefix match)
        word: String,
        /// Whether the word was remembered
        outcome: Outcome,
        /// Record under the raw id when no catalog word matches
        #[arg(long)]
        allow_unknown: bool,
    },

    /// Show progress per stage
    Stats,

    /// Reset every word to stage 0, due today
    Reset {
        /// Confirm discarding all progress
        #[arg(long)]
        yes: bool,
    },
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    vocab_lib::review::algorithm::parse_date(s)
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();

    let app = app::App::new(cli.data_dir.as_deref(), cli.catalog.as_deref(), cli.today)?;

    match cli.command {
        // No subcommand → start today's review
        None | Some(Command::Review) => {
            commands::review::run(&app, use_color)?;
        }
        Some(Command::Due) => {
            commands::due::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Quiz) => {
            commands::quiz::run(&app, use_color)?;
        }
        Some(Command::Record {
            word,
            outcome,
            allow_unknown,
        }) => {
            commands::record::run(&app, &word, outcome, allow_unknown, &cli.format, use_color)?;
        }
        Some(Command::Stats) => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Reset { yes }) => {
            commands::reset::run(&app, yes, &cli.format)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_record() {
        let cli = Cli::try_parse_from([
            "vocab-cli", "--today", "2024-01-10", "record", "abandon", "forgot",
        ])
        .unwrap();

        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert!(matches!(
            cli.command,
            Some(Command::Record { ref word, outcome: Outcome::Forgot, .. }) if word == "abandon"
        ));
    }

    #[test]
    fn test_parse_allow_unknown() {
        let cli = Cli::try_parse_from(["vocab-cli", "record", "ghost", "remembered", "--allow-unknown"])
            .unwrap();

        assert!(matches!(cli.command, Some(Command::Record { allow_unknown: true, .. })));
    }

    #[test]
    fn test_rejects_bad_date() {
        assert!(Cli::try_parse_from(["vocab-cli", "--today", "10/01/2024", "due"]).is_err());
    }
}
