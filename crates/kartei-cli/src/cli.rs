//! CLI argument definitions for the kartei scheduler.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use kartei_model::Response;

#[derive(Parser)]
#[command(
    name = "kartei",
    version,
    about = "File-backed spaced-repetition scheduler",
    long_about = "Schedule reviews over a folder of per-deck YAML card files.\n\n\
                  Without further arguments the review table for today is printed.\n\
                  Trailing INDEX RESPONSE pairs grade rows of that table, e.g.\n\
                  `kartei cards 1 Good 2 Hard 3 5d`."
)]
pub struct Cli {
    /// Root folder containing one directory per deck.
    #[arg(value_name = "INPUT_FOLDER")]
    pub input_folder: PathBuf,

    /// Undo the last committed change-set (destructive).
    #[arg(long)]
    pub undo: bool,

    /// Show every due and new candidate instead of one card per deck.
    #[arg(long)]
    pub all: bool,

    /// Add a new card to a deck.
    #[arg(long, num_args = 2, value_names = ["DECK", "CARD"])]
    pub add: Option<Vec<String>>,

    /// Add a new deck.
    #[arg(long = "add-deck", value_name = "DECK")]
    pub add_deck: Option<String>,

    /// List the new cards of the given decks, then exit.
    #[arg(long = "see-new", num_args = 1.., value_name = "DECK")]
    pub see_new: Option<Vec<String>>,

    /// Due date for the card being added (only with --add).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub due: Option<String>,

    /// Treat cards due up to N days ahead as due today.
    #[arg(long, default_value_t = 0, value_name = "N")]
    pub peek: u64,

    /// Show cards studied on a date (default today; also accepts e.g. 3d).
    #[arg(
        long = "see-studied",
        value_name = "DATE",
        num_args = 0..=1,
        default_missing_value = "0d"
    )]
    pub see_studied: Option<String>,

    /// Show the calendar of upcoming due dates, then exit.
    #[arg(long)]
    pub upcoming: bool,

    /// Group the upcoming calendar by deck.
    #[arg(long = "by-deck", requires = "upcoming")]
    pub by_deck: bool,

    /// Limit the upcoming calendar to its first N dates.
    #[arg(long = "max-days", value_name = "N", requires = "upcoming")]
    pub max_days: Option<usize>,

    /// Drop upcoming dates more than N days from now.
    #[arg(long = "max-days-from-now", value_name = "N", requires = "upcoming")]
    pub max_days_from_now: Option<u64>,

    /// Review responses as INDEX RESPONSE pairs.
    #[arg(value_name = "INDEX RESPONSE", num_args = 0..)]
    pub responses: Vec<String>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Parses the trailing positionals into (row index, response) pairs.
pub fn parse_response_pairs(tokens: &[String]) -> Result<Vec<(usize, Response)>, String> {
    let usage = "usage: `1 Hard`, `2 Good`, `1 3d`, etc.".to_string();
    if tokens.len() % 2 != 0 {
        return Err(usage);
    }
    let mut pairs = Vec::with_capacity(tokens.len() / 2);
    for chunk in tokens.chunks(2) {
        let index: usize = chunk[0].parse().map_err(|_| usage.clone())?;
        let response: Response = chunk[1].parse().map_err(|_| usage.clone())?;
        pairs.push((index, response));
    }
    Ok(pairs)
}
