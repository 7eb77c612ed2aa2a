// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV export of the survey responses
    #[arg(short, long, env = "BOOKCLUB_INPUT", default_value = "form_responses/book-2.csv")]
    pub input: PathBuf,

    /// Fewest number of people allowed in a discussion group
    #[arg(short, long, env = "BOOKCLUB_MIN_GROUP_SIZE", default_value_t = 3)]
    pub min_group_size: usize,

    /// Column holding the participant's first name (zero-based)
    #[arg(long, default_value_t = 3)]
    pub first_name_col: usize,

    /// Column holding the participant's last name (zero-based)
    #[arg(long, default_value_t = 4)]
    pub last_name_col: usize,

    /// Column holding the comma-separated, ranked book list (zero-based)
    #[arg(long, default_value_t = 6)]
    pub prefs_col: usize,

    /// How many of the best combinations to print
    #[arg(short, long, default_value_t = 3)]
    pub top: usize,

    /// Titles in a combination heading are cut to this many characters
    #[arg(long, default_value_t = 12)]
    pub max_title_len: usize,

    /// Score combinations on the current thread only
    #[arg(long)]
    pub no_parallel: bool,

    /// Hide the scoring progress bar
    #[arg(long)]
    pub no_progress: bool,
}
