// src/config.rs

use crate::cli::Args;
use crate::error::{PickerError, Result};
use std::path::PathBuf;

/// Options threaded through every pipeline stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    /// Quorum: fewest supporters each book in a combo needs
    pub min_group_size: usize,
    pub first_name_col: usize,
    pub last_name_col: usize,
    pub prefs_col: usize,
    pub top: usize,
    pub max_title_len: usize,
    pub parallel: bool,
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("form_responses").join("book-2.csv"),
            min_group_size: 3,
            first_name_col: 3,
            last_name_col: 4,
            prefs_col: 6,
            top: 3,
            max_title_len: 12,
            parallel: true,
            show_progress: true,
        }
    }
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Self {
            input_path: args.input.clone(),
            min_group_size: args.min_group_size,
            first_name_col: args.first_name_col,
            last_name_col: args.last_name_col,
            prefs_col: args.prefs_col,
            top: args.top,
            max_title_len: args.max_title_len,
            parallel: !args.no_parallel,
            show_progress: !args.no_progress,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_group_size == 0 {
            return Err(PickerError::Config("min group size must be at least 1".into()));
        }
        if self.top == 0 {
            return Err(PickerError::Config("top must be at least 1".into()));
        }
        let cols = [self.first_name_col, self.last_name_col, self.prefs_col];
        if cols[0] == cols[1] || cols[0] == cols[2] || cols[1] == cols[2] {
            return Err(PickerError::Config(format!(
                "name and preference columns must differ, got {}, {} and {}",
                cols[0], cols[1], cols[2]
            )));
        }
        Ok(())
    }
}
