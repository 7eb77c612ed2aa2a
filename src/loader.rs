// src/loader.rs

use crate::config::Config;
use crate::error::{PickerError, Result};
use crate::model::PreferenceRecord;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;

/// Reads every survey response from the configured CSV file.
///
/// The file is opened, fully consumed and closed before this returns.
pub fn load_preferences(config: &Config) -> Result<Vec<PreferenceRecord>> {
    let file = File::open(&config.input_path).map_err(|source| PickerError::Io {
        path: config.input_path.clone(),
        source,
    })?;
    tracing::debug!(path = %config.input_path.display(), "opened survey responses");
    read_preferences(file, config)
}

/// Parses CSV data with a header row into preference records, in row order.
/// Blank lines are not rows and are skipped.
pub fn read_preferences<R: Read>(reader: R, config: &Config) -> Result<Vec<PreferenceRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in csv_reader.records().enumerate() {
        let row = row?;
        // The header is line 1
        let line = row.position().map_or(idx + 2, |p| p.line() as usize);
        let record = parse_row(&row, line, config)?;
        tracing::trace!(line, name = %record.pretty_name(), books = record.books_by_preference.len(), "parsed response");
        records.push(record);
    }
    Ok(records)
}

fn parse_row(row: &StringRecord, line: usize, config: &Config) -> Result<PreferenceRecord> {
    let field = |column: usize, field: &'static str| {
        row.get(column)
            .ok_or(PickerError::MissingColumn { row: line, column, field })
    };

    let first_name = field(config.first_name_col, "first name")?;
    let last_name = field(config.last_name_col, "last name")?;
    let prefs = field(config.prefs_col, "preferences")?;

    Ok(PreferenceRecord {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        books_by_preference: split_preferences(prefs),
    })
}

/// Splits a ranked list cell on commas and trims each title.
/// Blank entries are kept as empty titles.
pub fn split_preferences(cell: &str) -> Vec<String> {
    cell.split(',').map(|book| book.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn small_config() -> Config {
        Config {
            first_name_col: 0,
            last_name_col: 1,
            prefs_col: 2,
            ..Config::default()
        }
    }

    const RESPONSES: &str = indoc! {r#"
        First,Last,Books
        Ada,Lovelace,"Dune, Emma , Ulysses"
        Alan,Turing,"Emma,Dune"
        Grace,Hopper,Ulysses
    "#};

    #[test]
    fn reads_rows_in_order_and_trims_titles() {
        let records = read_preferences(RESPONSES.as_bytes(), &small_config()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].first_name, "Ada");
        assert_eq!(records[0].books_by_preference, vec!["Dune", "Emma", "Ulysses"]);
        assert_eq!(records[1].books_by_preference, vec!["Emma", "Dune"]);
        assert_eq!(records[2].last_name, "Hopper");
        assert_eq!(records[2].books_by_preference, vec!["Ulysses"]);
    }

    #[test]
    fn uses_configured_columns() {
        let data = indoc! {r#"
            Timestamp,Email,Score,First,Last,Notes,Books
            2024-01-01,a@b.c,,Ada,Lovelace,,"Dune,Emma"
        "#};
        let records = read_preferences(data.as_bytes(), &Config::default()).unwrap();
        assert_eq!(records[0].pretty_name(), "Ada L");
        assert_eq!(records[0].books_by_preference, vec!["Dune", "Emma"]);
    }

    #[test]
    fn blank_entries_become_empty_titles() {
        let data = indoc! {r#"
            First,Last,Books
            Ada,Lovelace,"Dune,, Emma,"
        "#};
        let records = read_preferences(data.as_bytes(), &small_config()).unwrap();
        assert_eq!(records[0].books_by_preference, vec!["Dune", "", "Emma", ""]);
    }

    #[test]
    fn short_row_is_a_missing_column_error() {
        let data = indoc! {r#"
            First,Last,Books
            Ada,Lovelace,Dune
            Alan,Turing
        "#};
        let err = read_preferences(data.as_bytes(), &small_config()).unwrap_err();
        assert!(err.is_input_error());
        assert!(matches!(
            err,
            PickerError::MissingColumn { row: 3, column: 2, field: "preferences" }
        ));
    }

    #[test]
    fn blank_lines_between_rows_are_skipped() {
        let data = "First,Last,Books\nAda,Lovelace,Dune\n\nAlan,Turing,Emma\n";
        let records = read_preferences(data.as_bytes(), &small_config()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].first_name, "Alan");
    }

    #[test]
    fn header_only_file_has_no_records() {
        let records = read_preferences("First,Last,Books\n".as_bytes(), &small_config()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RESPONSES.as_bytes()).unwrap();
        let config = Config {
            input_path: file.path().to_path_buf(),
            ..small_config()
        };
        let records = load_preferences(&config).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            input_path: dir.path().join("nope.csv"),
            ..small_config()
        };
        let err = load_preferences(&config).unwrap_err();
        assert!(matches!(err, PickerError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn split_keeps_token_count() {
        assert_eq!(split_preferences(" A ,B,  C").len(), 3);
        assert_eq!(split_preferences(""), vec![String::new()]);
    }
}
