// src/model.rs

use crate::error::{PickerError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Every distinct title any participant ranked
pub type TitleUniverse = BTreeSet<String>;

/// A candidate selection of books, evaluated as one joint pick
pub type BookCombo = BTreeSet<String>;

/// Maps each book of a combo to the participants who would join its group
pub type SupporterMap<'a> = BTreeMap<String, Vec<&'a PreferenceRecord>>;

/// One survey response: who answered and how they ranked the books
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceRecord {
    pub first_name: String,
    pub last_name: String,
    /// Most preferred first
    pub books_by_preference: Vec<String>,
}

impl PreferenceRecord {
    /// 1-based position of `book` in this participant's ranking.
    pub fn rank_of(&self, book: &str) -> Result<usize> {
        self.books_by_preference
            .iter()
            .position(|b| b == book)
            .map(|idx| idx + 1)
            .ok_or_else(|| PickerError::BookNotRanked {
                participant: self.pretty_name(),
                book: book.to_string(),
            })
    }

    /// First name plus last initial, e.g. "Ada L"
    pub fn pretty_name(&self) -> String {
        match self.last_name.chars().next() {
            Some(initial) => format!("{} {}", self.first_name, initial),
            None => self.first_name.clone(),
        }
    }
}

/// Rank statistics over every (book, supporter) pair of a combo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboStats {
    pub arithmetic_mean: f64,
    pub harmonic_mean: f64,
    /// Root mean square; the ranking key
    pub quadratic_mean: f64,
}

#[derive(Debug, Clone)]
pub struct ComboSummary<'a> {
    pub books: BookCombo,
    pub supporters: SupporterMap<'a>,
    pub stats: ComboStats,
}

impl<'a> ComboSummary<'a> {
    /// Number of (book, supporter) pairs the statistics were computed over
    pub fn supporter_count(&self) -> usize {
        self.supporters.values().map(Vec::len).sum()
    }

    /// Size of the smallest discussion group in this combo
    pub fn smallest_group(&self) -> usize {
        self.supporters.values().map(Vec::len).min().unwrap_or(0)
    }
}

/// The complete results of scoring, filtering and ranking
#[derive(Debug)]
pub struct AnalysisResult<'a> {
    pub participants: usize,
    pub titles: usize,
    pub combos_considered: usize,
    pub filtered: usize,
    /// Viable combos, best first
    pub ranked: Vec<ComboSummary<'a>>,
}

#[cfg(test)]
pub(crate) fn record(first: &str, last: &str, books: &[&str]) -> PreferenceRecord {
    PreferenceRecord {
        first_name: first.to_string(),
        last_name: last.to_string(),
        books_by_preference: books.iter().map(|b| b.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rank_is_one_based() {
        let r = record("Ada", "Lovelace", &["Dune", "Emma", "Ulysses"]);
        assert_eq!(r.rank_of("Dune").unwrap(), 1);
        assert_eq!(r.rank_of("Ulysses").unwrap(), 3);
    }

    #[test]
    fn rank_of_unlisted_book_is_an_internal_error() {
        let r = record("Ada", "Lovelace", &["Dune"]);
        let err = r.rank_of("Emma").unwrap_err();
        assert!(err.is_internal());
        assert!(matches!(err, PickerError::BookNotRanked { ref book, .. } if book == "Emma"));
    }

    #[test]
    fn pretty_name_uses_last_initial() {
        assert_eq!(record("Ada", "Lovelace", &[]).pretty_name(), "Ada L");
        assert_eq!(record("Émile", "Zola", &[]).pretty_name(), "Émile Z");
        assert_eq!(record("Cher", "", &[]).pretty_name(), "Cher");
    }

    proptest! {
        #[test]
        fn rank_matches_position(books in prop::collection::btree_set("[a-z]{1,6}", 1..8)) {
            let books: Vec<String> = books.into_iter().collect();
            let r = PreferenceRecord {
                first_name: "P".into(),
                last_name: "Q".into(),
                books_by_preference: books.clone(),
            };
            for (idx, book) in books.iter().enumerate() {
                prop_assert_eq!(r.rank_of(book).unwrap(), idx + 1);
            }
            prop_assert!(r.rank_of("NOT-A-BOOK").is_err());
        }
    }
}
