// src/scorer.rs

use crate::error::{PickerError, Result};
use crate::model::{BookCombo, ComboStats, ComboSummary, PreferenceRecord, SupporterMap};

/// Assigns each participant to the combo book they rank highest.
///
/// A participant supports at most one book per combo. Participants who rank
/// none of the combo's books support nothing. Every book gets an entry, even
/// if nobody supports it.
pub fn assign_supporters<'a>(combo: &BookCombo, records: &'a [PreferenceRecord]) -> SupporterMap<'a> {
    let mut supporters: SupporterMap<'a> = combo.iter().map(|b| (b.clone(), Vec::new())).collect();
    for record in records {
        let first_match = record
            .books_by_preference
            .iter()
            .find(|book| combo.contains(book.as_str()));
        if let Some(book) = first_match {
            if let Some(group) = supporters.get_mut(book) {
                group.push(record);
            }
        }
    }
    supporters
}

/// Arithmetic, harmonic and quadratic mean of the supporters' ranks, taken
/// over all (book, supporter) pairs of the combo rather than per book.
pub fn compute_statistics(supporters: &SupporterMap<'_>) -> Result<ComboStats> {
    let mut sum = 0.0;
    let mut reciprocal_sum = 0.0;
    let mut squared_sum = 0.0;
    let mut count = 0usize;

    for (book, records) in supporters {
        for record in records {
            let rank = record.rank_of(book)? as f64;
            sum += rank;
            reciprocal_sum += 1.0 / rank;
            squared_sum += rank * rank;
            count += 1;
        }
    }

    if count == 0 {
        return Err(PickerError::NoSupporters {
            combo: supporters.keys().cloned().collect::<Vec<_>>().join(", "),
        });
    }

    let n = count as f64;
    Ok(ComboStats {
        arithmetic_mean: sum / n,
        harmonic_mean: n / reciprocal_sum,
        quadratic_mean: (squared_sum / n).sqrt(),
    })
}

pub fn score_combo<'a>(combo: &BookCombo, records: &'a [PreferenceRecord]) -> Result<ComboSummary<'a>> {
    let supporters = assign_supporters(combo, records);
    let stats = compute_statistics(&supporters)?;
    Ok(ComboSummary {
        books: combo.clone(),
        supporters,
        stats,
    })
}
