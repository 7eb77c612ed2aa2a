// src/ranker.rs

use crate::model::ComboSummary;
use std::cmp::Ordering;

/// Lowest root-mean-square rank first, then fewest books. Stable, so exact
/// ties keep their scoring order.
pub fn rank_combos(mut summaries: Vec<ComboSummary<'_>>) -> Vec<ComboSummary<'_>> {
    summaries.sort_by(compare_combos);
    summaries
}

pub fn compare_combos(a: &ComboSummary<'_>, b: &ComboSummary<'_>) -> Ordering {
    a.stats
        .quadratic_mean
        .total_cmp(&b.stats.quadratic_mean)
        .then_with(|| a.books.len().cmp(&b.books.len()))
}
