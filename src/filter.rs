// src/filter.rs

use crate::model::ComboSummary;

/// Combos that passed quorum, plus how many were dropped
#[derive(Debug)]
pub struct QuorumOutcome<'a> {
    pub viable: Vec<ComboSummary<'a>>,
    pub filtered: usize,
}

pub fn has_quorum(summary: &ComboSummary<'_>, min_group_size: usize) -> bool {
    summary
        .supporters
        .values()
        .all(|group| group.len() >= min_group_size)
}

/// Keeps only combos where every book has at least `min_group_size` supporters.
pub fn filter_by_quorum<'a>(summaries: Vec<ComboSummary<'a>>, min_group_size: usize) -> QuorumOutcome<'a> {
    let total = summaries.len();
    let (viable, rejected): (Vec<_>, Vec<_>) = summaries
        .into_iter()
        .partition(|s| has_quorum(s, min_group_size));

    let filtered = rejected.len();
    println!("Filtered {} invalid combinations", filtered);
    tracing::info!(total, viable = viable.len(), filtered, min_group_size, "applied quorum");

    QuorumOutcome { viable, filtered }
}
