// src/combos.rs

use crate::model::{BookCombo, PreferenceRecord, TitleUniverse};

pub fn collect_titles(records: &[PreferenceRecord]) -> TitleUniverse {
    records
        .iter()
        .flat_map(|r| r.books_by_preference.iter().cloned())
        .collect()
}

/// Every non-empty subset of `titles`: all singles, then all pairs, and so on
/// up to the full set. Yields 2^n - 1 combos with no pruning.
pub fn combinations_for_all_sizes(titles: &TitleUniverse) -> Vec<BookCombo> {
    let pool: Vec<&String> = titles.iter().collect();
    let mut combos = Vec::new();
    for k in 1..=pool.len() {
        combinations_of_size(&pool, k, &mut combos);
    }
    combos
}

/// Appends each size-`k` subset of `pool` in lexicographic index order.
fn combinations_of_size(pool: &[&String], k: usize, out: &mut Vec<BookCombo>) {
    let n = pool.len();
    if k == 0 || k > n {
        return;
    }
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        out.push(indices.iter().map(|&i| pool[i].clone()).collect());

        // Rightmost index that can still move forward
        let Some(pos) = (0..k).rev().find(|&i| indices[i] != i + n - k) else {
            return;
        };
        indices[pos] += 1;
        for j in pos + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}
