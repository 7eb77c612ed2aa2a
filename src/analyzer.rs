// src/analyzer.rs

use crate::combos::{collect_titles, combinations_for_all_sizes};
use crate::config::Config;
use crate::error::Result;
use crate::filter::filter_by_quorum;
use crate::model::*;
use crate::ranker::rank_combos;
use crate::scorer::score_combo;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator};
use rayon::prelude::*;

/// Runs the selection pipeline over already loaded responses: collect the
/// titles, enumerate every combo, score, apply quorum and rank.
pub fn analyze<'a>(records: &'a [PreferenceRecord], config: &Config) -> Result<AnalysisResult<'a>> {
    let titles = collect_titles(records);
    let combos = combinations_for_all_sizes(&titles);
    tracing::info!(
        participants = records.len(),
        titles = titles.len(),
        combos = combos.len(),
        "enumerated book combinations"
    );

    let summaries = score_all(&combos, records, config)?;
    let outcome = filter_by_quorum(summaries, config.min_group_size);
    let ranked = rank_combos(outcome.viable);

    if let Some(best) = ranked.first() {
        tracing::debug!(
            books = ?best.books,
            rms = best.stats.quadratic_mean,
            pairs = best.supporter_count(),
            smallest_group = best.smallest_group(),
            "best combination"
        );
    }

    Ok(AnalysisResult {
        participants: records.len(),
        titles: titles.len(),
        combos_considered: combos.len(),
        filtered: outcome.filtered,
        ranked,
    })
}

/// Scores each combo independently; output order follows `combos`.
fn score_all<'a>(
    combos: &[BookCombo],
    records: &'a [PreferenceRecord],
    config: &Config,
) -> Result<Vec<ComboSummary<'a>>> {
    let bar = if config.show_progress {
        ProgressBar::new(combos.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    bar.set_message("Scoring combinations");

    let summaries = if config.parallel {
        combos
            .par_iter()
            .progress_with(bar.clone())
            .map(|combo| score_combo(combo, records))
            .collect::<Result<Vec<_>>>()
    } else {
        combos
            .iter()
            .progress_with(bar.clone())
            .map(|combo| score_combo(combo, records))
            .collect::<Result<Vec<_>>>()
    };
    bar.finish_with_message("Scoring complete");
    summaries
}
