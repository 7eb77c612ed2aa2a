// src/renderer.rs

use crate::config::Config;
use crate::error::Result;
use crate::model::*;
use chrono::{DateTime, Utc};
use std::fmt::Write;

const INDENT: &str = "  ";

/// Renders the human-readable selection report for the best ranked combos.
pub fn render_report(analysis: &AnalysisResult<'_>, config: &Config, generated_at: DateTime<Utc>) -> Result<String> {
    let mut out = String::new();
    let viable = analysis.ranked.len();

    writeln!(out, "Book Club Book Selection Results")?;
    writeln!(out, "Generated {}", generated_at.format("%Y-%m-%d %H:%M UTC"))?;
    writeln!(out)?;
    writeln!(
        out,
        "Found optimal book selection(s) for {} people and {} books.",
        analysis.participants, analysis.titles
    )?;
    writeln!(
        out,
        "Considered {} different book combinations of which {} had enough people in each group.",
        analysis.combos_considered, viable
    )?;

    if viable == 0 {
        writeln!(out)?;
        writeln!(
            out,
            "No combination gives every book at least {} people.",
            config.min_group_size
        )?;
        return Ok(out);
    }

    for (i, combo) in analysis.ranked.iter().take(config.top).enumerate() {
        writeln!(out)?;
        writeln!(out, "#{} - {}", i + 1, title_list(&combo.books, config.max_title_len))?;
        render_combo(&mut out, combo)?;
    }
    Ok(out)
}

fn render_combo(out: &mut String, combo: &ComboSummary<'_>) -> Result<()> {
    let stats = &combo.stats;
    writeln!(out, "{INDENT}{:.2} = Root Mean Square Rank", stats.quadratic_mean)?;
    writeln!(out, "{INDENT}{:.2} = Harmonic Mean Rank", stats.harmonic_mean)?;
    writeln!(out, "{INDENT}{:.2} = Arithmetic Mean Rank", stats.arithmetic_mean)?;
    writeln!(out)?;

    for (book, supporters) in &combo.supporters {
        writeln!(out, "{INDENT}{book}")?;
        for record in supporters {
            let rank = record.rank_of(book)?;
            writeln!(out, "{INDENT}{INDENT}{} ({rank})", record.pretty_name())?;
        }
    }
    Ok(())
}

/// Comma-separated titles. A combo with more than `max_len` books is
/// abbreviated: every title is cut to `max_len` characters and the listing
/// ends in a single `...`.
pub fn title_list(books: &BookCombo, max_len: usize) -> String {
    if books.len() <= max_len {
        return books.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    }
    let cut: Vec<&str> = books.iter().map(|title| truncate_title(title, max_len)).collect();
    format!("{}...", cut.join(", "))
}

fn truncate_title(title: &str, max_len: usize) -> &str {
    match title.char_indices().nth(max_len) {
        Some((cut, _)) => title[..cut].trim_end(),
        None => title,
    }
}
