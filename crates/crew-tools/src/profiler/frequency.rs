//! Frequency analysis for categorical columns.
//!
//! Counting keeps first-seen order and ranking uses a stable sort, so ties
//! always resolve to the value that appeared first in the file.

use crate::types::{CategoricalSummary, ValueFrequency};
use crate::utils::percentage;
use std::collections::HashMap;

/// Distinct values with their counts, in order of first appearance.
pub(crate) fn value_counts<'a, I>(values: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts
}

/// Value counts ordered by descending count, ties in first-seen order.
pub(crate) fn ranked_counts<'a, I>(values: I) -> Vec<(&'a str, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = value_counts(values);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Summarize one categorical column given its cells in row order.
pub(crate) fn summarize_categorical(
    cells: &[Option<String>],
    total_rows: usize,
    top_values: usize,
) -> CategoricalSummary {
    let present = cells.iter().flatten().map(String::as_str);
    let ranked = ranked_counts(present);
    let missing = cells.iter().filter(|c| c.is_none()).count();

    let (mode, mode_count) = match ranked.first() {
        Some((value, count)) => (Some(value.to_string()), *count),
        None => (None, 0),
    };

    let top = ranked
        .iter()
        .take(top_values)
        .map(|(value, count)| ValueFrequency {
            value: value.to_string(),
            count: *count,
            percentage: percentage(*count, total_rows),
        })
        .collect();

    CategoricalSummary {
        count: cells.len() - missing,
        unique: ranked.len(),
        mode,
        mode_count,
        missing,
        top_values: top,
    }
}
