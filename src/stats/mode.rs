use std::collections::BTreeMap;
use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

/// Most frequent value. Ties go to the lowest value; `None` for no values.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        // Ascending key order, so only a strictly higher count replaces the current pick.
        if best.as_ref().is_none_or(|(_, best_count)| count > *best_count) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Number of occurrences of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

impl CategoryCount {
    #[must_use]
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Occurrences per distinct value, highest count first; equal counts keep
/// first-encountered order.
pub fn value_counts<T, I>(values: I) -> Vec<CategoryCount>
where
    T: Hash + Eq + AsRef<str>,
    I: IntoIterator<Item = T>,
{
    let mut counts: IndexMap<T, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut counts: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(value, count)| CategoryCount::new(value.as_ref(), count))
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
