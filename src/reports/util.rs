use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// The most frequent value of a column, with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode<T> {
    pub value: T,
    pub count: usize,
}

/// Computes the mode of `values`. Returns `None` for an empty iterator.
///
/// Ties are broken by first occurrence in iteration (load) order: an
/// equally frequent value only wins if it appeared earlier. "Most frequent"
/// is ambiguous under ties, so the rule is fixed here and tested.
pub fn mode<T, I>(values: I) -> Option<Mode<T>>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (index, value) in values.into_iter().enumerate() {
        let entry = counts.entry(value).or_insert((0, index));
        entry.0 += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(_, (count, first_index))| (count, Reverse(first_index)))
        .map(|(value, (count, _))| Mode { value, count })
}

/// One bucket of a frequency distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Counts occurrences per distinct value, ordered by descending count and
/// then by category name so equal counts render deterministically.
pub fn category_counts<I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    out
}
