//! Value frequency ranking for categorical columns.

use crate::data::text_values;
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Frequency of every distinct value, most frequent first. Equal counts keep
/// the order in which values were first seen.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(value, counts.len());
                counts.push(CategoryCount {
                    value: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `n` most frequent non-null values of a column.
pub fn top_values(column: &Column, n: usize) -> PolarsResult<Vec<CategoryCount>> {
    let values: Vec<String> = text_values(column)?.into_iter().flatten().collect();
    let mut counts = value_counts(values.iter().map(String::as_str));
    counts.truncate(n);
    Ok(counts)
}
