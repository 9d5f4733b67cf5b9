//! Ordering and rank assignment shared by the VIKOR and PROMETHEE analyzers.

use std::cmp::Ordering;

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Indices of `values` sorted ascending. Stable: equal values keep input order.
pub fn ascending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| compare(values[a], values[b]));
    order
}

/// Indices of `values` sorted descending. Stable: equal values keep input order.
pub fn descending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| compare(values[b], values[a]));
    order
}

/// Min-method ranks for values already listed in rank order.
///
/// Neighbours within `tolerance` of each other share the smallest rank of
/// their group; the next distinct value is ranked by its 1-based position.
pub fn min_ranks(sorted_values: &[f64], tolerance: f64) -> Vec<usize> {
    let mut ranks = Vec::with_capacity(sorted_values.len());
    for (position, value) in sorted_values.iter().enumerate() {
        let rank = match (position.checked_sub(1), ranks.last()) {
            (Some(prev), Some(&prev_rank)) if (sorted_values[prev] - value).abs() <= tolerance => {
                prev_rank
            }
            _ => position + 1,
        };
        ranks.push(rank);
    }
    ranks
}

/// Position of the first minimum in `values`.
pub fn first_min_position(values: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &value) in values.iter().enumerate() {
        match best {
            Some(b) if values[b] <= value => {}
            _ => best = Some(i),
        }
    }
    best
}
