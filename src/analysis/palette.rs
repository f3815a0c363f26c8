use std::collections::HashMap;

use crate::foundation::color::Cell;

/// Replace each cell by the index of its distinct value.
///
/// Distinct values are numbered in order of first appearance; blank counts as a value.
pub fn palette_indices(cells: &[Cell]) -> Vec<usize> {
    let mut seen: HashMap<Cell, usize> = HashMap::new();
    cells
        .iter()
        .map(|&c| {
            let next = seen.len();
            *seen.entry(c).or_insert(next)
        })
        .collect()
}

/// Number of distinct values (blank included).
pub fn distinct_count(cells: &[Cell]) -> usize {
    palette_indices(cells)
        .into_iter()
        .max()
        .map_or(0, |m| m + 1)
}

#[cfg(test)]
#[path = "../../tests/unit/analysis/palette.rs"]
mod tests;
