use crate::foundation::color::Cell;

/// Where the center of an output cell lands in the source track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplePoint {
    /// Strictly inside the source cell at this index.
    Inside(usize),
    /// Exactly on a boundary between two source cells (or an outer edge).
    Boundary,
}

/// Locate the center of output cell `k` of `target_len` cells in a source of `source_len` cells.
///
/// The center sits at `source_len * (k + 0.5) / target_len` source cells. Working in
/// halves keeps it exact: the position is an integer iff `source_len * (2k + 1)` is a
/// multiple of `2 * target_len`.
pub fn sample_point(source_len: usize, target_len: usize, k: usize) -> SamplePoint {
    debug_assert!(target_len > 0);
    debug_assert!(k < target_len);

    let num = (source_len as u128) * (2 * k as u128 + 1);
    let den = 2 * target_len as u128;
    if num % den == 0 {
        SamplePoint::Boundary
    } else {
        // num / den < source_len, so this always fits back into usize.
        SamplePoint::Inside((num / den) as usize)
    }
}

/// Resample `source` to `target_len` cells by midpoint sampling.
///
/// Each output cell takes the source cell its center falls into, or [`Cell::Blank`] when
/// the center lands exactly on a source boundary. A `target_len` of zero yields an empty
/// track; an empty source yields only blanks.
pub fn resample(source: &[Cell], target_len: usize) -> Vec<Cell> {
    (0..target_len)
        .map(|k| match sample_point(source.len(), target_len, k) {
            SamplePoint::Inside(i) => source[i],
            SamplePoint::Boundary => Cell::Blank,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/resample/sampler.rs"]
mod tests;
