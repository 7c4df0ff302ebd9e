mod extend;
#[cfg(test)]
mod fill_test;
mod interpolate;

use itertools::Itertools;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::types::{Sample, Series};

/// Fills every gap in `series` using its known samples as anchors.
///
/// Leading and trailing gaps take the nearest anchor's value unchanged
/// (flat extension), interior gaps lie on the straight line between the
/// two bounding anchors. Known samples are never rewritten. A series
/// with no known sample at all is returned as is.
pub fn impute(series: &Series) -> Series {
    if series.is_empty() {
        return Series::default();
    }

    let anchors = anchors(&series.samples);
    if anchors.is_empty() {
        return series.clone();
    }

    let mut filled = series.samples.clone();

    let (first_idx, first_value) = anchors[0];
    extend::fill_flat(&mut filled[..first_idx], first_value);

    let (last_idx, last_value) = anchors[anchors.len() - 1];
    extend::fill_flat(&mut filled[last_idx + 1..], last_value);

    for (&(start_idx, start_value), &(end_idx, end_value)) in anchors.iter().tuple_windows() {
        interpolate::fill_between(&mut filled[start_idx..=end_idx], start_value, end_value);
    }

    Series::new(filled)
}

/// Applies [`impute`] to every series of a batch.
///
/// Series are independent and filled in parallel; the output preserves
/// the input order.
pub fn impute_batch(batch: &[Series]) -> Vec<Series> {
    batch.par_iter().map(impute).collect()
}

/// Ordered positions and values of the known samples.
fn anchors(samples: &[Sample]) -> Vec<(usize, f64)> {
    samples
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.value().map(|v| (i, v)))
        .collect()
}
