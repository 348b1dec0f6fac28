//! Geometry helpers: value ranges + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::data::Series;

/// Inclusive extrema over every finite sample of every series.
///
/// Missing samples are skipped; `None` when nothing finite remains.
#[must_use]
pub fn data_bounds(series: &[Series]) -> Option<(f64, f64)> {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);

    for v in series.iter().flat_map(Series::values) {
        low = low.min(v);
        high = high.max(v);
    }

    (low <= high).then_some((low, high))
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// How many samples fit beside a y-axis gutter of `gutter` columns.
///
/// One column is kept free on the right so the terminal never wraps.
#[inline]
#[must_use]
pub fn samples_that_fit((w, _): (Width, Height), gutter: usize) -> usize {
    usize::from(w.0).saturating_sub(gutter + 2).max(2)
}
