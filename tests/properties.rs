//! Property-based invariants for rendered charts.
//!
//! 1. One line per scaled row, and exactly one for a flat series.
//! 2. The axis sits in the same column on every row.
//! 3. Rendering the same input twice gives the same text.
//! 4. Nothing is drawn right of the last sample.
//! 5. X labels never overlap and never outnumber the edges.

use asciiline::{Config, Series, render};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn sample() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        4 => (-40.0f64..40.0).prop_map(Some),
        1 => Just(None),
    ]
}

fn series() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(sample(), 1..60)
}

fn finite_series() -> impl Strategy<Value = Vec<Option<f64>>> {
    (series(), -40.0f64..40.0).prop_map(|(mut v, seed)| {
        v[0] = Some(seed);
        v
    })
}

/// A constant series, usually between two integers.
fn flat_series() -> impl Strategy<Value = Vec<Option<f64>>> {
    (-40.0f64..40.0, 1usize..60).prop_map(|(v, n)| vec![Some(v); n])
}

/// Expected `rows`: `ceil(max * ratio) - floor(min * ratio)`, zero when flat.
fn rows_for(input: &[Vec<Option<f64>>], height: Option<usize>) -> usize {
    let values = input.iter().flatten().copied().flatten();
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let interval = hi - lo;
    if interval == 0.0 {
        return 0;
    }
    let ratio = height.map_or(1.0, |h| h as f64 / interval);
    ((hi * ratio).ceil() - (lo * ratio).floor()) as usize
}

fn to_series(input: &[Vec<Option<f64>>]) -> Vec<Series> {
    input.iter().cloned().map(Series::from).collect()
}

fn axis_char(c: char) -> bool {
    c == '┼' || c == '┤'
}

// ═════════════════════════════════════════════════════════════════════════
// 1–4. Grid shape
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn one_line_per_row(
        input in prop::collection::vec(finite_series(), 1..4),
        height in prop::option::of(1usize..24),
    ) {
        let mut b = Config::builder();
        if let Some(h) = height {
            b = b.height(h);
        }
        let cfg = b.build().unwrap();
        let out = render(to_series(&input), &cfg).unwrap();
        prop_assert_eq!(out.lines().count(), rows_for(&input, height) + 1);
    }

    #[test]
    fn flat_series_is_one_line(
        input in flat_series(),
        height in prop::option::of(1usize..24),
    ) {
        let mut b = Config::builder();
        if let Some(h) = height {
            b = b.height(h);
        }
        let out = render(Series::from(input), &b.build().unwrap()).unwrap();
        prop_assert_eq!(out.lines().count(), 1, "{:?}", out);
        prop_assert!(out.contains('┼'), "{:?}", out);
    }

    #[test]
    fn axis_column_is_stable(
        input in prop::collection::vec(finite_series(), 1..4),
        height in prop::option::of(1usize..24),
    ) {
        let mut b = Config::builder();
        if let Some(h) = height {
            b = b.height(h);
        }
        let out = render(to_series(&input), &b.build().unwrap()).unwrap();
        let columns: Vec<usize> = out
            .lines()
            .map(|l| l.chars().position(axis_char).unwrap_or(usize::MAX))
            .collect();
        prop_assert!(columns.iter().all(|&c| c == columns[0]), "axis columns {:?}", columns);
        prop_assert_eq!(columns[0], 10);
    }

    #[test]
    fn rendering_is_deterministic(input in prop::collection::vec(series(), 1..4)) {
        let cfg = Config::default();
        let a = render(to_series(&input), &cfg);
        let b = render(to_series(&input), &cfg);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn nothing_past_the_last_sample(input in prop::collection::vec(finite_series(), 1..4)) {
        let out = render(to_series(&input), &Config::default()).unwrap();
        let longest = input.iter().map(Vec::len).max().unwrap_or(0);
        for line in out.lines() {
            // gutter, tick, then at most `longest - 1` segment cells
            prop_assert!(line.chars().count() <= 11 + longest.saturating_sub(1), "{:?}", line);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. X-axis labels
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn x_labels_fit_and_do_not_overlap(
        len in 2usize..120,
        edges in prop::collection::vec(-1000.0f64..1000.0, 1..12),
    ) {
        let cfg = Config::builder().bin_edges(edges.clone()).build().unwrap();
        let data: Vec<f64> = (0..len).map(|i| (i % 7) as f64).collect();
        let out = render(data, &cfg).unwrap();
        let labels = out.lines().last().unwrap();
        let tokens: Vec<&str> = labels.split_whitespace().collect();
        prop_assert!(!tokens.is_empty());
        prop_assert!(tokens.len() <= edges.len(), "{} labels for {} edges", tokens.len(), edges.len());
        let formatted: Vec<String> = edges.iter().map(|e| format!("{e:.2}")).collect();
        for t in &tokens {
            prop_assert!(formatted.iter().any(|f| f == t), "{:?} is not a formatted edge", t);
        }
    }
}
