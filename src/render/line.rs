//! Glyph selection for the step between two adjacent samples.

use crate::{
    core::{color::AnsiCode, data::Series, symbols::Symbols},
    render::{canvas::Canvas, scale::Scale},
};

/// Glyphs for one step, as `(level, glyph)` pairs. Levels count up from the
/// bottom row; `None` marks a missing sample.
pub(crate) fn segment(y0: Option<usize>, y1: Option<usize>, symbols: &Symbols) -> Vec<(usize, char)> {
    match (y0, y1) {
        (None, None) => Vec::new(),
        (None, Some(y)) => vec![(y, symbols.gap_exit())],
        (Some(y), None) => vec![(y, symbols.gap_entry())],
        (Some(y0), Some(y1)) if y0 == y1 => vec![(y0, symbols.flat())],
        (Some(y0), Some(y1)) => {
            let falling = y0 > y1;
            let mut out = Vec::with_capacity(y0.abs_diff(y1) + 1);
            out.push((
                y1,
                if falling {
                    symbols.fall_end()
                } else {
                    symbols.rise_end()
                },
            ));
            out.push((
                y0,
                if falling {
                    symbols.fall_start()
                } else {
                    symbols.rise_start()
                },
            ));
            for y in y0.min(y1) + 1..y0.max(y1) {
                out.push((y, symbols.vertical()));
            }
            out
        }
    }
}

/// Paint every step of `series`; step `x` lands in data column `x`.
pub(crate) fn paint_series(
    canvas: &mut Canvas,
    scale: &Scale,
    series: &Series,
    symbols: &Symbols,
    color: Option<AnsiCode>,
) {
    let level = |s: Option<f64>| s.map(|v| scale.scaled(v));

    for (x, pair) in series.samples().windows(2).enumerate() {
        for (y, glyph) in segment(level(pair[0]), level(pair[1]), symbols) {
            canvas.put(scale.rows - y, x, glyph, color);
        }
    }
}
