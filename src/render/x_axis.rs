//! Bin-edge labels under the plot.
//!
//! Labels are spread evenly from the axis tick (sample 0) to the last
//! sample. Only as many are shown as fit with [`X_LABEL_GAP`] blanks between
//! the widest ones; each slot shows the edge whose index is proportionally
//! closest to the slot's position.

use unicode_width::UnicodeWidthStr;

use crate::core::{constants::X_LABEL_GAP, format::LabelFormat};

/// The label line, or `None` when there are no edges.
///
/// `axis_column` is the display column of sample 0 and `samples` the length
/// of the longest series.
pub(crate) fn label_row(
    edges: &[f64],
    format: &LabelFormat,
    axis_column: usize,
    samples: usize,
) -> Option<String> {
    if edges.is_empty() {
        return None;
    }
    let labels: Vec<String> = edges
        .iter()
        .enumerate()
        .map(|(i, &e)| format.apply_at(e, i).trim().to_owned())
        .collect();
    let footprint = labels.iter().map(|l| l.width()).max().unwrap_or(0);
    let span = samples.saturating_sub(1);
    let count = edges.len().min(span / (footprint + X_LABEL_GAP) + 1);
    if count < edges.len() {
        tracing::debug!(edges = edges.len(), shown = count, "thinning x-axis labels");
    }

    let mut row = String::new();
    let mut end = 0usize;
    for slot in 0..count {
        let fraction = if count > 1 {
            slot as f64 / (count - 1) as f64
        } else {
            0.0
        };
        let centre = axis_column + (fraction * span as f64).round_ties_even() as usize;
        let index = ((fraction * (edges.len() - 1) as f64).round_ties_even() as usize)
            .min(labels.len() - 1);
        let label = &labels[index];
        let width = label.width();

        let mut start = centre.saturating_sub(width / 2);
        if slot > 0 {
            start = start.max(end + 1);
        }
        row.push_str(&" ".repeat(start - end));
        row.push_str(label);
        end = start + width;
    }
    row.truncate(row.trim_end().len());
    Some(row)
}
