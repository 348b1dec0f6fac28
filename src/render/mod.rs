//! The chart renderer: series in, text out.
//!
//! ### Workflow
//! 1. normalise the input to a list of series, bailing out with `""` when
//!    there is nothing to draw;
//! 2. resolve the value range and build a [`Scale`];
//! 3. allocate the [`canvas`](canvas::Canvas) and paint the y-axis;
//! 4. mark the first sample on the axis, then paint each series in order so
//!    later series win shared cells;
//! 5. serialise, appending the x-axis label row when bin edges are set.

mod canvas;
mod line;
pub mod scale;
mod x_axis;

pub use scale::Scale;

use crate::core::{bounds::data_bounds, config::Config, data::Series, error::ChartError};

/// One series or several sharing an x-axis.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Single(Series),
    Multi(Vec<Series>),
}

impl Input {
    /// `None` when there is nothing to draw.
    fn normalize(self) -> Option<Vec<Series>> {
        match self {
            Self::Single(s) if s.is_all_missing() => None,
            Self::Single(s) => Some(vec![s]),
            Self::Multi(v) if v.iter().all(Series::is_empty) => None,
            Self::Multi(v) => Some(v),
        }
    }
}

impl From<Series> for Input {
    fn from(s: Series) -> Self {
        Self::Single(s)
    }
}
impl From<Vec<f64>> for Input {
    fn from(v: Vec<f64>) -> Self {
        Self::Single(v.into())
    }
}
impl From<&[f64]> for Input {
    fn from(v: &[f64]) -> Self {
        Self::Single(v.into())
    }
}
impl<const N: usize> From<[f64; N]> for Input {
    fn from(v: [f64; N]) -> Self {
        Self::Single(v.into())
    }
}
impl From<Vec<Option<f64>>> for Input {
    fn from(v: Vec<Option<f64>>) -> Self {
        Self::Single(v.into())
    }
}
impl From<Vec<Series>> for Input {
    fn from(v: Vec<Series>) -> Self {
        Self::Multi(v)
    }
}
impl From<Vec<Vec<f64>>> for Input {
    fn from(v: Vec<Vec<f64>>) -> Self {
        Self::Multi(v.into_iter().map(Series::from).collect())
    }
}

/// Draw `input` as a line chart.
///
/// Returns an empty string when there is nothing to draw. Fails with
/// [`ChartError::InvalidRange`] when the resolved minimum exceeds the maximum
/// and with [`ChartError::NoData`] when a bound has to come from the data but
/// no finite sample exists.
pub fn render(input: impl Into<Input>, config: &Config) -> Result<String, ChartError> {
    let Some(series) = input.into().normalize() else {
        return Ok(String::new());
    };

    let found = data_bounds(&series);
    let minimum = config.min.or(found.map(|b| b.0)).ok_or(ChartError::NoData)?;
    let maximum = config.max.or(found.map(|b| b.1)).ok_or(ChartError::NoData)?;
    let scale = Scale::new(minimum, maximum, config.height)?;

    let samples = series.iter().map(Series::len).max().unwrap_or(0);
    tracing::debug!(
        series = series.len(),
        samples,
        rows = scale.rows + 1,
        ratio = scale.ratio,
        "rendering chart"
    );

    let mut canvas = canvas::Canvas::new(&scale, config, samples);
    if let Some(first) = series.first().and_then(Series::first) {
        canvas.set_tick(scale.row(first), config.symbols.zero_tick());
    }
    for (i, s) in series.iter().enumerate() {
        line::paint_series(&mut canvas, &scale, s, &config.symbols, config.color_for(i));
    }

    let axis_column = canvas.axis_column();
    let mut lines = canvas.into_lines();
    if let Some(row) = x_axis::label_row(&config.bin_edges, &config.x_format, axis_column, samples) {
        lines.push(row);
    }
    Ok(lines.join("\n"))
}
