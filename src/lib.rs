//! Public-facing crate root – re-exports + one-shot helper.
//!
//! ```
//! use asciiline::{Config, plot};
//!
//! let chart = plot([1.0, 2.0, 3.0, 4.0, f64::NAN, 4.0, 3.0, 2.0, 1.0], &Config::default())?;
//! assert_eq!(chart.lines().next(), Some("    4.00  ┤  ╭╴╶╮"));
//! # Ok::<(), asciiline::ChartError>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use core::{
    color::{AnsiCode, ColorError, colorize},
    config::{Config, ConfigBuilder},
    data::{Series, read_columns},
    error::{ChartError, CliError, ConfigError},
    format::{FormatError, LabelFormat},
    symbols::Symbols,
};

pub use render::{Input, Scale, render};

/// Convenience wrapper for the common single-series case.
pub fn plot(series: impl Into<Series>, config: &Config) -> Result<String, ChartError> {
    render(Input::Single(series.into()), config)
}
