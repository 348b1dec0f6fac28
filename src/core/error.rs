//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, data::ParseError, format::FormatError};

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    OffsetTooSmall(usize),
    ZeroHeight,
    NonFiniteBound { name: &'static str, value: f64 },
    NonFiniteBinEdge { index: usize, value: f64 },
    SymbolCount(usize),
    Format(FormatError),
    Color(ColorError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OffsetTooSmall(n) => {
                write!(f, "offset {n} leaves no room for the axis (minimum is 2)")
            }
            ConfigError::ZeroHeight => f.write_str("height must be at least one row"),
            ConfigError::NonFiniteBound { name, value } => {
                write!(f, "`{name}` must be a finite number, got {value}")
            }
            ConfigError::NonFiniteBinEdge { index, value } => {
                write!(f, "bin edge #{index} must be a finite number, got {value}")
            }
            ConfigError::SymbolCount(n) => write!(f, "expected exactly 10 symbols, got {n}"),
            ConfigError::Format(e) => write!(f, "{e}"),
            ConfigError::Color(e) => write!(f, "{e}"),
        }
    }
}
impl Error for ConfigError {}

impl From<FormatError> for ConfigError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}
impl From<ColorError> for ConfigError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}

/// Failures raised by [`crate::render`]. Empty input is not one of them.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    InvalidRange { min: f64, max: f64 },
    /// The range cannot be mapped onto whole rows: its width overflows or
    /// its levels exceed `i64`.
    RangeTooLarge { min: f64, max: f64 },
    /// No finite sample to derive an unset bound from.
    NoData,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::InvalidRange { min, max } => {
                write!(f, "the min value {min} cannot exceed the max value {max}")
            }
            ChartError::RangeTooLarge { min, max } => {
                write!(f, "the range {min}..{max} is too wide to map onto rows")
            }
            ChartError::NoData => f.write_str("no finite samples to derive the value range from"),
        }
    }
}
impl Error for ChartError {}

/// Top-level error type bubbled up by the command-line front end.
#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    Parse(ParseError),
    Config(ConfigError),
    Chart(ChartError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "{e}"),
            CliError::Parse(e) => write!(f, "{e}"),
            CliError::Config(e) => write!(f, "{e}"),
            CliError::Chart(e) => write!(f, "{e}"),
        }
    }
}
impl Error for CliError {}

// automatic conversions
impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        Self::Config(e.into())
    }
}
impl From<FormatError> for CliError {
    fn from(e: FormatError) -> Self {
        Self::Config(e.into())
    }
}
impl From<ChartError> for CliError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}
