//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;
pub mod rng;
pub mod symbols;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{DEFAULT_OFFSET, MIN_OFFSET, SYMBOL_COUNT, X_LABEL_GAP};
pub use data::Series;
pub use error::{ChartError, CliError, ConfigError};
pub use format::{Align, FormatError, LabelFormat};
pub use symbols::Symbols;
