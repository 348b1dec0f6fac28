//! Run-time configuration object + fluent builder.

use crate::core::{
    color::AnsiCode,
    constants::{DEFAULT_OFFSET, MIN_OFFSET},
    error::ConfigError,
    format::LabelFormat,
    symbols::Symbols,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) height: Option<usize>,
    pub(crate) offset: usize,
    pub(crate) format: LabelFormat,
    pub(crate) x_format: LabelFormat,
    pub(crate) colors: Vec<Option<AnsiCode>>,
    pub(crate) symbols: Symbols,
    pub(crate) bin_edges: Vec<f64>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
    #[inline]
    #[must_use]
    pub fn height(&self) -> Option<usize> {
        self.height
    }
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }
    #[inline]
    #[must_use]
    pub fn bin_edges(&self) -> &[f64] {
        &self.bin_edges
    }

    /// Colour for the series at `index`; the list is cycled.
    #[inline]
    #[must_use]
    pub fn color_for(&self, index: usize) -> Option<AnsiCode> {
        if self.colors.is_empty() {
            None
        } else {
            self.colors[index % self.colors.len()]
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            height: None,
            offset: DEFAULT_OFFSET,
            format: LabelFormat::y_axis_default(),
            x_format: LabelFormat::x_axis_default(),
            colors: Vec::new(),
            symbols: Symbols::default(),
            bin_edges: Vec::new(),
        }
    }
}

/// Fluent builder; every check happens in `build`.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    min: Option<f64>,
    max: Option<f64>,
    height: Option<usize>,
    offset: Option<usize>,
    format: Option<LabelFormat>,
    x_format: Option<LabelFormat>,
    colors: Vec<Option<AnsiCode>>,
    symbols: Option<Symbols>,
    bin_edges: Vec<f64>,
}

impl ConfigBuilder {
    #[inline]
    #[must_use]
    pub fn min(mut self, v: f64) -> Self {
        self.min = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max(mut self, v: f64) -> Self {
        self.max = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.min = Some(*r.start());
        self.max = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn height(mut self, rows: usize) -> Self {
        self.height = Some(rows);
        self
    }
    #[inline]
    #[must_use]
    pub fn offset(mut self, cols: usize) -> Self {
        self.offset = Some(cols);
        self
    }
    #[inline]
    #[must_use]
    pub fn format(mut self, f: LabelFormat) -> Self {
        self.format = Some(f);
        self
    }
    #[inline]
    #[must_use]
    pub fn x_format(mut self, f: LabelFormat) -> Self {
        self.x_format = Some(f);
        self
    }
    /// Append one colour to the cycle.
    #[inline]
    #[must_use]
    pub fn color(mut self, c: AnsiCode) -> Self {
        self.colors.push(Some(c));
        self
    }
    /// Replace the colour cycle; `None` entries leave that series uncoloured.
    #[inline]
    #[must_use]
    pub fn colors<I: IntoIterator<Item = Option<AnsiCode>>>(mut self, colors: I) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }
    #[inline]
    #[must_use]
    pub fn symbols(mut self, s: Symbols) -> Self {
        self.symbols = Some(s);
        self
    }
    #[inline]
    #[must_use]
    pub fn bin_edges<I: IntoIterator<Item = f64>>(mut self, edges: I) -> Self {
        self.bin_edges = edges.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let offset = self.offset.unwrap_or(DEFAULT_OFFSET);
        if offset < MIN_OFFSET {
            return Err(ConfigError::OffsetTooSmall(offset));
        }
        if self.height == Some(0) {
            return Err(ConfigError::ZeroHeight);
        }
        for (name, bound) in [("min", self.min), ("max", self.max)] {
            if let Some(value) = bound.filter(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteBound { name, value });
            }
        }
        if let Some((index, &value)) = self
            .bin_edges
            .iter()
            .enumerate()
            .find(|(_, e)| !e.is_finite())
        {
            return Err(ConfigError::NonFiniteBinEdge { index, value });
        }

        Ok(Config {
            min: self.min,
            max: self.max,
            height: self.height,
            offset,
            format: self.format.unwrap_or_else(LabelFormat::y_axis_default),
            x_format: self.x_format.unwrap_or_else(LabelFormat::x_axis_default),
            colors: self.colors,
            symbols: self.symbols.unwrap_or_default(),
            bin_edges: self.bin_edges,
        })
    }
}
