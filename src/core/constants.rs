//! A collection of constants.

/// Columns reserved left of the plot when no offset is configured.
pub const DEFAULT_OFFSET: usize = 3;
/// The tick sits at `offset - 1`, so anything below two leaves no room for labels.
pub const MIN_OFFSET: usize = 2;

/// Blank columns kept between two x-axis labels.
pub const X_LABEL_GAP: usize = 2;

/// Y-axis labels are 8 wide with two decimals and a trailing space.
///
/// 14.832 becomes `   14.83 `
pub const DEFAULT_Y_FORMAT: &str = "{:8.2f} ";
/// X-axis bin edges are printed compactly.
pub const DEFAULT_X_FORMAT: &str = "{:.2f}";

/// Zero tick, tick, gap exit, gap entry, flat, fall end, rise end, fall start,
/// rise start, vertical.
pub const SYMBOL_COUNT: usize = 10;
