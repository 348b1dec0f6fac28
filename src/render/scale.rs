//! Data space → integer row mapping.
//!
//! With `ratio = height / interval` every value `v` lands on level
//! `round(v * ratio)`. The grid spans levels `floor(min * ratio)` up to
//! `ceil(max * ratio)`, so row 0 is the top (largest) level. A flat range
//! (`min == max`) is the single level `round(min)`.
//!
//! Rounding is ties-to-even, like Python's `round`. A value exactly half way
//! between two levels goes to the even one.
//!
//! Ranges whose width or levels do not fit an `i64` fail with
//! [`ChartError::RangeTooLarge`].

use crate::core::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub minimum: f64,
    pub maximum: f64,
    pub interval: f64,
    pub ratio: f64,
    /// Lowest level, `floor(minimum * ratio)` (`round` for a flat range).
    pub min2: i64,
    /// Highest level, `ceil(maximum * ratio)`.
    pub max2: i64,
    /// `max2 - min2`; the grid has one more row than this.
    pub rows: usize,
}

/// Whole `f64` level as `i64`, `None` when it does not fit.
fn level_index(level: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63
    (level.is_finite() && (-LIMIT..LIMIT).contains(&level)).then(|| level as i64)
}

impl Scale {
    /// `height` defaults to the interval itself, one row per unit.
    pub fn new(minimum: f64, maximum: f64, height: Option<usize>) -> Result<Self, ChartError> {
        if minimum > maximum {
            return Err(ChartError::InvalidRange {
                min: minimum,
                max: maximum,
            });
        }
        let too_wide = || ChartError::RangeTooLarge {
            min: minimum,
            max: maximum,
        };
        let interval = maximum - minimum;
        if !interval.is_finite() {
            return Err(too_wide());
        }
        let height = height.map_or(interval, |h| h as f64);
        // a flat series has no interval to divide by
        let ratio = if interval > 0.0 { height / interval } else { 1.0 };

        // a flat series sits on a single level, even between integers
        let (low, high) = if interval > 0.0 {
            ((minimum * ratio).floor(), (maximum * ratio).ceil())
        } else {
            let level = (minimum * ratio).round_ties_even();
            (level, level)
        };
        let min2 = level_index(low).ok_or_else(too_wide)?;
        let max2 = level_index(high).ok_or_else(too_wide)?;
        let rows = max2
            .checked_sub(min2)
            .and_then(|r| usize::try_from(r).ok())
            .ok_or_else(too_wide)?;

        Ok(Self {
            minimum,
            maximum,
            interval,
            ratio,
            min2,
            max2,
            rows,
        })
    }

    /// Level offset above the bottom row, in `0..=rows`.
    #[inline]
    #[must_use]
    pub fn scaled(&self, v: f64) -> usize {
        let level = (v.clamp(self.minimum, self.maximum) * self.ratio).round_ties_even() as i64;
        usize::try_from(level - self.min2)
            .unwrap_or(0)
            .min(self.rows)
    }

    /// Screen row for `v`, 0 at the top.
    #[inline]
    #[must_use]
    pub fn row(&self, v: f64) -> usize {
        self.rows - self.scaled(v)
    }

    /// Screen row of the grid line for value zero, if it is on the grid.
    #[inline]
    #[must_use]
    pub fn zero_row(&self) -> Option<usize> {
        (self.min2..=self.max2)
            .contains(&0)
            .then(|| usize::try_from(self.max2).unwrap_or(0))
    }

    /// Y-axis label value printed on screen row `row`.
    #[inline]
    #[must_use]
    pub fn label_value(&self, row: usize) -> f64 {
        self.maximum - row as f64 * self.interval / self.rows.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_ratio_by_default() {
        let s = Scale::new(1.0, 4.0, None).unwrap();
        assert_eq!(s.ratio, 1.0);
        assert_eq!((s.min2, s.max2, s.rows), (1, 4, 3));
        assert_eq!(s.row(4.0), 0);
        assert_eq!(s.row(1.0), 3);
    }

    #[test]
    fn explicit_height_rescales() {
        let s = Scale::new(-15.0, 15.0, Some(10)).unwrap();
        assert_eq!((s.min2, s.max2, s.rows), (-5, 5, 10));
        assert_eq!(s.scaled(0.0), 5);
        assert_eq!(s.row(15.0), 0);
    }

    #[test]
    fn flat_series_uses_unit_ratio() {
        let s = Scale::new(2.0, 2.0, None).unwrap();
        assert_eq!(s.ratio, 1.0);
        assert_eq!(s.rows, 0);
        assert_eq!(s.scaled(2.0), 0);
        assert_eq!(s.label_value(0), 2.0);
    }

    #[test]
    fn fractional_flat_series_is_one_row() {
        let s = Scale::new(2.5, 2.5, None).unwrap();
        assert_eq!((s.min2, s.max2, s.rows), (2, 2, 0));
        assert_eq!(s.row(2.5), 0);
        assert_eq!(s.zero_row(), None);

        let s = Scale::new(-0.3, -0.3, Some(6)).unwrap();
        assert_eq!((s.min2, s.max2, s.rows), (0, 0, 0));
        assert_eq!(s.zero_row(), Some(0));
    }

    #[test]
    fn unrepresentable_ranges_are_rejected() {
        assert_eq!(
            Scale::new(-1e19, 1e19, None),
            Err(ChartError::RangeTooLarge {
                min: -1e19,
                max: 1e19
            })
        );
        assert_eq!(
            Scale::new(-f64::MAX, f64::MAX, Some(4)),
            Err(ChartError::RangeTooLarge {
                min: -f64::MAX,
                max: f64::MAX
            })
        );
        assert!(Scale::new(0.0, 1e-300, Some(10)).is_ok());
        assert!(matches!(
            Scale::new(1.0, 1.0 + 1e-15, Some(usize::MAX)),
            Err(ChartError::RangeTooLarge { .. })
        ));
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            Scale::new(5.0, 1.0, None),
            Err(ChartError::InvalidRange { min: 5.0, max: 1.0 })
        );
    }

    #[test]
    fn ties_round_to_even() {
        let s = Scale::new(0.0, 10.0, None).unwrap();
        assert_eq!(s.scaled(2.5), 2);
        assert_eq!(s.scaled(3.5), 4);
    }

    #[test]
    fn values_outside_the_range_are_clamped() {
        let s = Scale::new(0.0, 10.0, Some(5)).unwrap();
        assert_eq!(s.scaled(-100.0), 0);
        assert_eq!(s.scaled(100.0), s.rows);
    }

    #[test]
    fn zero_row_only_when_on_grid() {
        let s = Scale::new(-1.0, 2.0, None).unwrap();
        assert_eq!(s.zero_row(), Some(2));
        assert_eq!(s.label_value(2), 0.0);
        assert_eq!(Scale::new(2.0, 3.0, None).unwrap().zero_row(), None);
    }
}
