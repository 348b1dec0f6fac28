//! Label templates.
//!
//! A template is literal text around one `{...}` placeholder, written the
//! way Python's `str.format` spells fixed-point numbers:
//!
//! * `{:8.2f} ` → right-aligned in 8 columns, two decimals, trailing space
//! * `{:.0f}`   → no padding, no decimals
//! * `{:<6.1f}` → left-aligned in 6 columns
//! * `{}`       → shortest round-trip representation
//!
//! Anything the parser cannot express can be supplied as a closure through
//! [`LabelFormat::custom`].

use std::{fmt, sync::Arc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    MissingPlaceholder,
    Unterminated,
    BadSpec(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingPlaceholder => f.write_str("label template has no `{}` placeholder"),
            FormatError::Unterminated => f.write_str("label template has an unclosed `{`"),
            FormatError::BadSpec(spec) => write!(f, "unsupported label spec `{spec}`"),
        }
    }
}
impl std::error::Error for FormatError {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    Left,
    #[default]
    Right,
    Center,
}

type LabelFn = dyn Fn(f64, usize) -> String + Send + Sync;

/// How an axis value becomes label text.
#[derive(Clone)]
pub enum LabelFormat {
    Fixed {
        prefix: String,
        align: Align,
        width: usize,
        precision: Option<usize>,
        suffix: String,
    },
    Custom(Arc<LabelFn>),
}

impl LabelFormat {
    /// Right-aligned fixed-point number with no surrounding text.
    #[must_use]
    pub fn fixed(width: usize, precision: usize) -> Self {
        Self::Fixed {
            prefix: String::new(),
            align: Align::Right,
            width,
            precision: Some(precision),
            suffix: String::new(),
        }
    }

    /// `{:8.2f} `
    #[must_use]
    pub fn y_axis_default() -> Self {
        Self::Fixed {
            prefix: String::new(),
            align: Align::Right,
            width: 8,
            precision: Some(2),
            suffix: " ".to_owned(),
        }
    }

    /// `{:.2f}`
    #[must_use]
    pub fn x_axis_default() -> Self {
        Self::fixed(0, 2)
    }

    /// Closure receiving the value and its index: the screen row for y
    /// labels, the bin-edge index for x labels.
    pub fn custom(f: impl Fn(f64, usize) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let open = template.find('{').ok_or(FormatError::MissingPlaceholder)?;
        let close = template[open..]
            .find('}')
            .map(|i| open + i)
            .ok_or(FormatError::Unterminated)?;

        let prefix = template[..open].to_owned();
        let suffix = template[close + 1..].to_owned();
        let inner = &template[open + 1..close];

        let spec = match inner.strip_prefix(':') {
            Some(spec) => spec,
            None if inner.is_empty() => "",
            None => return Err(FormatError::BadSpec(inner.to_owned())),
        };
        let bad = || FormatError::BadSpec(spec.to_owned());

        let mut rest = spec;
        let align = match rest.chars().next() {
            Some('<') => Align::Left,
            Some('^') => Align::Center,
            Some('>') => Align::Right,
            _ => Align::default(),
        };
        if rest.starts_with(['<', '^', '>']) {
            rest = &rest[1..];
        }
        rest = rest.strip_suffix('f').unwrap_or(rest);

        let (width, precision) = match rest.split_once('.') {
            Some((w, p)) => (w, Some(p.parse::<usize>().map_err(|_| bad())?)),
            None => (rest, None),
        };
        let width = if width.is_empty() {
            0
        } else {
            width.parse::<usize>().map_err(|_| bad())?
        };
        // a bare `f` means Python's default of six decimals
        let precision = precision.or_else(|| spec.ends_with('f').then_some(6));

        Ok(Self::Fixed {
            prefix,
            align,
            width,
            precision,
            suffix,
        })
    }

    /// Format a value with no meaningful position (index 0).
    #[must_use]
    pub fn apply(&self, value: f64) -> String {
        self.apply_at(value, 0)
    }

    #[must_use]
    pub fn apply_at(&self, value: f64, index: usize) -> String {
        match self {
            Self::Custom(f) => f(value, index),
            Self::Fixed {
                prefix,
                align,
                width,
                precision,
                suffix,
            } => {
                let body = match precision {
                    Some(p) => format!("{value:.p$}"),
                    None => format!("{value}"),
                };
                let width = *width;
                let padded = match align {
                    Align::Left => format!("{body:<width$}"),
                    Align::Right => format!("{body:>width$}"),
                    Align::Center => format!("{body:^width$}"),
                };
                format!("{prefix}{padded}{suffix}")
            }
        }
    }
}

impl fmt::Debug for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed {
                prefix,
                align,
                width,
                precision,
                suffix,
            } => f
                .debug_struct("Fixed")
                .field("prefix", prefix)
                .field("align", align)
                .field("width", width)
                .field("precision", precision)
                .field("suffix", suffix)
                .finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{DEFAULT_X_FORMAT, DEFAULT_Y_FORMAT};

    #[test]
    fn default_y_template() {
        let f = LabelFormat::parse(DEFAULT_Y_FORMAT).unwrap();
        assert_eq!(f.apply(14.832), "   14.83 ");
        assert_eq!(f.apply(-1.0), "   -1.00 ");
        assert_eq!(f.apply(123_456_789.0), "123456789.00 ");
    }

    #[test]
    fn default_x_template() {
        let f = LabelFormat::parse(DEFAULT_X_FORMAT).unwrap();
        assert_eq!(f.apply(0.5), "0.50");
    }

    #[test]
    fn builtin_defaults_match_their_templates() {
        let y = LabelFormat::parse(DEFAULT_Y_FORMAT).unwrap();
        let x = LabelFormat::parse(DEFAULT_X_FORMAT).unwrap();
        for v in [-3.5, 0.0, 7.125, 1234.5678] {
            assert_eq!(LabelFormat::y_axis_default().apply(v), y.apply(v));
            assert_eq!(LabelFormat::x_axis_default().apply(v), x.apply(v));
        }
    }

    #[test]
    fn prefix_suffix_and_alignment() {
        let f = LabelFormat::parse("$ {:<6.1f}k").unwrap();
        assert_eq!(f.apply(2.31), "$ 2.3   k");
        let f = LabelFormat::parse("[{:^7.0f}]").unwrap();
        assert_eq!(f.apply(42.0), "[  42   ]");
    }

    #[test]
    fn bare_placeholders() {
        assert_eq!(LabelFormat::parse("{}").unwrap().apply(2.5), "2.5");
        assert_eq!(LabelFormat::parse("{:f}").unwrap().apply(1.0), "1.000000");
        assert_eq!(LabelFormat::parse("{:4}").unwrap().apply(7.0), "   7");
    }

    #[test]
    fn malformed_templates() {
        assert!(matches!(
            LabelFormat::parse("value"),
            Err(FormatError::MissingPlaceholder)
        ));
        assert!(matches!(
            LabelFormat::parse("{:8.2f"),
            Err(FormatError::Unterminated)
        ));
        assert!(matches!(
            LabelFormat::parse("{:8.2x}"),
            Err(FormatError::BadSpec(_))
        ));
        assert!(matches!(
            LabelFormat::parse("{0}"),
            Err(FormatError::BadSpec(_))
        ));
    }

    #[test]
    fn custom_closure() {
        let f = LabelFormat::custom(|v, _| format!("{:>4}%", (v * 100.0).round()));
        assert_eq!(f.apply(0.25), "  25%");
        assert_eq!(format!("{f:?}"), "Custom(..)");

        let f = LabelFormat::custom(|v, i| format!("{i}:{v}"));
        assert_eq!(f.apply_at(1.5, 3), "3:1.5");
        assert_eq!(f.apply(1.5), "0:1.5");
    }
}
