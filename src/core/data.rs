//! Series type plus a column loader with zero-allocation float parsing.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

// --- Series ---

/// One ordered run of samples. `None` marks a missing sample.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series(Vec<Option<f64>>);

/// NaN and infinities become missing samples.
#[inline]
fn sample(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

impl Series {
    #[must_use]
    pub fn new(samples: Vec<Option<f64>>) -> Self {
        Self(samples.into_iter().map(|s| s.and_then(sample)).collect())
    }

    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[Option<f64>] {
        &self.0
    }
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.0.first().copied().flatten()
    }
    #[must_use]
    pub fn is_all_missing(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
    /// Finite samples only.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied().flatten()
    }
}

impl From<Vec<f64>> for Series {
    fn from(v: Vec<f64>) -> Self {
        v.into_iter().collect()
    }
}
impl From<&[f64]> for Series {
    fn from(v: &[f64]) -> Self {
        v.iter().copied().collect()
    }
}
impl<const N: usize> From<[f64; N]> for Series {
    fn from(v: [f64; N]) -> Self {
        v.into_iter().collect()
    }
}
impl From<Vec<Option<f64>>> for Series {
    fn from(v: Vec<Option<f64>>) -> Self {
        Self::new(v)
    }
}
impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().map(sample).collect())
    }
}
impl FromIterator<Option<f64>> for Series {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self(iter.into_iter().map(|s| s.and_then(sample)).collect())
    }
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    BadFloat { column: usize, text: String },
    NoRows,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::BadFloat { column, text } => {
                write!(
                    f,
                    "line {}: column {} has invalid value '{}'",
                    self.line, column, text
                )
            }
            ParseErrorKind::NoRows => f.write_str("input contains no data rows"),
        }
    }
}
impl Error for ParseError {}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Empty fields and `nan`/`na`/`null` (any case) are missing samples.
#[inline]
fn is_missing(field: &[u8]) -> bool {
    field.is_empty()
        || [&b"nan"[..], b"na", b"null"]
            .iter()
            .any(|m| field.eq_ignore_ascii_case(m))
}

#[inline]
fn parse_sample(bytes: &[u8], line: usize, column: usize) -> Result<Option<f64>, ParseError> {
    if is_missing(bytes) {
        return Ok(None);
    }
    lexical_core::parse::<f64>(bytes)
        .map(sample)
        .map_err(|_| ParseError {
            line,
            kind: ParseErrorKind::BadFloat {
                column,
                text: String::from_utf8_lossy(bytes).into_owned(),
            },
        })
}

/// Commas win when present, otherwise runs of whitespace separate fields.
fn split_fields(buf: &[u8]) -> Vec<&[u8]> {
    if buf.contains(&b',') {
        buf.split(|&b| b == b',').map(trim).collect()
    } else {
        buf.split(u8::is_ascii_whitespace)
            .filter(|f| !f.is_empty())
            .collect()
    }
}

// --- Column ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

/// Read one series per column. Rows may be ragged; short rows leave the
/// missing columns as gaps.
pub fn read_columns<R: Read>(src: R) -> Result<Vec<Series>, ParseError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut columns: Vec<Vec<Option<f64>>> = Vec::new();
    let mut rows = 0usize;
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        let line = trim(&buf);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }
        let fields = split_fields(line);

        // simple header detection (non-numeric first field)
        if !saw_first {
            saw_first = true;
            let head = fields.first().copied().unwrap_or_default();
            if !is_missing(head) && lexical_core::parse::<f64>(head).is_err() {
                continue;
            }
        }

        while columns.len() < fields.len() {
            columns.push(vec![None; rows]);
        }
        for (column, values) in columns.iter_mut().enumerate() {
            let v = match fields.get(column) {
                Some(field) => parse_sample(field, line_no, column + 1)?,
                None => None,
            };
            values.push(v);
        }
        rows += 1;
    }
    if rows == 0 {
        return Err(ParseError {
            line: 0,
            kind: ParseErrorKind::NoRows,
        });
    }
    Ok(columns.into_iter().map(Series).collect())
}

pub fn read_columns_from_path(path: &str) -> Result<Vec<Series>, ParseError> {
    if path == "-" {
        read_columns(std::io::stdin())
    } else {
        use std::fs::File;
        read_columns(File::open(path).map_err(|e| ParseError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_values_become_missing() {
        let s = Series::from(vec![1.0, f64::NAN, f64::INFINITY, -2.5]);
        assert_eq!(s.samples(), &[Some(1.0), None, None, Some(-2.5)]);
        assert_eq!(s.values().collect::<Vec<_>>(), vec![1.0, -2.5]);
        assert_eq!(Series::new(vec![Some(f64::NAN)]).samples(), &[None]);
    }

    #[test]
    fn first_and_all_missing() {
        assert_eq!(Series::from([f64::NAN, 2.0]).first(), None);
        assert_eq!(Series::from([3.0]).first(), Some(3.0));
        assert!(Series::from([f64::NAN, f64::NAN]).is_all_missing());
        assert!(Series::default().is_all_missing());
    }

    #[test]
    fn reads_whitespace_columns() {
        let input = "1 10\n2 20\n3 30\n";
        let cols = read_columns(input.as_bytes()).unwrap();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0], Series::from([1.0, 2.0, 3.0]));
        assert_eq!(cols[1], Series::from([10.0, 20.0, 30.0]));
    }

    #[test]
    fn skips_header_comments_and_blank_lines() {
        let input = "time,load\n# warmup\n\n0.5, 1\r\n1.5 ,2\n";
        let cols = read_columns(input.as_bytes()).unwrap();
        assert_eq!(cols[0], Series::from([0.5, 1.5]));
        assert_eq!(cols[1], Series::from([1.0, 2.0]));
    }

    #[test]
    fn missing_markers_and_ragged_rows() {
        let input = "1,NaN\n,2\n3\n4,5,6\n";
        let cols = read_columns(input.as_bytes()).unwrap();
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0].samples(), &[Some(1.0), None, Some(3.0), Some(4.0)]);
        assert_eq!(cols[1].samples(), &[None, Some(2.0), None, Some(5.0)]);
        assert_eq!(cols[2].samples(), &[None, None, None, Some(6.0)]);
    }

    #[test]
    fn unicode_minus_is_accepted() {
        let cols = read_columns("\u{2212}4.5\n".as_bytes()).unwrap();
        assert_eq!(cols[0], Series::from([-4.5]));
    }

    #[test]
    fn bad_number_reports_line_and_column() {
        let err = read_columns("1 2\n3 x\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(
            err.kind,
            ParseErrorKind::BadFloat { column: 2, ref text } if text == "x"
        ));
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = read_columns("# nothing\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NoRows));
    }
}
