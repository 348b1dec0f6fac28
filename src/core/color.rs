//! Zero-alloc ANSI colour codes with a fixed name table.

use std::{fmt, str};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
    UnknownName(String),
}

/// Every named foreground colour, in the order `colors` lists them.
pub const NAMED: [(&str, &str); 18] = [
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("lightgray", "\x1b[37m"),
    ("default", "\x1b[39m"),
    ("darkgray", "\x1b[90m"),
    ("lightred", "\x1b[91m"),
    ("lightgreen", "\x1b[92m"),
    ("lightyellow", "\x1b[93m"),
    ("lightblue", "\x1b[94m"),
    ("lightmagenta", "\x1b[95m"),
    ("lightcyan", "\x1b[96m"),
    ("white", "\x1b[97m"),
    ("reset", "\x1b[0m"),
];

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

impl AnsiCode {
    pub const fn black() -> Self {
        Self::Static("\x1b[30m")
    }
    pub const fn red() -> Self {
        Self::Static("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36m")
    }
    pub const fn lightgray() -> Self {
        Self::Static("\x1b[37m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[97m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(b"\x1b[38;2;");
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// Look a colour up in [`NAMED`], or parse `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let wanted = s.trim().to_ascii_lowercase();
        if let Some((_, code)) = NAMED.iter().find(|(name, _)| *name == wanted) {
            return Ok(Self::Static(code));
        }
        if wanted.starts_with('#') {
            return Self::from_hex(&wanted);
        }
        Err(ColorError::UnknownName(s.trim().to_owned()))
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // inline codes are built from ASCII only
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or_default(),
        }
    }
}

// --- convenience conversions ---
impl From<AnsiCode> for String {
    #[inline]
    fn from(c: AnsiCode) -> Self {
        c.as_str().to_owned()
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
            ColorError::UnknownName(name) => write!(f, "unknown colour `{name}`"),
        }
    }
}
impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(AnsiCode::from_name("Red").unwrap(), AnsiCode::red());
        assert_eq!(AnsiCode::from_name(" lightblue ").unwrap().as_str(), "\x1b[94m");
    }

    #[test]
    fn hex_builds_truecolour_escape() {
        let c = AnsiCode::from_name("#ff0810").unwrap();
        assert_eq!(c.as_str(), "\x1b[38;2;255;8;16m");
        assert_eq!(c, AnsiCode::rgb(255, 8, 16));
    }

    #[test]
    fn bad_names_are_reported() {
        assert_eq!(
            AnsiCode::from_name("chartreuse"),
            Err(ColorError::UnknownName("chartreuse".into()))
        );
        assert_eq!(AnsiCode::from_name("#12345"), Err(ColorError::InvalidHexLength));
        assert_eq!(AnsiCode::from_name("#12345g"), Err(ColorError::InvalidHexDigit));
    }

    #[test]
    fn colorize_wraps_with_reset() {
        assert_eq!(colorize(&AnsiCode::green(), "─"), "\x1b[32m─\x1b[0m");
    }
}
