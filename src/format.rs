//! Value formatting for axis labels.
//!
//! The chart only talks to [`ValueFormatter`]; [`StandardFormatter`] is the default
//! implementation and understands a handful of tokens:
//!
//! | token                | example (axis)  |
//! |----------------------|-----------------|
//! | *(none)*             | `12,345`        |
//! | `filesize`           | `1.5 GB`        |
//! | `percent`            | `42%`           |
//! | `duration` / `time`  | `2h 5m`         |
//! | anything else        | `1,234.5`       |

use num_format::{Grouping, Locale};

/// Turns a numeric value into label text.
///
/// `axis` is true for axis labels, which are rendered more compactly.
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64, token: Option<&str>, axis: bool) -> String;
}

/// Resolve a locale tag to digit grouping and the decimal separator.
///
/// Only the language part of the tag counts (`de`, `de_AT` and `de-CH` all
/// group like German). Unknown languages format the English way.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    let lang = tag
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match lang.as_str() {
        "de" | "german" => (&Locale::de, ','),
        "fr" => (&Locale::fr, ','),
        "es" => (&Locale::es, ','),
        "it" => (&Locale::it, ','),
        "pt" => (&Locale::pt, ','),
        "nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Insert the locale's group separator into a run of ASCII digits.
fn group_digits(digits: &str, locale: &Locale) -> String {
    let sep = locale.separator();
    let (first, rest) = match locale.grouping() {
        Grouping::Standard => (3, 3),
        Grouping::Indian => (3, 2),
        Grouping::Posix => return digits.to_string(),
    };
    let bytes = digits.as_bytes();
    let mut cuts = Vec::new();
    let mut end = bytes.len();
    let mut size = first;
    while end > size {
        end -= size;
        cuts.push(end);
        size = rest;
    }
    let mut out = String::with_capacity(digits.len() + cuts.len() * sep.len());
    let mut start = 0;
    for cut in cuts.into_iter().rev() {
        out.push_str(&digits[start..cut]);
        out.push_str(sep);
        start = cut;
    }
    out.push_str(&digits[start..]);
    out
}

/// Locale-aware default formatter.
#[derive(Debug, Clone, Copy)]
pub struct StandardFormatter {
    locale: &'static Locale,
    decimal_sep: char,
}

impl StandardFormatter {
    pub fn new(locale_tag: &str) -> Self {
        let (locale, decimal_sep) = map_locale(locale_tag);
        Self {
            locale,
            decimal_sep,
        }
    }

    /// Grouped integer part plus up to `decimals` fraction digits, trailing zeros trimmed.
    ///
    /// The digits come straight from `f64` formatting, so magnitudes beyond any
    /// integer type are still printed in full.
    fn number(&self, value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let s = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = s.split_once('.').unwrap_or((s.as_str(), ""));
        let mut out = String::new();
        if value < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.locale));
        let frac = frac_part.trim_end_matches('0');
        if !frac.is_empty() {
            out.push(self.decimal_sep);
            out.push_str(frac);
        }
        out
    }

    fn filesize(&self, bytes: f64, axis: bool) -> String {
        const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
        let mut v = bytes;
        let mut unit = 0;
        while v.abs() >= 1024.0 && unit + 1 < UNITS.len() {
            v /= 1024.0;
            unit += 1;
        }
        let decimals = if axis { 1 } else { 2 };
        format!("{} {}", self.number(v, decimals), UNITS[unit])
    }

    fn duration(&self, seconds: f64) -> String {
        let total = seconds.max(0.0).round() as u64;
        let (d, h, m, s) = (
            total / 86_400,
            (total % 86_400) / 3_600,
            (total % 3_600) / 60,
            total % 60,
        );
        if d > 0 {
            format!("{d}d {h}h")
        } else if h > 0 {
            format!("{h}h {m}m")
        } else if m > 0 {
            format!("{m}m {s}s")
        } else {
            format!("{s}s")
        }
    }
}

impl Default for StandardFormatter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl ValueFormatter for StandardFormatter {
    fn format(&self, value: f64, token: Option<&str>, axis: bool) -> String {
        let token = token.map(str::trim).filter(|t| !t.is_empty());
        match token.map(str::to_ascii_lowercase).as_deref() {
            None => self.number(value.round(), 0),
            Some("filesize") => self.filesize(value, axis),
            Some("percent") => format!("{}%", self.number(value, if axis { 0 } else { 1 })),
            Some("duration" | "time") => self.duration(value),
            Some(_) => self.number(value, 2),
        }
    }
}
