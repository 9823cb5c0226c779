// Utility helpers for parsing, text normalization, and path handling.
//
// This module centralizes all the "dirty" date/string handling so the rest
// of the code can assume clean, typed values.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_format::{Locale, ToFormattedString};
use std::path::PathBuf;

/// Fixed source format for the `Created Date` column, 12-hour clock with an
/// AM/PM marker (e.g. `03/14/2024 09:05:00 PM`).
pub const CREATED_DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Parse a `Created Date` cell against the single fixed format.
///
/// Anything that does not match exactly — 24-hour times, different
/// separators, empty cells — parses to `None`. Callers treat `None` as
/// out-of-range rather than as a failure; relaxing this to try multiple
/// formats would silently change counts on irregular real-world data.
pub fn parse_created_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(s, CREATED_DATE_FORMAT).ok()
}

/// Parse a CLI date bound, accepted as `YYYY-MM-DD` or `YYYY-MM-DD HH:MM`.
///
/// A date-only value resolves to midnight of that day, so an end bound of
/// `2024-01-31` excludes later moments of Jan 31.
pub fn parse_bound(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Trim a borough value and title-case it: first letter of each
/// whitespace-separated word uppercased, the rest lowercased.
///
/// Interior whitespace is preserved as written. An empty or all-whitespace
/// value normalizes to the empty string. Idempotent.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.trim().chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Expand a leading `~` to the user's home directory and make the path
/// absolute relative to the current working directory.
pub fn resolve_path(raw: &str) -> PathBuf {
    let expanded = if let Some(rest) = raw.strip_prefix("~/") {
        match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(raw),
        }
    } else if raw == "~" {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(raw))
    } else {
        PathBuf::from(raw)
    };
    if expanded.is_absolute() {
        expanded
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(expanded),
            Err(_) => expanded,
        }
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for integer-like values. Used for
    // row counts in console messages (e.g., `9,855 rows loaded`).
    n.to_formatted_string(&Locale::en)
}
