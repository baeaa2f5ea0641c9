/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

/// Parses a date filter parameter.
///
/// Accepts RFC 3339 (converted to UTC), naive date-times, plain dates
/// (midnight) and epoch milliseconds of at least
/// [`EPOCH_MILLIS_MIN_DIGITS`] digits.
pub fn parse_date(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("date cannot be empty".to_string());
    }

    if s.chars().all(|c| c.is_ascii_digit()) {
        if s.len() < EPOCH_MILLIS_MIN_DIGITS {
            return Err(format!(
                "`{}` is ambiguous, expected YYYY-MM-DD or epoch milliseconds",
                s
            ));
        }

        let millis: i64 = s
            .parse()
            .map_err(|_| format!("`{}` is not a valid timestamp", s))?;

        return DateTime::from_timestamp_millis(millis)
            .map(|d| d.naive_utc())
            .ok_or_else(|| format!("`{}` is out of range", s));
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Ok(date.naive_utc());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("`{}` is not a valid date", s))
}

/// Splits `NAME:param` at the first separator. A missing separator yields an
/// empty parameter.
pub fn split_query_param(s: &str) -> (&str, &str) {
    match s.split_once(FILTER_PARAM_SEPARATOR) {
        Some((name, param)) => (name.trim(), param.trim()),
        None => (s.trim(), ""),
    }
}
