/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Naive timestamp layouts accepted by date filters, tried in order after RFC 3339.
pub const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Shorter digit-only input is rejected instead of read as epoch milliseconds,
/// so compact dates like `20240115` fail loudly.
pub const EPOCH_MILLIS_MIN_DIGITS: usize = 10;

pub const FILTER_PARAM_SEPARATOR: char = ':';
pub const FILTER_VALUE_SEPARATOR: char = ',';
