/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use lumen_core::query::Page;
use serde::{Deserialize, Serialize};

/// Listing parameters. `filter_by` and `sort_by` may be repeated.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub filter_by: Vec<String>,
    pub sort_by: Vec<String>,
}

impl ListQuery {
    pub fn parse(raw: Option<&str>) -> Result<Self, String> {
        let mut query = ListQuery::default();

        let Some(raw) = raw else {
            return Ok(query);
        };

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "offset" => query.offset = Some(parse_number("offset", &value)?),
                "limit" => query.limit = Some(parse_number("limit", &value)?),
                "filter_by" => query.filter_by.push(value.into_owned()),
                "sort_by" => query.sort_by.push(value.into_owned()),
                _ => {}
            }
        }

        Ok(query)
    }

    /// Window for this request. A missing or zero limit takes `default_limit`,
    /// and no limit may exceed `max_limit`.
    pub fn page(&self, default_limit: u64, max_limit: u64) -> Page {
        let limit = match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => default_limit,
        }
        .min(max_limit);
        Page::new(self.offset, Some(limit))
    }
}

fn parse_number(name: &str, value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not a valid {}", value, name))
}
