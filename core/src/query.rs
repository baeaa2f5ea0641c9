/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Building blocks shared by the listing facades.
//!
//! A facade declares its filter and sort kinds by implementing [`FilterSpec`]
//! and [`SortSpec`]. Caller supplied `KIND:param` strings are parsed into
//! [`FilterBy`] / [`SortBy`] values, and [`find_all`] runs the count and the
//! windowed data query for a prepared `Select`.

use chrono::NaiveDateTime;
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QuerySelect, Select,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::consts::FILTER_VALUE_SEPARATOR;
use super::input::{parse_date, split_query_param};

#[derive(Debug)]
pub enum QueryError {
    InvalidFilterValue {
        filter: &'static str,
        value: String,
        reason: String,
    },
    InvalidDate {
        filter: &'static str,
        reason: String,
    },
    Database(DbErr),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::InvalidFilterValue {
                filter,
                value,
                reason,
            } => write!(f, "Invalid value `{}` for filter {}: {}", value, filter, reason),
            QueryError::InvalidDate { filter, reason } => {
                write!(f, "Invalid date for filter {}: {}", filter, reason)
            }
            QueryError::Database(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for QueryError {
    fn from(err: DbErr) -> Self {
        QueryError::Database(err)
    }
}

pub type QueryResult<T> = Result<T, QueryError>;

pub trait FilterSpec: Copy + Sized {
    fn from_name(name: &str) -> Option<Self>;

    fn name(&self) -> &'static str;

    /// Parameter used when the caller supplies none. Empty means "required".
    fn default_param(&self) -> &'static str;
}

pub trait SortSpec: Copy + Sized {
    fn from_name(name: &str) -> Option<Self>;

    fn default_order(&self) -> SortOrder;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBy<F> {
    pub kind: F,
    pub param: String,
}

impl<F: FilterSpec> FilterBy<F> {
    pub fn new(kind: F, param: impl Into<String>) -> Self {
        FilterBy {
            kind,
            param: param.into(),
        }
    }

    /// Parses `KIND` or `KIND:param`. Unknown kinds yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let (name, param) = split_query_param(s);
        F::from_name(name).map(|kind| FilterBy::new(kind, param))
    }

    pub fn param_or_default(&self) -> &str {
        if self.param.is_empty() {
            self.kind.default_param()
        } else {
            &self.param
        }
    }

    /// Comma separated enum values of this filter.
    pub fn enum_values<T>(&self) -> QueryResult<Vec<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.param_or_default()
            .split(FILTER_VALUE_SEPARATOR)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                v.parse::<T>().map_err(|reason| QueryError::InvalidFilterValue {
                    filter: self.kind.name(),
                    value: v.to_string(),
                    reason: reason.to_string(),
                })
            })
            .collect()
    }

    pub fn date_value(&self) -> QueryResult<NaiveDateTime> {
        parse_date(self.param_or_default()).map_err(|reason| QueryError::InvalidDate {
            filter: self.kind.name(),
            reason,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortBy<S> {
    pub kind: S,
    pub order: SortOrder,
}

impl<S: SortSpec> SortBy<S> {
    pub fn new(kind: S, order: SortOrder) -> Self {
        SortBy { kind, order }
    }

    /// Parses `KIND` or `KIND:asc|desc`. Unknown kinds yield `None`, an
    /// unknown order falls back to the kind's default.
    pub fn parse(s: &str) -> Option<Self> {
        let (name, param) = split_query_param(s);
        let kind = S::from_name(name)?;
        let order = param.parse().unwrap_or_else(|_| kind.default_order());
        Some(SortBy::new(kind, order))
    }
}

pub fn parse_filters<F, I, T>(raw: I) -> Vec<FilterBy<F>>
where
    F: FilterSpec,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|s| {
            let parsed = FilterBy::<F>::parse(s.as_ref());
            if parsed.is_none() {
                tracing::debug!(filter = s.as_ref(), "Ignoring unknown filter");
            }
            parsed
        })
        .collect()
}

pub fn parse_sorts<S, I, T>(raw: I) -> Vec<SortBy<S>>
where
    S: SortSpec,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|s| {
            let parsed = SortBy::<S>::parse(s.as_ref());
            if parsed.is_none() {
                tracing::debug!(sort = s.as_ref(), "Ignoring unknown sort");
            }
            parsed
        })
        .collect()
}

/// Result window. Absent or zero values leave the query unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

impl Page {
    pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
        Page { offset, limit }
    }

    pub fn apply<Q: QuerySelect>(&self, query: Q) -> Q {
        let query = match self.offset {
            Some(offset) if offset > 0 => query.offset(offset),
            _ => query,
        };

        match self.limit {
            Some(limit) if limit > 0 => query.limit(limit),
            _ => query,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionInfo<T> {
    pub count: u64,
    pub items: Vec<T>,
}

/// Counts every row of `select`, then loads the rows inside `page`.
pub async fn find_all<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    page: Page,
) -> QueryResult<CollectionInfo<E::Model>>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let count = select.clone().count(db).await?;
    let items = page.apply(select).all(db).await?;

    Ok(CollectionInfo { count, items })
}
