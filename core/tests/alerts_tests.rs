/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the project service alert facade

use chrono::NaiveDate;
use entity::project_service_alert::{
    AlertSeverity, AlertType, ProjectService, ProjectServiceAlertStatus,
};
use lumen_core::alerts::*;
use lumen_core::query::*;
use lumen_core::types::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, QueryTrait, Value};
use std::collections::BTreeMap;

fn project() -> MProject {
    MProject {
        id: 1,
        name: "demo".to_string(),
        description: "Demo project".to_string(),
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    }
}

fn alert(id: i32, status: ProjectServiceAlertStatus, severity: AlertSeverity) -> MProjectServiceAlert {
    MProjectServiceAlert {
        id,
        project: 1,
        service: ProjectService::Jobs,
        status,
        alert_type: AlertType::ProjectAlert,
        severity,
        receiver: "ops".to_string(),
        created_at: NaiveDate::from_ymd_opt(2024, 2, id as u32)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    }
}

fn count_row(count: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(count)))])
}

fn sql_of(filters: &[&str], sorts: &[&str]) -> String {
    let filters: Vec<FilterBy<AlertFilter>> = parse_filters(filters);
    let sorts: Vec<SortBy<AlertSort>> = parse_sorts(sorts);

    alerts_query(&project(), &filters, &sorts)
        .unwrap()
        .build(DatabaseBackend::Postgres)
        .to_string()
}

fn logged_sql(db: DatabaseConnection) -> Vec<String> {
    db.into_transaction_log()
        .iter()
        .flat_map(|t| t.statements().iter().map(|s| s.to_string()))
        .collect()
}

#[tokio::test]
async fn test_find_by_project_and_id_missing_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MProjectServiceAlert>::new()])
        .into_connection();

    let result = find_by_project_and_id(&db, &project(), 42).await.unwrap();
    assert!(result.is_none());

    let log = logged_sql(db);
    assert_eq!(log.len(), 1);
    assert!(log[0].contains(r#""project_service_alert"."project" = 1"#));
    assert!(log[0].contains(r#""project_service_alert"."id" = 42"#));
}

#[tokio::test]
async fn test_find_by_project_and_id_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![alert(
            3,
            ProjectServiceAlertStatus::JobFailed,
            AlertSeverity::Critical,
        )]])
        .into_connection();

    let result = find_by_project_and_id(&db, &project(), 3).await.unwrap();
    assert_eq!(result.map(|a| a.id), Some(3));
}

#[tokio::test]
async fn test_find_by_project_and_status() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![alert(
            5,
            ProjectServiceAlertStatus::ValidationFailure,
            AlertSeverity::Warning,
        )]])
        .append_query_results([Vec::<MProjectServiceAlert>::new()])
        .into_connection();

    let found = find_by_project_and_status(
        &db,
        &project(),
        ProjectServiceAlertStatus::ValidationFailure,
    )
    .await
    .unwrap();
    assert_eq!(
        found.map(|a| a.status),
        Some(ProjectServiceAlertStatus::ValidationFailure)
    );

    let missing =
        find_by_project_and_status(&db, &project(), ProjectServiceAlertStatus::JobKilled)
            .await
            .unwrap();
    assert!(missing.is_none());

    let log = logged_sql(db);
    assert!(log[0].contains(r#""project_service_alert"."status" = 5"#));
    assert!(log[1].contains(r#""project_service_alert"."status" = 2"#));
}

#[test]
fn test_single_filter_restricts_by_enum_value() {
    let sql = sql_of(&["STATUS:JOB_FAILED"], &[]);

    assert!(sql.contains(r#""project_service_alert"."project" = 1"#));
    assert!(sql.contains(r#""project_service_alert"."status" IN (1)"#));
    assert!(!sql.contains(r#""project_service_alert"."severity""#));
}

#[test]
fn test_multiple_filters_intersect() {
    let sql = sql_of(&["STATUS:JOB_FAILED,JOB_KILLED", "SEVERITY:CRITICAL", "SERVICE:KAFKA"], &[]);

    assert!(sql.contains(
        r#""project_service_alert"."project" = 1 AND "project_service_alert"."status" IN (1, 2) AND "project_service_alert"."severity" IN (0) AND "project_service_alert"."service" IN (2)"#
    ));
    assert!(!sql.contains(" OR "));
}

#[test]
fn test_filter_defaults_and_unknown_filters() {
    let sql = sql_of(&["TYPE", "COLOR:RED"], &[]);

    assert!(sql.contains(r#""project_service_alert"."alert_type" IN (0)"#));
    assert!(!sql.contains("RED"));
}

#[test]
fn test_date_filters() {
    let sql = sql_of(
        &["CREATED_GT:2024-01-01", "DATE_CREATED_LT:2024-02-01T00:00:00Z"],
        &[],
    );

    assert!(sql.contains(r#""project_service_alert"."created_at" > '2024-01-01"#));
    assert!(sql.contains(r#""project_service_alert"."created_at" < '2024-02-01"#));

    let sql = sql_of(&["CREATED:2024-01-15"], &[]);
    assert!(sql.contains(r#""project_service_alert"."created_at" = '2024-01-15"#));
}

#[test]
fn test_malformed_date_is_an_error() {
    let filters: Vec<FilterBy<AlertFilter>> = parse_filters(["CREATED_GT:last-week"]);
    let err = alerts_query(&project(), &filters, &[]).unwrap_err();

    assert!(matches!(err, QueryError::InvalidDate { filter: "CREATED_GT", .. }));
}

#[test]
fn test_compact_date_is_an_error() {
    let filters: Vec<FilterBy<AlertFilter>> = parse_filters(["CREATED:20240115"]);
    let err = alerts_query(&project(), &filters, &[]).unwrap_err();

    assert!(matches!(err, QueryError::InvalidDate { filter: "CREATED", .. }));
}

#[test]
fn test_invalid_enum_value_is_an_error() {
    let filters: Vec<FilterBy<AlertFilter>> = parse_filters(["STATUS:JOB_EXPLODED"]);
    let err = alerts_query(&project(), &filters, &[]).unwrap_err();

    assert!(matches!(err, QueryError::InvalidFilterValue { filter: "STATUS", .. }));
}

#[test]
fn test_sorts_apply_in_order() {
    let sql = sql_of(&[], &["SEVERITY", "CREATED"]);

    assert!(sql.ends_with(
        r#"ORDER BY "project_service_alert"."severity" ASC, "project_service_alert"."created_at" DESC"#
    ));

    let sql = sql_of(&[], &["ID:desc", "FOO"]);
    assert!(sql.ends_with(r#"ORDER BY "project_service_alert"."id" DESC"#));
}

#[tokio::test]
async fn test_find_all_project_alerts_paginates_and_counts() {
    let page_items = vec![
        alert(11, ProjectServiceAlertStatus::JobFailed, AlertSeverity::Info),
        alert(12, ProjectServiceAlertStatus::JobFailed, AlertSeverity::Info),
        alert(13, ProjectServiceAlertStatus::JobFailed, AlertSeverity::Info),
        alert(14, ProjectServiceAlertStatus::JobFailed, AlertSeverity::Info),
        alert(15, ProjectServiceAlertStatus::JobFailed, AlertSeverity::Info),
    ];

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![count_row(23)]])
        .append_query_results([page_items.clone()])
        .into_connection();

    let filters: Vec<FilterBy<AlertFilter>> = parse_filters(["STATUS:JOB_FAILED"]);
    let sorts: Vec<SortBy<AlertSort>> = parse_sorts(["ID"]);

    let result = find_all_project_alerts(
        &db,
        Page::new(Some(10), Some(5)),
        &filters,
        &sorts,
        &project(),
    )
    .await
    .unwrap();

    assert_eq!(result.count, 23);
    assert_eq!(result.items, page_items);
    assert!(result.items.len() <= 5);

    let log = logged_sql(db);
    assert_eq!(log.len(), 2);

    let (count_sql, page_sql) = (&log[0], &log[1]);
    assert!(count_sql.contains("COUNT(*)"));
    assert!(count_sql.contains(r#""project_service_alert"."status" IN (1)"#));
    assert!(!count_sql.contains("LIMIT"));
    assert!(!count_sql.contains("OFFSET"));

    assert!(page_sql.contains(r#""project_service_alert"."status" IN (1)"#));
    assert!(page_sql.contains("LIMIT 5"));
    assert!(page_sql.contains("OFFSET 10"));
}

#[tokio::test]
async fn test_find_all_project_alerts_count_ignores_window() {
    let filters: Vec<FilterBy<AlertFilter>> = parse_filters(["SEVERITY:INFO"]);

    let mut counts = Vec::new();
    for page in [Page::default(), Page::new(Some(20), Some(5))] {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![count_row(7)]])
            .append_query_results([Vec::<MProjectServiceAlert>::new()])
            .into_connection();

        let result = find_all_project_alerts(&db, page, &filters, &[], &project())
            .await
            .unwrap();
        counts.push(result.count);

        let log = logged_sql(db);
        assert!(!log[0].contains("LIMIT"));
    }

    assert_eq!(counts, vec![7, 7]);
}

#[tokio::test]
async fn test_find_all_project_alerts_rejects_before_querying() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let filters: Vec<FilterBy<AlertFilter>> = parse_filters(["CREATED:tomorrow"]);

    let err = find_all_project_alerts(&db, Page::default(), &filters, &[], &project())
        .await
        .unwrap_err();

    assert!(matches!(err, QueryError::InvalidDate { .. }));
    assert!(logged_sql(db).is_empty());
}
