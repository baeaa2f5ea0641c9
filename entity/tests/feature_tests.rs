/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for on-demand feature entity

use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use std::collections::HashSet;
use std::hash::{DefaultHasher, Hash, Hasher};

fn feature() -> on_demand_feature::Model {
    on_demand_feature::Model {
        id: 3,
        on_demand_feature_group: 1,
        description: "customer age in years".to_owned(),
        name: "age".to_owned(),
        feature_type: "INT".to_owned(),
        primary: false,
    }
}

fn hash_of(model: &on_demand_feature::Model) -> u64 {
    let mut hasher = DefaultHasher::new();
    model.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_identical_features_are_equal() {
    let a = feature();
    let b = feature();

    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let set: HashSet<_> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_any_attribute_change_breaks_equality() {
    let base = feature();

    let mut other = feature();
    other.id = 4;
    assert_ne!(base, other);

    let mut other = feature();
    other.name = "birth_year".to_owned();
    assert_ne!(base, other);

    let mut other = feature();
    other.description = String::new();
    assert_ne!(base, other);

    let mut other = feature();
    other.feature_type = "BIGINT".to_owned();
    assert_ne!(base, other);

    let mut other = feature();
    other.primary = true;
    assert_ne!(base, other);
}

#[test]
fn test_owning_group_is_not_part_of_equality() {
    let base = feature();
    let mut other = feature();
    other.on_demand_feature_group = 99;

    assert_eq!(base, other);
    assert_eq!(hash_of(&base), hash_of(&other));
}

#[tokio::test]
async fn test_feature_entity_by_group() -> Result<(), DbErr> {
    let mut primary = feature();
    primary.id = 1;
    primary.name = "customer_id".to_owned();
    primary.primary = true;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![primary.clone(), feature()]])
        .into_connection();

    let features = on_demand_feature::Entity::find()
        .filter(on_demand_feature::Column::OnDemandFeatureGroup.eq(1))
        .all(&db)
        .await?;

    assert_eq!(features.len(), 2);
    assert_eq!(features[0], primary);
    assert!(features[0].primary);
    assert_eq!(features[1].feature_type, "INT");

    Ok(())
}
