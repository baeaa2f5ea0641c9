/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use serde::{Deserialize, Serialize};

use super::types::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FeatureDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub feature_type: String,
    #[serde(default)]
    pub primary: bool,
}

pub async fn get_feature_group(
    db: &DatabaseConnection,
    group_id: i32,
) -> Result<Option<MOnDemandFeatureGroup>, DbErr> {
    EOnDemandFeatureGroup::find_by_id(group_id).one(db).await
}

pub async fn get_features_by_group(
    db: &DatabaseConnection,
    group: &MOnDemandFeatureGroup,
) -> Result<Vec<MOnDemandFeature>, DbErr> {
    EOnDemandFeature::find()
        .filter(COnDemandFeature::OnDemandFeatureGroup.eq(group.id))
        .order_by_asc(COnDemandFeature::Id)
        .all(db)
        .await
}

pub async fn get_feature_by_id(
    db: &DatabaseConnection,
    group: &MOnDemandFeatureGroup,
    feature_id: i32,
) -> Result<Option<MOnDemandFeature>, DbErr> {
    EOnDemandFeature::find()
        .filter(
            Condition::all()
                .add(COnDemandFeature::OnDemandFeatureGroup.eq(group.id))
                .add(COnDemandFeature::Id.eq(feature_id)),
        )
        .one(db)
        .await
}

/// Inserts the whole batch in one transaction. Nothing is kept if any insert fails.
pub async fn add_features(
    db: &DatabaseConnection,
    group: &MOnDemandFeatureGroup,
    features: Vec<FeatureDefinition>,
) -> Result<Vec<MOnDemandFeature>, DbErr> {
    let txn = db.begin().await?;
    let mut inserted = Vec::with_capacity(features.len());

    for f in features {
        let afeature = AOnDemandFeature {
            id: NotSet,
            on_demand_feature_group: Set(group.id),
            description: Set(f.description),
            name: Set(f.name),
            feature_type: Set(f.feature_type),
            primary: Set(f.primary),
        };

        match afeature.insert(&txn).await {
            Ok(feature) => inserted.push(feature),
            Err(e) => {
                txn.rollback().await?;
                return Err(e);
            }
        }
    }

    txn.commit().await?;

    tracing::debug!(
        group = group.id,
        count = inserted.len(),
        "Added on-demand features"
    );

    Ok(inserted)
}
