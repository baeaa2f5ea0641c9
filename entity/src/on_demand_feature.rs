/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! A feature of an on-demand feature group.
//!
//! Equality and hashing cover the id and the feature's own attributes. The
//! owning group does not take part.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[derive(Clone, Debug, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "on_demand_feature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "on_demand_feature_group_id")]
    pub on_demand_feature_group: i32,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub feature_type: String,
    #[sea_orm(column_name = "primary_column")]
    pub primary: bool,
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.description == other.description
            && self.name == other.name
            && self.feature_type == other.feature_type
            && self.primary == other.primary
    }
}

impl Eq for Model {}

impl Hash for Model {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.description.hash(state);
        self.name.hash(state);
        self.feature_type.hash(state);
        self.primary.hash(state);
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::on_demand_feature_group::Entity",
        from = "Column::OnDemandFeatureGroup",
        to = "super::on_demand_feature_group::Column::Id",
        on_delete = "Cascade"
    )]
    OnDemandFeatureGroup,
}

impl Related<super::on_demand_feature_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OnDemandFeatureGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
