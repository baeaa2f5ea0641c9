/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod on_demand_feature;
pub mod on_demand_feature_group;
pub mod project;
pub mod project_service_alert;
