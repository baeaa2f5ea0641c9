/*
 * SPDX-FileCopyrightText: 2026 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Test modules for entity package

pub mod feature_tests;
