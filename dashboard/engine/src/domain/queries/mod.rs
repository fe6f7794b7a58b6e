// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Domain Queries
//!
//! Query data structures following CQRS pattern.
//! Queries represent read operations and return data without side effects.

mod get_datum;
mod list_data;

pub use get_datum::{GetDatumQuery, GetDatumResponse};
pub use list_data::{ListDataQuery, ListDataResponse};
