// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Domain Commands
//!
//! Command data structures following CQRS pattern.
//! Commands represent write operations and intent.

mod create_datum;
mod delete_datum;
mod update_datum;

pub use create_datum::{CreateDatumCommand, CreateDatumResponse};
pub use delete_datum::{DeleteDatumCommand, DeleteDatumResponse};
pub use update_datum::{UpdateDatumCommand, UpdateDatumResponse};
