// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Use cases over the data of a metric.
//!
//! Every use case checks its request in the same order: datum id segment,
//! then body fields, then the ancestor chain, then the datum itself. Nothing
//! is looked up or written before the cheaper checks pass.

mod create_datum;
mod delete_datum;
mod get_datum;
mod list_data;
mod update_datum;

pub use create_datum::{CreateDatum, CreateDatumUseCase};
pub use delete_datum::{DeleteDatum, DeleteDatumUseCase};
pub use get_datum::{GetDatum, GetDatumUseCase};
pub use list_data::{ListData, ListDataUseCase};
pub use update_datum::{UpdateDatum, UpdateDatumUseCase};
