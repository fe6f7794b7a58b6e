// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

pub mod commands;
pub mod entities;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod use_cases;
pub mod value_objects;

pub use commands::{
    CreateDatumCommand, CreateDatumResponse, DeleteDatumCommand, DeleteDatumResponse,
    UpdateDatumCommand, UpdateDatumResponse,
};
pub use entities::{Client, Datum, Metric, NewDatum, Product};
pub use error::{AncestorLevel, DomainError, ErrorKind, Result};
pub use queries::{GetDatumQuery, GetDatumResponse, ListDataQuery, ListDataResponse};
pub use services::{AncestorResolutionService, ResolvedAncestors};
pub use value_objects::{
    ClientKey, DatumFields, DatumId, DatumLookup, DatumPayload, MetricPath,
};
