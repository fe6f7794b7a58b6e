// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! REST API handlers using axum

use super::error::ApiError;
use crate::application::UseCaseRegistry;
use crate::domain::{
    CreateDatumCommand, Datum, DatumFields, DeleteDatumCommand, GetDatumQuery, ListDataQuery,
    MetricPath, UpdateDatumCommand,
};
use axum::{
    Json,
    extract::{Form, Path, State, rejection::FormRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Shared application state
pub type AppState = Arc<UseCaseRegistry>;

/// Decoded `key=value` pairs of a form body, in arrival order
type FormPairs = Result<Form<Vec<(String, String)>>, FormRejection>;

/// Path of the data collection under a metric
#[derive(Debug, Deserialize)]
pub struct CollectionPath {
    pub product_id: String,
    pub client_id: String,
    pub metric_id: String,
}

/// Path of a single datum
#[derive(Debug, Deserialize)]
pub struct ItemPath {
    pub product_id: String,
    pub client_id: String,
    pub metric_id: String,
    pub datum_id: String,
}

impl From<CollectionPath> for MetricPath {
    fn from(path: CollectionPath) -> Self {
        MetricPath::new(path.product_id, path.client_id, path.metric_id)
    }
}

impl ItemPath {
    fn into_parts(self) -> (MetricPath, String) {
        (
            MetricPath::new(self.product_id, self.client_id, self.metric_id),
            self.datum_id,
        )
    }
}

/// One datum as rendered in list and item responses
#[derive(Debug, Serialize)]
pub struct DatumSummary {
    pub datum_id: u64,
    pub product_version: String,
    pub toolchain_version: String,
    pub timestamp: String,
    pub values: Vec<f64>,
}

impl From<&Datum> for DatumSummary {
    fn from(datum: &Datum) -> Self {
        Self {
            datum_id: datum.id().value(),
            product_version: datum.product_version().to_string(),
            toolchain_version: datum.toolchain_version().to_string(),
            timestamp: datum.timestamp_string(),
            values: datum.values().to_vec(),
        }
    }
}

/// List data response
#[derive(Debug, Serialize)]
pub struct DataListResponse {
    pub product_id: String,
    pub client_id: String,
    pub metric_id: String,
    pub data: Vec<DatumSummary>,
}

/// Datum detail response
#[derive(Debug, Serialize)]
pub struct DatumResponse {
    pub product_id: String,
    pub client_id: String,
    pub metric_id: String,
    #[serde(flatten)]
    pub datum: DatumSummary,
}

/// Create datum response
#[derive(Debug, Serialize)]
pub struct CreatedDatumResponse {
    pub datum_id: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// A body that is not a form carries no fields; validation rejects it later.
fn datum_fields(form: FormPairs) -> DatumFields {
    match form {
        Ok(Form(pairs)) => DatumFields::from_pairs(pairs),
        Err(rejection) => {
            debug!(reason = %rejection, "Request body is not a form, treating it as empty");
            DatumFields::default()
        }
    }
}

// ===== Handlers =====

/// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /data/:product_id/:client_id/:metric_id - List data of a metric
pub async fn list_data(
    State(registry): State<AppState>,
    Path(path): Path<CollectionPath>,
) -> Result<Json<DataListResponse>, ApiError> {
    let path = MetricPath::from(path);
    info!(metric = %path, "REST List data request");

    let result = registry
        .list_data()
        .execute(ListDataQuery::new(path))
        .await?;

    debug!(count = result.data.len(), "Data listed");

    Ok(Json(DataListResponse {
        product_id: result.path.product_id,
        client_id: result.path.client_id,
        metric_id: result.path.metric_id,
        data: result.data.iter().map(DatumSummary::from).collect(),
    }))
}

/// POST /data/:product_id/:client_id/:metric_id - Create a datum
pub async fn create_datum(
    State(registry): State<AppState>,
    Path(path): Path<CollectionPath>,
    form: FormPairs,
) -> Result<Json<CreatedDatumResponse>, ApiError> {
    let path = MetricPath::from(path);
    info!(metric = %path, "REST Create datum request");

    let command = CreateDatumCommand::new(path, datum_fields(form));
    let result = registry.create_datum().execute(command).await?;

    Ok(Json(CreatedDatumResponse {
        datum_id: result.datum_id.value(),
    }))
}

/// POST /data/:product_id/:client_id/:metric_id/:datum_id - Always rejected,
/// ids are assigned by the server
pub async fn create_datum_with_id(
    State(registry): State<AppState>,
    Path(path): Path<ItemPath>,
    form: FormPairs,
) -> Result<Json<CreatedDatumResponse>, ApiError> {
    let (path, datum_id) = path.into_parts();
    info!(metric = %path, datum_id = %datum_id, "REST Create datum request with id");

    let command = CreateDatumCommand {
        path,
        datum_id: Some(datum_id),
        fields: datum_fields(form),
    };
    let result = registry.create_datum().execute(command).await?;

    Ok(Json(CreatedDatumResponse {
        datum_id: result.datum_id.value(),
    }))
}

/// GET /data/:product_id/:client_id/:metric_id/:datum_id - Get a datum
pub async fn get_datum(
    State(registry): State<AppState>,
    Path(path): Path<ItemPath>,
) -> Result<Json<DatumResponse>, ApiError> {
    let (path, datum_id) = path.into_parts();
    info!(metric = %path, datum_id = %datum_id, "REST Get datum request");

    let result = registry
        .get_datum()
        .execute(GetDatumQuery::new(path, datum_id))
        .await?;

    Ok(Json(DatumResponse {
        datum: DatumSummary::from(&result.datum),
        product_id: result.path.product_id,
        client_id: result.path.client_id,
        metric_id: result.path.metric_id,
    }))
}

/// PUT /data/:product_id/:client_id/:metric_id/:datum_id - Replace a datum
pub async fn update_datum(
    State(registry): State<AppState>,
    Path(path): Path<ItemPath>,
    form: FormPairs,
) -> Result<StatusCode, ApiError> {
    let (path, datum_id) = path.into_parts();
    info!(metric = %path, datum_id = %datum_id, "REST Update datum request");

    let command = UpdateDatumCommand::new(path, datum_id, datum_fields(form));
    registry.update_datum().execute(command).await?;

    Ok(StatusCode::OK)
}

/// PUT /data/:product_id/:client_id/:metric_id - Always rejected, no datum id
pub async fn update_datum_without_id(
    State(registry): State<AppState>,
    Path(path): Path<CollectionPath>,
    form: FormPairs,
) -> Result<StatusCode, ApiError> {
    let path = MetricPath::from(path);
    info!(metric = %path, "REST Update datum request without id");

    let command = UpdateDatumCommand {
        path,
        datum_id: None,
        fields: datum_fields(form),
    };
    registry.update_datum().execute(command).await?;

    Ok(StatusCode::OK)
}

/// DELETE /data/:product_id/:client_id/:metric_id/:datum_id - Delete a datum
pub async fn delete_datum(
    State(registry): State<AppState>,
    Path(path): Path<ItemPath>,
) -> Result<StatusCode, ApiError> {
    let (path, datum_id) = path.into_parts();
    info!(metric = %path, datum_id = %datum_id, "REST Delete datum request");

    registry
        .delete_datum()
        .execute(DeleteDatumCommand::new(path, datum_id))
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /data/:product_id/:client_id/:metric_id - Always rejected, no datum id
pub async fn delete_datum_without_id(
    State(registry): State<AppState>,
    Path(path): Path<CollectionPath>,
) -> Result<StatusCode, ApiError> {
    let path = MetricPath::from(path);
    info!(metric = %path, "REST Delete datum request without id");

    let command = DeleteDatumCommand {
        path,
        datum_id: None,
    };
    registry.delete_datum().execute(command).await?;

    Ok(StatusCode::OK)
}
