// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! REST API router configuration

use super::handlers::{
    AppState, create_datum, create_datum_with_id, delete_datum, delete_datum_without_id, get_datum,
    health, list_data, update_datum, update_datum_without_id,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build the REST API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Data of a metric
        .route(
            "/data/:product_id/:client_id/:metric_id",
            get(list_data)
                .post(create_datum)
                .put(update_datum_without_id)
                .delete(delete_datum_without_id),
        )
        // A single datum
        .route(
            "/data/:product_id/:client_id/:metric_id/:datum_id",
            get(get_datum)
                .put(update_datum)
                .delete(delete_datum)
                .post(create_datum_with_id),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
