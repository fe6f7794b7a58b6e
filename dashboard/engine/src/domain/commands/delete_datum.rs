// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! DeleteDatum Command

use crate::domain::{DatumId, MetricPath};

/// Command to delete a datum
#[derive(Debug, Clone)]
pub struct DeleteDatumCommand {
    pub path: MetricPath,
    pub datum_id: Option<String>,
}

impl DeleteDatumCommand {
    pub fn new(path: MetricPath, datum_id: impl Into<String>) -> Self {
        Self {
            path,
            datum_id: Some(datum_id.into()),
        }
    }
}

/// Response from deleting a datum
#[derive(Debug, Clone)]
pub struct DeleteDatumResponse {
    pub datum_id: DatumId,
}
