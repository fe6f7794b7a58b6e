// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! UpdateDatum Command

use crate::domain::{DatumFields, DatumId, MetricPath};

/// Command to replace the content of an existing datum
#[derive(Debug, Clone)]
pub struct UpdateDatumCommand {
    pub path: MetricPath,
    pub datum_id: Option<String>,
    pub fields: DatumFields,
}

impl UpdateDatumCommand {
    pub fn new(path: MetricPath, datum_id: impl Into<String>, fields: DatumFields) -> Self {
        Self {
            path,
            datum_id: Some(datum_id.into()),
            fields,
        }
    }
}

/// Response from updating a datum
#[derive(Debug, Clone)]
pub struct UpdateDatumResponse {
    pub datum_id: DatumId,
}
