// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! CreateDatum Command

use crate::domain::{DatumFields, DatumId, MetricPath};

/// Command to create a datum under a metric
#[derive(Debug, Clone)]
pub struct CreateDatumCommand {
    pub path: MetricPath,
    /// Datum id segment of the request, if any. Creation rejects it.
    pub datum_id: Option<String>,
    pub fields: DatumFields,
}

impl CreateDatumCommand {
    pub fn new(path: MetricPath, fields: DatumFields) -> Self {
        Self {
            path,
            datum_id: None,
            fields,
        }
    }
}

/// Response from creating a datum
#[derive(Debug, Clone)]
pub struct CreateDatumResponse {
    pub datum_id: DatumId,
}
