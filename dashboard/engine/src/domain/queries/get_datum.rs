// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! GetDatum Query

use crate::domain::{Datum, MetricPath};

/// Query for a single datum
#[derive(Debug, Clone)]
pub struct GetDatumQuery {
    pub path: MetricPath,
    /// Raw id segment, parsed by the use case
    pub datum_id: String,
}

impl GetDatumQuery {
    pub fn new(path: MetricPath, datum_id: impl Into<String>) -> Self {
        Self {
            path,
            datum_id: datum_id.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetDatumResponse {
    pub path: MetricPath,
    pub datum: Datum,
}
