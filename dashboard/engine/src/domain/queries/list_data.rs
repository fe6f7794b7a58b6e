// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! ListData Query

use crate::domain::{Datum, MetricPath};

/// Query for every datum under a metric
#[derive(Debug, Clone)]
pub struct ListDataQuery {
    pub path: MetricPath,
}

impl ListDataQuery {
    pub fn new(path: MetricPath) -> Self {
        Self { path }
    }
}

/// Data under a metric, in insertion order
#[derive(Debug, Clone)]
pub struct ListDataResponse {
    pub path: MetricPath,
    pub data: Vec<Datum>,
}
