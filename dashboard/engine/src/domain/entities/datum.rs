// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Datum entity
//! A single recorded measurement under a metric

use crate::constants::TIMESTAMP_FORMAT;
use crate::domain::{DatumId, DatumPayload, MetricPath};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    // Identity
    id: DatumId,
    metric: MetricPath,

    // Content
    product_version: String,
    toolchain_version: String,
    values: Vec<f64>,

    // Set once at creation
    timestamp: DateTime<Utc>,
}

impl Datum {
    pub fn id(&self) -> DatumId {
        self.id
    }

    pub fn metric(&self) -> &MetricPath {
        &self.metric
    }

    pub fn product_version(&self) -> &str {
        &self.product_version
    }

    pub fn toolchain_version(&self) -> &str {
        &self.toolchain_version
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Timestamp in its textual form, e.g. `2011-05-04 17:03:12.123456`
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Replace the content of the datum. Identity and timestamp are kept.
    pub fn apply(&mut self, payload: DatumPayload) {
        let (product_version, toolchain_version, values) = payload.into_parts();
        self.product_version = product_version;
        self.toolchain_version = toolchain_version;
        self.values = values;
    }
}

/// A datum that has not been given an identity by the store yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewDatum {
    payload: DatumPayload,
    timestamp: DateTime<Utc>,
}

impl NewDatum {
    /// Stamp the payload with the current time
    pub fn new(payload: DatumPayload) -> Self {
        Self::with_timestamp(payload, Utc::now())
    }

    pub fn with_timestamp(payload: DatumPayload, timestamp: DateTime<Utc>) -> Self {
        Self { payload, timestamp }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Attach the store-assigned identity
    pub fn into_datum(self, id: DatumId, metric: MetricPath) -> Datum {
        let (product_version, toolchain_version, values) = self.payload.into_parts();
        Datum {
            id,
            metric,
            product_version,
            toolchain_version,
            values,
            timestamp: self.timestamp,
        }
    }
}
