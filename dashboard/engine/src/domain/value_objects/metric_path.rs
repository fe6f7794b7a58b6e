// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Composite keys for the scoped hierarchy
//!
//! Client and metric ids are only unique under their parent, so entities are
//! always addressed by the full chain of ids above them.

use std::fmt;

/// Composite key of a client: (product_id, client_id)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientKey {
    pub product_id: String,
    pub client_id: String,
}

impl ClientKey {
    pub fn new(product_id: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            client_id: client_id.into(),
        }
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.product_id, self.client_id)
    }
}

/// Composite key of a metric: (product_id, client_id, metric_id)
///
/// This is also the parent scope of every datum.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MetricPath {
    pub product_id: String,
    pub client_id: String,
    pub metric_id: String,
}

impl MetricPath {
    pub fn new(
        product_id: impl Into<String>,
        client_id: impl Into<String>,
        metric_id: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            client_id: client_id.into(),
            metric_id: metric_id.into(),
        }
    }

    /// Key of the client that owns this metric
    pub fn client_key(&self) -> ClientKey {
        ClientKey::new(self.product_id.clone(), self.client_id.clone())
    }
}

impl fmt::Display for MetricPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.product_id, self.client_id, self.metric_id
        )
    }
}
