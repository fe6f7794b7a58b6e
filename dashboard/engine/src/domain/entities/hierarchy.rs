// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Ancestor entities: Product owns Clients, Client owns Metrics
//!
//! A child can only be built from its resolved parent, so holding a `Metric`
//! proves the whole chain above it was resolved.

use crate::domain::{ClientKey, MetricPath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: String,
}

impl Product {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    key: ClientKey,
}

impl Client {
    pub fn new(product: &Product, id: impl Into<String>) -> Self {
        Self {
            key: ClientKey::new(product.id(), id),
        }
    }

    pub fn id(&self) -> &str {
        &self.key.client_id
    }

    pub fn product_id(&self) -> &str {
        &self.key.product_id
    }

    pub fn key(&self) -> &ClientKey {
        &self.key
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    path: MetricPath,
}

impl Metric {
    pub fn new(client: &Client, id: impl Into<String>) -> Self {
        Self {
            path: MetricPath::new(client.product_id(), client.id(), id),
        }
    }

    pub fn id(&self) -> &str {
        &self.path.metric_id
    }

    pub fn path(&self) -> &MetricPath {
        &self.path
    }
}
