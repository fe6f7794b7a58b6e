// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Lookup ports for the ancestor hierarchy
//! These are read-only: products, clients and metrics are never written here

use crate::domain::{Client, DomainError, Metric, Product};
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by id
    async fn find_product(&self, product_id: &str) -> Result<Option<Product>, DomainError>;
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Find a client by id under an already resolved product
    async fn find_client(
        &self,
        product: &Product,
        client_id: &str,
    ) -> Result<Option<Client>, DomainError>;
}

#[async_trait]
pub trait MetricRepository: Send + Sync {
    /// Find a metric by id under an already resolved client
    async fn find_metric(
        &self,
        client: &Client,
        metric_id: &str,
    ) -> Result<Option<Metric>, DomainError>;
}
