// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Ancestor Resolution Service
//!
//! Resolves `product → client → metric` strictly in order. Client and metric
//! ids are only unique within their parent, so each lookup takes the entity
//! resolved by the previous step and nothing after a missing link is queried.

use crate::domain::ports::{ClientRepository, MetricRepository, ProductRepository};
use crate::domain::{AncestorLevel, Client, DomainError, Metric, MetricPath, Product};
use std::sync::Arc;
use tracing::debug;

/// The fully resolved ancestor chain of a datum
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAncestors {
    pub product: Product,
    pub client: Client,
    pub metric: Metric,
}

pub struct AncestorResolutionService {
    products: Arc<dyn ProductRepository>,
    clients: Arc<dyn ClientRepository>,
    metrics: Arc<dyn MetricRepository>,
}

impl AncestorResolutionService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        clients: Arc<dyn ClientRepository>,
        metrics: Arc<dyn MetricRepository>,
    ) -> Self {
        Self {
            products,
            clients,
            metrics,
        }
    }

    /// Resolve the chain for `path`, failing with `AncestorNotFound` on the
    /// first level that does not exist.
    pub async fn resolve(&self, path: &MetricPath) -> Result<ResolvedAncestors, DomainError> {
        let product = self
            .products
            .find_product(&path.product_id)
            .await?
            .ok_or_else(|| {
                DomainError::ancestor_not_found(AncestorLevel::Product, &path.product_id)
            })?;

        let client = self
            .clients
            .find_client(&product, &path.client_id)
            .await?
            .ok_or_else(|| {
                DomainError::ancestor_not_found(AncestorLevel::Client, &path.client_id)
            })?;

        let metric = self
            .metrics
            .find_metric(&client, &path.metric_id)
            .await?
            .ok_or_else(|| {
                DomainError::ancestor_not_found(AncestorLevel::Metric, &path.metric_id)
            })?;

        debug!(metric = %path, "Ancestors resolved");

        Ok(ResolvedAncestors {
            product,
            client,
            metric,
        })
    }
}
