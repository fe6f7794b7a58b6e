// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! In-memory store for the metrics hierarchy
//!
//! Every record is keyed by its full ancestor path, so a client or metric id
//! only means something together with the ids above it. Data live in one
//! ordered map keyed by `(MetricPath, DatumId)`; listing a metric is a range
//! scan over that key space.

use crate::constants::FIRST_DATUM_ID;
use crate::domain::ports::{
    ClientRepository, DatumRepository, MetricRepository, ProductRepository,
};
use crate::domain::{
    Client, ClientKey, Datum, DatumId, DomainError, Metric, MetricPath, NewDatum, Product,
};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

struct StoreState {
    products: BTreeSet<String>,
    clients: BTreeSet<ClientKey>,
    metrics: BTreeSet<MetricPath>,
    data: BTreeMap<(MetricPath, DatumId), Datum>,
    next_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            products: BTreeSet::new(),
            clients: BTreeSet::new(),
            metrics: BTreeSet::new(),
            data: BTreeMap::new(),
            next_id: FIRST_DATUM_ID,
        }
    }
}

/// Thread-safe in-memory store implementing every repository port
///
/// Datum ids come from a single store-wide counter and are never reused,
/// even after the datum holding one is deleted.
#[derive(Clone, Default)]
pub struct InMemoryMetricsStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryMetricsStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, DomainError> {
        self.state
            .read()
            .map_err(|e| DomainError::Storage(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, DomainError> {
        self.state
            .write()
            .map_err(|e| DomainError::Storage(e.to_string()))
    }

    /// Register a product. Registering an existing product is a no-op.
    pub fn register_product(&self, product_id: &str) -> Result<Product, DomainError> {
        let mut state = self.write()?;
        if state.products.insert(product_id.to_string()) {
            debug!(product_id = %product_id, "Product registered");
        }
        Ok(Product::new(product_id))
    }

    /// Register a client under an existing product
    pub fn register_client(
        &self,
        product_id: &str,
        client_id: &str,
    ) -> Result<Client, DomainError> {
        let mut state = self.write()?;
        if !state.products.contains(product_id) {
            return Err(DomainError::Storage(format!(
                "cannot register client '{client_id}': product '{product_id}' is not registered"
            )));
        }

        let product = Product::new(product_id);
        let client = Client::new(&product, client_id);
        if state.clients.insert(client.key().clone()) {
            debug!(client = %client.key(), "Client registered");
        }
        Ok(client)
    }

    /// Register a metric under an existing client
    pub fn register_metric(&self, path: &MetricPath) -> Result<Metric, DomainError> {
        let mut state = self.write()?;
        let key = path.client_key();
        if !state.clients.contains(&key) {
            return Err(DomainError::Storage(format!(
                "cannot register metric '{}': client '{key}' is not registered",
                path.metric_id
            )));
        }

        let client = Client::new(&Product::new(&path.product_id), &path.client_id);
        if state.metrics.insert(path.clone()) {
            debug!(metric = %path, "Metric registered");
        }
        Ok(Metric::new(&client, &path.metric_id))
    }

    /// Total number of data across all metrics
    pub fn data_count(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.data.len())
    }
}

#[async_trait]
impl ProductRepository for InMemoryMetricsStore {
    async fn find_product(&self, product_id: &str) -> Result<Option<Product>, DomainError> {
        let state = self.read()?;
        Ok(state
            .products
            .contains(product_id)
            .then(|| Product::new(product_id)))
    }
}

#[async_trait]
impl ClientRepository for InMemoryMetricsStore {
    async fn find_client(
        &self,
        product: &Product,
        client_id: &str,
    ) -> Result<Option<Client>, DomainError> {
        let state = self.read()?;
        let client = Client::new(product, client_id);
        Ok(state.clients.contains(client.key()).then_some(client))
    }
}

#[async_trait]
impl MetricRepository for InMemoryMetricsStore {
    async fn find_metric(
        &self,
        client: &Client,
        metric_id: &str,
    ) -> Result<Option<Metric>, DomainError> {
        let state = self.read()?;
        let metric = Metric::new(client, metric_id);
        Ok(state.metrics.contains(metric.path()).then_some(metric))
    }
}

#[async_trait]
impl DatumRepository for InMemoryMetricsStore {
    async fn insert(&self, metric: &Metric, datum: NewDatum) -> Result<Datum, DomainError> {
        let mut state = self.write()?;

        let id = DatumId::new(state.next_id);
        state.next_id = state
            .next_id
            .checked_add(1)
            .ok_or_else(|| DomainError::Storage("datum id space exhausted".to_string()))?;

        let datum = datum.into_datum(id, metric.path().clone());
        state
            .data
            .insert((metric.path().clone(), id), datum.clone());

        info!(
            metric = %metric.path(),
            datum_id = %id,
            total_data = state.data.len(),
            "Datum stored"
        );

        Ok(datum)
    }

    async fn find_by_id(&self, metric: &Metric, id: DatumId) -> Result<Option<Datum>, DomainError> {
        let state = self.read()?;
        Ok(state.data.get(&(metric.path().clone(), id)).cloned())
    }

    async fn find_all(&self, metric: &Metric) -> Result<Vec<Datum>, DomainError> {
        let state = self.read()?;
        let path = metric.path();
        let range = (path.clone(), DatumId::MIN)..=(path.clone(), DatumId::MAX);
        Ok(state.data.range(range).map(|(_, d)| d.clone()).collect())
    }

    async fn save(&self, datum: Datum) -> Result<(), DomainError> {
        debug!(metric = %datum.metric(), datum_id = %datum.id(), "Saving datum");

        let mut state = self.write()?;
        state
            .data
            .insert((datum.metric().clone(), datum.id()), datum);
        Ok(())
    }

    async fn delete(&self, metric: &Metric, id: DatumId) -> Result<(), DomainError> {
        let mut state = self.write()?;
        state.data.remove(&(metric.path().clone(), id));

        info!(
            metric = %metric.path(),
            datum_id = %id,
            remaining_data = state.data.len(),
            "Datum deleted"
        );

        Ok(())
    }
}
