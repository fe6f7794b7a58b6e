// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Mock repository implementation for testing
//! Simple in-memory implementation of every port that also counts ancestor lookups

use crate::domain::{
    Client, ClientKey, Datum, DatumId, DomainError, Metric, MetricPath, NewDatum, Product,
};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::{ClientRepository, DatumRepository, MetricRepository, ProductRepository};

#[derive(Default)]
struct Storage {
    products: HashSet<String>,
    clients: HashSet<ClientKey>,
    metrics: HashSet<MetricPath>,
    data: BTreeMap<(MetricPath, DatumId), Datum>,
    last_id: u64,
}

/// In-memory mock repository for testing
#[derive(Clone, Default)]
pub struct MockRepository {
    storage: Arc<Mutex<Storage>>,
    ancestor_lookups: Arc<AtomicUsize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with the full chain of `path` registered
    pub fn with_metric(path: &MetricPath) -> Self {
        let repo = Self::new();
        repo.add_metric(path);
        repo
    }

    /// Register a product, its client and the metric in one go
    pub fn add_metric(&self, path: &MetricPath) {
        let mut storage = self.storage.lock().unwrap();
        storage.products.insert(path.product_id.clone());
        storage.clients.insert(path.client_key());
        storage.metrics.insert(path.clone());
    }

    /// Number of product / client / metric lookups performed so far
    pub fn ancestor_lookups(&self) -> usize {
        self.ancestor_lookups.load(Ordering::SeqCst)
    }

    /// Number of data stored across all metrics
    pub fn data_len(&self) -> usize {
        self.storage.lock().unwrap().data.len()
    }
}

#[async_trait]
impl ProductRepository for MockRepository {
    async fn find_product(&self, product_id: &str) -> Result<Option<Product>, DomainError> {
        self.ancestor_lookups.fetch_add(1, Ordering::SeqCst);
        let storage = self.storage.lock().unwrap();
        Ok(storage
            .products
            .contains(product_id)
            .then(|| Product::new(product_id)))
    }
}

#[async_trait]
impl ClientRepository for MockRepository {
    async fn find_client(
        &self,
        product: &Product,
        client_id: &str,
    ) -> Result<Option<Client>, DomainError> {
        self.ancestor_lookups.fetch_add(1, Ordering::SeqCst);
        let storage = self.storage.lock().unwrap();
        let key = ClientKey::new(product.id(), client_id);
        Ok(storage
            .clients
            .contains(&key)
            .then(|| Client::new(product, client_id)))
    }
}

#[async_trait]
impl MetricRepository for MockRepository {
    async fn find_metric(
        &self,
        client: &Client,
        metric_id: &str,
    ) -> Result<Option<Metric>, DomainError> {
        self.ancestor_lookups.fetch_add(1, Ordering::SeqCst);
        let storage = self.storage.lock().unwrap();
        let path = MetricPath::new(client.product_id(), client.id(), metric_id);
        Ok(storage
            .metrics
            .contains(&path)
            .then(|| Metric::new(client, metric_id)))
    }
}

#[async_trait]
impl DatumRepository for MockRepository {
    async fn insert(&self, metric: &Metric, datum: NewDatum) -> Result<Datum, DomainError> {
        let mut storage = self.storage.lock().unwrap();
        storage.last_id += 1;
        let id = DatumId::new(storage.last_id);
        let datum = datum.into_datum(id, metric.path().clone());
        storage
            .data
            .insert((metric.path().clone(), id), datum.clone());
        Ok(datum)
    }

    async fn find_by_id(&self, metric: &Metric, id: DatumId) -> Result<Option<Datum>, DomainError> {
        let storage = self.storage.lock().unwrap();
        Ok(storage.data.get(&(metric.path().clone(), id)).cloned())
    }

    async fn find_all(&self, metric: &Metric) -> Result<Vec<Datum>, DomainError> {
        let storage = self.storage.lock().unwrap();
        Ok(storage
            .data
            .values()
            .filter(|d| d.metric() == metric.path())
            .cloned()
            .collect())
    }

    async fn save(&self, datum: Datum) -> Result<(), DomainError> {
        let mut storage = self.storage.lock().unwrap();
        storage
            .data
            .insert((datum.metric().clone(), datum.id()), datum);
        Ok(())
    }

    async fn delete(&self, metric: &Metric, id: DatumId) -> Result<(), DomainError> {
        let mut storage = self.storage.lock().unwrap();
        storage.data.remove(&(metric.path().clone(), id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DatumFields, DatumPayload};

    fn new_datum() -> NewDatum {
        let payload = DatumPayload::validate(DatumFields::new("1.0", "gcc", ["1"])).unwrap();
        NewDatum::new(payload)
    }

    #[tokio::test]
    async fn test_lookups_are_counted() {
        let path = MetricPath::new("chrome", "win32", "size");
        let repo = MockRepository::with_metric(&path);

        let product = repo.find_product("chrome").await.unwrap().unwrap();
        let client = repo.find_client(&product, "win32").await.unwrap().unwrap();
        let metric = repo.find_metric(&client, "size").await.unwrap();

        assert!(metric.is_some());
        assert_eq!(repo.ancestor_lookups(), 3);
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let path = MetricPath::new("chrome", "win32", "size");
        let repo = MockRepository::with_metric(&path);
        let product = Product::new("chrome");
        let metric = Metric::new(&Client::new(&product, "win32"), "size");

        let first = repo.insert(&metric, new_datum()).await.unwrap();
        let second = repo.insert(&metric, new_datum()).await.unwrap();

        assert!(first.id() < second.id());
        assert_eq!(repo.data_len(), 2);

        repo.delete(&metric, first.id()).await.unwrap();
        assert_eq!(repo.find_all(&metric).await.unwrap().len(), 1);
    }
}
