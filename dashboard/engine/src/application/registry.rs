// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Use Case Registry
//! Central composition root for all use cases (Dependency Injection container)

use crate::domain::AncestorResolutionService;
use crate::domain::ports::{
    ClientRepository, DatumRepository, MetricRepository, ProductRepository,
};
use crate::domain::use_cases::{
    CreateDatum, CreateDatumUseCase, DeleteDatum, DeleteDatumUseCase, GetDatum, GetDatumUseCase,
    ListData, ListDataUseCase, UpdateDatum, UpdateDatumUseCase,
};
use std::sync::Arc;

/// Registry for all application use cases
/// This is the composition root where dependencies are wired together
pub struct UseCaseRegistry {
    // Command use cases (modify state)
    create_datum: Arc<dyn CreateDatum>,
    update_datum: Arc<dyn UpdateDatum>,
    delete_datum: Arc<dyn DeleteDatum>,

    // Query use cases (read state)
    list_data: Arc<dyn ListData>,
    get_datum: Arc<dyn GetDatum>,
}

impl UseCaseRegistry {
    /// Create a new registry backed by a single store serving every port
    ///
    /// # Arguments
    ///
    /// * `store` - Storage adapter for products, clients, metrics and data
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: ProductRepository + ClientRepository + MetricRepository + DatumRepository + 'static,
    {
        Self::new_internal(store.clone(), store.clone(), store.clone(), store)
    }

    /// Internal constructor that wires up all use cases
    fn new_internal(
        products: Arc<dyn ProductRepository>,
        clients: Arc<dyn ClientRepository>,
        metrics: Arc<dyn MetricRepository>,
        data: Arc<dyn DatumRepository>,
    ) -> Self {
        // Wire up domain services
        let ancestors = Arc::new(AncestorResolutionService::new(products, clients, metrics));

        // Wire up command use cases
        let create_datum = Arc::new(CreateDatumUseCase::new(ancestors.clone(), data.clone()));
        let update_datum = Arc::new(UpdateDatumUseCase::new(ancestors.clone(), data.clone()));
        let delete_datum = Arc::new(DeleteDatumUseCase::new(ancestors.clone(), data.clone()));

        // Wire up query use cases
        let list_data = Arc::new(ListDataUseCase::new(ancestors.clone(), data.clone()));
        let get_datum = Arc::new(GetDatumUseCase::new(ancestors, data));

        Self {
            create_datum,
            update_datum,
            delete_datum,
            list_data,
            get_datum,
        }
    }

    // ===== Command Use Cases =====

    /// Get the CreateDatum use case
    pub fn create_datum(&self) -> Arc<dyn CreateDatum> {
        self.create_datum.clone()
    }

    /// Get the UpdateDatum use case
    pub fn update_datum(&self) -> Arc<dyn UpdateDatum> {
        self.update_datum.clone()
    }

    /// Get the DeleteDatum use case
    pub fn delete_datum(&self) -> Arc<dyn DeleteDatum> {
        self.delete_datum.clone()
    }

    // ===== Query Use Cases =====

    /// Get the ListData use case
    pub fn list_data(&self) -> Arc<dyn ListData> {
        self.list_data.clone()
    }

    /// Get the GetDatum use case
    pub fn get_datum(&self) -> Arc<dyn GetDatum> {
        self.get_datum.clone()
    }
}
