// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Repository port for persisting data
//! Every datum is keyed by (metric path, datum id)

use crate::domain::{Datum, DatumId, DatumLookup, DomainError, Metric, NewDatum};
use async_trait::async_trait;

#[async_trait]
pub trait DatumRepository: Send + Sync {
    /// Persist a new datum under `metric`, assigning it a fresh unique id
    async fn insert(&self, metric: &Metric, datum: NewDatum) -> Result<Datum, DomainError>;

    /// Find a datum by id under `metric`
    async fn find_by_id(&self, metric: &Metric, id: DatumId) -> Result<Option<Datum>, DomainError>;

    /// All data under `metric`, in id (insertion) order
    async fn find_all(&self, metric: &Metric) -> Result<Vec<Datum>, DomainError>;

    /// Overwrite a datum (last write wins)
    async fn save(&self, datum: Datum) -> Result<(), DomainError>;

    /// Remove a datum permanently
    async fn delete(&self, metric: &Metric, id: DatumId) -> Result<(), DomainError>;

    /// Find a datum or fail with `DatumNotFound`
    async fn get(&self, metric: &Metric, id: DatumId) -> Result<Datum, DomainError> {
        self.find_by_id(metric, id)
            .await?
            .ok_or_else(|| DomainError::DatumNotFound(id.to_string()))
    }

    /// Find the datum a request names, failing with `DatumNotFound` when the
    /// id is absent or could never have been assigned
    async fn get_requested(
        &self,
        metric: &Metric,
        lookup: &DatumLookup,
    ) -> Result<Datum, DomainError> {
        match lookup.id() {
            Some(id) => self.get(metric, id).await,
            None => Err(lookup.not_found()),
        }
    }
}
