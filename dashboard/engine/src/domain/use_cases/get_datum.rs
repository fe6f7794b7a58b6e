// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! GetDatum use case

use crate::domain::ports::DatumRepository;
use crate::domain::{
    AncestorResolutionService, DatumLookup, DomainError, GetDatumQuery, GetDatumResponse,
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait GetDatum: Send + Sync {
    async fn execute(&self, query: GetDatumQuery) -> Result<GetDatumResponse, DomainError>;
}

pub struct GetDatumUseCase {
    ancestors: Arc<AncestorResolutionService>,
    repository: Arc<dyn DatumRepository>,
}

impl GetDatumUseCase {
    pub fn new(
        ancestors: Arc<AncestorResolutionService>,
        repository: Arc<dyn DatumRepository>,
    ) -> Self {
        Self {
            ancestors,
            repository,
        }
    }
}

#[async_trait]
impl GetDatum for GetDatumUseCase {
    async fn execute(&self, query: GetDatumQuery) -> Result<GetDatumResponse, DomainError> {
        // 1. Parse the id before touching the store
        let lookup: DatumLookup = query.datum_id.parse()?;

        // 2. Resolve ancestors
        let resolved = self.ancestors.resolve(&query.path).await?;

        // 3. Load the datum
        let datum = self
            .repository
            .get_requested(&resolved.metric, &lookup)
            .await?;

        Ok(GetDatumResponse {
            path: query.path,
            datum,
        })
    }
}
