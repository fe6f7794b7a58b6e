// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! ListData use case
//! Lists every datum recorded under a metric

use crate::domain::ports::DatumRepository;
use crate::domain::{AncestorResolutionService, DomainError, ListDataQuery, ListDataResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
pub trait ListData: Send + Sync {
    async fn execute(&self, query: ListDataQuery) -> Result<ListDataResponse, DomainError>;
}

pub struct ListDataUseCase {
    ancestors: Arc<AncestorResolutionService>,
    repository: Arc<dyn DatumRepository>,
}

impl ListDataUseCase {
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
impl ListData for ListDataUseCase {
    async fn execute(&self, query: ListDataQuery) -> Result<ListDataResponse, DomainError> {
        let resolved = self.ancestors.resolve(&query.path).await?;
        let data = self.repository.find_all(&resolved.metric).await?;

        debug!(metric = %query.path, count = data.len(), "Listed data");

        Ok(ListDataResponse {
            path: query.path,
            data,
        })
    }
}
