// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! DeleteDatum use case
//! Handles permanent removal of a datum

use crate::domain::ports::DatumRepository;
use crate::domain::{
    AncestorResolutionService, DatumLookup, DeleteDatumCommand, DeleteDatumResponse, DomainError,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Use case for deleting a datum
#[async_trait]
pub trait DeleteDatum: Send + Sync {
    async fn execute(
        &self,
        command: DeleteDatumCommand,
    ) -> Result<DeleteDatumResponse, DomainError>;
}

/// Implementation of DeleteDatum use case
pub struct DeleteDatumUseCase {
    ancestors: Arc<AncestorResolutionService>,
    repository: Arc<dyn DatumRepository>,
}

impl DeleteDatumUseCase {
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
impl DeleteDatum for DeleteDatumUseCase {
    async fn execute(
        &self,
        command: DeleteDatumCommand,
    ) -> Result<DeleteDatumResponse, DomainError> {
        // 1. Parse the id
        let lookup = DatumLookup::parse_required(command.datum_id.as_deref())?;

        // 2. Resolve ancestors
        let resolved = self.ancestors.resolve(&command.path).await?;

        // 3. The datum must exist under this metric
        let datum = self
            .repository
            .get_requested(&resolved.metric, &lookup)
            .await?;
        let datum_id = datum.id();

        // 4. Delete from repository
        self.repository.delete(&resolved.metric, datum_id).await?;

        info!(metric = %command.path, datum_id = %datum_id, "Datum deleted");

        Ok(DeleteDatumResponse { datum_id })
    }
}
