// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! UpdateDatum use case
//! Replaces the content of an existing datum, keeping its id and timestamp

use crate::domain::ports::DatumRepository;
use crate::domain::{
    AncestorResolutionService, DatumLookup, DatumPayload, DomainError, UpdateDatumCommand,
    UpdateDatumResponse,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Use case for updating a datum
#[async_trait]
pub trait UpdateDatum: Send + Sync {
    async fn execute(
        &self,
        command: UpdateDatumCommand,
    ) -> Result<UpdateDatumResponse, DomainError>;
}

/// Implementation of UpdateDatum use case
pub struct UpdateDatumUseCase {
    ancestors: Arc<AncestorResolutionService>,
    repository: Arc<dyn DatumRepository>,
}

impl UpdateDatumUseCase {
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
impl UpdateDatum for UpdateDatumUseCase {
    async fn execute(
        &self,
        command: UpdateDatumCommand,
    ) -> Result<UpdateDatumResponse, DomainError> {
        // 1. Parse the id
        let lookup = DatumLookup::parse_required(command.datum_id.as_deref())?;

        // 2. Validate the body
        let payload = DatumPayload::validate(command.fields)?;

        // 3. Resolve ancestors
        let resolved = self.ancestors.resolve(&command.path).await?;

        // 4. Load, overwrite and save
        let mut datum = self
            .repository
            .get_requested(&resolved.metric, &lookup)
            .await?;
        let datum_id = datum.id();
        datum.apply(payload);
        self.repository.save(datum).await?;

        info!(metric = %command.path, datum_id = %datum_id, "Datum updated");

        Ok(UpdateDatumResponse { datum_id })
    }
}
