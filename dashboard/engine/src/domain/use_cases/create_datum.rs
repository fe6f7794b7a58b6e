// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! CreateDatum use case
//! Records a new datum under an existing metric

use crate::domain::ports::DatumRepository;
use crate::domain::{
    AncestorResolutionService, CreateDatumCommand, CreateDatumResponse, DatumPayload,
    DomainError, NewDatum,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Use case for creating a datum
#[async_trait]
pub trait CreateDatum: Send + Sync {
    async fn execute(
        &self,
        command: CreateDatumCommand,
    ) -> Result<CreateDatumResponse, DomainError>;
}

/// Implementation of CreateDatum use case
pub struct CreateDatumUseCase {
    ancestors: Arc<AncestorResolutionService>,
    repository: Arc<dyn DatumRepository>,
}

impl CreateDatumUseCase {
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
impl CreateDatum for CreateDatumUseCase {
    async fn execute(
        &self,
        command: CreateDatumCommand,
    ) -> Result<CreateDatumResponse, DomainError> {
        // 1. Ids are assigned by the store, never by the caller
        if let Some(raw) = command.datum_id {
            return Err(DomainError::UnexpectedDatumId(raw));
        }

        // 2. Validate the body
        let payload = DatumPayload::validate(command.fields)?;

        // 3. Resolve ancestors
        let resolved = self.ancestors.resolve(&command.path).await?;

        // 4. Persist with a fresh id and the current time
        let datum = self
            .repository
            .insert(&resolved.metric, NewDatum::new(payload))
            .await?;

        info!(
            metric = %command.path,
            datum_id = %datum.id(),
            values = datum.values().len(),
            "Datum created"
        );

        Ok(CreateDatumResponse {
            datum_id: datum.id(),
        })
    }
}
