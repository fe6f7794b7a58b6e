// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Domain-level errors
//! Every failure is terminal for the request and maps to exactly one kind

use std::fmt;
use thiserror::Error;

/// Level of the ancestor chain that failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AncestorLevel {
    Product,
    Client,
    Metric,
}

impl fmt::Display for AncestorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Product => "Product",
            Self::Client => "Client",
            Self::Metric => "Metric",
        };
        write!(f, "{}", s)
    }
}

/// Coarse classification used by driving adapters to pick a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input
    BadRequest,
    /// A referenced entity does not exist at the expected scope
    NotFound,
    /// The store itself failed
    Internal,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // Identifier errors
    #[error("Invalid datum id '{0}': expected an integer")]
    InvalidDatumId(String),

    #[error("A datum id is required for this operation")]
    MissingDatumId,

    #[error("Datum id '{0}' cannot be supplied when creating a datum")]
    UnexpectedDatumId(String),

    // Payload errors
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid value '{0}': expected a finite number")]
    InvalidValue(String),

    // Lookup errors
    #[error("{level} '{id}' not found")]
    AncestorNotFound { level: AncestorLevel, id: String },

    #[error("Datum {0} not found")]
    DatumNotFound(String),

    // Infrastructure errors
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDatumId(_)
            | Self::MissingDatumId
            | Self::UnexpectedDatumId(_)
            | Self::MissingField(_)
            | Self::InvalidValue(_) => ErrorKind::BadRequest,
            Self::AncestorNotFound { .. } | Self::DatumNotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn ancestor_not_found(level: AncestorLevel, id: &str) -> Self {
        Self::AncestorNotFound {
            level,
            id: id.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
