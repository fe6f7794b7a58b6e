// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! DatumId value object
//! Store-assigned integer identifier, only meaningful under its metric

use crate::domain::DomainError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DatumId(u64);

impl DatumId {
    /// Lowest possible id, used as the lower bound of metric-scoped range scans
    pub const MIN: DatumId = DatumId(u64::MIN);
    /// Highest possible id, used as the upper bound of metric-scoped range scans
    pub const MAX: DatumId = DatumId(u64::MAX);

    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Datum id segment of a request, checked for integer syntax.
///
/// Any integer is a well-formed id, but only those fitting a `DatumId` can
/// name a stored datum. The others (negative, or beyond `u64`) are kept so
/// they can be reported as not found once the ancestors have resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatumLookup {
    raw: String,
    id: Option<DatumId>,
}

impl DatumLookup {
    /// Parse the id segment of a request that requires one.
    ///
    /// `None` means the route carried no datum id at all.
    pub fn parse_required(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            Some(raw) => raw.parse(),
            None => Err(DomainError::MissingDatumId),
        }
    }

    /// The id a stored datum could have, if any
    pub fn id(&self) -> Option<DatumId> {
        self.id
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn not_found(&self) -> DomainError {
        DomainError::DatumNotFound(self.raw.clone())
    }
}

impl FromStr for DatumLookup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidDatumId(s.to_string()));
        }

        let id = if raw.starts_with('-') {
            None
        } else {
            digits.parse::<u64>().ok().map(DatumId)
        };

        Ok(Self {
            raw: raw.to_string(),
            id,
        })
    }
}

impl From<DatumId> for DatumLookup {
    fn from(id: DatumId) -> Self {
        Self {
            raw: id.to_string(),
            id: Some(id),
        }
    }
}

impl fmt::Display for DatumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DatumId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
