// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Datum request fields and their validated form

use crate::constants::fields;
use crate::domain::DomainError;

/// Datum fields exactly as they arrived in a request body, not yet validated
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatumFields {
    pub product_version: Option<String>,
    pub toolchain_version: Option<String>,
    pub values: Vec<String>,
}

impl DatumFields {
    /// Build from decoded `key=value` pairs.
    ///
    /// `values` may repeat; for the version fields the first occurrence wins.
    /// Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut result = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                fields::PRODUCT_VERSION => {
                    if result.product_version.is_none() {
                        result.product_version = Some(value.into());
                    }
                }
                fields::TOOLCHAIN_VERSION => {
                    if result.toolchain_version.is_none() {
                        result.toolchain_version = Some(value.into());
                    }
                }
                fields::VALUES => result.values.push(value.into()),
                _ => {}
            }
        }
        result
    }

    pub fn new(
        product_version: impl Into<String>,
        toolchain_version: impl Into<String>,
        values: impl IntoIterator<Item = impl ToString>,
    ) -> Self {
        Self {
            product_version: Some(product_version.into()),
            toolchain_version: Some(toolchain_version.into()),
            values: values.into_iter().map(|v| v.to_string()).collect(),
        }
    }
}

/// Validated datum content, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct DatumPayload {
    product_version: String,
    toolchain_version: String,
    values: Vec<f64>,
}

impl DatumPayload {
    /// Validate raw fields, failing on the first violation in this order:
    /// product_version, toolchain_version, presence of values, each value.
    pub fn validate(fields: DatumFields) -> Result<Self, DomainError> {
        let product_version = required_field(fields.product_version, fields::PRODUCT_VERSION)?;
        let toolchain_version =
            required_field(fields.toolchain_version, fields::TOOLCHAIN_VERSION)?;

        if fields.values.is_empty() {
            return Err(DomainError::MissingField(fields::VALUES));
        }

        let values = fields
            .values
            .iter()
            .map(|raw| parse_value(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            product_version,
            toolchain_version,
            values,
        })
    }

    pub fn product_version(&self) -> &str {
        &self.product_version
    }

    pub fn toolchain_version(&self) -> &str {
        &self.toolchain_version
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn into_parts(self) -> (String, String, Vec<f64>) {
        (self.product_version, self.toolchain_version, self.values)
    }
}

fn required_field(value: Option<String>, name: &'static str) -> Result<String, DomainError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DomainError::MissingField(name)),
    }
}

fn parse_value(raw: &str) -> Result<f64, DomainError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DomainError::InvalidValue(raw.to_string())),
    }
}
