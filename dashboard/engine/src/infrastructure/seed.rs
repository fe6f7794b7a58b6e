// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Hierarchy seed
//!
//! Products, clients and metrics cannot be created over HTTP, so the daemon
//! registers them at startup from a YAML file:
//!
//! ```yaml
//! products:
//!   chrome:
//!     clients:
//!       win32:
//!         metrics: [startup_time, binary_size]
//! ```

use crate::domain::{DomainError, MetricPath};
use crate::infrastructure::InMemoryMetricsStore;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("could not apply seed: {0}")]
    Apply(#[from] DomainError),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct HierarchySeed {
    #[serde(default)]
    pub products: BTreeMap<String, ProductSeed>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProductSeed {
    #[serde(default)]
    pub clients: BTreeMap<String, ClientSeed>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ClientSeed {
    #[serde(default)]
    pub metrics: Vec<String>,
}

/// Counts of what a seed registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub products: usize,
    pub clients: usize,
    pub metrics: usize,
}

impl HierarchySeed {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Register every product, client and metric of the seed in `store`
    pub fn apply(&self, store: &InMemoryMetricsStore) -> Result<SeedSummary, ConfigError> {
        let mut summary = SeedSummary::default();

        for (product_id, product) in &self.products {
            store.register_product(product_id)?;
            summary.products += 1;

            for (client_id, client) in &product.clients {
                store.register_client(product_id, client_id)?;
                summary.clients += 1;

                for metric_id in &client.metrics {
                    store.register_metric(&MetricPath::new(product_id, client_id, metric_id))?;
                    summary.metrics += 1;
                }
            }
        }

        info!(
            products = summary.products,
            clients = summary.clients,
            metrics = summary.metrics,
            "Hierarchy seeded"
        );

        Ok(summary)
    }
}

/// Load a hierarchy seed from a YAML file
pub fn load_seed_from_path(path: impl AsRef<Path>) -> Result<HierarchySeed, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    HierarchySeed::from_yaml(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
