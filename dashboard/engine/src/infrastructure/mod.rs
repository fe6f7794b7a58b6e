// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Infrastructure Layer
//!
//! Adapters implementing the ports defined in the domain layer.
//!
//! ## Adapters
//!
//! - `InMemoryMetricsStore`: thread-safe store for the hierarchy and its data
//! - `seed`: YAML description of the product / client / metric hierarchy

pub mod in_memory_store;
pub mod seed;

pub use in_memory_store::InMemoryMetricsStore;
pub use seed::{ConfigError, HierarchySeed, SeedSummary, load_seed_from_path};
