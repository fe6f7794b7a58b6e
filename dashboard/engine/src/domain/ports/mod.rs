// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

pub mod datum_repository;
pub mod hierarchy_repository;
#[cfg(test)]
pub mod mock_repository;

pub use datum_repository::DatumRepository;
pub use hierarchy_repository::{ClientRepository, MetricRepository, ProductRepository};
#[cfg(test)]
pub use mock_repository::MockRepository;
