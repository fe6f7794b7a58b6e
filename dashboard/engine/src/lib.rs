// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Metrics Dashboard Engine
//!
//! Stores measurement data in a strictly nested hierarchy:
//! Product → Client → Metric → Datum.
//!
//! - Products, clients and metrics are registered up front (seed file) and only
//!   resolved as ancestors afterwards
//! - Data are created, read, updated and deleted through a REST API keyed by
//!   `/data/{product_id}/{client_id}/{metric_id}[/{datum_id}]`
//! - Every operation resolves the ancestor chain in order and fails fast on the
//!   first missing level

pub mod constants;

// Core architecture modules
pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
