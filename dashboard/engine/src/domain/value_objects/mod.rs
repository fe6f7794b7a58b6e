// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

mod datum_id;
mod datum_payload;
mod metric_path;

pub use datum_id::{DatumId, DatumLookup};
pub use datum_payload::{DatumFields, DatumPayload};
pub use metric_path::{ClientKey, MetricPath};
