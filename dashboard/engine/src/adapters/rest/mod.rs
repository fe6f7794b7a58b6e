// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! REST API Driving Adapter
//!
//! Exposes the datum use cases through an HTTP API. Request bodies are
//! form-encoded, responses are JSON.
//!
//! Supports multiple transports:
//! - TCP (all platforms)
//! - Unix sockets (Linux/macOS)

pub mod error;
pub mod handlers;
pub mod router;
pub mod serve;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::build_router;
pub use serve::serve_on_tcp;
#[cfg(unix)]
pub use serve::serve_on_unix_socket;
