// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Shared constants for the dashboard engine and daemon

/// Default TCP port for the REST API
pub const DEFAULT_REST_PORT: u16 = 8080;

/// Default bind address for the REST API (TCP mode)
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Default Unix socket path for the REST API (Unix mode)
pub const DEFAULT_REST_SOCKET: &str = "/var/run/dashboard/dashboard-api.sock";

/// Default log level when neither DASHBOARD_LOG_LEVEL nor RUST_LOG is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Permissions applied to the REST Unix socket (owner and group read/write)
pub const REST_SOCKET_MODE: u32 = 0o660;

/// Textual form of datum timestamps, e.g. `2011-05-04 17:03:12.123456`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// First identifier handed out by a fresh datum store
pub const FIRST_DATUM_ID: u64 = 1;

/// Form field names accepted on create / update
pub mod fields {
    pub const PRODUCT_VERSION: &str = "product_version";
    pub const TOOLCHAIN_VERSION: &str = "toolchain_version";
    pub const VALUES: &str = "values";
}
