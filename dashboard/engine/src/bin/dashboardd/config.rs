// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Daemon configuration from environment variables
//!
//! All configuration is read from environment variables with sensible defaults.

use dashboard_engine::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_REST_PORT, DEFAULT_REST_SOCKET,
};
use std::env;
use std::net::{IpAddr, SocketAddr};

/// Daemon configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// Transport mode: "tcp" or "unix"
    pub transport_mode: TransportMode,

    /// Address to bind (TCP mode only)
    pub bind_addr: String,

    /// REST port (TCP mode only)
    pub rest_port: u16,

    /// REST Unix socket path (Unix socket mode only)
    pub rest_socket: String,

    /// Hierarchy seed file, registered at startup
    pub seed_file: Option<String>,

    /// Log level
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransportMode {
    #[default]
    Tcp,
    Unix,
}

impl DaemonConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            transport_mode: Self::parse_transport_mode(),
            bind_addr: env::var("DASHBOARD_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            rest_port: Self::parse_u16("DASHBOARD_REST_PORT").unwrap_or(DEFAULT_REST_PORT),
            rest_socket: env::var("DASHBOARD_REST_SOCKET")
                .unwrap_or_else(|_| DEFAULT_REST_SOCKET.to_string()),
            seed_file: env::var("DASHBOARD_SEED_FILE")
                .ok()
                .filter(|s| !s.is_empty()),
            log_level: Self::parse_log_level(),
        }
    }

    fn parse_transport_mode() -> TransportMode {
        env::var("DASHBOARD_TRANSPORT_MODE")
            .ok()
            .and_then(|s| match s.to_lowercase().as_str() {
                "tcp" => Some(TransportMode::Tcp),
                "unix" => Some(TransportMode::Unix),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn parse_u16(var_name: &str) -> Option<u16> {
        env::var(var_name).ok().and_then(|s| s.parse().ok())
    }

    fn parse_log_level() -> String {
        // Priority: DASHBOARD_LOG_LEVEL > RUST_LOG > default
        env::var("DASHBOARD_LOG_LEVEL")
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
    }

    /// TCP address to listen on
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let ip: IpAddr = self
            .bind_addr
            .parse()
            .map_err(|e| format!("Invalid DASHBOARD_BIND_ADDR '{}': {e}", self.bind_addr))?;
        Ok(SocketAddr::new(ip, self.rest_port))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        match self.transport_mode {
            TransportMode::Tcp => self.socket_addr().map(|_| ()),
            TransportMode::Unix if cfg!(unix) => Ok(()),
            TransportMode::Unix => {
                Err("DASHBOARD_TRANSPORT_MODE=unix is only supported on Unix".to_string())
            }
        }
    }
}
