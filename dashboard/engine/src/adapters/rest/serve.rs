// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Transports for the REST adapter
//!
//! - TCP on every platform, through `axum::serve`
//! - Unix domain sockets on Unix, one hyper HTTP/1 connection task per client

use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// Serve `app` over TCP until `shutdown` resolves
pub async fn serve_on_tcp<F>(addr: SocketAddr, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "REST API server listening on TCP");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(unix)]
pub use unix::serve_on_unix_socket;

#[cfg(unix)]
mod unix {
    use crate::constants::REST_SOCKET_MODE;
    use axum::Router;
    use hyper::Request;
    use hyper::body::Incoming;
    use hyper::server::conn::http1;
    use hyper::service::service_fn;
    use hyper_util::rt::TokioIo;
    use std::fs::Permissions;
    use std::future::Future;
    use std::io::ErrorKind;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tokio::net::UnixListener;
    use tower::Service;
    use tracing::{debug, error, info, warn};

    fn setup_socket(socket_path: &Path) -> std::io::Result<UnixListener> {
        match std::fs::remove_file(socket_path) {
            Ok(()) => info!(path = %socket_path.display(), "Removed stale socket file"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }

        if let Some(parent) = socket_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                info!(path = %parent.display(), "Creating socket directory");
                std::fs::create_dir_all(parent)?;
            }
        }

        let listener = UnixListener::bind(socket_path)?;
        std::fs::set_permissions(socket_path, Permissions::from_mode(REST_SOCKET_MODE))?;
        Ok(listener)
    }

    /// Serve `app` on a Unix domain socket until `shutdown` resolves.
    ///
    /// A stale socket file at `socket_path` is replaced, the parent directory
    /// is created when missing, and the socket is removed again on exit.
    pub async fn serve_on_unix_socket<F>(
        socket_path: impl AsRef<Path>,
        app: Router,
        shutdown: F,
    ) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let socket_path = socket_path.as_ref();
        let listener = setup_socket(socket_path)?;
        info!(path = %socket_path.display(), "REST API server listening on Unix socket");

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    let stream = match accepted {
                        Ok((stream, _)) => stream,
                        Err(e) => {
                            warn!(error = %e, "Failed to accept connection");
                            continue;
                        }
                    };

                    let io = TokioIo::new(stream);
                    let app = app.clone();

                    tokio::spawn(async move {
                        let service =
                            service_fn(move |req: Request<Incoming>| app.clone().call(req));
                        let connection = http1::Builder::new().serve_connection(io, service);
                        if let Err(err) = connection.await {
                            debug!(error = %err, "Error serving connection");
                        }
                    });
                }
                _ = &mut shutdown => {
                    info!("Shutdown requested, closing Unix socket listener");
                    break;
                }
            }
        }

        if let Err(e) = std::fs::remove_file(socket_path) {
            error!(path = %socket_path.display(), error = %e, "Failed to remove socket file");
        }

        Ok(())
    }

}
