//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(String),

    #[error("Failed to start server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down. Bind failures are
/// returned to the caller, which treats them as fatal.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| {
            ServerError::Address(format!(
                "{}:{}: {}",
                config.http.host, config.http.port, e
            ))
        })?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    serve(app, addr, handle).await
}

/// Serve `app` on `addr` until `handle` is told to shut down.
async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    tracing::info!(%addr, "Server starting on port {}...", addr.port());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::routes::create_router;
    use crate::state::AppState;
    use crate::workload::Workload;

    #[tokio::test]
    async fn test_graceful_shutdown_drains_and_returns() {
        let app = create_router(AppState::new(Workload::new(20).unwrap()));
        let handle = Handle::new();
        let server = tokio::spawn(serve(
            app,
            "127.0.0.1:0".parse().unwrap(),
            handle.clone(),
        ));

        let addr = handle.listening().await.expect("server failed to listen");
        let body = reqwest::get(format!("http://{}/calculate", addr))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(body.contains("\"fib_result\":6765"));

        handle.graceful_shutdown(Some(Duration::from_secs(5)));

        let result = tokio::time::timeout(Duration::from_secs(10), server)
            .await
            .expect("server did not stop after graceful shutdown")
            .unwrap();
        assert!(result.is_ok());
        assert!(tokio::net::TcpStream::connect(addr).await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_host_rejected() {
        let mut config = AppConfig::default();
        config.http.host = "not a host".to_string();

        let err = start_server(Router::new(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Address(_)));
    }

    #[tokio::test]
    async fn test_port_in_use_is_bind_error() {
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let mut config = AppConfig::default();
        config.http.host = "127.0.0.1".to_string();
        config.http.port = occupied.local_addr().unwrap().port();

        let err = start_server(Router::new(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind(_)));
    }
}
