//! HTTP gateway service

use crate::{
    config::Configuration, error::HttpIpGatewayResult, router::http_ip_gateway_router,
    HttpIpGatewayError,
};
use axum::Router;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;

/// Core HTTP gateway service
#[derive(Debug)]
pub struct HttpIpGatewayService {
    listener: TcpListener,
    router: Router,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Parsed gateway configuration
    pub configuration: Configuration,
}

impl HttpIpGatewayService {
    /// Create a new service instance bound to the given address and port
    pub async fn new(
        address: impl Into<IpAddr>,
        port: u16,
        configuration: Configuration,
    ) -> HttpIpGatewayResult<Self> {
        tracing::info!("Configuration: {:?}", configuration);

        let router = http_ip_gateway_router(configuration);
        let address = SocketAddr::new(address.into(), port);
        let listener = TcpListener::bind(address).await?;

        Ok(HttpIpGatewayService { router, listener })
    }

    /// Get the socket address the service is configured to use
    pub fn address(&self) -> HttpIpGatewayResult<SocketAddr> {
        self.listener
            .local_addr()
            .map_err(HttpIpGatewayError::IoError)
    }

    /// Start the HTTP server and run until terminated
    pub async fn run(self) -> HttpIpGatewayResult<()> {
        let address = self.address()?;

        tracing::info!("Starting server on {}", address);
        // Serve with connect info so the allowlist middleware can see the
        // peer address of every request.
        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .inspect_err(|e| tracing::error!("Failed to serve on {}: {}", address, e))?;

        Ok(())
    }
}
