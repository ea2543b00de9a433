use std::net::{Ipv4Addr, SocketAddr};

use http_ip_gateway::{Configuration, HttpIpGatewayService};

/// A gateway running on an ephemeral local port.
pub struct TestApp {
    pub address: SocketAddr,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn a gateway that admits the IPv4 loopback address.
    pub async fn spawn() -> Self {
        Self::spawn_with_allowed_ips("127.0.0.1").await
    }

    /// Spawn a gateway with the given allowlist.
    pub async fn spawn_with_allowed_ips(allowed_ips: &str) -> Self {
        let configuration = Configuration::try_new(allowed_ips).expect("Invalid test allowlist");

        let service = HttpIpGatewayService::new(Ipv4Addr::LOCALHOST, 0, configuration)
            .await
            .expect("Failed to create service");
        let address = service.address().expect("Failed to get service address");

        tokio::spawn(service.run());

        TestApp {
            address,
            client: reqwest::Client::new(),
        }
    }
}
