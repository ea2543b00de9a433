use std::net::IpAddr;
use std::str::FromStr;

use crate::config::{Configuration, DEFAULT_ALLOWED_IPS};
use crate::HttpIpGatewayService;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ADDRESS: &str = "0.0.0.0";

/// Command line arguments and environment variables for configuring the gateway service
#[derive(clap::Parser, Debug)]
pub struct HttpIpGatewayArgs {
    /// The address to bind (e.g., 0.0.0.0).
    #[arg(short, long, env = "HTTP_IP_GW_ADDRESS", default_value = DEFAULT_ADDRESS)]
    pub address: Option<String>,

    /// The port to bind to (e.g., 3000).
    #[arg(short, long, env = "HTTP_IP_GW_PORT", default_value = "3000")]
    pub port: Option<u16>,

    /// Comma separated client IPs and CIDR ranges allowed through the gateway.
    #[arg(long, env = "HTTP_IP_GW_ALLOWED_IPS", default_value = DEFAULT_ALLOWED_IPS)]
    pub allowed_ips: Option<String>,
}

impl HttpIpGatewayArgs {
    /// Build a service from the parsed arguments.
    pub async fn into_service(self) -> anyhow::Result<HttpIpGatewayService> {
        let address =
            IpAddr::from_str(&self.address.unwrap_or_else(|| DEFAULT_ADDRESS.to_string()))?;
        let port = self.port.unwrap_or(DEFAULT_PORT);
        let configuration = Configuration::try_new(
            &self
                .allowed_ips
                .unwrap_or_else(|| DEFAULT_ALLOWED_IPS.to_string()),
        )?;

        Ok(HttpIpGatewayService::new(address, port, configuration).await?)
    }
}
