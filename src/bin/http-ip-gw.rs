use clap::Parser;
use http_ip_gateway::{tracing::initialize_tracing_subscriber, HttpIpGatewayArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_tracing_subscriber("info");

    let args = HttpIpGatewayArgs::parse();
    let service = args.into_service().await?;

    service.run().await?;

    Ok(())
}
