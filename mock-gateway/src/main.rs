use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mock_gateway::{GatewayConfig, ENDPOINTS};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mock_gateway=info,tower_http=info")),
        )
        .init();

    let config = GatewayConfig::parse();
    if config.reload {
        warn!("reload requested; fixtures are compiled in, restart the process to apply changes");
    }

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!("mock gateway listening on http://{local}");
    for (method, path) in ENDPOINTS {
        info!("  {method:<4} http://{local}{path}");
    }

    mock_gateway::run(listener).await
}
