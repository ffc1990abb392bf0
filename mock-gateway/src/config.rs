use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

/// Startup configuration for the gateway process. Each flag falls back to an
/// environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "mock-gateway", about = "Mock authentication/discovery backend")]
pub struct GatewayConfig {
    /// Address to bind.
    #[arg(long, env = "MOCK_GATEWAY_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// TCP port to bind.
    #[arg(long, env = "MOCK_GATEWAY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Reload on source change. Fixtures are compiled in, so this is only
    /// reported at startup.
    #[arg(long, env = "MOCK_GATEWAY_RELOAD")]
    pub reload: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            reload: false,
        }
    }
}

impl GatewayConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
